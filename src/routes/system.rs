use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::system::requests::{CreateRegistrationPeriodRequest, UpdateSettingsRequest};
use crate::models::users::entities::UserRole;
use crate::services::SystemService;
use crate::utils::SafePeriodIdI64;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

// HTTP处理程序
pub async fn list_settings(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.list_settings(&req).await
}

pub async fn update_settings(
    req: HttpRequest,
    settings_data: web::Json<UpdateSettingsRequest>,
) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE
        .update_settings(&req, settings_data.into_inner())
        .await
}

pub async fn create_registration_period(
    req: HttpRequest,
    period_data: web::Json<CreateRegistrationPeriodRequest>,
) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE
        .create_registration_period(&req, period_data.into_inner())
        .await
}

pub async fn list_registration_periods(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.list_registration_periods(&req).await
}

pub async fn activate_period(
    req: HttpRequest,
    period_id: SafePeriodIdI64,
) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.set_period_active(&req, period_id.0, true).await
}

pub async fn deactivate_period(
    req: HttpRequest,
    period_id: SafePeriodIdI64,
) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE
        .set_period_active(&req, period_id.0, false)
        .await
}

pub async fn current_registration_period(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.current_registration_period(&req).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system/settings")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_settings))
                    .route(web::put().to(update_settings)),
            ),
    );

    // 选课时间窗
    cfg.service(
        web::scope("/api/v1/registration-periods")
            .wrap(middlewares::RequireJWT)
            .route("/current", web::get().to(current_registration_period))
            .service(
                web::resource("")
                    .route(web::get().to(list_registration_periods))
                    .route(
                        web::post()
                            .to(create_registration_period)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{period_id}/activate").route(
                    web::post()
                        .to(activate_period)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{period_id}/deactivate").route(
                    web::post()
                        .to(deactivate_period)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            ),
    );
}
