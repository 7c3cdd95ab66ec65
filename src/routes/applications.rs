use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::applications::requests::{
    ApplicationListParams, CreateApplicationRequest, ReviewApplicationRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ApplicationService;
use crate::utils::SafeApplicationIdI64;

// 懒加载的全局 ApplicationService 实例
static APPLICATION_SERVICE: Lazy<ApplicationService> = Lazy::new(ApplicationService::new_lazy);

// HTTP处理程序
pub async fn submit_application(
    req: HttpRequest,
    application_data: web::Json<CreateApplicationRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .submit_application(&req, application_data.into_inner())
        .await
}

pub async fn get_application(
    req: HttpRequest,
    application_id: SafeApplicationIdI64,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .get_application(&req, application_id.0)
        .await
}

pub async fn list_applications(
    req: HttpRequest,
    query: web::Query<ApplicationListParams>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .list_applications(&req, query.into_inner())
        .await
}

pub async fn review_application(
    req: HttpRequest,
    application_id: SafeApplicationIdI64,
    review_data: web::Json<ReviewApplicationRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .review_application(&req, application_id.0, review_data.into_inner())
        .await
}

// 配置路由
pub fn configure_admission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admissions")
            // 提交入学申请无需登录，限流防滥用
            .service(
                web::resource("/apply").route(
                    web::post()
                        .to(submit_application)
                        .wrap(middlewares::RateLimit::admission()),
                ),
            )
            .service(
                web::scope("/applications")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::get().to(list_applications))
                    .route(
                        "/{application_id}/review",
                        web::post().to(review_application),
                    )
                    .route("/{application_id}", web::get().to(get_application)),
            ),
    );
}
