use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::fees::requests::{CreateFeeRequest, CreatePaymentRequest, FeeListParams};
use crate::models::users::entities::UserRole;
use crate::services::FeeService;
use crate::utils::SafeFeeIdI64;

// 懒加载的全局 FeeService 实例
static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

// HTTP处理程序
pub async fn create_fee(
    req: HttpRequest,
    fee_data: web::Json<CreateFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.create_fee(&req, fee_data.into_inner()).await
}

pub async fn get_fee(req: HttpRequest, fee_id: SafeFeeIdI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.get_fee(&req, fee_id.0).await
}

pub async fn list_fees(
    req: HttpRequest,
    query: web::Query<FeeListParams>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_fees(&req, query.into_inner()).await
}

pub async fn pay_fee(
    req: HttpRequest,
    fee_id: SafeFeeIdI64,
    payment_data: web::Json<CreatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .pay_fee(&req, fee_id.0, payment_data.into_inner())
        .await
}

// 配置路由
pub fn configure_fee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fees")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 学生只看到自己的账单（服务层裁剪范围）
                    .route(web::get().to(list_fees))
                    .route(
                        web::post()
                            .to(create_fee)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(web::resource("/{fee_id}").route(web::get().to(get_fee)))
            .service(web::resource("/{fee_id}/payments").route(web::post().to(pay_fee))),
    );
}
