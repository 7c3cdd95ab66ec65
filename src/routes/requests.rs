use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::requests::requests::{
    CreateServiceRequest, DecideRequestRequest, ServiceRequestListParams,
};
use crate::models::users::entities::UserRole;
use crate::services::ServiceRequestService;
use crate::utils::SafeRequestIdI64;

// 懒加载的全局 ServiceRequestService 实例
static REQUEST_SERVICE: Lazy<ServiceRequestService> = Lazy::new(ServiceRequestService::new_lazy);

// HTTP处理程序
pub async fn create_request(
    req: HttpRequest,
    request_data: web::Json<CreateServiceRequest>,
) -> ActixResult<HttpResponse> {
    REQUEST_SERVICE
        .create_request(&req, request_data.into_inner())
        .await
}

pub async fn get_request(
    req: HttpRequest,
    request_id: SafeRequestIdI64,
) -> ActixResult<HttpResponse> {
    REQUEST_SERVICE.get_request(&req, request_id.0).await
}

pub async fn list_requests(
    req: HttpRequest,
    query: web::Query<ServiceRequestListParams>,
) -> ActixResult<HttpResponse> {
    REQUEST_SERVICE.list_requests(&req, query.into_inner()).await
}

pub async fn decide_request(
    req: HttpRequest,
    request_id: SafeRequestIdI64,
    decision_data: web::Json<DecideRequestRequest>,
) -> ActixResult<HttpResponse> {
    REQUEST_SERVICE
        .decide_request(&req, request_id.0, decision_data.into_inner())
        .await
}

// 配置路由
pub fn configure_request_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/requests")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 学生只看到自己的申请（服务层裁剪范围）
                    .route(web::get().to(list_requests))
                    .route(
                        web::post()
                            .to(create_request)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    ),
            )
            .service(
                web::resource("/{request_id}/decide").route(
                    web::post()
                        .to(decide_request)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(web::resource("/{request_id}").route(web::get().to(get_request))),
    );
}
