use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::activity::requests::ActivityLogListParams;
use crate::models::users::entities::UserRole;
use crate::services::ActivityService;

// 懒加载的全局 ActivityService 实例
static ACTIVITY_SERVICE: Lazy<ActivityService> = Lazy::new(ActivityService::new_lazy);

// HTTP处理程序
pub async fn list_activity_logs(
    req: HttpRequest,
    query: web::Query<ActivityLogListParams>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .list_activity_logs(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_activity_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/activity-logs")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_activity_logs)),
    );
}
