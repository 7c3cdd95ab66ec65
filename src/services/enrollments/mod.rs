pub mod drop;
pub mod enroll;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::EnrollmentListParams;
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 学生选课
    pub async fn enroll(&self, request: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        enroll::enroll(self, request, course_id).await
    }

    // 学生退选
    pub async fn drop_enrollment(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        drop::drop_enrollment(self, request, course_id).await
    }

    // 当前学生的选课列表
    pub async fn list_my_enrollments(
        &self,
        request: &HttpRequest,
        params: EnrollmentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_my_enrollments(self, request, params).await
    }

    // 课程的选课名单（讲师 / 管理员）
    pub async fn list_course_enrollments(
        &self,
        request: &HttpRequest,
        course_id: i64,
        params: EnrollmentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_course_enrollments(self, request, course_id, params).await
    }
}
