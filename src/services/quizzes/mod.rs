pub mod attempts;
pub mod create;
pub mod get;
pub mod list;
pub mod publish;
pub mod questions;
pub mod scoring;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quizzes::requests::{
    CreateQuestionRequest, CreateQuizRequest, QuizListParams, SubmitAttemptRequest,
};
use crate::storage::Storage;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizService {
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

    // 创建测验（未发布状态）
    pub async fn create_quiz(
        &self,
        request: &HttpRequest,
        data: CreateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_quiz(self, request, data).await
    }

    // 测验详情（学生视角隐藏答案）
    pub async fn get_quiz(&self, request: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        get::get_quiz(self, request, quiz_id).await
    }

    // 课程测验列表（学生只看已发布）
    pub async fn list_quizzes(
        &self,
        request: &HttpRequest,
        course_id: i64,
        params: QuizListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_quizzes(self, request, course_id, params).await
    }

    // 发布 / 取消发布
    pub async fn set_published(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        published: bool,
    ) -> ActixResult<HttpResponse> {
        publish::set_published(self, request, quiz_id, published).await
    }

    // 删除测验
    pub async fn delete_quiz(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        publish::delete_quiz(self, request, quiz_id).await
    }

    // 添加题目
    pub async fn add_question(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        data: CreateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        questions::add_question(self, request, quiz_id, data).await
    }

    // 删除题目
    pub async fn delete_question(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        question_id: i64,
    ) -> ActixResult<HttpResponse> {
        questions::delete_question(self, request, quiz_id, question_id).await
    }

    // 学生开始答题
    pub async fn start_attempt(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        attempts::start_attempt(self, request, quiz_id).await
    }

    // 学生提交答题
    pub async fn submit_attempt(
        &self,
        request: &HttpRequest,
        attempt_id: i64,
        data: SubmitAttemptRequest,
    ) -> ActixResult<HttpResponse> {
        attempts::submit_attempt(self, request, attempt_id, data).await
    }

    // 尝试详情（含作答明细）
    pub async fn get_attempt(
        &self,
        request: &HttpRequest,
        attempt_id: i64,
    ) -> ActixResult<HttpResponse> {
        attempts::get_attempt(self, request, attempt_id).await
    }

    // 测验的答题记录（讲师看全部，学生看自己）
    pub async fn list_attempts(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        attempts::list_attempts(self, request, quiz_id).await
    }
}
