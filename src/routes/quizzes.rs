use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quizzes::requests::{
    CreateQuestionRequest, CreateQuizRequest, QuizListParams, SubmitAttemptRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::QuizService;
use crate::utils::{SafeAttemptIdI64, SafeCourseIdI64, SafeIDI64, SafeQuizIdI64};

// 懒加载的全局 QuizService 实例
static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);

// HTTP处理程序
pub async fn create_quiz(
    req: HttpRequest,
    quiz_data: web::Json<CreateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.create_quiz(&req, quiz_data.into_inner()).await
}

pub async fn get_quiz(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.get_quiz(&req, quiz_id.0).await
}

pub async fn list_quizzes(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<QuizListParams>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .list_quizzes(&req, course_id.0, query.into_inner())
        .await
}

pub async fn publish_quiz(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.set_published(&req, quiz_id.0, true).await
}

pub async fn unpublish_quiz(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.set_published(&req, quiz_id.0, false).await
}

pub async fn delete_quiz(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.delete_quiz(&req, quiz_id.0).await
}

pub async fn add_question(
    req: HttpRequest,
    quiz_id: SafeQuizIdI64,
    question_data: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .add_question(&req, quiz_id.0, question_data.into_inner())
        .await
}

pub async fn delete_question(
    req: HttpRequest,
    quiz_id: SafeQuizIdI64,
    question_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .delete_question(&req, quiz_id.0, question_id.0)
        .await
}

pub async fn start_attempt(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.start_attempt(&req, quiz_id.0).await
}

pub async fn list_attempts(req: HttpRequest, quiz_id: SafeQuizIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.list_attempts(&req, quiz_id.0).await
}

pub async fn submit_attempt(
    req: HttpRequest,
    attempt_id: SafeAttemptIdI64,
    submit_data: web::Json<SubmitAttemptRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .submit_attempt(&req, attempt_id.0, submit_data.into_inner())
        .await
}

pub async fn get_attempt(
    req: HttpRequest,
    attempt_id: SafeAttemptIdI64,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.get_attempt(&req, attempt_id.0).await
}

// 配置路由
pub fn configure_quiz_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quizzes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_quiz)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{quiz_id}")
                    .route(web::get().to(get_quiz))
                    .route(
                        web::delete()
                            .to(delete_quiz)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{quiz_id}/publish").route(
                    web::post()
                        .to(publish_quiz)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{quiz_id}/unpublish").route(
                    web::post()
                        .to(unpublish_quiz)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{quiz_id}/questions").route(
                    web::post()
                        .to(add_question)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{quiz_id}/questions/{id}").route(
                    web::delete()
                        .to(delete_question)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{quiz_id}/attempts")
                    .route(
                        web::post()
                            .to(start_attempt)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    )
                    .route(web::get().to(list_attempts)),
            ),
    );

    // 课程下的测验列表
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/quizzes")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_quizzes)),
    );

    // 答题尝试
    cfg.service(
        web::scope("/api/v1/attempts")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{attempt_id}/submit").route(
                    web::post()
                        .to(submit_attempt)
                        .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                ),
            )
            .route("/{attempt_id}", web::get().to(get_attempt)),
    );
}
