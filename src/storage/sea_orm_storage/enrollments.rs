use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::{Enrollment, EnrollmentStatus},
        requests::EnrollmentListQuery,
        responses::EnrollmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建选课记录
    ///
    /// 同一 (course, student) 有唯一索引：曾退选的记录重新激活，
    /// 而不是另起一行。
    pub async fn create_enrollment_impl(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let existing = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课记录失败: {e}")))?;

        let result = match existing {
            Some(m) => {
                let model = ActiveModel {
                    id: Set(m.id),
                    status: Set(EnrollmentStatus::Enrolled.to_string()),
                    enrolled_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| PortalError::database_operation(format!("选课失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    course_id: Set(course_id),
                    student_id: Set(student_id),
                    status: Set(EnrollmentStatus::Enrolled.to_string()),
                    enrolled_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| PortalError::database_operation(format!("选课失败: {e}")))?
            }
        };

        Ok(result.into_enrollment())
    }

    /// 某学生对某课程的选课记录
    pub async fn get_enrollment_impl(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 课程当前有效选课人数
    pub async fn count_active_enrollments_impl(&self, course_id: i64) -> Result<u64> {
        let count = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Status.eq(EnrollmentStatus::Enrolled.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计选课人数失败: {e}")))?;

        Ok(count)
    }

    /// 退选
    pub async fn drop_enrollment_impl(&self, course_id: i64, student_id: i64) -> Result<bool> {
        let result = Enrollments::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(EnrollmentStatus::Dropped.to_string()),
            )
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Status.eq(EnrollmentStatus::Enrolled.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("退选失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出选课记录（附课程摘要）
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Enrollments::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        select = select.order_by_desc(Column::EnrolledAt);

        let paginator = select
            .find_also_related(crate::entity::courses::Entity)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课列表失败: {e}")))?;

        let items = rows
            .into_iter()
            .map(|(enrollment, course)| {
                let mut e = enrollment.into_enrollment();
                if let Some(c) = course {
                    e.course_code = Some(c.code);
                    e.course_title = Some(c.title);
                }
                e
            })
            .collect();

        Ok(EnrollmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 学生当前有效选课的课程 ID 列表
    pub async fn list_enrolled_course_ids_impl(&self, student_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = Enrollments::find()
            .select_only()
            .column(Column::CourseId)
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Status.eq(EnrollmentStatus::Enrolled.to_string()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询已选课程失败: {e}")))?;

        Ok(ids)
    }

    /// 课程当前有效选课的学生 ID 列表
    pub async fn list_enrolled_student_ids_impl(&self, course_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = Enrollments::find()
            .select_only()
            .column(Column::StudentId)
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Status.eq(EnrollmentStatus::Enrolled.to_string()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课学生失败: {e}")))?;

        Ok(ids)
    }
}
