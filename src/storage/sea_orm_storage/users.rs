use super::SeaOrmStorage;
use crate::entity::lecturer_profiles::{
    ActiveModel as LecturerProfileActiveModel, Column as LecturerProfileColumn,
    Entity as LecturerProfiles,
};
use crate::entity::student_profiles::{
    ActiveModel as StudentProfileActiveModel, Column as StudentProfileColumn,
    Entity as StudentProfiles,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    users::{
        entities::{Profile, User, UserRole, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建用户（含角色档案，同一事务）
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(req.display_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let user = model
            .insert(&txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建用户失败: {e}")))?;

        // 角色档案与用户一起落库
        let profile = match req.role {
            UserRole::Student => {
                if let Some(p) = req.student_profile {
                    StudentProfileActiveModel {
                        user_id: Set(user.id),
                        matric_no: Set(p.matric_no.clone()),
                        program: Set(p.program.clone()),
                        level: Set(p.level),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await
                    .map_err(|e| {
                        PortalError::database_operation(format!("创建学生档案失败: {e}"))
                    })?;
                    Some(Profile::Student(p))
                } else {
                    None
                }
            }
            UserRole::Lecturer => {
                if let Some(p) = req.lecturer_profile {
                    LecturerProfileActiveModel {
                        user_id: Set(user.id),
                        staff_no: Set(p.staff_no.clone()),
                        department: Set(p.department.clone()),
                        title: Set(p.title.clone()),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await
                    .map_err(|e| {
                        PortalError::database_operation(format!("创建讲师档案失败: {e}"))
                    })?;
                    Some(Profile::Lecturer(p))
                } else {
                    None
                }
            }
            UserRole::Admin => None,
        };

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        let mut user = user.into_user();
        user.profile = profile;
        Ok(user)
    }

    /// 按角色补充档案
    async fn attach_profile<C: ConnectionTrait>(&self, db: &C, user: &mut User) -> Result<()> {
        match user.role {
            UserRole::Student => {
                let profile = StudentProfiles::find()
                    .filter(StudentProfileColumn::UserId.eq(user.id))
                    .one(db)
                    .await
                    .map_err(|e| {
                        PortalError::database_operation(format!("查询学生档案失败: {e}"))
                    })?;
                user.profile = profile.map(|p| Profile::Student(p.into_profile()));
            }
            UserRole::Lecturer => {
                let profile = LecturerProfiles::find()
                    .filter(LecturerProfileColumn::UserId.eq(user.id))
                    .one(db)
                    .await
                    .map_err(|e| {
                        PortalError::database_operation(format!("查询讲师档案失败: {e}"))
                    })?;
                user.profile = profile.map(|p| Profile::Lecturer(p.into_profile()));
            }
            UserRole::Admin => {}
        }
        Ok(())
    }

    /// 通过 ID 获取用户（含档案）
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?;

        match result {
            Some(m) => {
                let mut user = m.into_user();
                self.attach_profile(&self.db, &mut user).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名或邮箱获取用户
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Users::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Username.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::DisplayName.contains(&escaped)),
            );
        }

        // 角色筛选
        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户页数失败: {e}")))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户信息（档案更新走 upsert）
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        // 先检查用户是否存在
        let existing = match self.get_user_by_id_impl(id).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(display_name) = update.display_name {
            model.display_name = Set(Some(display_name));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新用户失败: {e}")))?;

        if let (UserRole::Student, Some(p)) = (&existing.role, update.student_profile) {
            let current = StudentProfiles::find()
                .filter(StudentProfileColumn::UserId.eq(id))
                .one(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("查询学生档案失败: {e}")))?;

            let mut profile_model = match current {
                Some(m) => StudentProfileActiveModel {
                    id: Set(m.id),
                    ..Default::default()
                },
                None => StudentProfileActiveModel {
                    ..Default::default()
                },
            };
            let is_insert = matches!(profile_model.id, sea_orm::ActiveValue::NotSet);
            profile_model.user_id = Set(id);
            profile_model.matric_no = Set(p.matric_no);
            profile_model.program = Set(p.program);
            profile_model.level = Set(p.level);

            if is_insert {
                profile_model.insert(&self.db).await
            } else {
                profile_model.update(&self.db).await
            }
            .map_err(|e| PortalError::database_operation(format!("更新学生档案失败: {e}")))?;
        }

        if let (UserRole::Lecturer, Some(p)) = (&existing.role, update.lecturer_profile) {
            let current = LecturerProfiles::find()
                .filter(LecturerProfileColumn::UserId.eq(id))
                .one(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("查询讲师档案失败: {e}")))?;

            let mut profile_model = match current {
                Some(m) => LecturerProfileActiveModel {
                    id: Set(m.id),
                    ..Default::default()
                },
                None => LecturerProfileActiveModel {
                    ..Default::default()
                },
            };
            let is_insert = matches!(profile_model.id, sea_orm::ActiveValue::NotSet);
            profile_model.user_id = Set(id);
            profile_model.staff_no = Set(p.staff_no);
            profile_model.department = Set(p.department);
            profile_model.title = Set(p.title);

            if is_insert {
                profile_model.insert(&self.db).await
            } else {
                profile_model.update(&self.db).await
            }
            .map_err(|e| PortalError::database_operation(format!("更新讲师档案失败: {e}")))?;
        }

        self.get_user_by_id_impl(id).await
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }
}
