use super::SeaOrmStorage;
use crate::entity::registration_periods::{
    ActiveModel as PeriodActiveModel, Column as PeriodColumn, Entity as RegistrationPeriods,
};
use crate::entity::system_settings::{ActiveModel, Column, Entity as SystemSettings};
use crate::errors::{PortalError, Result};
use crate::models::system::{
    entities::{RegistrationPeriod, SystemSetting},
    requests::CreateRegistrationPeriodRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 列出全部系统设置
    pub async fn list_all_settings_impl(&self) -> Result<Vec<SystemSetting>> {
        let settings = SystemSettings::find()
            .order_by_asc(Column::Key)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询系统设置失败: {e}")))?;

        Ok(settings.into_iter().map(|m| m.into_setting()).collect())
    }

    /// 获取单项设置
    pub async fn get_setting_impl(&self, key: &str) -> Result<Option<SystemSetting>> {
        let result = SystemSettings::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询系统设置失败: {e}")))?;

        Ok(result.map(|m| m.into_setting()))
    }

    /// 批量写入设置（存在即覆盖），返回写入后的全部键值
    pub async fn upsert_settings_impl(
        &self,
        settings: Vec<(String, String)>,
        updated_by: i64,
    ) -> Result<Vec<SystemSetting>> {
        let now = chrono::Utc::now().timestamp();

        for (key, value) in settings {
            let existing = SystemSettings::find_by_id(key.clone())
                .one(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("查询系统设置失败: {e}")))?;

            let model = ActiveModel {
                key: Set(key),
                value: Set(value),
                updated_by: Set(Some(updated_by)),
                updated_at: Set(now),
            };

            if existing.is_some() {
                model.update(&self.db).await
            } else {
                model.insert(&self.db).await
            }
            .map_err(|e| PortalError::database_operation(format!("写入系统设置失败: {e}")))?;
        }

        self.list_all_settings_impl().await
    }

    /// 创建选课时间窗（初始为未激活）
    pub async fn create_registration_period_impl(
        &self,
        req: CreateRegistrationPeriodRequest,
    ) -> Result<RegistrationPeriod> {
        let model = PeriodActiveModel {
            session: Set(req.session),
            starts_at: Set(req.starts_at.timestamp()),
            ends_at: Set(req.ends_at.timestamp()),
            active: Set(false),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建选课时间窗失败: {e}")))?;

        Ok(result.into_period())
    }

    /// 通过 ID 获取选课时间窗
    pub async fn get_registration_period_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<RegistrationPeriod>> {
        let result = RegistrationPeriods::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课时间窗失败: {e}")))?;

        Ok(result.map(|m| m.into_period()))
    }

    /// 列出全部选课时间窗
    pub async fn list_registration_periods_impl(&self) -> Result<Vec<RegistrationPeriod>> {
        let periods = RegistrationPeriods::find()
            .order_by_desc(PeriodColumn::StartsAt)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课时间窗失败: {e}")))?;

        Ok(periods.into_iter().map(|m| m.into_period()).collect())
    }

    /// 激活 / 关闭选课时间窗
    ///
    /// 激活时先关掉其余时间窗，保证最多一个处于激活状态。
    pub async fn set_registration_period_active_impl(
        &self,
        id: i64,
        active: bool,
    ) -> Result<Option<RegistrationPeriod>> {
        if RegistrationPeriods::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课时间窗失败: {e}")))?
            .is_none()
        {
            return Ok(None);
        }

        if active {
            RegistrationPeriods::update_many()
                .col_expr(PeriodColumn::Active, sea_orm::sea_query::Expr::value(false))
                .filter(PeriodColumn::Id.ne(id))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    PortalError::database_operation(format!("关闭其余选课时间窗失败: {e}"))
                })?;
        }

        let model = PeriodActiveModel {
            id: Set(id),
            active: Set(active),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新选课时间窗失败: {e}")))?;

        Ok(Some(result.into_period()))
    }

    /// 当前处于开放状态的时间窗
    pub async fn get_open_registration_period_impl(
        &self,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<RegistrationPeriod>> {
        let ts = now.timestamp();

        let result = RegistrationPeriods::find()
            .filter(PeriodColumn::Active.eq(true))
            .filter(PeriodColumn::StartsAt.lte(ts))
            .filter(PeriodColumn::EndsAt.gte(ts))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询选课时间窗失败: {e}")))?;

        Ok(result.map(|m| m.into_period()))
    }
}
