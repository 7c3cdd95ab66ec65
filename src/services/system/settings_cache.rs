//! 动态配置缓存
//!
//! 提供从数据库加载的动态配置的全局缓存访问。
//! 使用 RwLock 保护，支持热更新。

use std::collections::HashMap;
use std::sync::OnceLock;
use tokio::sync::RwLock;

use crate::config::AppConfig;

/// 动态配置缓存
static DYNAMIC_CONFIG: OnceLock<RwLock<DynamicConfigCache>> = OnceLock::new();

/// 动态配置缓存内部结构
#[derive(Debug, Default)]
struct DynamicConfigCache {
    settings: HashMap<String, String>,
    initialized: bool,
}

// 数据库中没有对应配置项时的兜底值
const DEFAULT_CURRENT_SESSION: &str = "2025/2026";
const DEFAULT_LOAN_DAYS: i64 = 14;
const DEFAULT_FINE_PER_DAY: f64 = 0.5;

/// 动态配置访问接口
pub struct DynamicConfig;

impl DynamicConfig {
    /// 初始化动态配置缓存
    /// 在应用启动时调用，从数据库加载配置
    pub async fn init(settings: Vec<(String, String)>) {
        let cache = DYNAMIC_CONFIG.get_or_init(|| RwLock::new(DynamicConfigCache::default()));

        let mut guard = cache.write().await;
        guard.settings.clear();
        for (key, value) in settings {
            guard.settings.insert(key, value);
        }
        guard.initialized = true;

        tracing::info!(
            "动态配置缓存初始化完成，加载了 {} 个配置项",
            guard.settings.len()
        );
    }

    /// 更新单个配置项
    pub async fn update(key: &str, value: &str) {
        if let Some(cache) = DYNAMIC_CONFIG.get() {
            let mut guard = cache.write().await;
            guard.settings.insert(key.to_string(), value.to_string());
            tracing::debug!("动态配置更新: {} = {}", key, value);
        }
    }

    /// 获取字符串配置
    async fn get_string(key: &str) -> Option<String> {
        if let Some(cache) = DYNAMIC_CONFIG.get() {
            let guard = cache.read().await;
            return guard.settings.get(key).cloned();
        }
        None
    }

    /// 获取整数配置
    async fn get_i64(key: &str) -> Option<i64> {
        Self::get_string(key).await.and_then(|v| v.parse().ok())
    }

    /// 获取浮点配置
    async fn get_f64(key: &str) -> Option<f64> {
        Self::get_string(key).await.and_then(|v| v.parse().ok())
    }

    // ============================================
    // 具体配置项访问方法
    // ============================================

    /// 获取系统名称
    pub async fn system_name() -> String {
        Self::get_string("app.system_name")
            .await
            .unwrap_or_else(|| AppConfig::get().app.system_name.clone())
    }

    /// 获取当前学年，如 "2025/2026"
    pub async fn current_session() -> String {
        Self::get_string("academic.current_session")
            .await
            .unwrap_or_else(|| DEFAULT_CURRENT_SESSION.to_string())
    }

    /// 获取图书借期（天）
    pub async fn library_loan_days() -> i64 {
        Self::get_i64("library.loan_days")
            .await
            .unwrap_or(DEFAULT_LOAN_DAYS)
    }

    /// 获取逾期罚金（每天）
    pub async fn library_fine_per_day() -> f64 {
        Self::get_f64("library.fine_per_day")
            .await
            .unwrap_or(DEFAULT_FINE_PER_DAY)
    }

    /// 检查缓存是否已初始化
    pub async fn is_initialized() -> bool {
        if let Some(cache) = DYNAMIC_CONFIG.get() {
            let guard = cache.read().await;
            return guard.initialized;
        }
        false
    }
}
