use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::{DynamicConfig, SystemService};
use crate::middlewares::RequireJWT;
use crate::models::activity::entities::NewActivityLog;
use crate::models::system::requests::UpdateSettingsRequest;
use crate::models::system::responses::SettingsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_settings(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_all_settings().await {
        Ok(settings) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SettingsResponse { settings },
            "Settings retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get settings: {e}"),
            )),
        ),
    }
}

pub async fn update_settings(
    service: &SystemService,
    request: &HttpRequest,
    data: UpdateSettingsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let updated_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    if data.settings.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No settings provided",
        )));
    }

    for item in &data.settings {
        if item.key.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Setting key cannot be empty",
            )));
        }
    }

    let pairs: Vec<(String, String)> = data
        .settings
        .into_iter()
        .map(|item| (item.key, item.value))
        .collect();

    match storage.upsert_settings(pairs.clone(), updated_by).await {
        Ok(settings) => {
            // 同步热更新缓存
            for (key, value) in &pairs {
                DynamicConfig::update(key, value).await;
            }
            info!("User {} updated {} settings", updated_by, pairs.len());
            if let Err(e) = storage
                .insert_activity_log(NewActivityLog {
                    user_id: updated_by,
                    action: "settings.update".to_string(),
                    target: None,
                    detail: Some(
                        pairs
                            .iter()
                            .map(|(k, _)| k.as_str())
                            .collect::<Vec<_>>()
                            .join(","),
                    ),
                })
                .await
            {
                warn!("Failed to record activity log: {}", e);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SettingsResponse { settings },
                "Settings updated successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Failed to update settings: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
