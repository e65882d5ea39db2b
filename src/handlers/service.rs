use crate::config::Config;
use crate::error::ApiError;
use crate::models::ServiceInfo;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        title: Config::API_TITLE.to_string(),
        description: Config::API_DESCRIPTION.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.to_string(),
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
