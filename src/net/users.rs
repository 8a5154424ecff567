//! User management endpoints (admin only on the backend).

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::api::{ApiClient, ApiRequest, Method, query_string};
use super::error::ApiError;
use super::types::{UserFilters, UserResponse, UserStatusUpdate};
use crate::config::ClientConfig;

const USERS: &str = "users";

fn list_request(config: &ClientConfig, filters: &UserFilters) -> ApiRequest {
    let url = format!("{}{}", config.endpoint(USERS), query_string(&filters.query_pairs()));
    ApiRequest::new(Method::Get, url)
}

fn status_request(config: &ClientConfig, user_id: &str, is_active: bool) -> Result<ApiRequest, ApiError> {
    let url = config.endpoint(&format!("{USERS}/{}/status", urlencoding::encode(user_id)));
    ApiRequest::new(Method::Patch, url).with_json(&UserStatusUpdate { is_active })
}

/// `GET users?keyword=..&page=..&limit=..`
///
/// # Errors
///
/// Propagates [`ApiClient::send`] failures.
pub async fn list(client: &ApiClient, filters: &UserFilters) -> Result<UserResponse, ApiError> {
    client.send(list_request(client.config(), filters)).await
}

/// `PATCH users/{id}/status` with `{ "isActive": .. }`.
///
/// # Errors
///
/// Propagates [`ApiClient::send`] failures.
pub async fn update_status(client: &ApiClient, user_id: &str, is_active: bool) -> Result<(), ApiError> {
    let request = status_request(client.config(), user_id, is_active)?;
    client.send::<serde_json::Value>(request).await.map(|_| ())
}
