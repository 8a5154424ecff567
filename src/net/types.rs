//! Wire DTOs for the catalog REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Product and user records
//! pass through the client unchanged; only auth payloads are inspected.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login request body for `POST auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup request body for `POST auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

/// Login response. Other fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// ISO-8601 creation timestamp, when the backend includes it.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Owner display value; only populated in admin listings.
    #[serde(default)]
    pub created_by: Option<serde_json::Value>,
}

/// Text fields of a product create/update. Sent as multipart form fields
/// next to the optional `image` file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
}

/// One page of products.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total_products: u64,
}

/// Product list query. Empty strings are left out of the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductFilters {
    pub keyword: String,
    pub start_date: String,
    pub end_date: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self { keyword: String::new(), start_date: String::new(), end_date: String::new(), page: 1, limit: 10 }
    }
}

impl ProductFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("keyword", self.keyword.trim().to_owned()),
            ("startDate", self.start_date.clone()),
            ("endDate", self.end_date.clone()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// A managed user account.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// One page of users.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub total_users: u64,
}

/// User list query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserFilters {
    pub keyword: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for UserFilters {
    fn default() -> Self {
        Self { keyword: String::new(), page: 1, limit: 10 }
    }
}

impl UserFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("keyword", self.keyword.trim().to_owned()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Body for `PATCH users/{id}/status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusUpdate {
    pub is_active: bool,
}
