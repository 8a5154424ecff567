//! Product catalog endpoints.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use super::api::{ApiClient, ApiRequest, FilePart, Method, MultipartForm, query_string};
use super::error::ApiError;
use super::types::{Product, ProductFilters, ProductInput, ProductResponse};
use crate::config::ClientConfig;

const PRODUCTS: &str = "products";

fn product_endpoint(config: &ClientConfig, id: &str) -> String {
    config.endpoint(&format!("{PRODUCTS}/{}", urlencoding::encode(id)))
}

fn list_request(config: &ClientConfig, filters: &ProductFilters) -> ApiRequest {
    let url = format!("{}{}", config.endpoint(PRODUCTS), query_string(&filters.query_pairs()));
    ApiRequest::new(Method::Get, url)
}

/// `GET products?keyword=..&startDate=..&endDate=..&page=..&limit=..`
///
/// # Errors
///
/// Propagates [`ApiClient::send`] failures.
pub async fn list(client: &ApiClient, filters: &ProductFilters) -> Result<ProductResponse, ApiError> {
    client.send(list_request(client.config(), filters)).await
}

/// `GET products/{id}`
///
/// # Errors
///
/// Propagates [`ApiClient::send`] failures.
pub async fn get(client: &ApiClient, id: &str) -> Result<Product, ApiError> {
    client.send(ApiRequest::new(Method::Get, product_endpoint(client.config(), id))).await
}

/// Multipart body for create/update: the `image` file when one was picked,
/// then `name` and `description`, then `id` when editing.
pub fn product_form(input: &ProductInput, id: Option<&str>, image: Option<FilePart>) -> MultipartForm {
    let mut form = MultipartForm::new();
    if let Some(file) = image {
        form = form.file("image", file);
    }
    form = form.text("name", input.name.as_str()).text("description", input.description.as_str());
    match id {
        Some(id) => form.text("id", id),
        None => form,
    }
}

fn create_request(config: &ClientConfig, form: MultipartForm) -> ApiRequest {
    ApiRequest::new(Method::Post, config.endpoint(PRODUCTS)).with_multipart(form)
}

fn update_request(config: &ClientConfig, id: &str, form: MultipartForm) -> ApiRequest {
    ApiRequest::new(Method::Put, product_endpoint(config, id)).with_multipart(form)
}

/// `POST products` (multipart)
///
/// # Errors
///
/// Propagates [`ApiClient::send`] failures.
pub async fn create(client: &ApiClient, form: MultipartForm) -> Result<Product, ApiError> {
    client.send(create_request(client.config(), form)).await
}

/// `PUT products/{id}` (multipart)
///
/// # Errors
///
/// Propagates [`ApiClient::send`] failures.
pub async fn update(client: &ApiClient, id: &str, form: MultipartForm) -> Result<Product, ApiError> {
    client.send(update_request(client.config(), id, form)).await
}

/// `DELETE products/{id}`
///
/// # Errors
///
/// Propagates [`ApiClient::send`] failures.
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::new(Method::Delete, product_endpoint(client.config(), id));
    client.send::<serde_json::Value>(request).await.map(|_| ())
}
