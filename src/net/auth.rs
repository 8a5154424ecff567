//! Login and signup endpoints.
//!
//! These are the only calls exempt from bearer authorization, so they go
//! straight to [`dispatch`] instead of through `ApiClient`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{ApiRequest, Method, decode_response, dispatch};
use super::error::ApiError;
use super::types::{Credentials, LoginResponse, SignupPayload};
use crate::config::ClientConfig;

const LOGIN_ENDPOINT: &str = "auth/login";
const SIGNUP_ENDPOINT: &str = "auth/signup";

/// Backend seam for the session service.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    /// `POST auth/signup`. The success payload is opaque.
    async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError>;
}

fn login_request(config: &ClientConfig, credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, config.endpoint(LOGIN_ENDPOINT)).with_json(credentials)
}

fn signup_request(config: &ClientConfig, payload: &SignupPayload) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, config.endpoint(SIGNUP_ENDPOINT)).with_json(payload)
}

/// [`AuthApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = dispatch(login_request(&self.config, credentials)?).await?;
        decode_response(response)
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError> {
        let response = dispatch(signup_request(&self.config, payload)?).await?;
        decode_response::<serde_json::Value>(response).map(|_| ())
    }
}
