//! Networking modules for the catalog REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `authorizer` attaches the bearer token,
//! `auth` covers the unauthenticated login/signup calls, and `products` /
//! `users` wrap the catalog endpoints. `types` defines the wire schema.

pub mod api;
pub mod auth;
pub mod authorizer;
pub mod error;
pub mod products;
pub mod types;
pub mod users;
