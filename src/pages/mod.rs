//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, REST calls, toast
//! feedback) and keeps its pure helpers testable outside the browser.

pub mod login;
pub mod products;
pub mod signup;
pub mod users;
