//! Stateful client services.
//!
//! ARCHITECTURE
//! ============
//! Services own mutable browser-side resources (token store, session state)
//! and hand out read-only views to the rest of the UI.

pub mod session;
