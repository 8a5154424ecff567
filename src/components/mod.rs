//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and read session/toast state from Leptos
//! context providers installed by `App`.

pub mod header;
pub mod protected;
pub mod toast;
