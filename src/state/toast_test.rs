use super::*;

// =============================================================
// ToastKind
// =============================================================

#[test]
fn error_toasts_outlast_success_toasts() {
    assert_eq!(ToastKind::Success.duration_ms(), 3_000);
    assert_eq!(ToastKind::Error.duration_ms(), 10_000);
}

#[test]
fn css_class_reflects_kind() {
    assert!(ToastKind::Error.css_class().contains("toast--error"));
    assert!(ToastKind::Success.css_class().contains("toast--success"));
}

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = ToastState::default();
    let first = state.success("Login successful");
    let second = state.error("Invalid credentials");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[1].message, "Invalid credentials");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.success("a");
    let second = state.success("b");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}
