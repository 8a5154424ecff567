use super::*;
use serde_json::json;

// =============================================================
// Paging
// =============================================================

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(95, 25), 4);
}

#[test]
fn page_count_zero_limit_is_one_page() {
    assert_eq!(page_count(42, 0), 1);
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn created_by_label_prefers_full_name() {
    let owner = json!({ "fullName": "Ada Lovelace", "email": "ada@example.com" });
    assert_eq!(created_by_label(Some(&owner)), "Ada Lovelace");
}

#[test]
fn created_by_label_falls_back_to_email_then_dash() {
    assert_eq!(created_by_label(Some(&json!({ "email": "ada@example.com" }))), "ada@example.com");
    assert_eq!(created_by_label(Some(&json!("u-17"))), "u-17");
    assert_eq!(created_by_label(Some(&json!(17))), "-");
    assert_eq!(created_by_label(None), "-");
}

#[test]
fn format_created_at_keeps_date_part() {
    assert_eq!(format_created_at(Some("2024-03-01T12:30:00.000Z")), "2024-03-01");
    assert_eq!(format_created_at(Some("2024")), "2024");
    assert_eq!(format_created_at(None), "-");
}

// =============================================================
// Form validation
// =============================================================

#[test]
fn validate_product_input_trims_fields() {
    let input = validate_product_input(" Lamp ", " A warm desk lamp. ", true, "", true).expect("valid");
    assert_eq!(input, ProductInput { name: "Lamp".to_owned(), description: "A warm desk lamp.".to_owned() });
}

#[test]
fn validate_product_input_requires_name() {
    assert_eq!(validate_product_input("  ", "A warm desk lamp.", true, "", true), Err("Name is required."));
}

#[test]
fn validate_product_input_bounds_description() {
    let err = Err("Description must be between 10 and 200 characters.");
    assert_eq!(validate_product_input("Lamp", "too short", true, "", true), err);
    assert_eq!(validate_product_input("Lamp", &"x".repeat(201), true, "", true), err);
    assert!(validate_product_input("Lamp", &"x".repeat(200), true, "", true).is_ok());
    assert!(validate_product_input("Lamp", &"x".repeat(10), true, "", true).is_ok());
}

#[test]
fn create_requires_image_file() {
    assert_eq!(
        validate_product_input("Lamp", "A warm desk lamp.", false, "", true),
        Err("Image is required.")
    );
    assert_eq!(
        validate_product_input("Lamp", "A warm desk lamp.", false, "/uploads/old.png", true),
        Err("Image is required.")
    );
}

#[test]
fn edit_keeps_stored_image_when_no_file_picked() {
    assert!(validate_product_input("Lamp", "A warm desk lamp.", false, "/uploads/lamp.png", false).is_ok());
}

#[test]
fn edit_without_stored_image_requires_file() {
    assert_eq!(
        validate_product_input("Lamp", "A warm desk lamp.", false, "  ", false),
        Err("Image is required.")
    );
    assert!(validate_product_input("Lamp", "A warm desk lamp.", true, "", false).is_ok());
}
