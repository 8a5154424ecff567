use super::*;
use serde_json::json;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn signup_payload_serializes_camel_case() {
    let payload = SignupPayload {
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone_number: "5551234567".to_owned(),
        password: "Secr3t!pass".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).expect("json"),
        json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "5551234567",
            "password": "Secr3t!pass",
        })
    );
}

#[test]
fn login_response_ignores_extra_fields() {
    let response: LoginResponse =
        serde_json::from_value(json!({ "accessToken": "a.b.c", "user": { "id": 1 } })).expect("login response");
    assert_eq!(response.access_token, "a.b.c");
}

#[test]
fn login_response_requires_access_token() {
    assert!(serde_json::from_value::<LoginResponse>(json!({ "token": "a.b.c" })).is_err());
}

// =============================================================
// Catalog records
// =============================================================

#[test]
fn product_response_reads_listing() {
    let response: ProductResponse = serde_json::from_value(json!({
        "products": [
            { "id": "p1", "name": "Lamp", "description": "Desk lamp", "imageUrl": "https://img/1.png", "createdAt": "2024-01-01" }
        ],
        "totalProducts": 31
    }))
    .expect("product response");
    assert_eq!(response.total_products, 31);
    assert_eq!(response.products[0].image_url, "https://img/1.png");
    assert_eq!(response.products[0].created_at.as_deref(), Some("2024-01-01"));
    assert!(response.products[0].created_by.is_none());
}

#[test]
fn product_response_accepts_mongo_style_id() {
    let response: ProductResponse = serde_json::from_str(
        r#"{"products":[{"_id":"p1","name":"Lamp","description":"Desk lamp","imageUrl":"/uploads/lamp.png"}],"totalProducts":1}"#,
    )
    .expect("product response");
    assert_eq!(response.products[0].id, "p1");
    assert_eq!(response.total_products, 1);
}

#[test]
fn user_record_accepts_mongo_style_id() {
    let user: UserRecord = serde_json::from_value(json!({
        "_id": "u1", "fullName": "Bob", "email": "bob@example.com", "isActive": true
    }))
    .expect("user record");
    assert_eq!(user.id, "u1");
    assert!(user.is_active);
    assert!(user.role.is_none());
}

// =============================================================
// Filters
// =============================================================

#[test]
fn product_filters_default_first_page_of_ten() {
    let filters = ProductFilters::default();
    assert_eq!(filters.page, 1);
    assert_eq!(filters.limit, 10);
}

#[test]
fn product_filters_query_pairs_trim_keyword() {
    let filters = ProductFilters { keyword: "  lamp ".to_owned(), ..ProductFilters::default() };
    assert!(filters.query_pairs().contains(&("keyword", "lamp".to_owned())));
}

#[test]
fn user_status_update_serializes_is_active() {
    assert_eq!(
        serde_json::to_value(UserStatusUpdate { is_active: false }).expect("json"),
        json!({ "isActive": false })
    );
}
