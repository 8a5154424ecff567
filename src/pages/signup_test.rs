use super::*;

fn filled_form() -> SignupForm {
    SignupForm {
        full_name: " Ada Lovelace ".to_owned(),
        email: "ada@example.com".to_owned(),
        phone_number: "5551234567".to_owned(),
        password: "Engine1!".to_owned(),
        confirm_password: "Engine1!".to_owned(),
    }
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn phone_requires_exactly_ten_digits() {
    assert!(is_valid_phone("0123456789"));
    assert!(!is_valid_phone("012345678"));
    assert!(!is_valid_phone("01234567890"));
    assert!(!is_valid_phone("012345678a"));
    assert!(!is_valid_phone("+123456789"));
}

#[test]
fn strong_password_needs_every_class() {
    assert!(is_strong_password("Abcdef1!"));
    assert!(!is_strong_password("abcdef1!"), "missing upper");
    assert!(!is_strong_password("ABCDEF1!"), "missing lower");
    assert!(!is_strong_password("Abcdefg!"), "missing digit");
    assert!(!is_strong_password("Abcdefg1"), "missing special");
}

#[test]
fn strong_password_enforces_length_and_alphabet() {
    assert!(!is_strong_password("Abc1!"));
    assert!(!is_strong_password("Abcdef1!#"), "# is not an allowed special");
    assert!(!is_strong_password("Abcdef1! "), "space is not allowed");
    assert!(!is_strong_password("Äbcdef1!"), "non-ascii letters are not allowed");
}

// =============================================================
// validate_signup
// =============================================================

#[test]
fn validate_signup_builds_trimmed_payload() {
    let payload = validate_signup(&filled_form()).expect("valid");
    assert_eq!(payload.full_name, "Ada Lovelace");
    assert_eq!(payload.email, "ada@example.com");
    assert_eq!(payload.phone_number, "5551234567");
    assert_eq!(payload.password, "Engine1!");
}

#[test]
fn validate_signup_requires_all_fields() {
    let form = SignupForm { full_name: "  ".to_owned(), ..filled_form() };
    assert_eq!(validate_signup(&form), Err("All fields are required."));
}

#[test]
fn validate_signup_reports_first_failing_rule() {
    let bad_email = SignupForm { email: "ada.example.com".to_owned(), ..filled_form() };
    assert_eq!(validate_signup(&bad_email), Err("Enter a valid email address."));

    let bad_phone = SignupForm { phone_number: "555".to_owned(), ..filled_form() };
    assert_eq!(validate_signup(&bad_phone), Err("Phone number must be exactly 10 digits."));

    let weak = SignupForm { password: "password".to_owned(), confirm_password: "password".to_owned(), ..filled_form() };
    assert!(validate_signup(&weak).is_err());
}

#[test]
fn validate_signup_requires_matching_confirmation() {
    let form = SignupForm { confirm_password: "Engine2!".to_owned(), ..filled_form() };
    assert_eq!(validate_signup(&form), Err("Passwords do not match."));
}
