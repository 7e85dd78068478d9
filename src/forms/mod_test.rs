use super::*;

#[test]
fn email_check_accepts_ordinary_addresses() {
    for ok in ["a@b.com", "first.last+tag@shop.example.in"] {
        assert!(is_valid_email(ok), "{ok}");
    }
}

#[test]
fn email_check_rejects_malformed_addresses() {
    for bad in ["", "plain", "@b.com", "a@", "a@b", "a@b.c", "a b@c.com", "a@b@c.com", "a@.com"] {
        assert!(!is_valid_email(bad), "{bad}");
    }
}

#[test]
fn require_trims_and_records_blank_fields() {
    let mut errors = FieldErrors::new();
    assert_eq!(require(&mut errors, "name", "  Dunk  ", "Name can't be empty."), "Dunk");
    assert!(errors.is_empty());
    assert_eq!(require(&mut errors, "name", "   ", "Name can't be empty."), "");
    assert_eq!(errors.get("name").map(String::as_str), Some("Name can't be empty."));
}

#[test]
fn image_meta_checks_type_and_size() {
    let ok = ImageMeta { name: "a.png".to_owned(), size: MAX_IMAGE_BYTES, mime: "image/png".to_owned() };
    assert!(ok.is_image());
    assert!(ok.within_size_limit());
    let big = ImageMeta { size: MAX_IMAGE_BYTES + 1, ..ok.clone() };
    assert!(!big.within_size_limit());
    let pdf = ImageMeta { mime: "application/pdf".to_owned(), ..ok };
    assert!(!pdf.is_image());
}

#[test]
fn server_field_errors_pick_known_fields() {
    let err = ApiError::rejected(400, r#"{"username":["user with this username already exists."],"other":["x"]}"#);
    let errors = server_field_errors(&err, &["username", "password"]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("username").map(String::as_str), Some("user with this username already exists."));
    assert!(server_field_errors(&ApiError::Unavailable, &["username"]).is_empty());
}
