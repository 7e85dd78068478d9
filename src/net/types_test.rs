use super::*;
use serde_json::json;

// =============================================================
// User
// =============================================================

#[test]
fn user_keeps_unknown_fields_through_round_trip() {
    let raw = json!({
        "username": "a@b.com",
        "firstname": "Ada",
        "lastname": "Lovelace",
        "is_staff": true,
        "age": 36,
        "city": "Mohali",
        "hobbies": "Reading,Travel"
    });
    let user: User = serde_json::from_value(raw.clone()).unwrap();
    assert!(user.is_staff);
    assert_eq!(user.extra_text("age").as_deref(), Some("36"));
    assert_eq!(user.extra_text("city").as_deref(), Some("Mohali"));
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}

#[test]
fn user_staff_flag_accepts_null_and_strings() {
    let user: User = serde_json::from_value(json!({ "username": "x", "is_staff": null })).unwrap();
    assert!(!user.is_staff);
    let user: User = serde_json::from_value(json!({ "username": "x", "is_staff": "true" })).unwrap();
    assert!(user.is_staff);
    let user: User = serde_json::from_value(json!({ "username": "x" })).unwrap();
    assert!(!user.is_staff);
}

#[test]
fn user_staff_flag_rejects_numbers() {
    let result = serde_json::from_value::<User>(json!({ "is_staff": 1 }));
    assert!(result.is_err());
}

#[test]
fn display_name_prefers_full_name() {
    let user = User {
        username: Some("a@b.com".to_owned()),
        firstname: Some("Ada".to_owned()),
        lastname: Some("Lovelace".to_owned()),
        ..User::default()
    };
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_username() {
    let user = User { username: Some("a@b.com".to_owned()), firstname: Some("  ".to_owned()), ..User::default() };
    assert_eq!(user.display_name(), "a@b.com");
}

#[test]
fn extra_text_joins_arrays_and_skips_null() {
    let mut user = User::default();
    user.extra.insert("hobbies".to_owned(), json!(["Reading", "Travel"]));
    user.extra.insert("image".to_owned(), serde_json::Value::Null);
    assert_eq!(user.extra_text("hobbies").as_deref(), Some("Reading, Travel"));
    assert_eq!(user.extra_text("image"), None);
    assert_eq!(user.extra_text("missing"), None);
}

// =============================================================
// Shoe / Page
// =============================================================

fn shoe_json() -> serde_json::Value {
    json!({
        "id": 5,
        "shoeName": "Air Max 90",
        "shoeDescription": "Men's Shoes",
        "shoePrice": "12,795.00",
        "shoeInnerDescription": "Nothing as fly.",
        "shoeColorName": "White/Black",
        "shoeStyleName": "CN8490-002",
        "shoeOriginCountry": "Vietnam",
        "shoeCoverImage": "http://localhost:8000/media/cover.png",
        "shoeMainImage": "http://localhost:8000/media/1.png",
        "shoeMainImage2": "http://localhost:8000/media/2.png",
        "shoeMainImage3": null,
        "shoeMainImage4": "http://localhost:8000/media/4.png"
    })
}

#[test]
fn shoe_decodes_backend_record() {
    let shoe: Shoe = serde_json::from_value(shoe_json()).unwrap();
    assert_eq!(shoe.id, 5);
    assert_eq!(shoe.shoe_name, "Air Max 90");
    assert_eq!(shoe.shoe_price, "12,795.00");
}

#[test]
fn shoe_price_accepts_numbers() {
    let mut raw = shoe_json();
    raw["shoePrice"] = json!(8995);
    let shoe: Shoe = serde_json::from_value(raw).unwrap();
    assert_eq!(shoe.shoe_price, "8995");
}

#[test]
fn gallery_lists_filled_slots_in_order() {
    let shoe: Shoe = serde_json::from_value(shoe_json()).unwrap();
    assert_eq!(
        shoe.gallery(),
        vec![
            "http://localhost:8000/media/1.png".to_owned(),
            "http://localhost:8000/media/2.png".to_owned(),
            "http://localhost:8000/media/4.png".to_owned(),
        ]
    );
}

#[test]
fn page_decodes_envelope() {
    let raw = json!({ "count": 13, "next": "http://x/?page=2", "previous": null, "results": [shoe_json()] });
    let page: Page<Shoe> = serde_json::from_value(raw).unwrap();
    assert_eq!(page.count, 13);
    assert_eq!(page.results.len(), 1);
    assert!(page.previous.is_none());
}

#[test]
fn login_response_decodes_token_and_user() {
    let raw = json!({ "token": "abc123", "user": { "username": "a@b.com", "is_staff": false } });
    let resp: LoginResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.token, "abc123");
    assert_eq!(resp.user.username.as_deref(), Some("a@b.com"));
}
