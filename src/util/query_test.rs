use super::*;

#[test]
fn leading_question_mark_is_optional() {
    assert_eq!(QueryParams::parse("?a=1").get("a"), Some("1"));
    assert_eq!(QueryParams::parse("a=1").get("a"), Some("1"));
    assert_eq!(QueryParams::parse("").get("a"), None);
}

#[test]
fn first_value_of_repeated_key_wins() {
    let params = QueryParams::parse("token=abc&token=def");
    assert_eq!(params.get("token"), Some("abc"));
}

#[test]
fn invalid_escape_decodes_lossily_without_dropping_other_keys() {
    let params = QueryParams::parse("token=abc&firstname=%FF");
    assert_eq!(params.get("token"), Some("abc"));
    assert_eq!(params.get("firstname"), Some("\u{FFFD}"));
}

#[test]
fn plus_and_percent_escapes_decode() {
    let params = QueryParams::parse("q=air+max&user=a%40b.com");
    assert_eq!(params.get("q"), Some("air max"));
    assert_eq!(params.get("user"), Some("a@b.com"));
}

#[test]
fn take_removes_value() {
    let mut params = QueryParams::parse("q=dunk");
    assert_eq!(params.take("q").as_deref(), Some("dunk"));
    assert_eq!(params.take("q"), None);
}
