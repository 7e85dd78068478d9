use super::*;

const GOOGLE_PATH: &str = "/google-redirect-handler";

// =============================================================
// CallbackParams
// =============================================================

#[test]
fn parse_reads_all_fields() {
    let params = CallbackParams::parse("?token=abc123&username=a%40b.com&firstname=Ada&lastname=Lovelace&is_staff=true");
    assert_eq!(params.token(), Some("abc123"));
    let user = params.profile();
    assert_eq!(user.username.as_deref(), Some("a@b.com"));
    assert_eq!(user.firstname.as_deref(), Some("Ada"));
    assert_eq!(user.lastname.as_deref(), Some("Lovelace"));
    assert!(user.is_staff);
}

#[test]
fn is_staff_is_true_only_for_literal_true() {
    for raw in ["false", "True", "1", "yes", ""] {
        let params = CallbackParams::parse(&format!("token=t&is_staff={raw}"));
        assert!(!params.profile().is_staff, "is_staff={raw:?}");
    }
    assert!(!CallbackParams::parse("token=t").profile().is_staff);
}

#[test]
fn empty_token_counts_as_missing() {
    assert_eq!(CallbackParams::parse("token=&username=x").token(), None);
}

#[test]
fn repeated_token_keeps_first_value() {
    assert_eq!(CallbackParams::parse("token=abc&token=def").token(), Some("abc"));
}

#[test]
fn bad_escape_in_other_field_keeps_token() {
    let params = CallbackParams::parse("token=abc&firstname=%FF");
    assert_eq!(params.token(), Some("abc"));
    assert_eq!(params.profile().firstname.as_deref(), Some("\u{FFFD}"));
}

// =============================================================
// CallbackHandler
// =============================================================

#[test]
fn token_callback_logs_in_once_without_navigating() {
    let mut handler = CallbackHandler::new(OAuthProvider::Google);
    let action = handler.step(false, GOOGLE_PATH, "token=abc123&username=a@b.com&is_staff=true");

    let CallbackAction::Login { token, user } = action else {
        panic!("expected login, got {action:?}");
    };
    assert_eq!(token, "abc123");
    assert_eq!(user.username.as_deref(), Some("a@b.com"));
    assert!(user.is_staff);
    assert_eq!(handler.phase(), CallbackPhase::Processed);

    // Re-render before the session update lands: no second login.
    assert_eq!(handler.step(false, GOOGLE_PATH, "token=abc123"), CallbackAction::Idle);
}

#[test]
fn irregular_query_with_token_still_logs_in() {
    for query in ["token=abc&token=def", "token=abc&firstname=%FF"] {
        let mut handler = CallbackHandler::new(OAuthProvider::Google);
        let action = handler.step(false, GOOGLE_PATH, query);
        assert!(matches!(action, CallbackAction::Login { ref token, .. } if token == "abc"), "{query}: {action:?}");
    }
}

#[test]
fn authenticated_rerender_on_callback_path_goes_home() {
    let mut handler = CallbackHandler::new(OAuthProvider::Google);
    let _ = handler.step(false, GOOGLE_PATH, "token=abc123");
    assert_eq!(
        handler.step(true, GOOGLE_PATH, "token=abc123"),
        CallbackAction::Navigate { to: "/home".to_owned() }
    );
}

#[test]
fn stale_revisit_when_already_authenticated_goes_home_without_login() {
    let mut handler = CallbackHandler::new(OAuthProvider::Google);
    let action = handler.step(true, GOOGLE_PATH, "token=other");
    assert_eq!(action, CallbackAction::Navigate { to: "/home".to_owned() });
    assert_eq!(handler.phase(), CallbackPhase::Pending);
}

#[test]
fn authenticated_off_callback_path_is_idle() {
    let mut handler = CallbackHandler::new(OAuthProvider::Apple);
    assert_eq!(handler.step(true, "/home", "token=abc"), CallbackAction::Idle);
}

#[test]
fn missing_token_redirects_to_login_with_provider_error() {
    for provider in [OAuthProvider::Google, OAuthProvider::Apple] {
        let mut handler = CallbackHandler::new(provider);
        let action = handler.step(false, provider.callback_path(), "username=a@b.com");

        let CallbackAction::Navigate { to } = action else {
            panic!("expected redirect, got {action:?}");
        };
        assert!(to.starts_with("/?"), "{to}");
        assert!(to.contains(provider.label()), "{to}");
        let query = to.trim_start_matches('/');
        assert_eq!(login_error_from_query(query), Some(provider.missing_token_message()));
        assert_eq!(handler.phase(), CallbackPhase::TerminalRedirect);
    }
}

#[test]
fn terminal_redirect_never_acts_again() {
    let mut handler = CallbackHandler::new(OAuthProvider::Google);
    let _ = handler.step(false, GOOGLE_PATH, "");
    assert_eq!(handler.step(false, GOOGLE_PATH, "token=late"), CallbackAction::Idle);
    assert_eq!(handler.step(true, GOOGLE_PATH, ""), CallbackAction::Idle);
}

// =============================================================
// Provider URLs and login errors
// =============================================================

#[test]
fn providers_have_distinct_callback_paths() {
    assert_eq!(OAuthProvider::Google.callback_path(), GOOGLE_PATH);
    assert_eq!(OAuthProvider::Apple.callback_path(), "/apple-redirect-handler");
}

#[test]
fn google_authorize_url_carries_code_flow_params() {
    let url = OAuthProvider::Google.authorize_url_with_client("https://shop.example.com/", "cid");
    assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?response_type=code&client_id=cid&"));
    assert!(url.contains("prompt=select_account"));
    assert!(url.contains("access_type=offline"));
    assert!(url.contains("userinfo.email"));
}

#[test]
fn apple_authorize_url_posts_back_to_backend() {
    let url = OAuthProvider::Apple.authorize_url_with_client("https://shop.example.com", "svc");
    assert!(url.starts_with("https://appleid.apple.com/auth/authorize?"));
    assert!(url.contains("response_mode=form_post"));
    assert!(url.contains("client_id=svc"));
}

#[test]
fn backend_redirect_uri_joins_origin() {
    assert_eq!(
        OAuthProvider::Google.backend_redirect_uri("https://shop.example.com/"),
        "https://shop.example.com/auth/api/login/google/"
    );
}

#[test]
fn login_error_query_round_trips() {
    let path = login_error_path("Apple login failed to provide a token");
    let query = path.trim_start_matches(LOGIN_PATH);
    assert_eq!(login_error_from_query(query).as_deref(), Some("Apple login failed to provide a token"));
    assert_eq!(login_error_from_query(""), None);
    assert_eq!(login_error_from_query("?error="), None);
}

#[test]
fn login_error_survives_unrelated_bad_escape() {
    assert_eq!(login_error_from_query("?next=%FF&error=Denied").as_deref(), Some("Denied"));
    assert_eq!(login_error_from_query("error=first&error=second").as_deref(), Some("first"));
}
