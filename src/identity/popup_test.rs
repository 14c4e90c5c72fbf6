use super::*;

#[test]
fn authorize_url_encodes_redirect_and_scope() {
    let url = google_authorize_url("client-1.apps", "https://garden.example/auth/popup", "s1");
    assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?client_id=client-1.apps&"));
    assert!(url.contains("redirect_uri=https%3A%2F%2Fgarden.example%2Fauth%2Fpopup"));
    assert!(url.contains("scope=openid%20email%20profile"));
    assert!(url.contains("response_type=id_token"));
    assert!(url.contains("state=s1"));
}

#[test]
fn fragment_without_token_is_pending() {
    assert_eq!(parse_popup_fragment("", "s1"), None);
    assert_eq!(parse_popup_fragment("#foo=bar", "s1"), None);
}

#[test]
fn fragment_with_token_and_matching_state_yields_token() {
    let result = parse_popup_fragment("#state=s1&id_token=abc.def.ghi&authuser=0", "s1");
    assert_eq!(result, Some(Ok("abc.def.ghi".to_owned())));
}

#[test]
fn fragment_with_state_mismatch_is_denied() {
    let Some(Err(rejection)) = parse_popup_fragment("#state=other&id_token=abc", "s1") else {
        panic!("expected rejection");
    };
    assert_eq!(rejection.code, POPUP_DENIED);
}

#[test]
fn fragment_with_error_is_denied() {
    let Some(Err(rejection)) = parse_popup_fragment("#error=access_denied&state=s1", "s1") else {
        panic!("expected rejection");
    };
    assert_eq!(rejection.code, POPUP_DENIED);
    assert_eq!(rejection.message, "access_denied");
}

#[test]
fn fragment_values_are_percent_decoded() {
    let result = parse_popup_fragment("#id_token=a%2Bb&state=s1", "s1");
    assert_eq!(result, Some(Ok("a+b".to_owned())));
}
