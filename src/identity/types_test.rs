use super::*;

fn identity(display_name: Option<&str>, email: Option<&str>) -> Identity {
    Identity {
        uid: "u1".to_owned(),
        display_name: display_name.map(str::to_owned),
        email: email.map(str::to_owned),
        photo_url: None,
        provider: ProviderInfo { provider_id: PASSWORD_PROVIDER_ID.to_owned(), ..ProviderInfo::default() },
    }
}

#[test]
fn label_prefers_display_name() {
    assert_eq!(identity(Some("Rosa"), Some("rosa@example.com")).label(), "Rosa");
}

#[test]
fn label_falls_back_to_email_when_name_blank() {
    assert_eq!(identity(Some("  "), Some("rosa@example.com")).label(), "rosa@example.com");
}

#[test]
fn label_uses_generic_name_when_nothing_known() {
    assert_eq!(identity(None, None).label(), "Gardener");
}

#[test]
fn identity_serde_keeps_provider_metadata() {
    let mut original = identity(Some("Rosa"), Some("rosa@example.com"));
    original.provider.created_at = Some("1700000000000".to_owned());
    let json = serde_json::to_string(&original).unwrap();
    let parsed: Identity = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}
