use super::*;

use crate::identity::types::ProviderInfo;

fn rosa() -> Identity {
    Identity {
        uid: "u-1".to_owned(),
        display_name: Some("Rosa Green".to_owned()),
        email: Some("rosa@example.com".to_owned()),
        photo_url: None,
        provider: ProviderInfo::default(),
    }
}

#[test]
fn draft_is_owned_by_signed_in_identity() {
    let draft = draft_for(Some(&rosa()));
    assert_eq!(draft.user_email, "rosa@example.com");
    assert_eq!(draft.user_name, "Rosa Green");
    assert_eq!(draft.category, "Plant Care");
    assert!(draft.title.is_empty());
}

#[test]
fn draft_without_identity_has_blank_owner() {
    let draft = draft_for(None);
    assert!(draft.user_email.is_empty());
    assert!(draft.user_name.is_empty());
}

#[test]
fn missing_field_message_names_first_blank_field() {
    let mut draft = draft_for(Some(&rosa()));
    assert_eq!(missing_field_message(&draft).as_deref(), Some("Title is required"));

    draft.title = "Tomatoes indoors".to_owned();
    draft.plant_type = "Tomato".to_owned();
    assert_eq!(missing_field_message(&draft).as_deref(), Some("Description is required"));

    draft.description = "Lots of light.".to_owned();
    draft.image_url = "https://img.example/t.png".to_owned();
    assert_eq!(missing_field_message(&draft), None);
}
