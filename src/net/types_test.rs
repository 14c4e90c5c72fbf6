use super::*;

// =============================================================
// Tip
// =============================================================

#[test]
fn tip_parses_api_shape() {
    let tip: Tip = serde_json::from_str(
        r#"{
            "_id": "t1",
            "title": "Tomatoes indoors",
            "plantType": "Tomato",
            "difficultyLevel": "Medium",
            "description": "Lots of light.",
            "imageUrl": "https://img/t.png",
            "category": "Indoor Gardening",
            "availability": "Hidden",
            "userEmail": "a@b.co",
            "userName": "Alice",
            "totalLiked": 4,
            "createdAt": "2024-03-15T10:00:00.000Z"
        }"#,
    )
    .unwrap();
    assert_eq!(tip.id, "t1");
    assert_eq!(tip.difficulty_level, Difficulty::Medium);
    assert_eq!(tip.availability, Availability::Hidden);
    assert_eq!(tip.total_liked, 4);
    assert_eq!(tip.created_date(), Some("2024-03-15"));
}

#[test]
fn tip_missing_likes_counts_as_zero() {
    let tip: Tip = serde_json::from_str(r#"{"_id":"t2","title":"x","totalLiked":null}"#).unwrap();
    assert_eq!(tip.total_liked, 0);
    assert_eq!(tip.difficulty_level, Difficulty::Easy);
    assert_eq!(tip.availability, Availability::Public);
    assert!(tip.created_date().is_none());
}

#[test]
fn tip_unknown_difficulty_falls_back_to_default() {
    let tip: Tip = serde_json::from_str(r#"{"_id":"t3","title":"x","difficultyLevel":"Expert"}"#).unwrap();
    assert_eq!(tip.difficulty_level, Difficulty::Easy);
}

#[test]
fn tip_likes_accept_numeric_string_and_float() {
    let a: Tip = serde_json::from_str(r#"{"_id":"a","title":"x","totalLiked":"7"}"#).unwrap();
    let b: Tip = serde_json::from_str(r#"{"_id":"b","title":"x","totalLiked":3.0}"#).unwrap();
    assert_eq!(a.total_liked, 7);
    assert_eq!(b.total_liked, 3);
}

// =============================================================
// TipDraft
// =============================================================

#[test]
fn draft_serializes_camel_case() {
    let draft = TipDraft {
        title: "T".to_owned(),
        plant_type: "Basil".to_owned(),
        user_email: "a@b.co".to_owned(),
        user_name: "Alice".to_owned(),
        ..TipDraft::default()
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["plantType"], "Basil");
    assert_eq!(json["difficultyLevel"], "Easy");
    assert_eq!(json["category"], "Plant Care");
    assert_eq!(json["availability"], "Public");
    assert_eq!(json["userEmail"], "a@b.co");
    assert!(json.get("_id").is_none());
}

#[test]
fn draft_from_tip_keeps_editable_fields() {
    let tip: Tip = serde_json::from_str(
        r#"{"_id":"t1","title":"T","plantType":"P","difficultyLevel":"Hard","category":"Composting","totalLiked":9}"#,
    )
    .unwrap();
    let draft = TipDraft::from(&tip);
    assert_eq!(draft.title, "T");
    assert_eq!(draft.difficulty_level, Difficulty::Hard);
    assert_eq!(draft.category, "Composting");
}

#[test]
fn draft_reports_first_blank_required_field() {
    let mut draft = TipDraft { title: "T".to_owned(), ..TipDraft::default() };
    assert_eq!(draft.first_missing_field(), Some("Plant Type/Topic"));
    draft.plant_type = "P".to_owned();
    draft.description = "D".to_owned();
    draft.image_url = "https://img".to_owned();
    assert_eq!(draft.first_missing_field(), None);
}

// =============================================================
// enums
// =============================================================

#[test]
fn difficulty_parse_is_case_insensitive() {
    assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
    assert_eq!(Difficulty::parse(" Medium "), Some(Difficulty::Medium));
    assert_eq!(Difficulty::parse("All"), None);
}

#[test]
fn availability_parse_round_trips_labels() {
    for availability in Availability::ALL {
        assert_eq!(Availability::parse(availability.as_str()), Some(availability));
    }
}

// =============================================================
// Gardener
// =============================================================

#[test]
fn gardener_parses_and_reports_activity() {
    let gardener: Gardener = serde_json::from_str(
        r#"{"_id":"g1","name":"Sam","age":34,"gender":"Male","status":"Active","bio":"b",
            "experience":"5 years","imageUrl":"https://img/g.png","totalSharedTips":12}"#,
    )
    .unwrap();
    assert!(gardener.is_active());
    assert_eq!(gardener.age, 34);
    assert_eq!(gardener.total_shared_tips, 12);
}

#[test]
fn gardener_inactive_status() {
    let gardener: Gardener = serde_json::from_str(r#"{"_id":"g2","name":"Ray","status":"Inactive"}"#).unwrap();
    assert!(!gardener.is_active());
    assert_eq!(gardener.total_shared_tips, 0);
}

#[test]
fn gardener_numeric_experience_becomes_text() {
    let gardener: Gardener = serde_json::from_str(r#"{"_id":"g3","name":"Kim","experience":7}"#).unwrap();
    assert_eq!(gardener.experience, "7");
}
