use super::*;

#[test]
fn delete_prompt_quotes_title() {
    assert_eq!(
        delete_prompt("Compost Basics"),
        "Do you want to delete \"Compost Basics\"? This action cannot be undone!"
    );
}

#[test]
fn delete_is_never_confirmed_without_a_browser() {
    assert!(!confirm_delete("Compost Basics"));
}
