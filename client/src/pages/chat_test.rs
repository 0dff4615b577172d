use super::*;

fn user(id: i64, name: &str) -> User {
    User { id, name: name.to_owned(), avatar: None }
}

fn message_from(author: User) -> Message {
    Message { id: 1, user: author, content: "hi".to_owned(), created_at: "2024-05-01T09:30:15Z".to_owned() }
}

#[test]
fn parse_chat_id_accepts_positive_integers() {
    assert_eq!(parse_chat_id(Some("42")), Some(42));
    assert_eq!(parse_chat_id(Some(" 7 ")), Some(7));
}

#[test]
fn parse_chat_id_rejects_missing_zero_and_garbage() {
    assert_eq!(parse_chat_id(None), None);
    assert_eq!(parse_chat_id(Some("0")), None);
    assert_eq!(parse_chat_id(Some("-3")), None);
    assert_eq!(parse_chat_id(Some("abc")), None);
}

#[test]
fn own_message_matches_current_user_id() {
    let ann = user(1, "Ann");
    assert!(is_own_message(&message_from(ann.clone()), Some(&ann)));
    assert!(!is_own_message(&message_from(user(2, "Bo")), Some(&ann)));
}

#[test]
fn no_current_user_owns_nothing() {
    assert!(!is_own_message(&message_from(user(1, "Ann")), None));
}

#[test]
fn short_time_extracts_hours_and_minutes() {
    assert_eq!(short_time("2024-05-01T09:30:15Z"), "09:30");
}

#[test]
fn short_time_passes_through_values_without_time() {
    assert_eq!(short_time("yesterday"), "yesterday");
    assert_eq!(short_time("2024-05-01T9"), "2024-05-01T9");
}

#[test]
fn avatar_src_uses_non_blank_avatar() {
    let author = User { avatar: Some("https://cdn.test/ann.png".to_owned()), ..user(1, "Ann") };
    assert_eq!(avatar_src(&author), Some("https://cdn.test/ann.png"));
}

#[test]
fn missing_or_blank_avatar_falls_back_to_initials() {
    let author = user(1, "ann marie");
    assert_eq!(avatar_src(&author), None);
    assert_eq!(avatar_src(&User { avatar: Some("  ".to_owned()), ..author.clone() }), None);
    assert_eq!(author.initials(), "AM");
}
