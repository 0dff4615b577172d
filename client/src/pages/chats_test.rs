use super::*;

fn chat(id: i64, name: &str, is_group: bool) -> Chat {
    Chat { id, name: name.to_owned(), avatar: String::new(), is_group }
}

#[test]
fn chat_href_uses_chat_id() {
    assert_eq!(chat_href(&chat(12, "Ann", false)), "/chats/12");
}

#[test]
fn sort_chats_puts_groups_first_then_by_name() {
    let mut chats = vec![chat(1, "Zed", false), chat(2, "Team", true), chat(3, "Ann", false), chat(4, "Book club", true)];
    sort_chats(&mut chats);
    let ids: Vec<i64> = chats.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![4, 2, 3, 1]);
}
