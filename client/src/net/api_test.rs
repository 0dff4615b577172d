use super::*;

#[test]
fn chats_endpoint_joins_base_url() {
    assert_eq!(chats_endpoint("https://api.test"), "https://api.test/chats");
}

#[test]
fn chats_endpoint_trims_trailing_slashes() {
    assert_eq!(chats_endpoint("https://api.test//"), "https://api.test/chats");
}

#[test]
fn chats_endpoint_is_relative_for_empty_base() {
    assert_eq!(chats_endpoint(""), "/chats");
}

#[test]
fn messages_endpoint_formats_chat_id() {
    assert_eq!(messages_endpoint("https://api.test/", 42), "https://api.test/chats/42/messages");
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
    assert_eq!(ApiError::Rejected("chat not found".to_owned()).to_string(), "chat not found");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn session_endpoint_is_host_relative() {
    assert_eq!(SESSION_ENDPOINT, "/api/session");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn end_session_is_unavailable_off_browser() {
    let result = futures::executor::block_on(end_session());
    assert_eq!(result, Err(ApiError::Unavailable));
}
