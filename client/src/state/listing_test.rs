use super::*;

#[test]
fn default_is_loading_without_message() {
    let listing = Listing::<u8>::default();
    assert_eq!(listing, Listing::Loading);
    assert_eq!(listing.status_message(&RuntimeConfig::default()), None);
    assert!(listing.items().is_empty());
}

#[test]
fn empty_result_shows_no_results_message() {
    let config = RuntimeConfig { no_results_message: "Nothing here".to_owned(), ..RuntimeConfig::default() };
    let listing = Listing::<u8>::from_result(Ok(Vec::new()));
    assert_eq!(listing.status_message(&config).as_deref(), Some("Nothing here"));
}

#[test]
fn loaded_items_have_no_message() {
    let listing = Listing::from_result(Ok(vec![1, 2, 3]));
    assert_eq!(listing.items(), &[1, 2, 3]);
    assert_eq!(listing.status_message(&RuntimeConfig::default()), None);
}

#[test]
fn transport_failure_shows_configured_error() {
    let config = RuntimeConfig::default();
    let listing = Listing::<u8>::from_result(Err(ApiError::Status(500)));
    assert_eq!(listing.status_message(&config), Some(config.error_message.clone()));
}

#[test]
fn backend_rejection_shows_backend_message() {
    let listing = Listing::<u8>::from_result(Err(ApiError::Rejected("chat is archived".to_owned())));
    assert_eq!(listing.status_message(&RuntimeConfig::default()).as_deref(), Some("chat is archived"));
}

#[test]
fn blank_rejection_falls_back_to_configured_error() {
    let config = RuntimeConfig::default();
    let listing = Listing::<u8>::from_result(Err(ApiError::Rejected("  ".to_owned())));
    assert_eq!(listing.status_message(&config), Some(config.error_message.clone()));
}
