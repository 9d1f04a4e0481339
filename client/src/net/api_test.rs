use super::*;

#[test]
fn logout_failed_message_formats_status() {
    assert_eq!(logout_failed_message(500), "server returned 500");
}

#[test]
fn projects_failed_message_formats_status() {
    assert_eq!(projects_failed_message(401), "projects request failed: 401");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_outside_browser_reports_error() {
    let result = futures::executor::block_on(logout());
    assert!(result.is_err());
}
