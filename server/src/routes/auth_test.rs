use super::*;
use axum::http::HeaderMap;
use axum::http::header::COOKIE as COOKIE_HEADER;
use reqwest::header::{COOKIE, SET_COOKIE};

use crate::routes::api_routes;
use crate::state::test_helpers::{FailingSessions, StaticSessions, test_app_state_with_sessions, test_user};

fn jar_with(cookie: &str) -> CookieJar {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE_HEADER, cookie.parse().unwrap());
    CookieJar::from_headers(&headers)
}

// =============================================================================
// session_token
// =============================================================================

#[test]
fn session_token_reads_named_cookie() {
    let jar = jar_with("theme=dark; session_token=abc123");
    assert_eq!(session_token(&jar), Some("abc123"));
}

#[test]
fn session_token_missing_cookie_is_none() {
    assert_eq!(session_token(&jar_with("theme=dark")), None);
}

#[test]
fn session_token_empty_cookie_is_none() {
    assert_eq!(session_token(&jar_with("session_token=")), None);
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax_root_path() {
    let cookie = session_cookie("tok".into(), false);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(false));
}

#[test]
fn session_cookie_honours_secure_flag() {
    assert_eq!(session_cookie("tok".into(), true).secure(), Some(true));
}

#[test]
fn cleared_session_cookie_expires_immediately() {
    let cookie = cleared_session_cookie(true);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.secure(), Some(true));
}

// =============================================================================
// dev-session form
// =============================================================================

#[test]
fn dev_session_form_name_is_optional() {
    let form: DevSessionForm = serde_json::from_str(r#"{"email":"ada@example.com"}"#).unwrap();
    assert_eq!(form.email, "ada@example.com");
    assert_eq!(form.name, "");
}

// =============================================================================
// logout
// =============================================================================

async fn spawn_api(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let app = api_routes(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn post_logout(base: &str, token: Option<&str>) -> (StatusCode, Option<String>) {
    let mut req = reqwest::Client::new().post(format!("{base}/api/auth/logout"));
    if let Some(token) = token {
        req = req.header(COOKIE, format!("{COOKIE_NAME}={token}"));
    }
    let resp = req.send().await.expect("request");
    let status = StatusCode::from_u16(resp.status().as_u16()).expect("status");
    let set_cookie = resp
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    (status, set_cookie)
}

async fn me_status(base: &str, token: &str) -> StatusCode {
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/auth/me"))
        .header(COOKIE, format!("{COOKIE_NAME}={token}"))
        .send()
        .await
        .expect("request");
    StatusCode::from_u16(resp.status().as_u16()).expect("status")
}

fn assert_cookie_cleared(set_cookie: Option<&str>) {
    let set_cookie = set_cookie.expect("logout sets a cookie");
    assert!(set_cookie.starts_with("session_token=;"), "{set_cookie}");
    assert!(set_cookie.contains("Max-Age=0"), "{set_cookie}");
}

#[tokio::test]
async fn logout_ends_live_session_and_clears_cookie() {
    let state = test_app_state_with_sessions(StaticSessions::with("good", test_user("ada@example.com")));
    let base = spawn_api(state).await;
    assert_eq!(me_status(&base, "good").await, StatusCode::OK);

    let (status, set_cookie) = post_logout(&base, Some("good")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_cookie_cleared(set_cookie.as_deref());
    assert_eq!(me_status(&base, "good").await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_with_ended_session_still_signs_out() {
    let base = spawn_api(test_app_state_with_sessions(StaticSessions::default())).await;
    let (status, set_cookie) = post_logout(&base, Some("expired")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_cookie_cleared(set_cookie.as_deref());
}

#[tokio::test]
async fn logout_twice_succeeds_both_times() {
    let state = test_app_state_with_sessions(StaticSessions::with("good", test_user("ada@example.com")));
    let base = spawn_api(state).await;
    assert_eq!(post_logout(&base, Some("good")).await.0, StatusCode::NO_CONTENT);
    assert_eq!(post_logout(&base, Some("good")).await.0, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn logout_without_cookie_is_no_content() {
    let base = spawn_api(test_app_state_with_sessions(StaticSessions::default())).await;
    let (status, set_cookie) = post_logout(&base, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_cookie_cleared(set_cookie.as_deref());
}

#[tokio::test]
async fn logout_store_failure_is_server_error() {
    let base = spawn_api(test_app_state_with_sessions(FailingSessions)).await;
    let (status, set_cookie) = post_logout(&base, Some("tok")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(set_cookie, None);
}
