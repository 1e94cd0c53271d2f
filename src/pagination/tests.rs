//! Tests for pagination module

use super::*;
use crate::config::ClientConfig;
use crate::error::ErrorKind;
use crate::http::HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, LINK};
use std::time::Duration;
use test_case::test_case;
use url::Url;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn link_headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(LINK, HeaderValue::from_str(value).unwrap());
    headers
}

// ============================================================================
// Link Header Tests
// ============================================================================

#[test]
fn test_next_page_url_simple() {
    let headers = link_headers(r#"<https://x/page2>; rel="next""#);
    assert_eq!(
        next_page_url(&headers),
        Some(Url::parse("https://x/page2").unwrap())
    );
}

#[test]
fn test_next_page_url_missing_header() {
    assert_eq!(next_page_url(&HeaderMap::new()), None);
}

#[test_case(r#"<https://x/page1>; rel="prev""# ; "prev only")]
#[test_case(r#"<https://x/page1>; rel="first""# ; "first only")]
#[test_case("" ; "empty")]
fn test_next_page_url_without_next(value: &str) {
    assert_eq!(next_page_url(&link_headers(value)), None);
}

#[test_case(r#"<::not a url>; rel="next""# ; "unparsable url")]
#[test_case(r#"<>; rel="next""# ; "empty brackets")]
#[test_case(r#"https://x/page2; rel="next""# ; "no brackets")]
#[test_case(r#"</relative/page2>; rel="next""# ; "relative url")]
fn test_next_page_url_malformed_is_done(value: &str) {
    assert_eq!(next_page_url(&link_headers(value)), None);
}

#[test]
fn test_next_page_url_takes_first_bracketed_url() {
    let headers = link_headers(r#"<https://x/page3>; rel="next", <https://x/page1>; rel="prev""#);
    assert_eq!(
        next_page_url(&headers),
        Some(Url::parse("https://x/page3").unwrap())
    );
}

#[test]
fn test_next_page_url_keeps_query() {
    let headers = link_headers(
        r#"<https://api.mapbox.com/styles/v1/alice?draft=false&start=cjs9&limit=2>; rel="next""#,
    );
    let url = next_page_url(&headers).unwrap();
    assert_eq!(url.path(), "/styles/v1/alice");
    assert_eq!(url.query(), Some("draft=false&start=cjs9&limit=2"));
}

#[test]
fn test_next_page_from_headers() {
    let next = NextPage::from_headers(&link_headers(r#"<https://x/page2>; rel="next""#));
    assert!(next.is_continue());
    assert_eq!(next.url().map(Url::as_str), Some("https://x/page2"));

    let done = NextPage::from_headers(&HeaderMap::new());
    assert!(done.is_done());
    assert!(done.url().is_none());
}

// ============================================================================
// Collector Tests
// ============================================================================

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder("alice", "pk.test")
        .base_url(server.uri())
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn next_link(server: &MockServer, page: u32) -> String {
    format!(r#"<{}/items?page={page}>; rel="next""#, server.uri())
}

#[tokio::test]
async fn test_collect_pages_follows_links_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param_is_missing("page"))
        .and(query_param("access_token", "pk.test"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(&mock_server, 2).as_str())
                .set_body_json(serde_json::json!([1, 2])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("page", "2"))
        .and(query_param("access_token", "pk.test"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(&mock_server, 3).as_str())
                .set_body_json(serde_json::json!([3, 4])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("page", "3"))
        .and(query_param("access_token", "pk.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([5])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let initial = Url::parse(&format!("{}/items", mock_server.uri())).unwrap();
    let items: Vec<u32> = collect_pages(&client, initial).await.unwrap();

    assert_eq!(items, vec![1, 2, 3, 4, 5]);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_collect_pages_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let initial = Url::parse(&format!("{}/items", mock_server.uri())).unwrap();
    let items: Vec<u32> = collect_pages(&client, initial).await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_collect_pages_stops_on_malformed_link() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", r#"<::not a url>; rel="next""#)
                .set_body_json(serde_json::json!([7])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let initial = Url::parse(&format!("{}/items", mock_server.uri())).unwrap();
    let items: Vec<u32> = collect_pages(&client, initial).await.unwrap();

    assert_eq!(items, vec![7]);
}

#[tokio::test]
async fn test_collect_pages_fails_whole_collection_on_page_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(&mock_server, 2).as_str())
                .set_body_json(serde_json::json!([1, 2])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([3, 4]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let initial = Url::parse(&format!("{}/items", mock_server.uri())).unwrap();
    let result: crate::Result<Vec<u32>> = collect_pages(&client, initial).await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_collect_pages_fails_on_bad_page_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(&mock_server, 2).as_str())
                .set_body_json(serde_json::json!([1])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let initial = Url::parse(&format!("{}/items", mock_server.uri())).unwrap();
    let err = collect_pages::<u32>(&client, initial).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
}
