//! Integration tests for the feed download against a mock server.

mod helpers;

use chrono::NaiveDate;
use domain_similarity::feed::{fetch_domains, fetch_feed, fetch_feed_with_limit, feed_url};
use domain_similarity::initialization::init_client;
use domain_similarity::{run_similarity, FeedError};
use helpers::{build_zip, test_config, write_lines};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn feed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

#[tokio::test]
async fn test_fetch_domains_from_feed() {
    let mock_server = MockServer::start().await;
    let archive = build_zip(&[("domain-names.txt", "paypa1.com\r\nbank.net\r\n")]);

    Mock::given(method("GET"))
        .and(path("/nrd-feed/MjAyNC0wMS0wMi56aXA=/nrd"))
        .and(header("user-agent", "Threat Intelligence Research"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = init_client(5).expect("client should build");
    let base = format!("{}/nrd-feed", mock_server.uri());
    let domains = fetch_domains(&client, &base, feed_date())
        .await
        .expect("feed should download");

    assert_eq!(domains, vec!["paypa1.com", "bank.net"]);
}

#[tokio::test]
async fn test_fetch_feed_not_found_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = init_client(5).expect("client should build");
    let url = feed_url(&mock_server.uri(), feed_date());
    let err = fetch_feed(&client, &url).await.unwrap_err();

    assert!(matches!(err, FeedError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_fetch_feed_retries_after_server_error() {
    let mock_server = MockServer::start().await;
    let archive = build_zip(&[("domain-names.txt", "paypa1.com\n")]);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = init_client(5).expect("client should build");
    let url = feed_url(&mock_server.uri(), feed_date());
    let bytes = fetch_feed(&client, &url)
        .await
        .expect("second attempt should succeed");

    assert_eq!(bytes, archive);
}

#[tokio::test]
async fn test_fetch_feed_rejects_oversized_body_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![b'x'; 100]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = init_client(5).expect("client should build");
    let url = feed_url(&mock_server.uri(), feed_date());
    let err = fetch_feed_with_limit(&client, &url, 16).await.unwrap_err();

    assert!(
        matches!(err, FeedError::TooLarge { size: 100, max: 16 }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_fetch_domains_rejects_non_zip_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = init_client(5).expect("client should build");
    let err = fetch_domains(&client, &mock_server.uri(), feed_date())
        .await
        .unwrap_err();

    assert!(matches!(err, FeedError::Archive(_)));
}

#[tokio::test]
async fn test_run_with_feed() {
    let mock_server = MockServer::start().await;
    let archive = build_zip(&[("domain-names.txt", "amaz0n.shop\nweather.net\n")]);

    Mock::given(method("GET"))
        .and(path("/MjAyNC0wMS0wMi56aXA=/nrd"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let wordlist = write_lines(temp_dir.path(), "brands.txt", &["amazon"]);
    let mut config = test_config(wordlist, temp_dir.path().to_path_buf(), "s");
    config.feed_url = mock_server.uri();

    let report = run_similarity(config).await.expect("run should succeed");
    assert_eq!(report.candidates, 2);
    assert_eq!(report.matches, 1);
    let contents = std::fs::read_to_string(&report.report_path).unwrap();
    assert!(contents.contains("'amaz0n.shop'"));
}

#[tokio::test]
async fn test_run_with_unavailable_feed_degrades_to_empty_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let wordlist = write_lines(temp_dir.path(), "brands.txt", &["amazon"]);
    let mut config = test_config(wordlist, temp_dir.path().to_path_buf(), "j");
    config.feed_url = mock_server.uri();

    let report = run_similarity(config).await.expect("feed failure is not fatal");
    assert_eq!(report.candidates, 0);
    assert_eq!(report.matches, 0);
    assert_eq!(std::fs::read_to_string(&report.report_path).unwrap(), "");
}
