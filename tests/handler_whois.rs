mod common;

use axum::http::{StatusCode, header};
use common::{IANA, StubWhoisClient, VERISIGN};
use std::sync::Arc;

#[tokio::test]
async fn test_whois_success() {
    let stub = Arc::new(common::com_stub());
    let server = common::create_test_server(stub.clone());

    let response = server
        .get("/whois")
        .add_query_param("domain", "example.com")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain"
    );
    assert_eq!(response.text(), "Domain Name: EXAMPLE.COM\n...");

    assert_eq!(
        stub.calls(),
        vec![
            (IANA.to_string(), "com".to_string()),
            (VERISIGN.to_string(), "example.com".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_whois_missing_domain() {
    let stub = Arc::new(StubWhoisClient::new());
    let server = common::create_test_server(stub.clone());

    let response = server.get("/whois").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Missing 'domain' query parameter");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_whois_empty_domain() {
    let stub = Arc::new(StubWhoisClient::new());
    let server = common::create_test_server(stub.clone());

    let response = server.get("/whois").add_query_param("domain", "").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Missing 'domain' query parameter");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_whois_other_params_only() {
    let server = common::create_test_server(Arc::new(StubWhoisClient::new()));

    let response = server.get("/whois").add_query_param("name", "example.com").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Missing 'domain' query parameter");
}

#[tokio::test]
async fn test_whois_registry_unreachable() {
    // Empty table: the root server is unreachable.
    let server = common::create_test_server(Arc::new(StubWhoisClient::new()));

    let response = server
        .get("/whois")
        .add_query_param("domain", "example.com")
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        "Error getting whois server: failed to connect to whois.iana.org:43: connection refused"
    );
}

#[tokio::test]
async fn test_whois_registry_not_found_is_500() {
    let stub = StubWhoisClient::new().reply(
        IANA,
        "zz",
        "% This query returned 0 objects.\n% You queried for zz but this server does not have\n",
    );
    let server = common::create_test_server(Arc::new(stub));

    let response = server.get("/whois").add_query_param("domain", "example.zz").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        "Error getting whois server: whois server not found"
    );
}

#[tokio::test]
async fn test_whois_domain_query_fails() {
    let stub = StubWhoisClient::new()
        .reply(IANA, "com", "whois: whois.verisign-grs.com\n")
        .reset(VERISIGN, "example.com");
    let server = common::create_test_server(Arc::new(stub));

    let response = server
        .get("/whois")
        .add_query_param("domain", "example.com")
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert!(body.starts_with("Error querying whois information: "));
    assert!(body.ends_with("connection reset by peer"));
}

#[tokio::test]
async fn test_whois_domain_without_dot() {
    let stub = Arc::new(
        StubWhoisClient::new()
            .reply(IANA, "localhost", "whois: whois.local.example\n")
            .reply("whois.local.example", "localhost", "local record\n"),
    );
    let server = common::create_test_server(stub.clone());

    let response = server.get("/whois").add_query_param("domain", "localhost").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "local record\n");
    assert_eq!(stub.calls()[0], (IANA.to_string(), "localhost".to_string()));
}

#[tokio::test]
async fn test_whois_first_domain_param_wins() {
    let stub = Arc::new(common::com_stub());
    let server = common::create_test_server(stub.clone());

    let response = server.get("/whois?domain=example.com&domain=other.org").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Domain Name: EXAMPLE.COM\n...");
}

#[tokio::test]
async fn test_whois_relays_bytes_verbatim() {
    let body: Vec<u8> = vec![b'n', b'a', b'm', b'e', b':', b' ', 0xE9, b'\r', b'\n'];
    let stub = StubWhoisClient::new()
        .reply(IANA, "fr", "whois:        whois.nic.fr\r\n")
        .reply("whois.nic.fr", "example.fr", body.clone());
    let server = common::create_test_server(Arc::new(stub));

    let response = server.get("/whois").add_query_param("domain", "example.fr").await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().to_vec(), body);
}

#[tokio::test]
async fn test_whois_concurrent_requests_do_not_interfere() {
    let stub = StubWhoisClient::new()
        .reply(IANA, "com", "whois: whois.verisign-grs.com\n")
        .reply(IANA, "org", "whois: whois.pir.org\n")
        .reply(VERISIGN, "example.com", "record for example.com\n")
        .reply("whois.pir.org", "example.org", "record for example.org\n");
    let server = common::create_test_server(Arc::new(stub));

    let (com, org, missing) = tokio::join!(
        server
            .get("/whois")
            .add_query_param("domain", "example.com")
            .into_future(),
        server
            .get("/whois")
            .add_query_param("domain", "example.org")
            .into_future(),
        server
            .get("/whois")
            .add_query_param("domain", "example.net")
            .into_future(),
    );

    com.assert_status_ok();
    assert_eq!(com.text(), "record for example.com\n");

    org.assert_status_ok();
    assert_eq!(org.text(), "record for example.org\n");

    assert_eq!(missing.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(missing.text().starts_with("Error getting whois server: "));
}

#[tokio::test]
async fn test_whois_trailing_slash_is_not_routed() {
    let server = common::create_test_server(Arc::new(common::com_stub()));

    let response = server
        .get("/whois/")
        .add_query_param("domain", "example.com")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
