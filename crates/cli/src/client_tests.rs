// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use crate::config::Overrides;
use crate::error::Error;
use mockito::{Matcher, Server};
use serde_json::json;
use std::net::TcpListener;

fn settings_for(base_url: &str, email: Option<&str>) -> Settings {
    let base_url = base_url.to_string();
    let email = email.map(String::from);
    Settings::resolve(Overrides::default(), move |name| match name {
        "JIRA_BASE_URL" => Some(base_url.clone()),
        "JIRA_API_TOKEN" => Some("secret-token".to_string()),
        "JIRA_EMAIL" => email.clone(),
        _ => None,
    })
    .unwrap()
}

fn request(jql: &str, max_results: u32) -> SearchRequest {
    SearchRequest::new(jql, max_results, Duration::from_secs(5))
}

#[test]
fn test_search_sends_jql_and_bearer_token() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("jql".into(), "assignee = currentUser()".into()),
            Matcher::UrlEncoded("maxResults".into(), "50".into()),
        ]))
        .match_header("authorization", "Bearer secret-token")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(json!({"issues": [{"key": "T-1"}], "total": 7}).to_string())
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let response = client
        .search(&request("assignee = currentUser()", 50))
        .unwrap();

    mock.assert();
    assert_eq!(response.total, 7);
    assert_eq!(response.issues.len(), 1);
    assert_eq!(response.issues[0]["key"], "T-1");
}

#[test]
fn test_search_uses_basic_auth_when_email_is_set() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::Any)
        .match_header(
            "authorization",
            "Basic ZGV2QGFjbWUudGVzdDpzZWNyZXQtdG9rZW4=",
        )
        .with_status(200)
        .with_body(r#"{"issues": [], "total": 0}"#)
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), Some("dev@acme.test"))).unwrap();
    client.search(&request("project = T", 10)).unwrap();

    mock.assert();
}

#[test]
fn test_search_requests_selected_fields() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::UrlEncoded(
            "fields".into(),
            "summary,status".into(),
        ))
        .with_status(200)
        .with_body(r#"{"issues": [], "total": 0}"#)
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let mut req = request("project = T", 10);
    req.fields = Some(vec!["summary".to_string(), "status".to_string()]);
    client.search(&req).unwrap();

    mock.assert();
}

#[test]
fn test_trailing_slash_in_base_url_is_ignored() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"issues": [], "total": 0}"#)
        .create();

    let base = format!("{}/", server.url());
    let client = JiraClient::new(&settings_for(&base, None)).unwrap();
    client.search(&request("project = T", 10)).unwrap();

    mock.assert();
}

#[test]
fn test_client_error_maps_to_http_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"errorMessages": ["Error in the JQL Query"]}"#)
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let err = client.search(&request("project = ", 10)).unwrap_err();

    match &err {
        GatewayError::Http { status, body } => {
            assert_eq!(*status, 400);
            assert!(body.contains("Error in the JQL Query"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
    assert!(!err.is_retryable());
}

#[test]
fn test_server_error_is_retryable() {
    let mut server = Server::new();
    server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("Service Unavailable")
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let err = client.search(&request("project = T", 50)).unwrap_err();

    assert_eq!(
        err,
        GatewayError::Http {
            status: 503,
            body: "Service Unavailable".to_string()
        }
    );
    assert!(err.is_retryable());
}

#[test]
fn test_empty_body_is_empty_response() {
    let mut server = Server::new();
    server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("")
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let err = client.search(&request("project = T", 50)).unwrap_err();

    assert_eq!(err, GatewayError::EmptyResponse);
}

#[test]
fn test_invalid_json_is_malformed_body() {
    let mut server = Server::new();
    server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>login</html>")
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let err = client.search(&request("project = T", 50)).unwrap_err();

    assert!(matches!(err, GatewayError::MalformedBody(_)));
}

#[test]
fn test_null_issues_yield_empty_page() {
    let mut server = Server::new();
    server
        .mock("GET", "/rest/api/2/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"issues": null, "total": 0}"#)
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let response = client.search(&request("project = T", 50)).unwrap();

    assert!(response.issues.is_empty());
    assert_eq!(response.total, 0);
}

#[test]
fn test_unresponsive_server_times_out() {
    // Connections queue in the backlog and never get an answer.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let client = JiraClient::new(&settings_for(&base, None)).unwrap();
    let req = SearchRequest::new("project = T", 50, Duration::from_secs(1));
    let err = client.search(&req).unwrap_err();

    assert_eq!(err, GatewayError::Timeout { secs: 1 });
    assert!(err.is_retryable());
}

#[test]
fn test_current_user() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/api/2/myself")
        .with_status(200)
        .with_body(
            json!({
                "displayName": "Ada Lovelace",
                "emailAddress": "ada@acme.test",
                "accountId": "5b10ac8d82e05b22cc7d4ef5"
            })
            .to_string(),
        )
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let user = client.current_user().unwrap();

    mock.assert();
    assert_eq!(user.display_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(user.email_address.as_deref(), Some("ada@acme.test"));
    assert_eq!(user.account_id.as_deref(), Some("5b10ac8d82e05b22cc7d4ef5"));
    assert_eq!(user.name, None);
}

#[test]
fn test_current_user_unauthorized() {
    let mut server = Server::new();
    server
        .mock("GET", "/rest/api/2/myself")
        .with_status(401)
        .with_body("Unauthorized")
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let err = client.current_user().unwrap_err();

    assert!(matches!(err, GatewayError::Http { status: 401, .. }));
}

#[test]
fn test_new_requires_token() {
    let settings = Settings::resolve(Overrides::default(), |_| None).unwrap();
    let result = JiraClient::new(&settings);
    assert!(matches!(
        result,
        Err(Error::MissingCredential {
            name: "JIRA_API_TOKEN"
        })
    ));
}

#[test]
fn test_favourite_filters() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/api/2/filter/favourite")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_body(
            json!([
                {"id": "10000", "name": "Team backlog", "jql": "project = OPS",
                 "owner": {"displayName": "Ada Lovelace"}},
                {"id": "10001", "name": "No query"}
            ])
            .to_string(),
        )
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let filters = client.favourite_filters().unwrap();

    mock.assert();
    assert_eq!(filters.len(), 2);
    assert_eq!(filters[0].id, "10000");
    assert_eq!(filters[0].jql, "project = OPS");
    assert_eq!(filters[1].jql, "");
}

#[test]
fn test_filter_by_id() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/api/2/filter/10000")
        .with_status(200)
        .with_body(
            json!({
                "id": "10000",
                "name": "Team backlog",
                "description": "Open work",
                "jql": "project = OPS AND status = Open"
            })
            .to_string(),
        )
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let filter = client.filter(10000).unwrap();

    mock.assert();
    assert_eq!(filter.name, "Team backlog");
    assert_eq!(filter.description.as_deref(), Some("Open work"));
    assert_eq!(filter.jql, "project = OPS AND status = Open");
}

#[test]
fn test_missing_filter_maps_to_http_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/rest/api/2/filter/404")
        .with_status(404)
        .with_body(r#"{"errorMessages": ["The selected filter is not available to you"]}"#)
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let err = client.filter(404).unwrap_err();

    assert!(matches!(err, GatewayError::Http { status: 404, .. }));
}

#[test]
fn test_filter_list_that_is_not_an_array_is_malformed() {
    let mut server = Server::new();
    server
        .mock("GET", "/rest/api/2/filter/favourite")
        .with_status(200)
        .with_body(r#"{"values": []}"#)
        .create();

    let client = JiraClient::new(&settings_for(&server.url(), None)).unwrap();
    let err = client.favourite_filters().unwrap_err();

    assert!(matches!(err, GatewayError::MalformedBody(_)));
}
