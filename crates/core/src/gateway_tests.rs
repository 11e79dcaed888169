// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

#[parameterized(
    timeout = { GatewayError::Timeout { secs: 60 }, true },
    server_error = { GatewayError::Http { status: 500, body: String::new() }, true },
    bad_gateway = { GatewayError::Http { status: 502, body: String::new() }, true },
    bad_jql = { GatewayError::Http { status: 400, body: "bad jql".into() }, false },
    unauthorized = { GatewayError::Http { status: 401, body: String::new() }, false },
    transport = { GatewayError::Transport("refused".into()), false },
    empty = { GatewayError::EmptyResponse, false },
    malformed = { GatewayError::MalformedBody("x".into()), false },
)]
fn retryable_errors(err: GatewayError, expected: bool) {
    assert_eq!(err.is_retryable(), expected);
}

#[test]
fn from_value_reads_issues_and_total() {
    let body = json!({
        "startAt": 0,
        "maxResults": 1,
        "total": 42,
        "issues": [{"key": "T-1"}]
    });
    let response = SearchResponse::from_value(body).unwrap();
    assert_eq!(response.issues.len(), 1);
    assert_eq!(response.total, 42);
}

#[test]
fn from_value_defaults_total_to_issue_count() {
    let body = json!({"issues": [{"key": "A-1"}, {"key": "A-2"}]});
    assert_eq!(SearchResponse::from_value(body).unwrap().total, 2);
}

#[test]
fn from_value_without_issues_is_empty() {
    let response = SearchResponse::from_value(json!({"total": 0})).unwrap();
    assert!(response.issues.is_empty());
    assert_eq!(response.total, 0);
}

#[test]
fn from_value_rejects_non_object() {
    assert!(matches!(
        SearchResponse::from_value(json!([1, 2])),
        Err(GatewayError::MalformedBody(_))
    ));
}

#[test]
fn from_value_rejects_non_array_issues() {
    assert!(matches!(
        SearchResponse::from_value(json!({"issues": "nope"})),
        Err(GatewayError::MalformedBody(_))
    ));
}

#[test]
fn http_error_message_includes_status_and_body() {
    let err = GatewayError::Http {
        status: 401,
        body: "Unauthorized".into(),
    };
    assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
}
