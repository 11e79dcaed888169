// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search gateway abstraction.
//!
//! The export pipeline never builds HTTP requests itself. It hands a
//! [`SearchRequest`] to a [`SearchGateway`], which allows:
//! - the real Jira REST client in production
//! - in-memory gateways for unit testing

use std::time::Duration;

use serde_json::Value;

/// Error type for gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Jira answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request did not complete within its timeout.
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Connection, TLS or other transport failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// Success status, but nothing in the body.
    #[error("empty response from Jira")]
    EmptyResponse,

    /// Success status, but the body is not a search result.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl GatewayError {
    /// Whether a single retry with a smaller page is worth attempting.
    ///
    /// Timeouts and server-side failures qualify; client errors (bad JQL,
    /// auth) and transport failures do not.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Timeout { .. } => true,
            GatewayError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// A single JQL search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub jql: String,
    pub max_results: u32,
    /// Fields to return; `None` lets Jira choose.
    pub fields: Option<Vec<String>>,
    pub timeout: Duration,
}

impl SearchRequest {
    pub fn new(jql: impl Into<String>, max_results: u32, timeout: Duration) -> Self {
        SearchRequest {
            jql: jql.into(),
            max_results,
            fields: None,
            timeout,
        }
    }
}

/// One page of raw search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    /// Raw issue records, untouched.
    pub issues: Vec<Value>,
    /// Total matches reported by Jira (may exceed `issues.len()`).
    pub total: u64,
}

impl SearchResponse {
    /// Splits a raw `/search` response body into issues and total.
    ///
    /// `total` falls back to the number of issues when Jira omits it.
    pub fn from_value(body: Value) -> Result<Self, GatewayError> {
        let Value::Object(mut map) = body else {
            return Err(GatewayError::MalformedBody(
                "expected a JSON object".to_string(),
            ));
        };

        let issues = match map.remove("issues") {
            Some(Value::Array(issues)) => issues,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                return Err(GatewayError::MalformedBody(
                    "'issues' is not an array".to_string(),
                ))
            }
        };

        let total = map
            .get("total")
            .and_then(Value::as_u64)
            .unwrap_or(issues.len() as u64);

        Ok(SearchResponse { issues, total })
    }
}

/// Executes JQL searches against Jira.
pub trait SearchGateway {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, GatewayError>;
}

impl<G: SearchGateway + ?Sized> SearchGateway for &G {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, GatewayError> {
        (**self).search(request)
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
