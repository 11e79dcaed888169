// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking Jira REST client.
//!
//! [`JiraClient`] is the production [`SearchGateway`]: it runs JQL through
//! `GET /rest/api/2/search` and maps every failure onto a [`GatewayError`].
//! It also reads saved filters through [`FilterSource`].

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;

use jex_core::{GatewayError, SearchGateway, SearchRequest, SearchResponse};

use crate::config::Settings;
use crate::error::Result;

const SEARCH_PATH: &str = "/rest/api/2/search";
const MYSELF_PATH: &str = "/rest/api/2/myself";
const FILTER_PATH: &str = "/rest/api/2/filter";

enum Auth {
    Basic { email: String, token: String },
    Bearer(String),
}

/// The account behind the configured credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    /// Server and Data Center installs identify users by name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A saved Jira filter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFilter {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub jql: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Read access to saved filters.
pub trait FilterSource {
    /// `GET /rest/api/2/filter/{id}`.
    fn filter(&self, id: u64) -> std::result::Result<SavedFilter, GatewayError>;

    /// `GET /rest/api/2/filter/favourite`.
    fn favourite_filters(&self) -> std::result::Result<Vec<SavedFilter>, GatewayError>;
}

pub struct JiraClient {
    http: Client,
    base_url: String,
    auth: Auth,
    timeout: Duration,
}

impl JiraClient {
    /// Builds a client from settings.
    ///
    /// Uses Basic auth when an email is configured, Bearer otherwise.
    pub fn new(settings: &Settings) -> Result<Self> {
        let token = settings.require_token()?.to_string();
        let auth = match &settings.email {
            Some(email) => Auth::Basic {
                email: email.clone(),
                token,
            },
            None => Auth::Bearer(token),
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(concat!("jex/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(JiraClient {
            http,
            base_url: settings.base_url.clone(),
            auth,
            timeout: settings.timeout,
        })
    }

    /// `GET /rest/api/2/myself`.
    pub fn current_user(&self) -> std::result::Result<CurrentUser, GatewayError> {
        let value = self.get_json(self.request(MYSELF_PATH), self.timeout)?;
        serde_json::from_value(value).map_err(|e| GatewayError::MalformedBody(e.to_string()))
    }

    fn request(&self, path: &str) -> RequestBuilder {
        let builder = self.http.get(format!("{}{}", self.base_url, path));
        match &self.auth {
            Auth::Basic { email, token } => builder.basic_auth(email, Some(token)),
            Auth::Bearer(token) => builder.bearer_auth(token),
        }
    }

    fn get_json(
        &self,
        builder: RequestBuilder,
        timeout: Duration,
    ) -> std::result::Result<Value, GatewayError> {
        let response = builder
            .timeout(timeout)
            .send()
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        let body = response.text().map_err(|e| transport_error(e, timeout))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "jira response");

        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }
        if body.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        serde_json::from_str(&body).map_err(|e| GatewayError::MalformedBody(e.to_string()))
    }
}

impl FilterSource for JiraClient {
    fn filter(&self, id: u64) -> std::result::Result<SavedFilter, GatewayError> {
        let path = format!("{FILTER_PATH}/{id}");
        let value = self.get_json(self.request(&path), self.timeout)?;
        serde_json::from_value(value).map_err(|e| GatewayError::MalformedBody(e.to_string()))
    }

    fn favourite_filters(&self) -> std::result::Result<Vec<SavedFilter>, GatewayError> {
        let path = format!("{FILTER_PATH}/favourite");
        let value = self.get_json(self.request(&path), self.timeout)?;
        serde_json::from_value(value).map_err(|e| GatewayError::MalformedBody(e.to_string()))
    }
}

impl SearchGateway for JiraClient {
    fn search(&self, request: &SearchRequest) -> std::result::Result<SearchResponse, GatewayError> {
        let mut params = vec![
            ("jql", request.jql.clone()),
            ("maxResults", request.max_results.to_string()),
        ];
        if let Some(fields) = &request.fields {
            params.push(("fields", fields.join(",")));
        }

        tracing::debug!(
            jql = %request.jql,
            max_results = request.max_results,
            timeout_secs = request.timeout.as_secs(),
            "searching jira"
        );
        let value = self.get_json(self.request(SEARCH_PATH).query(&params), request.timeout)?;
        SearchResponse::from_value(value)
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout {
            secs: timeout.as_secs(),
        }
    } else {
        GatewayError::Transport(e.to_string())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
