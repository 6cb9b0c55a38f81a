//! Backend API
//!
//! Typed wrappers around the REST endpoints, organized as:
//! - backend: the transport trait and its reqwest implementation
//! - client: one method per endpoint

mod backend;
mod client;

pub use backend::{HttpBackend, ReqwestBackend, SESSION_HEADER};
pub use client::ApiClient;

use serde_json::Value;

use crate::error::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// A single request, independent of the transport that sends it
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub operation: Operation,
    pub method: Method,
    /// Path relative to the API base URL, including any query string
    pub path: String,
    /// Value of the `x_session_id` header
    pub session: Option<String>,
    /// JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(operation: Operation, method: Method, path: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            path: path.into(),
            session: None,
            body: None,
        }
    }

    pub fn with_session(mut self, token: &str) -> Self {
        self.session = Some(token.to_string());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status and body text of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
