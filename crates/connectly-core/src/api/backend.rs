//! HTTP Transport
//!
//! `HttpBackend` is the seam between the API client and the network.
//! Browser futures are not `Send`, hence `?Send`.

use async_trait::async_trait;

use super::{ApiRequest, Method, RawResponse};
use crate::config::ClientConfig;
use crate::error::ApiResult;

/// Header carrying the session token on authenticated calls
pub const SESSION_HEADER: &str = "x_session_id";

#[async_trait(?Send)]
pub trait HttpBackend {
    /// Send one request. Any HTTP status is a successful send;
    /// only transport failures are errors.
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse>;
}

/// `reqwest` transport (uses `fetch` on wasm32)
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let url = self.config.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(token) = request.session.as_deref() {
            builder = builder.header(SESSION_HEADER, token);
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
