//! Executes `HttpRequest` values against the network.
//!
//! `Transport` is the seam between the I/O-free client and the outside
//! world. `ReqwestTransport` is the bundled implementation; hosts with their
//! own HTTP stack, and tests, provide their own.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one round trip. Non-2xx statuses are returned as data, not errors.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(transport_error)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "ReqwestTransport::execute");
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.path),
            HttpMethod::Post => self.http.post(&request.path),
            HttpMethod::Put => self.http.put(&request.path),
            HttpMethod::Delete => self.http.delete(&request.path),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.text().await.map_err(transport_error)?;
        debug!(status, "ReqwestTransport::execute: response received");

        Ok(HttpResponse { status, headers, body })
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(TransportError {
        status: err.status().map(|s| s.as_u16()),
        message: err.to_string(),
        response_message: None,
    })
}
