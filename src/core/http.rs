//! HTTP transport used by the index, loader and execution client.
//!
//! The pipeline only needs two verbs, so the transport is a small async trait.
//! [`ReqwestHttp`] is the production implementation; tests substitute an in-memory
//! fake so that ordering and failure scenarios are deterministic.

use crate::core::error::TransportError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url`; any answered request is `Ok`, whatever its status
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// POST `body` as JSON to `url`
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}

/// Message of a `{"message": "..."}` error body, as both GitHub and the
/// execution service send them
pub(crate) fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
}

/// [`HttpClient`] backed by a shared `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestHttp {
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("codebox/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn into_response(
        result: reqwest::Result<reqwest::Response>,
        url: &str,
    ) -> Result<HttpResponse, TransportError> {
        let response = result.map_err(|e| {
            log::debug!("Request to {url} failed: {e}");
            TransportError::new(format!("request to {url} failed: {e}"))
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("failed to read response from {url}: {e}")))?;

        log::debug!("{url} -> HTTP {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        log::debug!("GET {url}");
        Self::into_response(self.client.get(url).send().await, url).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        log::debug!("POST {url}");
        Self::into_response(self.client.post(url).json(body).send().await, url).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"message":"Not Found"}"#).as_deref(), Some("Not Found"));
        assert_eq!(error_message("<html>"), None);
        assert_eq!(error_message(r#"{"message":""}"#), None);
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(ReqwestHttp::new(Some(Duration::from_secs(5))).is_ok());
        assert!(ReqwestHttp::new(None).is_ok());
    }
}
