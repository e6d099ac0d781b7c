//! The seam between request preparation and the network.

use crate::{
    request::{Body, Prepared},
    result::Result,
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client as ReqwestClient};

/// Raw answer of the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl Reply {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a [`Prepared`] request.
///
/// [`HttpTransport`] is used unless the client is built with another one.
#[async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Sends `request` and returns the raw reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    async fn execute(&self, request: Prepared) -> Result<Reply>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: ReqwestClient,
}

impl HttpTransport {
    /// Wraps an existing `reqwest` client.
    pub fn new(http: ReqwestClient) -> Self {
        HttpTransport { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Prepared) -> Result<Reply> {
        let mut builder = self.http.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Text(text) => builder.header(CONTENT_TYPE, "text/plain").body(text),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        log::debug!("{} responded with {}", request.endpoint, status);
        let body = response.text().await?;
        Ok(Reply { status, body })
    }
}
