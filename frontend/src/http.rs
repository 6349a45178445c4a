//! HTTP requests and responses as plain data, plus the browser transport
//! that executes them.
//!
//! Pages never talk to `gloo-net` directly. They build an [`HttpRequest`]
//! through [`crate::api::ApiClient`], and a [`Transport`] turns it into an
//! [`HttpResponse`]. Tests swap in an in-memory transport.

use gloo_net::http::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post_json(url: String, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }

    /// Attach `Authorization: Bearer <token>` when a token is available.
    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token {
            self.headers
                .push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one request. The error string describes a transport failure
/// (the request never reached the server or never came back).
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(|e| format!("Request error: {e}"))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| format!("Network error: {e}"))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        Ok(HttpResponse { status, body })
    }
}
