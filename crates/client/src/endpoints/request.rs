//! Authenticated request execution.
//!
//! Every administrative call goes through [`send_request`], which:
//! - Sets `Content-Type: application/json` and `Authorization: Bearer <token>`
//! - Overlays caller-supplied headers (caller wins, key by key)
//! - Uppercases the method
//! - Logs the header set (token redacted) and the target before sending
//! - Turns non-2xx statuses into [`ClientError::ApiError`] carrying the body
//!
//! There is no retry: the first failure is returned to the caller.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use tracing::info;

use crate::error::{ClientError, Result};

/// Description of one outbound request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub json: Option<serde_json::Value>,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            json: None,
            query: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    /// Add a header that overrides the defaults.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

/// A successful (2xx) response, read to completion.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.body).map_err(|e| {
            ClientError::InvalidResponse(format!("response body is not valid JSON: {}", e))
        })
    }
}

/// Build the final header map: JSON content type, bearer auth, then overrides.
fn build_headers(token: &str, overrides: &[(String, String)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| ClientError::InvalidRequest("access token is not a valid header value".to_string()))?;
    headers.insert(AUTHORIZATION, bearer);

    for (name, value) in overrides {
        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|_| ClientError::InvalidRequest(format!("invalid header name '{}'", name)))?;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|_| ClientError::InvalidRequest(format!("invalid value for header '{}'", name)))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Mask a credential header value, keeping only its scheme (`Basic`, `Bearer`, ...).
fn redact_credentials(value: &HeaderValue) -> String {
    match value.to_str().ok().and_then(|v| v.trim().split_once(' ')) {
        Some((scheme, _)) => format!("{} <redacted>", scheme),
        None => "<redacted>".to_string(),
    }
}

/// Header set as it is logged; whatever Authorization value is set is masked.
fn loggable_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if *name == AUTHORIZATION {
                redact_credentials(value)
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.to_string(), shown)
        })
        .collect()
}

/// Target as it is logged: the URL plus any query string, unencoded.
fn loggable_target(request: &ApiRequest) -> String {
    if request.query.is_empty() {
        return request.url.clone();
    }
    let query = request
        .query
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", request.url, query)
}

fn parse_method(raw: &str) -> Result<Method> {
    let upper = raw.trim().to_uppercase();
    Method::from_bytes(upper.as_bytes())
        .map_err(|_| ClientError::InvalidRequest(format!("invalid HTTP method '{}'", raw)))
}

/// Read a response, turning non-2xx statuses into [`ClientError::ApiError`].
pub(crate) async fn read_response(
    response: Response,
    url: &str,
    timeout: Duration,
) -> Result<ApiResponse> {
    let status = response.status();
    let final_url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::from_transport(e, url, timeout))?;

    if !status.is_success() {
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            url: final_url,
            body,
        });
    }

    Ok(ApiResponse {
        status: status.as_u16(),
        body,
    })
}

/// Send an authenticated request.
pub async fn send_request(
    client: &Client,
    token: &str,
    request: ApiRequest,
    timeout: Duration,
) -> Result<ApiResponse> {
    let method = parse_method(&request.method)?;
    let headers = build_headers(token, &request.headers)?;

    info!("headers: {:?}", loggable_headers(&headers));
    info!("Sending {} request to {}", method, loggable_target(&request));

    let mut builder = client
        .request(method, &request.url)
        .headers(headers)
        .timeout(timeout);
    if !request.query.is_empty() {
        builder = builder.query(&request.query);
    }
    if let Some(ref body) = request.json {
        builder = builder.json(body);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| ClientError::from_transport(e, &request.url, timeout))?;

    read_response(response, &request.url, timeout).await
}
