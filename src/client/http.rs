//! Blocking HTTP transport backed by `reqwest`.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;

use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::errors::{ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|err| ClientError::Transport {
            path: base_url.to_string(),
            message: format!("failed to build HTTP client: {err}"),
        })?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, request: &ApiRequest) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "base URL cannot carry a path".into(),
            })?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> ClientResult<ApiResponse> {
        let url = self.endpoint(request)?;
        tracing::debug!(%url, method = %request.method, "sending request");

        let builder = match request.method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
            Method::Put => self.http.put(url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let transport_error = |err: reqwest::Error| ClientError::Transport {
            path: request.path(),
            message: err.to_string(),
        };
        let response = builder.send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_error)?;
        Ok(ApiResponse { status, body })
    }
}

fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|err| ClientError::InvalidUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme `{other}`"),
        }),
    }
}
