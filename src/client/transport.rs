use std::fmt;

use serde_json::Value;

use crate::errors::ClientResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        })
    }
}

/// A backend call described independently of the wire client.
///
/// Paths are kept as raw segments so transports can percent-encode them; an
/// empty trailing segment produces the trailing slash the backend routes expect.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::Get, segments, None)
    }

    pub fn post(segments: &[&str], body: Value) -> Self {
        Self::new(Method::Post, segments, Some(body))
    }

    pub fn put(segments: &[&str], body: Value) -> Self {
        Self::new(Method::Put, segments, Some(body))
    }

    fn new(method: Method, segments: &[&str], body: Option<Value>) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            body,
        }
    }

    /// Unencoded path, e.g. `/budget/Food` or `/expenses/`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves requests to the backend. Implementations report connection-level
/// failures as errors and hand every received response back, whatever its status.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> ClientResult<ApiResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_keep_trailing_slash_segments() {
        assert_eq!(ApiRequest::get(&["expenses", ""]).path(), "/expenses/");
        let put = ApiRequest::put(&["budget", "Food"], Value::Null);
        assert_eq!(put.to_string(), "PUT /budget/Food");
    }

    #[test]
    fn only_2xx_counts_as_success() {
        assert!(ApiResponse::ok("[]").is_success());
        let redirect = ApiResponse {
            status: 307,
            body: String::new(),
        };
        assert!(!redirect.is_success());
    }
}
