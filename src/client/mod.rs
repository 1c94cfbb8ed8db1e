//! Typed access to the SmartSaver backend.
//!
//! Reads go through the configured [`FallbackMode`]: in demo mode a failed read
//! yields the built-in placeholder payload tagged [`DataSource::Fallback`], in
//! strict mode the failure is returned. Writes always report failures.

pub mod fallback;
pub mod http;
pub mod transport;

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    config::{Config, FallbackMode},
    domain::{
        Budget, ChatReply, ChatRequest, Expense, Forecast, StockSeries, WhatIfAdjustments,
        WhatIfRequest,
    },
    errors::{ClientError, ClientResult},
};

pub use http::HttpTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};

/// Longest slice of an error body kept in [`ClientError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

/// Where a read result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Fallback,
}

/// A read result together with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Fetched<T> {
    pub fn remote(data: T) -> Self {
        Self {
            data,
            source: DataSource::Remote,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

pub struct ApiClient {
    transport: Box<dyn Transport>,
    fallback: FallbackMode,
    user_id: Option<String>,
}

impl ApiClient {
    pub fn new(transport: Box<dyn Transport>, fallback: FallbackMode) -> Self {
        Self {
            transport,
            fallback,
            user_id: None,
        }
    }

    /// Builds an HTTP-backed client from the user's configuration.
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        let transport = HttpTransport::new(&config.api_base_url, timeout)?;
        Ok(Self::new(Box::new(transport), config.fallback).with_user_id(config.user_id.clone()))
    }

    pub fn with_user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn fallback_mode(&self) -> FallbackMode {
        self.fallback
    }

    pub fn list_expenses(&self) -> ClientResult<Fetched<Vec<Expense>>> {
        self.read("list expenses", ApiRequest::get(&["expenses", ""]), fallback::expenses)
    }

    pub fn create_expense(&self, expense: &Expense) -> ClientResult<()> {
        let request = ApiRequest::post(&["expenses", ""], to_body(expense)?);
        self.write("add expense", request)
    }

    pub fn list_budgets(&self) -> ClientResult<Fetched<Vec<Budget>>> {
        self.read("list budgets", ApiRequest::get(&["budget", ""]), fallback::budgets)
    }

    pub fn update_budget(&self, category: &str, budget: &Budget) -> ClientResult<()> {
        let request = ApiRequest::put(&["budget", category], to_body(budget)?);
        self.write("update budget", request)
    }

    pub fn get_forecast(&self) -> ClientResult<Fetched<Forecast>> {
        self.read("get forecast", ApiRequest::get(&["forecast", ""]), fallback::forecast)
    }

    /// Runs the scenario remotely; on failure the demo fallback simulates it
    /// locally against the placeholder budgets.
    pub fn run_what_if(&self, adjustments: &WhatIfAdjustments) -> ClientResult<Fetched<Vec<Budget>>> {
        let body = to_body(&WhatIfRequest {
            adjustments: adjustments.clone(),
        })?;
        self.read("run what-if", ApiRequest::post(&["whatif", ""], body), || {
            fallback::simulate_what_if(&fallback::budgets(), adjustments)
        })
    }

    pub fn chat(&self, message: &str) -> ClientResult<Fetched<String>> {
        let body = to_body(&ChatRequest {
            message: message.to_string(),
            user_id: self.user_id.clone(),
        })?;
        let reply: Fetched<ChatReply> =
            self.read("chat", ApiRequest::post(&["chat", ""], body), || ChatReply {
                reply: fallback::CHAT_APOLOGY.to_string(),
            })?;
        Ok(Fetched {
            data: reply.data.reply,
            source: reply.source,
        })
    }

    pub fn list_stocks(&self) -> ClientResult<Fetched<StockSeries>> {
        self.read("list stocks", ApiRequest::get(&["stocks", ""]), fallback::stocks)
    }

    fn read<T, F>(&self, operation: &str, request: ApiRequest, fallback: F) -> ClientResult<Fetched<T>>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.fetch(&request) {
            Ok(data) => Ok(Fetched::remote(data)),
            Err(err) => match self.fallback {
                FallbackMode::Demo => {
                    warn!(operation, error = %err, "serving fallback data");
                    Ok(Fetched::fallback(fallback()))
                }
                FallbackMode::Strict => {
                    error!(operation, error = %err, "read failed");
                    Err(err)
                }
            },
        }
    }

    fn write(&self, operation: &str, request: ApiRequest) -> ClientResult<()> {
        self.exchange(&request).map(|_| ()).map_err(|err| {
            error!(operation, error = %err, "write failed");
            err
        })
    }

    fn fetch<T: DeserializeOwned>(&self, request: &ApiRequest) -> ClientResult<T> {
        let body = self.exchange(request)?;
        serde_json::from_str(&body).map_err(|err| ClientError::Decode {
            path: request.path(),
            message: err.to_string(),
        })
    }

    fn exchange(&self, request: &ApiRequest) -> ClientResult<String> {
        debug!(%request, "calling backend");
        let response = self.transport.send(request)?;
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ClientError::Status {
                path: request.path(),
                status: response.status,
                body: excerpt(&response.body),
            })
        }
    }
}

fn to_body<T: Serialize>(value: &T) -> ClientResult<Value> {
    serde_json::to_value(value).map_err(|err| ClientError::Decode {
        path: "request body".into(),
        message: err.to_string(),
    })
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Answers every request with the same canned result and records paths.
    struct Canned {
        response: Option<ApiResponse>,
        seen: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(response: Option<ApiResponse>) -> Self {
            Self {
                response,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for Canned {
        fn send(&self, request: &ApiRequest) -> ClientResult<ApiResponse> {
            self.seen.lock().unwrap().push(request.to_string());
            self.response.clone().ok_or_else(|| ClientError::Transport {
                path: request.path(),
                message: "connection refused".into(),
            })
        }
    }

    fn client(response: Option<ApiResponse>, mode: FallbackMode) -> ApiClient {
        ApiClient::new(Box::new(Canned::new(response)), mode)
    }

    #[test]
    fn empty_remote_list_is_not_confused_with_fallback() {
        let fetched = client(Some(ApiResponse::ok("[]")), FallbackMode::Demo)
            .list_budgets()
            .unwrap();
        assert_eq!(fetched.source, DataSource::Remote);
        assert!(fetched.data.is_empty());
    }

    #[test]
    fn malformed_body_falls_back_in_demo_mode() {
        let fetched = client(Some(ApiResponse::ok("{not json")), FallbackMode::Demo)
            .list_expenses()
            .unwrap();
        assert!(fetched.is_fallback());
        assert_eq!(fetched.data, fallback::expenses());
    }

    #[test]
    fn status_errors_keep_code_and_body() {
        let response = ApiResponse {
            status: 500,
            body: "boom".into(),
        };
        let err = client(Some(response), FallbackMode::Strict)
            .get_forecast()
            .unwrap_err();
        match err {
            ClientError::Status { status, body, path } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
                assert_eq!(path, "/forecast/");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn writes_ignore_fallback_mode() {
        let demo = client(None, FallbackMode::Demo);
        assert!(demo.create_expense(&Expense::new("Food", 5.0)).is_err());
        assert!(demo
            .update_budget("Food", &Budget::new("Food", 1.0, 0.0))
            .is_err());
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let long = "x".repeat(ERROR_BODY_LIMIT + 50);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), ERROR_BODY_LIMIT + 1);
        assert!(cut.ends_with('…'));
    }
}
