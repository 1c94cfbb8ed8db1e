#![allow(dead_code)]

use std::{
    collections::VecDeque,
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    sync::{Arc, Mutex},
    thread::{self, JoinHandle},
};

use smartsaver::{
    client::{ApiClient, ApiRequest, ApiResponse, Transport},
    config::FallbackMode,
    errors::{ClientError, ClientResult},
};
use tempfile::TempDir;

/// In-memory transport answering from a queue. `None` entries, and an empty
/// queue, behave like an unreachable backend.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Option<ApiResponse>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Some(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self) -> Self {
        self.responses.lock().unwrap().push_back(None);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(&self, mode: FallbackMode) -> ApiClient {
        ApiClient::new(Box::new(self.clone()), mode)
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest) -> ClientResult<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .flatten()
            .ok_or_else(|| ClientError::Transport {
                path: request.path(),
                message: "connection refused".into(),
            })
    }
}

/// Raw HTTP request as seen by [`spawn_responder`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Serves exactly one HTTP response on a local port and hands back what the
/// client sent. Returns the base URL to point a transport at.
pub fn spawn_responder(status: u16, body: &str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read header");
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                headers.push((key.trim().to_string(), value.trim().to_string()));
            }
        }

        let length = headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);
        let mut payload = vec![0; length];
        reader.read_exact(&mut payload).expect("read body");

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {status} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().ok();

        CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8_lossy(&payload).into_owned(),
        }
    });

    (format!("http://{addr}"), handle)
}

/// Base URL on which nothing is listening.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Isolated application directory for CLI runs.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("create temp dir")
}
