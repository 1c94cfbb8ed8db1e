mod common;

use common::{spawn_responder, unreachable_url, ScriptedTransport};
use serde_json::json;
use smartsaver::{
    client::{fallback, ApiClient, DataSource, HttpTransport},
    config::FallbackMode,
    domain::{Budget, Expense, WhatIfAdjustments},
    errors::ClientError,
};

fn http_client(base_url: &str, mode: FallbackMode) -> ApiClient {
    let transport = HttpTransport::new(base_url, None).expect("valid base URL");
    ApiClient::new(Box::new(transport), mode)
}

#[test]
fn unreachable_backend_yields_the_four_fallback_budgets() {
    let client = http_client(&unreachable_url(), FallbackMode::Demo);
    let fetched = client.list_budgets().expect("demo mode never fails reads");

    assert_eq!(fetched.source, DataSource::Fallback);
    assert_eq!(
        fetched.data,
        vec![
            Budget::new("Food", 500.0, 250.0),
            Budget::new("Entertainment", 200.0, 100.0),
            Budget::new("Bills", 350.0, 300.0),
            Budget::new("Savings", 400.0, 200.0),
        ]
    );
}

#[test]
fn strict_mode_surfaces_read_failures() {
    let transport = ScriptedTransport::new().fail().respond(503, "down");
    let client = transport.client(FallbackMode::Strict);

    assert!(matches!(
        client.list_expenses(),
        Err(ClientError::Transport { .. })
    ));
    match client.list_stocks() {
        Err(ClientError::Status { status, body, .. }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn demo_fallback_is_tagged_for_every_read() {
    let client = ScriptedTransport::new().client(FallbackMode::Demo);

    let forecast = client.get_forecast().unwrap();
    assert!(forecast.is_fallback());
    assert_eq!(forecast.data, fallback::forecast());

    let stocks = client.list_stocks().unwrap();
    assert!(stocks.is_fallback());
    assert_eq!(stocks.data.len(), 5);

    let reply = client.chat("hello").unwrap();
    assert!(reply.is_fallback());
    assert_eq!(reply.data, fallback::CHAT_APOLOGY);
}

#[test]
fn what_if_fallback_simulates_locally() {
    let client = ScriptedTransport::new().client(FallbackMode::Demo);
    let adjustments: WhatIfAdjustments = [("Food".to_string(), 50.0)].into_iter().collect();

    let fetched = client.run_what_if(&adjustments).unwrap();
    assert!(fetched.is_fallback());
    assert_eq!(fetched.data[0], Budget::new("Food", 550.0, 250.0));
    assert_eq!(fetched.data[1], Budget::new("Entertainment", 200.0, 100.0));
}

#[test]
fn remote_what_if_result_is_used_as_is() {
    let transport = ScriptedTransport::new()
        .respond(200, r#"[{"category":"Food","total_budget":600.0,"spent":250.0}]"#);
    let client = transport.client(FallbackMode::Demo);
    let adjustments: WhatIfAdjustments = [("Food".to_string(), 100.0)].into_iter().collect();

    let fetched = client.run_what_if(&adjustments).unwrap();
    assert_eq!(fetched.source, DataSource::Remote);
    assert_eq!(fetched.data, vec![Budget::new("Food", 600.0, 250.0)]);

    let sent = transport.requests();
    assert_eq!(sent[0].to_string(), "POST /whatif/");
    assert_eq!(sent[0].body, Some(json!({ "adjustments": { "Food": 100.0 } })));
}

#[test]
fn chat_includes_user_id_only_when_configured() {
    let transport = ScriptedTransport::new()
        .respond(200, r#"{"reply":"hi"}"#)
        .respond(200, r#"{"reply":"again"}"#);

    let anonymous = transport.client(FallbackMode::Strict);
    assert_eq!(anonymous.chat("one").unwrap().data, "hi");

    let named = transport
        .client(FallbackMode::Strict)
        .with_user_id(Some("u-7".into()));
    assert_eq!(named.chat("two").unwrap().data, "again");

    let sent = transport.requests();
    assert_eq!(sent[0].body, Some(json!({ "message": "one" })));
    assert_eq!(sent[1].body, Some(json!({ "message": "two", "user_id": "u-7" })));
}

#[test]
fn http_transport_posts_json_to_trailing_slash_routes() {
    let (base, server) = spawn_responder(200, r#"{"status":"ok"}"#);
    let client = http_client(&base, FallbackMode::Strict);

    client
        .create_expense(&Expense::new("Food", 12.5))
        .expect("backend accepted the expense");

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "POST /expenses/ HTTP/1.1");
    assert_eq!(captured.header("content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(body, json!({ "category": "Food", "amount": 12.5 }));
}

#[test]
fn http_transport_puts_budget_under_encoded_category() {
    let (base, server) = spawn_responder(200, "{}");
    let client = http_client(&base, FallbackMode::Strict);

    client
        .update_budget("Eating Out", &Budget::new("Eating Out", 300.0, 20.0))
        .unwrap();

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "PUT /budget/Eating%20Out HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        body,
        json!({ "category": "Eating Out", "total_budget": 300.0, "spent": 20.0 })
    );
}

#[test]
fn http_transport_reads_remote_lists() {
    let (base, server) = spawn_responder(200, "[]");
    let client = http_client(&base, FallbackMode::Demo);

    let fetched = client.list_budgets().unwrap();
    assert_eq!(fetched.source, DataSource::Remote);
    assert!(fetched.data.is_empty());

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "GET /budget/ HTTP/1.1");
}

#[test]
fn write_failures_are_reported_even_in_demo_mode() {
    let (base, server) = spawn_responder(500, r#"{"detail":"boom"}"#);
    let client = http_client(&base, FallbackMode::Demo);

    let err = client
        .update_budget("Food", &Budget::new("Food", 1.0, 0.0))
        .unwrap_err();
    server.join().unwrap();
    match err {
        ClientError::Status { status, path, .. } => {
            assert_eq!(status, 500);
            assert_eq!(path, "/budget/Food");
        }
        other => panic!("unexpected error {other:?}"),
    }
}
