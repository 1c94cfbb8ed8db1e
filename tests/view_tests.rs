mod common;

use common::ScriptedTransport;
use smartsaver::{
    client::{fallback, DataSource},
    config::FallbackMode,
    domain::{Budget, Expense, ExpenseCategory},
    views::{
        aggregates::{budget_usage, pie_slices, stock_change},
        chat::SEND_FAILURE_MESSAGE,
        edit::EditState,
        AddOutcome, BudgetView, ChatSession, DashboardView, ExpenseForm, ExpensesView, ViewError,
        WhatIfView,
    },
};

const BUDGETS: &str = r#"[
    {"category":"Food","total_budget":500.0,"spent":250.0},
    {"category":"Bills","total_budget":200.0,"spent":300.0}
]"#;

#[test]
fn remaining_and_percentages_are_exact() {
    let usage = budget_usage(&Budget::new("Food", 500.0, 250.0));
    assert_eq!(usage.remaining, 250.0);
    assert_eq!(usage.percentage, Some(50.0));

    let over = budget_usage(&Budget::new("Bills", 200.0, 300.0));
    assert_eq!(over.remaining, -100.0);
    assert_eq!(over.percentage, Some(150.0));
    assert_eq!(over.bar_width(), 100.0);
}

#[test]
fn pie_aggregation_keeps_exact_sums_and_skips_empty_categories() {
    let mut expenses = fallback::expenses();
    expenses.push(Expense::new("Food", 12.25));
    expenses.push(Expense::new("Travel", 99.0));

    let slices = pie_slices(&expenses);
    let totals: Vec<_> = slices.iter().map(|s| (s.category, s.total)).collect();
    assert_eq!(
        totals,
        vec![
            (ExpenseCategory::Food, 262.25),
            (ExpenseCategory::Entertainment, 100.0),
            (ExpenseCategory::Bills, 300.0),
            (ExpenseCategory::Savings, 200.0),
        ]
    );

    let only_food = pie_slices(&[Expense::new("Food", 10.0)]);
    assert_eq!(only_food.len(), 1);
}

#[test]
fn stock_change_uses_first_and_last_points() {
    let prices = [150.25, 151.30, 149.80, 152.10, 151.75];
    let expected = (151.75 - 150.25) / 150.25 * 100.0;
    assert!((stock_change(&prices) - expected).abs() < 1e-12);
}

#[test]
fn invalid_amounts_never_reach_the_backend() {
    let transport = ScriptedTransport::new();
    let client = transport.client(FallbackMode::Demo);
    let mut view = ExpensesView::from_parts(Vec::new(), DataSource::Remote);

    for raw in ["-5", ""] {
        let err = view
            .add(&client, &ExpenseForm::new("Food", raw))
            .unwrap_err();
        assert!(matches!(err, ViewError::Validation(ref errors) if errors.amount.is_some()));
    }

    assert!(transport.requests().is_empty());
    assert!(view.expenses().is_empty());
}

#[test]
fn failed_expense_create_keeps_the_optimistic_entry() {
    let transport = ScriptedTransport::new().fail();
    let client = transport.client(FallbackMode::Demo);
    let mut view = ExpensesView::from_parts(vec![Expense::new("Bills", 80.0)], DataSource::Remote);

    let outcome = view
        .add(&client, &ExpenseForm::new("food", "42.5"))
        .expect("valid form");

    assert!(matches!(outcome, AddOutcome::LocalOnly(_)));
    assert_eq!(
        view.expenses(),
        &[Expense::new("Bills", 80.0), Expense::new("Food", 42.5)]
    );
    assert_eq!(
        view.general_error(),
        Some("Failed to add expense. Please try again.")
    );
    assert_eq!(view.success_message(), None);
    assert_eq!(transport.requests()[0].to_string(), "POST /expenses/");
}

#[test]
fn successful_expense_create_reports_success() {
    let transport = ScriptedTransport::new().respond(200, r#"{"status":"ok"}"#);
    let client = transport.client(FallbackMode::Strict);
    let mut view = ExpensesView::from_parts(Vec::new(), DataSource::Remote);

    let outcome = view.add(&client, &ExpenseForm::new("Savings", "100")).unwrap();
    assert!(matches!(outcome, AddOutcome::Synced));
    assert_eq!(view.success_message(), Some("Expense added successfully!"));
    assert_eq!(view.general_error(), None);
}

#[test]
fn budget_save_failure_keeps_draft_and_old_values() {
    let transport = ScriptedTransport::new()
        .respond(200, BUDGETS)
        .respond(500, "nope")
        .respond(200, r#"{"status":"ok"}"#);
    let client = transport.client(FallbackMode::Strict);
    let mut view = BudgetView::load(&client).unwrap();

    view.begin_edit("Food").unwrap();
    view.set_total_budget("650").unwrap();
    view.set_spent("not a number").unwrap();

    let err = view.save(&client).unwrap_err();
    assert!(matches!(err, ViewError::Client(_)));
    assert_eq!(view.budgets()[0], Budget::new("Food", 500.0, 250.0));
    assert!(view.edit_state().is_editing("Food"));

    let saved = view.save(&client).unwrap();
    assert_eq!(saved, Budget::new("Food", 650.0, 250.0));
    assert_eq!(view.budgets()[0], saved);
    assert_eq!(view.edit_state(), &EditState::Viewing);

    let put = &transport.requests()[2];
    assert_eq!(put.to_string(), "PUT /budget/Food");
}

#[test]
fn empty_budget_fields_keep_their_current_values() {
    let transport = ScriptedTransport::new()
        .respond(200, BUDGETS)
        .respond(200, r#"{"status":"ok"}"#);
    let client = transport.client(FallbackMode::Strict);
    let mut view = BudgetView::load(&client).unwrap();

    view.begin_edit("Food").unwrap();
    view.set_total_budget("").unwrap();
    view.set_spent("300").unwrap();

    let saved = view.save(&client).unwrap();
    assert_eq!(saved, Budget::new("Food", 500.0, 300.0));
    assert_eq!(view.budgets()[0], saved);
    assert_eq!(
        transport.requests()[1].body,
        Some(serde_json::json!({ "category": "Food", "total_budget": 500.0, "spent": 300.0 }))
    );
}

#[test]
fn budget_cancel_discards_without_a_request() {
    let transport = ScriptedTransport::new().respond(200, BUDGETS);
    let client = transport.client(FallbackMode::Strict);
    let mut view = BudgetView::load(&client).unwrap();

    view.begin_edit("Bills").unwrap();
    view.set_spent("10").unwrap();
    assert!(view.cancel());
    assert!(!view.cancel());
    assert!(matches!(view.set_spent("5"), Err(ViewError::NotEditing)));
    assert!(matches!(view.save(&client), Err(ViewError::NotEditing)));
    assert!(matches!(
        view.begin_edit("Travel"),
        Err(ViewError::UnknownCategory(_))
    ));
    assert_eq!(view.budgets()[1], Budget::new("Bills", 200.0, 300.0));
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn what_if_run_requires_pending_changes() {
    let transport = ScriptedTransport::new()
        .respond(200, BUDGETS)
        .respond(200, r#"[{"category":"Food","total_budget":550.0,"spent":250.0}]"#);
    let client = transport.client(FallbackMode::Strict);
    let mut view = WhatIfView::load(&client).unwrap();

    assert!(matches!(view.run(&client), Err(ViewError::NoPendingChanges)));

    view.set_adjustment("Food", "50").unwrap();
    assert_eq!(view.run(&client).unwrap(), DataSource::Remote);
    assert!(!view.has_changes());

    let rows = view.comparison();
    assert_eq!(rows[0].adjusted_total, 550.0);
    assert_eq!(rows[0].change, 50.0);
    assert_eq!(rows[0].remaining, 300.0);
    // Bills is missing from the scenario result, so it keeps its total.
    assert_eq!(rows[1].adjusted_total, 200.0);
    assert_eq!(rows[1].change, 0.0);
}

#[test]
fn strict_what_if_failure_keeps_pending_changes() {
    let transport = ScriptedTransport::new().respond(200, BUDGETS).fail();
    let client = transport.client(FallbackMode::Strict);
    let mut view = WhatIfView::load(&client).unwrap();

    view.set_adjustment("Bills", "25").unwrap();
    assert!(matches!(view.run(&client), Err(ViewError::Client(_))));
    assert!(view.has_changes());
    assert_eq!(view.adjusted(), view.original());
}

#[test]
fn dashboard_combines_both_fetches() {
    let transport = ScriptedTransport::new();
    let client = transport.client(FallbackMode::Demo);

    let view = DashboardView::load(&client).unwrap();
    assert!(view.uses_fallback());
    assert_eq!(view.totals().remaining(), 600.0);
    assert_eq!(view.predicted_savings(), 600.0);

    let mut paths: Vec<_> = transport.requests().iter().map(|r| r.path()).collect();
    paths.sort();
    assert_eq!(paths, vec!["/budget/", "/forecast/"]);
}

#[test]
fn dashboard_propagates_strict_failures() {
    let client = ScriptedTransport::new().client(FallbackMode::Strict);
    assert!(DashboardView::load(&client).is_err());
}

#[test]
fn chat_session_records_both_sides() {
    let transport = ScriptedTransport::new()
        .respond(200, r#"{"reply":"Spend less on food."}"#)
        .fail();
    let client = transport.client(FallbackMode::Strict);
    let mut session = ChatSession::new();

    assert!(session.send(&client, "   ").is_none());
    assert!(transport.requests().is_empty());

    let reply = session.send(&client, "How can I save more money?").unwrap();
    assert_eq!(reply.text, "Spend less on food.");
    assert!(!reply.is_user);

    let reply = session.send(&client, "And then?").unwrap();
    assert_eq!(reply.text, SEND_FAILURE_MESSAGE);

    let texts: Vec<_> = session.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "How can I save more money?",
            "Spend less on food.",
            "And then?",
            SEND_FAILURE_MESSAGE,
        ]
    );
    assert_ne!(session.messages()[0].id, session.messages()[1].id);

    session.clear();
    assert!(session.messages().is_empty());
}
