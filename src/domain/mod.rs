//! Wire-level entities exchanged with the SmartSaver backend.

pub mod budget;
pub mod chat;
pub mod common;
pub mod expense;
pub mod forecast;
pub mod stock;

pub use budget::{Budget, WhatIfAdjustments, WhatIfRequest};
pub use chat::{ChatMessage, ChatReply, ChatRequest};
pub use common::Categorized;
pub use expense::{Expense, ExpenseCategory};
pub use forecast::Forecast;
pub use stock::StockSeries;
