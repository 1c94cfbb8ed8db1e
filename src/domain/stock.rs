use std::collections::BTreeMap;

/// Closing prices per ticker, oldest first.
pub type StockSeries = BTreeMap<String, Vec<f64>>;
