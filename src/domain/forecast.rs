use std::collections::BTreeMap;

/// Predicted savings per category; negative values mean projected overspending.
pub type Forecast = BTreeMap<String, f64>;
