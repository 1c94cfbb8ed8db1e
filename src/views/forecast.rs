use super::aggregates::{outlook, total_predicted_savings, Outlook};
use crate::{
    client::{ApiClient, DataSource},
    domain::Forecast,
    errors::ClientResult,
};

/// Predicted savings per category, in key order.
#[derive(Debug, Clone)]
pub struct ForecastView {
    forecast: Forecast,
    source: DataSource,
}

impl ForecastView {
    pub fn load(client: &ApiClient) -> ClientResult<Self> {
        let fetched = client.get_forecast()?;
        Ok(Self::from_parts(fetched.data, fetched.source))
    }

    pub fn from_parts(forecast: Forecast, source: DataSource) -> Self {
        Self { forecast, source }
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, f64, Outlook)> {
        self.forecast
            .iter()
            .map(|(category, savings)| (category.as_str(), *savings, outlook(*savings)))
    }

    pub fn total(&self) -> f64 {
        total_predicted_savings(&self.forecast)
    }
}
