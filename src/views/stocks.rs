use super::aggregates::{market_summary, stock_quote, MarketSummary, StockQuote};
use crate::{
    client::{ApiClient, DataSource},
    domain::StockSeries,
    errors::ClientResult,
};

/// Read-only market overview.
#[derive(Debug, Clone)]
pub struct StocksView {
    series: StockSeries,
    source: DataSource,
}

impl StocksView {
    pub fn load(client: &ApiClient) -> ClientResult<Self> {
        let fetched = client.list_stocks()?;
        Ok(Self::from_parts(fetched.data, fetched.source))
    }

    pub fn from_parts(series: StockSeries, source: DataSource) -> Self {
        Self { series, source }
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn quotes(&self) -> Vec<StockQuote> {
        self.series
            .iter()
            .map(|(ticker, prices)| stock_quote(ticker, prices))
            .collect()
    }

    pub fn summary(&self) -> MarketSummary {
        market_summary(&self.quotes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fallback;

    #[test]
    fn quotes_cover_every_ticker_in_order() {
        let view = StocksView::from_parts(fallback::stocks(), DataSource::Fallback);
        let tickers: Vec<_> = view.quotes().into_iter().map(|q| q.ticker).collect();
        assert_eq!(tickers, ["AAPL", "AMZN", "GOOGL", "MSFT", "TSLA"]);
        assert_eq!(view.summary().tracked, 5);
    }
}
