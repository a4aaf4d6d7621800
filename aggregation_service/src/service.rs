//! Query orchestration: cache lookup, validation, and dispatch to the
//! numeric kernels.
//!
//! `QueryService` is the only component the HTTP layer talks to. It owns
//! no global state — the cache and the upstream source are injected at
//! construction, which keeps the whole pipeline testable against a mock
//! source.

use std::sync::Arc;

use indexmap::IndexMap;
use price_feed::models::sample::PricePoint;
use price_feed::providers::PriceSource;
use serde::Serialize;

use crate::align::align;
use crate::cache::SampleCache;
use crate::error::ServiceError;
use crate::stats::{average, pearson};

/// Result of a single-ticker average query.
#[derive(Debug, Serialize)]
pub struct AverageResponse {
    #[serde(rename = "averageStockPrice")]
    pub average_stock_price: f64,
    #[serde(rename = "priceHistory")]
    pub price_history: Vec<PricePoint>,
}

/// Per-ticker portion of a correlation response.
#[derive(Debug, Serialize)]
pub struct TickerSummary {
    #[serde(rename = "averagePrice")]
    pub average_price: f64,
    #[serde(rename = "priceHistory")]
    pub price_history: Vec<PricePoint>,
}

/// Result of a pairwise correlation query. `stocks` preserves the order
/// the tickers were requested in.
#[derive(Debug, Serialize)]
pub struct CorrelationResponse {
    pub correlation: f64,
    pub stocks: IndexMap<String, TickerSummary>,
}

/// Rounds to `places` decimal places. Presentation only — internal
/// computation stays unrounded.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub struct QueryService {
    cache: SampleCache,
    source: Arc<dyn PriceSource>,
}

impl QueryService {
    pub fn new(cache: SampleCache, source: Arc<dyn PriceSource>) -> Self {
        Self { cache, source }
    }

    /// Raw upstream ticker-list payload, passed through untouched.
    pub async fn list_stocks(&self) -> Result<serde_json::Value, ServiceError> {
        Ok(self.source.list_tickers().await?)
    }

    /// Average price of `ticker` over the trailing `minutes` window.
    pub async fn average_price(
        &self,
        ticker: &str,
        minutes: Option<u32>,
    ) -> Result<AverageResponse, ServiceError> {
        let minutes = minutes.ok_or_else(|| {
            ServiceError::Validation("Missing required parameter: minutes".to_string())
        })?;

        let series = self.cache.get(ticker, minutes).await?;
        if series.points.is_empty() {
            return Err(ServiceError::NotFound(
                "No data found for the specified ticker and time range".to_string(),
            ));
        }

        Ok(AverageResponse {
            average_stock_price: round_to(average(&series.points), 6),
            price_history: series.points,
        })
    }

    /// Pearson correlation between exactly two tickers over the trailing
    /// `minutes` window.
    ///
    /// Both series resolve through the cache independently, so either may
    /// trigger its own upstream fetch; a failure on either side fails the
    /// whole request — there is no partial result.
    pub async fn correlation(
        &self,
        tickers: &[String],
        minutes: Option<u32>,
    ) -> Result<CorrelationResponse, ServiceError> {
        let minutes = minutes.ok_or_else(|| {
            ServiceError::Validation("Missing required parameter: minutes".to_string())
        })?;

        let [ticker_a, ticker_b] = tickers else {
            return Err(ServiceError::Validation(
                "Exactly two ticker parameters are required".to_string(),
            ));
        };

        let (series_a, series_b) = tokio::join!(
            self.cache.get(ticker_a, minutes),
            self.cache.get(ticker_b, minutes),
        );
        let (series_a, series_b) = (series_a?, series_b?);

        if series_a.points.is_empty() || series_b.points.is_empty() {
            return Err(ServiceError::NotFound(
                "Insufficient data for correlation calculation".to_string(),
            ));
        }

        let (values_a, values_b) = align(&series_a.points, &series_b.points);
        if values_a.len() < 2 {
            return Err(ServiceError::Validation(
                "Insufficient aligned data points for correlation calculation".to_string(),
            ));
        }

        let coefficient = pearson(&values_a, &values_b);

        let mut stocks = IndexMap::new();
        stocks.insert(
            ticker_a.clone(),
            TickerSummary {
                average_price: round_to(average(&series_a.points), 6),
                price_history: series_a.points,
            },
        );
        stocks.insert(
            ticker_b.clone(),
            TickerSummary {
                average_price: round_to(average(&series_b.points), 6),
                price_history: series_b.points,
            },
        );

        Ok(CorrelationResponse {
            correlation: round_to(coefficient, 4),
            stocks,
        })
    }
}
