//! Time-bounded memoization of upstream price history.
//!
//! The upstream source is rate limited, so every query goes through this
//! cache: a `(ticker, window)`-keyed map of fetched series, each valid for
//! a fixed TTL. Entries are replaced wholesale on refresh and never edited
//! in place; expired entries are simply overwritten by the next fetch.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use price_feed::{
    models::series::PriceSeries,
    providers::{PriceSource, errors::SourceError},
};
use tokio::sync::RwLock;

/// Different window lengths are distinct keys; a 50-minute series is never
/// carved out of a cached 60-minute one.
type CacheKey = (String, u32);

struct CacheEntry {
    series: PriceSeries,
    fetched_at: Instant,
}

impl CacheEntry {
    fn is_valid(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Shared cache of upstream price series.
///
/// Concurrent callers for the same key may both miss and both fetch; the
/// later insert wins. Both fetches carry equivalent data, so this is
/// tolerated rather than prevented — there is no single-flight collapse.
pub struct SampleCache {
    source: Arc<dyn PriceSource>,
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl SampleCache {
    pub fn new(source: Arc<dyn PriceSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the series for `(ticker, window_minutes)`, fetching from the
    /// upstream source when no valid entry exists.
    ///
    /// Upstream failures propagate unchanged; an expired entry is never
    /// served as a stale fallback for a failed refresh.
    pub async fn get(&self, ticker: &str, window_minutes: u32) -> Result<PriceSeries, SourceError> {
        let key = (ticker.to_string(), window_minutes);

        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&key) {
                if entry.is_valid(self.ttl) {
                    return Ok(entry.series.clone());
                }
            }
        }

        // Awaited outside the lock so a slow upstream call does not stall
        // unrelated keys.
        tracing::debug!(ticker, window_minutes, "cache miss, fetching upstream");
        let points = self.source.price_history(ticker, window_minutes).await?;
        let series = PriceSeries {
            ticker: ticker.to_string(),
            window_minutes,
            points,
        };

        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                series: series.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(series)
    }
}
