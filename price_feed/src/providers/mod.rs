//! Source abstraction for upstream price-history vendors.
//!
//! This module defines the [`PriceSource`] trait, a unified interface for
//! fetching trailing-window price history from any upstream vendor.
//!
//! Each concrete source implementation (such as the evaluation exchange
//! REST API) should implement [`PriceSource`] to handle vendor-specific
//! endpoints, auth, and response shapes.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn PriceSource`) so the serving layer can be wired against a mock in
//! tests.

pub mod errors;
pub mod exchange_rest;

use async_trait::async_trait;

use crate::{models::sample::PricePoint, providers::errors::SourceError};

/// Trait for fetching price history from an upstream vendor.
///
/// Implement this trait for each concrete vendor. One instance is expected
/// to be shared across concurrent callers, so implementations must be
/// `Send + Sync` and take `&self`.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetches the price history for `ticker` over the trailing
    /// `window_minutes` window.
    ///
    /// Returns the points in whatever order the vendor produced them.
    async fn price_history(
        &self,
        ticker: &str,
        window_minutes: u32,
    ) -> Result<Vec<PricePoint>, SourceError>;

    /// Fetches the vendor's raw ticker-list payload, passed through
    /// untouched.
    async fn list_tickers(&self) -> Result<serde_json::Value, SourceError>;
}
