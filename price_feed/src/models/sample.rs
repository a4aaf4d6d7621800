//! Canonical in-memory representation of a single price observation.
//!
//! This struct is the standard output for all [`PriceSource`](crate::providers::PriceSource)
//! implementations, regardless of the upstream vendor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observed price for a ticker at a point in time.
///
/// Field names map directly onto the upstream wire format
/// (`{"price": ..., "lastUpdatedAt": ...}`), so the same struct is used
/// both when parsing upstream responses and when echoing history back to
/// callers. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observed price. Upstream guarantees non-negative values.
    pub price: f64,

    /// The moment the price was observed (UTC).
    #[serde(rename = "lastUpdatedAt")]
    pub last_updated_at: DateTime<Utc>,
}
