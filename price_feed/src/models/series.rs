//! A collection of price observations for a single ticker and window.

use crate::models::sample::PricePoint;

/// Represents a complete set of price observations for one ticker over one
/// requested trailing window.
///
/// The upstream source does not guarantee any ordering of `points`;
/// consumers that care about time order must sort a copy before use. A
/// series is never mutated after construction — a fresh fetch produces a
/// replacement, not an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    /// The ticker this series belongs to (e.g. "AAPL").
    pub ticker: String,
    /// The trailing window, in minutes, the points were requested over.
    pub window_minutes: u32,
    /// The observed price points, in upstream order.
    pub points: Vec<PricePoint>,
}
