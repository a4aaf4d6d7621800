use serde::Deserialize;

use crate::models::sample::PricePoint;

/// Wire shape of the exchange's price-history endpoint.
///
/// With a `minutes` query the endpoint answers with a bare array of
/// observations; without one it answers with the latest observation alone,
/// wrapped in a `stock` object. Both shapes are accepted and normalized to
/// a flat point list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HistoryResponse {
    Points(Vec<PricePoint>),
    Latest { stock: PricePoint },
}

impl HistoryResponse {
    pub fn into_points(self) -> Vec<PricePoint> {
        match self {
            Self::Points(points) => points,
            Self::Latest { stock } => vec![stock],
        }
    }
}
