//! Timestamp alignment of two independently-sampled price series.
//!
//! The upstream samples each ticker on its own clock, so correlating two
//! series first requires pairing up observations that represent the same
//! moment. The pairing policy here is deliberately simple and must stay
//! exactly as-is: downstream correlation values depend on it.

use chrono::TimeDelta;
use price_feed::models::sample::PricePoint;

/// Maximum timestamp gap (inclusive) for two observations to count as the
/// same moment.
const MAX_PAIR_GAP_MINUTES: i64 = 5;

/// Reconciles two series into equal-length, index-paired value sequences.
///
/// Both inputs are sorted ascending by timestamp on a copy (cached series
/// are never mutated). For each sorted A-point, every B-point is scanned
/// and the one with the minimum absolute timestamp difference wins; the
/// strict `<` comparison means the first-encountered B-point keeps ties.
/// The pair is emitted only when that minimum gap is at most 5 minutes,
/// otherwise the A-point is dropped — no forward-fill or interpolation.
/// One B-point may serve several A-points.
///
/// Output order follows A's sorted order. Either input being empty yields
/// empty output. O(n·m), fine at a few minutes of per-ticker samples.
pub fn align(a: &[PricePoint], b: &[PricePoint]) -> (Vec<f64>, Vec<f64>) {
    if a.is_empty() || b.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut sorted_a = a.to_vec();
    let mut sorted_b = b.to_vec();
    sorted_a.sort_by_key(|p| p.last_updated_at);
    sorted_b.sort_by_key(|p| p.last_updated_at);

    let max_gap = TimeDelta::minutes(MAX_PAIR_GAP_MINUTES);
    let mut values_a = Vec::new();
    let mut values_b = Vec::new();

    for point_a in &sorted_a {
        let mut closest = &sorted_b[0];
        let mut min_gap = (sorted_b[0].last_updated_at - point_a.last_updated_at).abs();

        for point_b in &sorted_b[1..] {
            let gap = (point_b.last_updated_at - point_a.last_updated_at).abs();
            if gap < min_gap {
                min_gap = gap;
                closest = point_b;
            }
        }

        if min_gap <= max_gap {
            values_a.push(point_a.price);
            values_b.push(closest.price);
        }
    }

    (values_a, values_b)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn at(offset_secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + offset_secs, 0).unwrap()
    }

    fn point(price: f64, offset_secs: i64) -> PricePoint {
        PricePoint {
            price,
            last_updated_at: at(offset_secs),
        }
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        let series = vec![point(100.0, 0)];
        assert_eq!(align(&[], &series), (vec![], vec![]));
        assert_eq!(align(&series, &[]), (vec![], vec![]));
        assert_eq!(align(&[], &[]), (vec![], vec![]));
    }

    #[test]
    fn matching_timestamps_pair_in_order() {
        let a = vec![point(100.0, 0), point(110.0, 60), point(120.0, 120)];
        let b = vec![point(50.0, 0), point(55.0, 60), point(60.0, 120)];
        let (va, vb) = align(&a, &b);
        assert_eq!(va, vec![100.0, 110.0, 120.0]);
        assert_eq!(vb, vec![50.0, 55.0, 60.0]);
    }

    #[test]
    fn unsorted_input_is_sorted_before_pairing() {
        let a = vec![point(120.0, 120), point(100.0, 0), point(110.0, 60)];
        let b = vec![point(55.0, 60), point(60.0, 120), point(50.0, 0)];
        let (va, vb) = align(&a, &b);
        assert_eq!(va, vec![100.0, 110.0, 120.0]);
        assert_eq!(vb, vec![50.0, 55.0, 60.0]);
    }

    #[test]
    fn gap_over_five_minutes_drops_the_point() {
        // B sits 300s from the first A-point (kept) and 301s from the
        // second (dropped).
        let a = vec![point(100.0, 0), point(110.0, 601)];
        let b = vec![point(50.0, 300)];
        let (va, vb) = align(&a, &b);
        assert_eq!(va, vec![100.0]);
        assert_eq!(vb, vec![50.0]);
    }

    #[test]
    fn gap_of_exactly_five_minutes_is_kept() {
        let a = vec![point(100.0, 0)];
        let b = vec![point(50.0, 300)];
        let (va, vb) = align(&a, &b);
        assert_eq!(va, vec![100.0]);
        assert_eq!(vb, vec![50.0]);
    }

    #[test]
    fn tie_goes_to_first_encountered_candidate() {
        // Two B-points equally distant (60s) from the A-point; the earlier
        // one in sorted scan order must win.
        let a = vec![point(100.0, 60)];
        let b = vec![point(1.0, 0), point(2.0, 120)];
        let (_, vb) = align(&a, &b);
        assert_eq!(vb, vec![1.0]);
    }

    #[test]
    fn one_b_point_may_pair_with_many_a_points() {
        let a = vec![point(100.0, 0), point(101.0, 30), point(102.0, 60)];
        let b = vec![point(7.0, 30)];
        let (va, vb) = align(&a, &b);
        assert_eq!(va, vec![100.0, 101.0, 102.0]);
        assert_eq!(vb, vec![7.0, 7.0, 7.0]);
    }

    #[test]
    fn single_element_b_series_is_handled() {
        let a = vec![point(100.0, 0)];
        let b = vec![point(50.0, 10)];
        let (va, vb) = align(&a, &b);
        assert_eq!((va.len(), vb.len()), (1, 1));
    }
}
