//! Summary statistics over one traffic run.
//!
//! [`LinkStats`] is produced by
//! [`TrafficModel::simulate`](crate::traffic::TrafficModel::simulate).

use crate::link::LinkId;
use serde::Serialize;

/// Summary of the load of a single link over one run.
///
/// All loads are in Gbps, rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    /// The link identifier, echoed from the input.
    pub id: LinkId,
    /// Display name; identical to `id`.
    pub name: String,
    /// Value at index `floor(n * 0.99)` of the sorted samples.
    ///
    /// With 24 samples this is the maximum, see [`percentile_by_index`].
    pub p99: f64,
    /// Value at index `floor(n * 0.95)` of the sorted samples.
    ///
    /// With 24 samples this is the second largest value.
    pub p95: f64,
    pub avg: f64,
    pub peak: f64,
    /// Mean load over headroom-adjusted peak, in percent, 1 decimal place.
    pub utilization: f64,
    /// Number of cells aggregated by the link. Descriptive only.
    pub cell_count: u32,
}

impl LinkStats {
    /// Summarise `samples` for the link `id`.
    ///
    /// `utilization_headroom` is added to the peak before dividing the
    /// mean by it, which also keeps the division defined for an all-zero
    /// series. An empty series yields all-zero statistics.
    pub fn from_samples(
        id: LinkId,
        samples: &[f64],
        utilization_headroom: f64,
        cell_count: u32,
    ) -> Self {
        let name = id.to_string();
        if samples.is_empty() {
            return Self {
                id,
                name,
                p99: 0.0,
                p95: 0.0,
                avg: 0.0,
                peak: 0.0,
                utilization: 0.0,
                cell_count,
            };
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let total: f64 = samples.iter().sum();
        let avg = total / samples.len() as f64;
        let peak = sorted[sorted.len() - 1];

        Self {
            id,
            name,
            p99: round_to(percentile_by_index(&sorted, 0.99), 2),
            p95: round_to(percentile_by_index(&sorted, 0.95), 2),
            avg: round_to(avg, 2),
            peak: round_to(peak, 2),
            utilization: round_to(avg / (peak + utilization_headroom) * 100.0, 1),
            cell_count,
        }
    }
}

/// Percentile by fixed index: `sorted[floor(n * q)]`.
///
/// This is not an interpolating percentile. On small series the high
/// percentiles collapse onto the largest values: with 24 samples `q = 0.99`
/// selects index 23 (the maximum) and `q = 0.95` selects index 22. The
/// index is saturated at `n - 1` so `q = 1.0` selects the maximum.
///
/// `sorted` must be sorted ascending.
///
/// # Panics
///
/// Panics if `sorted` is empty.
///
/// ```
/// # use netoptic_core::stats::percentile_by_index;
/// let sorted: Vec<f64> = (1..=24).map(f64::from).collect();
/// assert_eq!(percentile_by_index(&sorted, 0.99), 24.0);
/// assert_eq!(percentile_by_index(&sorted, 0.95), 23.0);
/// assert_eq!(percentile_by_index(&sorted, 0.5), 13.0);
/// ```
pub fn percentile_by_index(sorted: &[f64], q: f64) -> f64 {
    let index = (sorted.len() as f64 * q).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// Round half away from zero to `decimals` decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
