//! Savings projected from buffer efficiency.
//!
//! Buffering lets a larger share of the raw capacity carry traffic. The
//! aggregate demand is costed once at the unbuffered efficiency and once at
//! the efficiency of the given buffer; the difference is the saving.

use crate::{defaults, measure::BufferSize};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of [`FinancialModel::estimate`]. Amounts are in the currency of
/// the cost given to the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    /// `baseline_cost - optimized_cost`. Negative when the buffer is less
    /// efficient than no buffer, which only happens for out of range
    /// buffers or a negative cost.
    pub total_savings: f64,
    /// A fixed share of `total_savings`, see [`FinancialModel::capex_ratio`].
    pub capex_reduction: f64,
    /// Relative efficiency improvement over the baseline, in percent.
    pub efficiency_gain: f64,
    /// Cost of serving the aggregate demand without buffering.
    pub baseline_cost: f64,
    /// Cost of serving the aggregate demand with the given buffer.
    pub optimized_cost: f64,
}

/// Parameters of the financial model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialModel {
    /// Usable share of raw capacity without buffering.
    pub baseline_efficiency: f64,
    /// Usable share of raw capacity at `reference_buffer_us`.
    pub max_efficiency: f64,
    /// Buffer at which `max_efficiency` is reached. The efficiency is
    /// interpolated linearly from `0`, and extrapolated beyond.
    pub reference_buffer_us: f64,
    /// Aggregate demand across all links, in Gbps.
    pub aggregate_traffic_gbps: f64,
    /// Share of the savings booked as capex reduction.
    pub capex_ratio: f64,
}

impl Default for FinancialModel {
    fn default() -> Self {
        Self {
            baseline_efficiency: defaults::BASELINE_BUFFER_EFFICIENCY,
            max_efficiency: defaults::MAX_BUFFER_EFFICIENCY,
            reference_buffer_us: defaults::MAX_BUFFER_US,
            aggregate_traffic_gbps: defaults::AGGREGATE_TRAFFIC_GBPS,
            capex_ratio: defaults::CAPEX_RATIO,
        }
    }
}

impl FinancialModel {
    /// Usable share of raw capacity with `buffer`.
    ///
    /// ```
    /// # use netoptic_core::{financials::FinancialModel, measure::BufferSize};
    /// let model = FinancialModel::default();
    /// assert_eq!(model.current_efficiency(BufferSize::ZERO), 0.6);
    /// assert!((model.current_efficiency(BufferSize::MAX) - 0.95).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn current_efficiency(&self, buffer: BufferSize) -> f64 {
        self.baseline_efficiency
            + (buffer.micros() / self.reference_buffer_us)
                * (self.max_efficiency - self.baseline_efficiency)
    }

    /// Project the savings of running with `buffer` at `cost_per_gbps`.
    ///
    /// The cost only scales the result: a zero cost yields zero savings, a
    /// negative cost flips their sign.
    ///
    /// ```
    /// # use netoptic_core::{financials::FinancialModel, measure::BufferSize};
    /// let financials = FinancialModel::default()
    ///     .estimate(BufferSize::new(250.0).unwrap(), 1_000.0);
    ///
    /// assert!((financials.baseline_cost - 750_000.0).abs() < 1e-6);
    /// assert!((financials.total_savings - 169_354.84).abs() < 0.01);
    /// assert!((financials.efficiency_gain - 29.17).abs() < 0.01);
    /// ```
    pub fn estimate(&self, buffer: BufferSize, cost_per_gbps: f64) -> Financials {
        let current_efficiency = self.current_efficiency(buffer);

        let baseline_cost = (self.aggregate_traffic_gbps / self.baseline_efficiency) * cost_per_gbps;
        let optimized_cost = (self.aggregate_traffic_gbps / current_efficiency) * cost_per_gbps;
        let total_savings = baseline_cost - optimized_cost;

        debug!(%buffer, cost_per_gbps, total_savings, "estimated financials");

        Financials {
            total_savings,
            capex_reduction: total_savings * self.capex_ratio,
            efficiency_gain: (current_efficiency - self.baseline_efficiency)
                / self.baseline_efficiency
                * 100.0,
            baseline_cost,
            optimized_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(micros: f64, cost: f64) -> Financials {
        FinancialModel::default().estimate(BufferSize::unchecked(micros), cost)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn reference_example() {
        let financials = estimate(250.0, 1_000.0);

        assert_close(financials.baseline_cost, 750_000.0);
        assert_close(financials.optimized_cost, 580_645.16);
        assert_close(financials.total_savings, 169_354.84);
        assert_close(financials.capex_reduction, 118_548.39);
        assert_close(financials.efficiency_gain, 29.17);
    }

    #[test]
    fn no_buffer_no_gain() {
        let financials = estimate(0.0, 1_200.0);

        assert_eq!(financials.efficiency_gain, 0.0);
        assert_eq!(financials.total_savings, 0.0);
        assert_eq!(financials.capex_reduction, 0.0);
    }

    #[test]
    fn full_buffer_gain() {
        let financials = estimate(500.0, 1_200.0);
        assert!((financials.efficiency_gain - (0.95 - 0.6) / 0.6 * 100.0).abs() < 1e-9);
        assert_close(financials.efficiency_gain, 58.33);
    }

    #[test]
    fn linear_in_cost() {
        for micros in [50.0, 143.0, 250.0, 500.0] {
            let single = estimate(micros, 1_000.0);
            let double = estimate(micros, 2_000.0);

            assert!((double.total_savings - 2.0 * single.total_savings).abs() < 1e-6);
            assert!((double.capex_reduction - 2.0 * single.capex_reduction).abs() < 1e-6);
            assert_eq!(double.efficiency_gain, single.efficiency_gain);
        }
    }

    #[test]
    fn capex_is_fixed_share() {
        let financials = estimate(143.0, 5_000.0);
        assert!((financials.capex_reduction - 0.7 * financials.total_savings).abs() < 1e-9);
    }

    #[test]
    fn zero_cost() {
        let financials = estimate(250.0, 0.0);

        assert_eq!(financials.total_savings, 0.0);
        assert_close(financials.efficiency_gain, 29.17);
    }

    #[test]
    fn negative_cost_flips_sign() {
        assert!(estimate(250.0, -1_000.0).total_savings < 0.0);
        assert!(estimate(250.0, -1_000.0).capex_reduction < 0.0);
    }

    #[test]
    fn negative_buffer_costs_money() {
        let financials = estimate(-100.0, 1_000.0);

        assert!(financials.total_savings < 0.0);
        assert!(financials.efficiency_gain < 0.0);
    }

    #[test]
    fn savings_grow_with_buffer() {
        let mut previous = f64::NEG_INFINITY;
        for micros in (0..=500).step_by(50) {
            let savings = estimate(micros as f64, 1_200.0).total_savings;
            assert!(savings > previous);
            previous = savings;
        }
    }

    #[test]
    fn serialized_keys() {
        let json = serde_json::to_value(estimate(250.0, 1_000.0)).unwrap();

        assert!(json.get("totalSavings").is_some());
        assert!(json.get("capexReduction").is_some());
        assert!(json.get("efficiencyGain").is_some());
    }
}
