use crate::measure::BufferSize;

/// Default [`BufferSize`]
///
/// This is the buffer that is assumed when a caller does not provide one.
/// It matches the buffering of the reference deployment (143µs).
///
/// ```
/// # use netoptic_core::defaults::*;
/// assert_eq!(
///     DEFAULT_BUFFER_SIZE.to_string(),
///     "143µs"
/// );
/// ```
///
pub const DEFAULT_BUFFER_SIZE: BufferSize = BufferSize::unchecked(143.0);

/// Largest buffer, in microseconds, accepted by [`BufferSize::new`].
///
/// Both estimators are calibrated against this value: at `500µs` the
/// headroom drops to its floor and the buffer efficiency reaches
/// [`MAX_BUFFER_EFFICIENCY`].
pub const MAX_BUFFER_US: f64 = 500.0;

/// Default unit cost, in currency units per Gbps, used for financial
/// projections when none is given.
pub const BASE_COST_PER_GBPS: f64 = 1_200.0;

/// Number of samples produced by one traffic run: one per hour of a
/// synthetic day.
pub const HOURS: usize = 24;

/// Base load, in Gbps, of the `L-NYC-01` link.
pub const NYC_BASE_LOAD_GBPS: f64 = 40.0;

/// Base load, in Gbps, of the `L-CHI-02` link.
pub const CHI_BASE_LOAD_GBPS: f64 = 30.0;

/// Base load, in Gbps, for any link that has no dedicated entry in the
/// [`LinkCatalog`](crate::link::LinkCatalog).
pub const DEFAULT_BASE_LOAD_GBPS: f64 = 25.0;

/// Upper bound of the uniform noise added to each traffic sample, before
/// smoothing.
pub const NOISE_AMPLITUDE_GBPS: f64 = 10.0;

/// Headroom provisioned on top of the actual load when the link has a full
/// ([`MAX_BUFFER_US`]) buffer. An empty buffer doubles it.
pub const BASE_HEADROOM_GBPS: f64 = 20.0;

/// Buffer size at which the noise smoothing factor reaches `0`.
pub const SMOOTHING_SPAN_US: f64 = 1_000.0;

/// Headroom assumed on top of the peak when computing utilisation.
pub const UTILIZATION_HEADROOM_GBPS: f64 = 20.0;

/// Number of cells attached to each link.
pub const CELLS_PER_LINK: u32 = 8;

/// Number of cells in the default topology.
pub const DEFAULT_CELLS: usize = 24;

/// Upper bound on the number of cells accepted on the command line.
pub const MAX_CELLS: usize = 10_000;

/// Fraction of raw capacity that is usable without any buffering.
pub const BASELINE_BUFFER_EFFICIENCY: f64 = 0.6;

/// Fraction of raw capacity that is usable with a [`MAX_BUFFER_US`] buffer.
pub const MAX_BUFFER_EFFICIENCY: f64 = 0.95;

/// Aggregate demand, in Gbps, across all links of the deployment.
pub const AGGREGATE_TRAFFIC_GBPS: f64 = 450.0;

/// Share of the total savings that is booked as capital expenditure
/// reduction.
pub const CAPEX_RATIO: f64 = 0.7;
