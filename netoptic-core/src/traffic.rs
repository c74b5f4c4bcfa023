//! Synthetic hourly traffic for a single link.
//!
//! A run produces one [`TrafficPoint`] per hour of a synthetic day. The
//! load follows a diurnal curve scaled by the link's base load, plus
//! uniform noise that a larger buffer dampens. Capacity is the load plus a
//! headroom that shrinks as the buffer grows.
//!
//! ```
//! use netoptic_core::{
//!     link::{LinkCatalog, LinkId},
//!     measure::BufferSize,
//!     noise::FixedNoise,
//!     traffic::TrafficModel,
//! };
//!
//! let model = TrafficModel::default();
//! let run = model.simulate(
//!     &LinkCatalog::default(),
//!     &LinkId::from("L-NYC-01"),
//!     BufferSize::MAX,
//!     &mut FixedNoise::new(0.0),
//! );
//!
//! assert_eq!(run.points.len(), 24);
//! assert_eq!(run.points[6].actual, 48.0);
//! assert_eq!(run.points[6].capacity, 68.0);
//! ```

use crate::{
    defaults::{self, HOURS},
    link::{LinkCatalog, LinkClass, LinkId, UnknownLinkError},
    measure::BufferSize,
    noise::NoiseSource,
    stats::{LinkStats, round_to},
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// Hour at which the diurnal curve crosses its offset on the way up.
const DIURNAL_PHASE_HOUR: f64 = 6.0;
/// Added to the sine so the curve stays mostly positive.
const DIURNAL_OFFSET: f64 = 1.2;

/// One hourly sample of a traffic run. Loads are in Gbps, rounded to 2
/// decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficPoint {
    /// Hour label, `"HH:00"`.
    pub time: String,
    pub actual: f64,
    /// `actual` plus the provisioned headroom.
    pub capacity: f64,
    /// Twice the random noise that went into `actual`.
    pub burst: f64,
}

/// Result of [`TrafficModel::simulate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    /// Whether the link was found in the catalog.
    #[serde(skip)]
    pub link_class: LinkClass,
    /// Exactly [`HOURS`] points, hour `0` first.
    pub points: Vec<TrafficPoint>,
    pub stats: LinkStats,
}

/// Parameters of the traffic model.
///
/// The defaults are the values in [`defaults`]. Every field can be
/// overridden from a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficModel {
    /// Upper bound of the undamped noise, in Gbps.
    pub noise_amplitude: f64,
    /// Headroom with a full buffer, in Gbps. An empty buffer doubles it.
    pub base_headroom_gbps: f64,
    /// Buffer size at which the noise is fully damped.
    pub smoothing_span_us: f64,
    /// Buffer size at which the headroom reaches `base_headroom_gbps`.
    pub headroom_span_us: f64,
    /// Added to the peak when computing the utilisation.
    pub utilization_headroom_gbps: f64,
    /// Reported as [`LinkStats::cell_count`].
    pub cell_count: u32,
}

impl Default for TrafficModel {
    fn default() -> Self {
        Self {
            noise_amplitude: defaults::NOISE_AMPLITUDE_GBPS,
            base_headroom_gbps: defaults::BASE_HEADROOM_GBPS,
            smoothing_span_us: defaults::SMOOTHING_SPAN_US,
            headroom_span_us: defaults::MAX_BUFFER_US,
            utilization_headroom_gbps: defaults::UTILIZATION_HEADROOM_GBPS,
            cell_count: defaults::CELLS_PER_LINK,
        }
    }
}

impl TrafficModel {
    /// Damping factor applied to the noise.
    ///
    /// `1` without buffer, `0.5` at `500µs`. Negative past
    /// `smoothing_span_us`.
    #[inline]
    pub fn smoothing(&self, buffer: BufferSize) -> f64 {
        1.0 - buffer.micros() / self.smoothing_span_us
    }

    /// Capacity provisioned on top of the actual load, in Gbps.
    ///
    /// Twice `base_headroom_gbps` without buffer, `base_headroom_gbps` at
    /// `500µs`. Negative past twice `headroom_span_us`.
    #[inline]
    pub fn headroom(&self, buffer: BufferSize) -> f64 {
        self.base_headroom_gbps
            * (1.0 + (self.headroom_span_us - buffer.micros()) / self.headroom_span_us)
    }

    /// Diurnal load multiplier for `hour`, with a period of 24 hours.
    #[inline]
    pub fn time_factor(hour: usize) -> f64 {
        ((hour as f64 - DIURNAL_PHASE_HOUR) * PI / 12.0).sin() + DIURNAL_OFFSET
    }

    /// Run the model for `link`.
    ///
    /// The base load comes from `catalog`. A link without an entry uses the
    /// catalog's default bucket: the run still completes and
    /// [`Simulation::link_class`] reports [`LinkClass::Unknown`].
    ///
    /// `buffer` is used as given; a [`BufferSize::unchecked`] value outside
    /// `[0, 500]µs` produces negative smoothing or headroom rather than an
    /// error.
    pub fn simulate<N>(
        &self,
        catalog: &LinkCatalog,
        link: &LinkId,
        buffer: BufferSize,
        source: &mut N,
    ) -> Simulation
    where
        N: NoiseSource + ?Sized,
    {
        let link_class = catalog.lookup(link);
        if !link_class.is_known() {
            warn!(
                %link,
                base_load = link_class.base_load(),
                "unknown link identifier, using the default base load"
            );
        }
        debug!(%link, %buffer, "simulating traffic");

        let base_load = link_class.base_load();
        let smoothing = self.smoothing(buffer);
        let headroom = self.headroom(buffer);

        let mut points = Vec::with_capacity(HOURS);
        let mut samples = Vec::with_capacity(HOURS);

        for hour in 0..HOURS {
            let noise = source.next_unit() * self.noise_amplitude * smoothing;
            let actual = base_load * Self::time_factor(hour) + noise;
            let capacity = actual + headroom;

            points.push(TrafficPoint {
                time: format!("{hour:02}:00"),
                actual: round_to(actual, 2),
                capacity: round_to(capacity, 2),
                burst: round_to(noise * 2.0, 2),
            });
            samples.push(actual);
        }

        let stats = LinkStats::from_samples(
            link.clone(),
            &samples,
            self.utilization_headroom_gbps,
            self.cell_count,
        );

        Simulation {
            link_class,
            points,
            stats,
        }
    }

    /// Same as [`TrafficModel::simulate`] but refuses links that are not in
    /// `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownLinkError`] if `link` has no entry in `catalog`.
    pub fn simulate_known<N>(
        &self,
        catalog: &LinkCatalog,
        link: &LinkId,
        buffer: BufferSize,
        source: &mut N,
    ) -> Result<Simulation, UnknownLinkError>
    where
        N: NoiseSource + ?Sized,
    {
        if !catalog.contains(link) {
            return Err(UnknownLinkError(link.clone()));
        }
        Ok(self.simulate(catalog, link, buffer, source))
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaChaRng;
    use rand_core::SeedableRng as _;

    use super::*;
    use crate::noise::FixedNoise;

    const NYC: &str = "L-NYC-01";

    fn rng(seed: u64) -> ChaChaRng {
        ChaChaRng::seed_from_u64(seed)
    }

    fn run(link: &str, buffer: BufferSize, noise: &mut impl NoiseSource) -> Simulation {
        TrafficModel::default().simulate(&LinkCatalog::default(), &LinkId::from(link), buffer, noise)
    }

    fn buffer(micros: f64) -> BufferSize {
        BufferSize::new(micros).unwrap()
    }

    #[test]
    fn silent_hour_six() {
        let run = run(NYC, BufferSize::MAX, &mut FixedNoise::new(0.0));
        let point = &run.points[6];

        assert_eq!(TrafficModel::time_factor(6), 1.2);
        assert_eq!(point.time, "06:00");
        assert_eq!(point.actual, 48.0);
        assert_eq!(point.capacity, 68.0);
        assert_eq!(point.burst, 0.0);
    }

    #[test]
    fn always_24_points() {
        for micros in [-1_000.0, -1.0, 0.0, 143.0, 500.0, 501.0, 1e9] {
            let run = run(NYC, BufferSize::unchecked(micros), &mut rng(1));
            assert_eq!(run.points.len(), HOURS, "buffer {micros}");
        }
    }

    #[test]
    fn hour_labels() {
        let run = run("L-CHI-02", buffer(100.0), &mut rng(2));
        let labels: Vec<&str> = run.points.iter().map(|p| p.time.as_str()).collect();

        assert_eq!(labels.first(), Some(&"00:00"));
        assert_eq!(labels[9], "09:00");
        assert_eq!(labels.last(), Some(&"23:00"));
    }

    #[test]
    fn headroom_does_not_depend_on_noise() {
        let a = run(NYC, buffer(250.0), &mut rng(3));
        let b = run(NYC, buffer(250.0), &mut rng(4));
        let expected = TrafficModel::default().headroom(buffer(250.0));

        assert_ne!(a.points, b.points);
        for (pa, pb) in a.points.iter().zip(&b.points) {
            // both values are rounded independently
            assert!((pa.capacity - pa.actual - expected).abs() <= 0.011);
            assert!((pb.capacity - pb.actual - expected).abs() <= 0.011);
        }
    }

    #[test]
    fn headroom_and_smoothing_decrease_with_buffer() {
        let model = TrafficModel::default();
        let mut previous = (f64::INFINITY, f64::INFINITY);

        for micros in (0..=500).step_by(25) {
            let size = buffer(micros as f64);
            let current = (model.headroom(size), model.smoothing(size));
            assert!(current.0 < previous.0, "headroom at {micros}µs");
            assert!(current.1 < previous.1, "smoothing at {micros}µs");
            previous = current;
        }

        assert_eq!(model.headroom(BufferSize::ZERO), 40.0);
        assert_eq!(model.headroom(BufferSize::MAX), 20.0);
        assert_eq!(model.smoothing(BufferSize::ZERO), 1.0);
        assert_eq!(model.smoothing(BufferSize::MAX), 0.5);
    }

    #[test]
    fn percentile_collapse() {
        for seed in 0..20 {
            let run = run(NYC, buffer(143.0), &mut rng(seed));
            let mut actual: Vec<f64> = run.points.iter().map(|p| p.actual).collect();
            actual.sort_by(f64::total_cmp);

            assert_eq!(run.stats.p99, run.stats.peak);
            assert_eq!(run.stats.peak, actual[23]);
            assert_eq!(run.stats.p95, actual[22]);
            assert!(run.stats.p99 >= run.stats.p95);
            assert!(run.stats.p95 >= run.stats.avg);
        }
    }

    #[test]
    fn percentile_collapse_with_degenerate_buffer() {
        let run = run(NYC, BufferSize::unchecked(100_000.0), &mut FixedNoise::new(0.9));

        // 40 * 2.2 + 0.9 * 10 * (1 - 100)
        assert_eq!(run.stats.peak, -803.0);
        assert_eq!(run.stats.p99, run.stats.peak);
        assert!(run.stats.p95 < run.stats.peak);
    }

    #[test]
    fn burst_is_twice_the_damped_noise() {
        let run = run(NYC, buffer(200.0), &mut FixedNoise::new(0.5));

        // 0.5 * 10 * (1 - 200 / 1000) * 2
        for point in &run.points {
            assert_eq!(point.burst, 8.0);
        }
    }

    #[test]
    fn stats_metadata() {
        let run = run("L-SFO-03", buffer(143.0), &mut rng(5));

        assert_eq!(run.stats.id, LinkId::from("L-SFO-03"));
        assert_eq!(run.stats.name, "L-SFO-03");
        assert_eq!(run.stats.cell_count, 8);
        assert!(run.stats.utilization > 0.0 && run.stats.utilization < 100.0);
    }

    #[test]
    fn unknown_link_uses_default_bucket() {
        let known = run("L-SFO-03", buffer(143.0), &mut FixedNoise::new(0.0));
        let unknown = run("L-XYZ-99", buffer(143.0), &mut FixedNoise::new(0.0));

        assert_eq!(unknown.link_class, LinkClass::Unknown { base_load: 25.0 });
        assert!(known.link_class.is_known());
        assert_eq!(known.points, unknown.points);
        assert_eq!(unknown.stats.cell_count, 8);
    }

    #[test]
    fn simulate_known_rejects_unknown_link() {
        let model = TrafficModel::default();
        let catalog = LinkCatalog::default();

        let err = model
            .simulate_known(&catalog, &"L-XYZ-99".into(), buffer(10.0), &mut rng(6))
            .unwrap_err();
        assert_eq!(err, UnknownLinkError(LinkId::from("L-XYZ-99")));

        assert!(
            model
                .simulate_known(&catalog, &NYC.into(), buffer(10.0), &mut rng(6))
                .is_ok()
        );
    }

    #[test]
    fn out_of_range_buffer_degenerates_without_panicking() {
        let run = run(NYC, BufferSize::unchecked(1_500.0), &mut FixedNoise::new(0.9));

        for point in &run.points {
            // negative headroom and negative (inverted) noise
            assert!(point.capacity < point.actual);
            assert!(point.burst < 0.0);
        }
    }

    #[test]
    fn reproducible_with_same_seed() {
        let a = run(NYC, buffer(143.0), &mut rng(99));
        let b = run(NYC, buffer(143.0), &mut rng(99));
        assert_eq!(a, b);
    }

    #[test]
    fn concurrent_runs_share_the_model() {
        let model = TrafficModel::default();
        let catalog = LinkCatalog::default();

        let runs: Vec<Simulation> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4u64)
                .map(|seed| {
                    let (model, catalog) = (&model, &catalog);
                    scope.spawn(move || {
                        model.simulate(catalog, &NYC.into(), BufferSize::default(), &mut rng(seed))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (seed, run) in runs.iter().enumerate() {
            assert_eq!(run, &self::run(NYC, BufferSize::default(), &mut rng(seed as u64)));
        }
    }

    #[test]
    fn serialized_shape() {
        let run = run(NYC, buffer(143.0), &mut FixedNoise::new(0.0));
        let json = serde_json::to_value(&run).unwrap();

        assert_eq!(json["points"].as_array().map(Vec::len), Some(24));
        assert_eq!(json["points"][6]["time"], "06:00");
        assert_eq!(json["stats"]["cellCount"], 8);
        assert!(json.get("link_class").is_none());
    }
}
