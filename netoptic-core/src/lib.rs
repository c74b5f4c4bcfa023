//! Traffic and cost estimators for sizing link buffers.
//!
//! Two independent, pure estimators share a [`BufferSize`] input:
//!
//! * [`TrafficModel::simulate`] produces a synthetic day of hourly load for
//!   one link, with the capacity needed on top of it and summary
//!   [`LinkStats`];
//! * [`FinancialModel::estimate`] projects the savings that buffering
//!   brings on the aggregate demand.
//!
//! Randomness is injected through a [`NoiseSource`]: pass a seeded
//! generator for reproducible runs or [`FixedNoise::SILENT`] to remove it.
//!
//! [`BufferSize`]: measure::BufferSize
//! [`TrafficModel::simulate`]: traffic::TrafficModel::simulate
//! [`LinkStats`]: stats::LinkStats
//! [`FinancialModel::estimate`]: financials::FinancialModel::estimate
//! [`NoiseSource`]: noise::NoiseSource
//! [`FixedNoise::SILENT`]: noise::FixedNoise::SILENT

pub mod config;
pub mod defaults;
pub mod financials;
pub mod link;
pub mod measure;
pub mod noise;
pub mod stats;
pub mod traffic;

pub use self::{
    config::{ConfigError, ModelConfig},
    financials::{FinancialModel, Financials},
    link::{LinkCatalog, LinkClass, LinkId, Topology, UnknownLinkError},
    measure::BufferSize,
    noise::{FixedNoise, NoiseSource},
    stats::LinkStats,
    traffic::{Simulation, TrafficModel, TrafficPoint},
};
