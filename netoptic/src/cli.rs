//! Command-line interface for the netoptic estimators.
//!
//! ## Commands
//! - `simulate`: synthetic day of hourly traffic for one link
//! - `financials`: savings projected for a buffer size and unit cost
//! - `topology`: link/cell graph of the deployment
//! - `links`: known links and their base loads
//!
//! Buffer sizes accept a unit (`143us`, `143µs`, `0.143ms`, `143000ns`) or
//! a bare number of microseconds. Values outside `[0, 500]µs` are rejected
//! unless `--clamp` is given.

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use netoptic_core::{
    defaults::{BASE_COST_PER_GBPS, DEFAULT_CELLS, MAX_CELLS},
    link::LinkId,
    measure::{BufferSize, BufferSizeError, BufferSizeParseError},
};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "netoptic")]
#[command(author, version, about = "Traffic and cost estimators for link buffer sizing")]
pub struct Cli {
    /// Load model parameters from a TOML file (missing keys keep their defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of the text report
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a day of hourly traffic on a link
    Simulate(SimulateArgs),
    /// Estimate the savings brought by a buffer size
    Financials(FinancialsArgs),
    /// Print the link/cell topology
    Topology {
        /// Number of cells to attach to the links
        #[arg(
            long,
            default_value_t = DEFAULT_CELLS,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(..=MAX_CELLS as u64)
        )]
        cells: usize,
    },
    /// List the known links
    Links,
}

#[derive(Args, Debug)]
pub struct BufferArgs {
    /// Buffer size, e.g. `250us` or `0.25ms` (bare numbers are microseconds)
    #[arg(long, default_value = "143us")]
    pub buffer: String,

    /// Clamp an out of range buffer size into [0, 500]µs instead of failing
    #[arg(long, default_value_t = false)]
    pub clamp: bool,
}

impl BufferArgs {
    pub fn resolve(&self) -> Result<BufferSize> {
        resolve_buffer(&self.buffer, self.clamp)
    }
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Link identifier, e.g. `L-NYC-01`
    #[arg(long)]
    pub link: LinkId,

    #[command(flatten)]
    pub buffer: BufferArgs,

    /// Seed of the noise generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fail on links that are not in the catalog instead of using the
    /// default base load
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct FinancialsArgs {
    #[command(flatten)]
    pub buffer: BufferArgs,

    /// Cost per Gbps of provisioned capacity
    #[arg(long, default_value_t = BASE_COST_PER_GBPS, allow_negative_numbers = true)]
    pub cost: f64,
}

/// Parse `raw` into a [`BufferSize`], clamping out of range values when
/// `clamp` is set.
pub fn resolve_buffer(raw: &str, clamp: bool) -> Result<BufferSize> {
    match raw.parse::<BufferSize>() {
        Ok(buffer) => Ok(buffer),
        Err(BufferSizeParseError::OutOfRange(BufferSizeError(micros))) if clamp => {
            let clamped = BufferSize::clamped(micros);
            warn!(requested = micros, %clamped, "buffer size out of range, clamping");
            Ok(clamped)
        }
        Err(error) => Err(error).with_context(|| format!("Invalid buffer size `{raw}'")),
    }
}
