//! netoptic: traffic and cost estimators for link buffer sizing.
//!
//! Run with:
//!   cargo run -p netoptic -- simulate --link L-NYC-01 --buffer 250us --seed 42
//!   cargo run -p netoptic -- financials --buffer 250us --cost 1000

mod cli;
mod report;

use anyhow::{Context as _, Result};
use clap::Parser;
use cli::{Cli, Command, FinancialsArgs, SimulateArgs};
use netoptic_core::{config::ModelConfig, link::Topology};
use rand_chacha::ChaChaRng;
use rand_core::SeedableRng as _;
use report::{FinancialsReport, SimulationReport};
use serde::Serialize;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tracing::{Level, info};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ModelConfig::default(),
    };

    let output = match &cli.command {
        Command::Simulate(args) => run_simulate(&config, args, cli.json)?,
        Command::Financials(args) => run_financials(&config, args, cli.json)?,
        Command::Topology { cells } => {
            let topology = Topology::new(&config.links, *cells);
            render(cli.json, &topology, report::render_topology)?
        }
        Command::Links => render(cli.json, &config.links, report::render_links)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if cli.json {
        writeln!(stdout)?;
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<ModelConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;
    let config = parse_config(&text)
        .with_context(|| format!("Invalid configuration {}", path.display()))?;
    info!(path = %path.display(), links = config.links.len(), "loaded model configuration");
    Ok(config)
}

fn parse_config(text: &str) -> Result<ModelConfig> {
    let config: ModelConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

fn run_simulate(config: &ModelConfig, args: &SimulateArgs, json: bool) -> Result<String> {
    let buffer = args.buffer.resolve()?;
    let seed = match args.seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::random();
            info!(seed, "no seed given, drawing a random one");
            seed
        }
    };
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let simulation = if args.strict {
        config
            .traffic
            .simulate_known(&config.links, &args.link, buffer, &mut rng)?
    } else {
        config
            .traffic
            .simulate(&config.links, &args.link, buffer, &mut rng)
    };

    let summary = SimulationReport {
        seed,
        buffer,
        known_link: simulation.link_class.is_known(),
        simulation: &simulation,
    };
    render(json, &summary, report::render_simulation)
}

fn run_financials(config: &ModelConfig, args: &FinancialsArgs, json: bool) -> Result<String> {
    let buffer = args.buffer.resolve()?;
    let summary = FinancialsReport {
        buffer,
        cost_per_gbps: args.cost,
        financials: config.financial.estimate(buffer, args.cost),
    };
    render(json, &summary, report::render_financials)
}

fn render<T: Serialize>(json: bool, value: &T, text: impl Fn(&T) -> String) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value))
    }
}
