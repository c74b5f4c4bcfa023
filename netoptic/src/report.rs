//! Text and JSON rendering of the estimator results.

use netoptic_core::{
    financials::Financials,
    link::{LinkCatalog, LinkClass, LinkId, Topology},
    measure::BufferSize,
    traffic::Simulation,
};
use serde::Serialize;
use std::fmt::Write as _;

/// JSON document printed by `simulate --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport<'a> {
    pub seed: u64,
    pub buffer: BufferSize,
    pub known_link: bool,
    #[serde(flatten)]
    pub simulation: &'a Simulation,
}

/// JSON document printed by `financials --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialsReport {
    pub buffer: BufferSize,
    pub cost_per_gbps: f64,
    #[serde(flatten)]
    pub financials: Financials,
}

pub fn render_simulation(report: &SimulationReport<'_>) -> String {
    let simulation = report.simulation;
    let stats = &simulation.stats;
    let mut out = String::new();

    let _ = writeln!(out, "=== Traffic Simulation: {} ===\n", stats.id);
    let _ = writeln!(out, "  Buffer:      {}", report.buffer);
    let _ = writeln!(out, "  Seed:        {}", report.seed);
    let _ = match simulation.link_class {
        LinkClass::Known { base_load } => {
            writeln!(out, "  Base load:   {}", format_gbps(base_load))
        }
        LinkClass::Unknown { base_load } => writeln!(
            out,
            "  Base load:   {} (unknown link, default bucket)",
            format_gbps(base_load)
        ),
    };

    let _ = writeln!(out, "\n  Hour     Actual   Capacity    Burst");
    for point in &simulation.points {
        let _ = writeln!(
            out,
            "  {}  {:>9.2}  {:>9.2}  {:>7.2}",
            point.time, point.actual, point.capacity, point.burst
        );
    }

    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "  P99:         {}", format_gbps(stats.p99));
    let _ = writeln!(out, "  P95:         {}", format_gbps(stats.p95));
    let _ = writeln!(out, "  Average:     {}", format_gbps(stats.avg));
    let _ = writeln!(out, "  Peak:        {}", format_gbps(stats.peak));
    let _ = writeln!(out, "  Utilization: {:.1}%", stats.utilization);
    let _ = writeln!(out, "  Cells:       {}", stats.cell_count);

    out
}

pub fn render_financials(report: &FinancialsReport) -> String {
    let financials = &report.financials;
    let mut out = String::new();

    let _ = writeln!(out, "=== Financial Projection ===\n");
    let _ = writeln!(out, "  Buffer:          {}", report.buffer);
    let _ = writeln!(out, "  Cost per Gbps:   {}", format_currency(report.cost_per_gbps));
    let _ = writeln!(out, "  Baseline cost:   {}", format_currency(financials.baseline_cost));
    let _ = writeln!(out, "  Optimized cost:  {}", format_currency(financials.optimized_cost));
    let _ = writeln!(out, "\nResults:");
    let _ = writeln!(out, "  Total savings:   {}", format_currency(financials.total_savings));
    let _ = writeln!(out, "  Capex reduction: {}", format_currency(financials.capex_reduction));
    let _ = writeln!(out, "  Efficiency gain: {:.2}%", financials.efficiency_gain);

    out
}

pub fn render_topology(topology: &Topology) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "=== Topology: {} links, {} cells ===\n",
        topology.links().count(),
        topology.cells().count()
    );
    for link in topology.links() {
        let cells: Vec<&str> = topology.cells_of(&LinkId::from(link.id.as_str())).collect();
        let _ = writeln!(out, "  {} ({}): {}", link.id, cells.len(), cells.join(" "));
    }

    out
}

pub fn render_links(catalog: &LinkCatalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Links ===\n");
    for entry in &catalog.entries {
        let _ = writeln!(out, "  {:<12} {}", entry.id, format_gbps(entry.base_load));
    }
    let _ = writeln!(
        out,
        "  {:<12} {}",
        "(other)",
        format_gbps(catalog.default_base_load)
    );

    out
}

/// Format a load in Gbps.
pub fn format_gbps(gbps: f64) -> String {
    format!("{gbps:.2} Gbps")
}

/// Format an amount with two decimals and thousands separators.
pub fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
