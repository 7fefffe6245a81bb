//! Gridiron CLI - the dashboard's presentation surface as a terminal tool.
//!
//! # Usage
//!
//! ```bash
//! # Quick counts and density
//! gridiron stats football.gml
//!
//! # Full dashboard report on a filtered subset
//! gridiron report football.gml --filter largest-component --top 10
//! gridiron report football.gml --filter high-degree --min-degree 10
//!
//! # Export the force-layout document as JSON
//! gridiron render football.gml -o graph.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridiron_core::metrics::ComponentCounts;
use gridiron_core::{
    AnalysisSession, CentralityOutcome, DashboardReport, DegreeHistogram, FilterMode,
};
use indicatif::ProgressBar;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gridiron")]
#[command(about = "Network analysis dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show basic statistics about a network dataset
    Stats {
        /// Input file (GML, or CSV edge list)
        input: PathBuf,
    },

    /// Run the full analysis report over a filtered subset
    Report {
        /// Input file (GML, or CSV edge list)
        input: PathBuf,

        /// Subset of the graph to analyze
        #[arg(long, value_enum, default_value = "full")]
        filter: FilterArg,

        /// Minimum degree for the high-degree filter
        #[arg(long, default_value = "10")]
        min_degree: usize,

        /// Number of top nodes per centrality ranking
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Export the render document (force-layout JSON)
    Render {
        /// Input file (GML, or CSV edge list)
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Subset of the graph to export
        #[arg(long, value_enum, default_value = "full")]
        filter: FilterArg,

        /// Minimum degree for the high-degree filter
        #[arg(long, default_value = "10")]
        min_degree: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    /// The whole graph
    Full,
    /// The largest (weakly) connected component
    LargestComponent,
    /// Nodes whose full-graph degree meets --min-degree
    HighDegree,
}

impl FilterArg {
    fn to_mode(self, min_degree: usize) -> FilterMode {
        match self {
            FilterArg::Full => FilterMode::Full,
            FilterArg::LargestComponent => FilterMode::LargestComponent,
            FilterArg::HighDegree => FilterMode::HighDegree { min_degree },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { input } => cmd_stats(&input),
        Commands::Report {
            input,
            filter,
            min_degree,
            top,
        } => cmd_report(&input, filter.to_mode(min_degree), top),
        Commands::Render {
            input,
            output,
            filter,
            min_degree,
        } => cmd_render(&input, output.as_deref(), filter.to_mode(min_degree)),
    }
}

fn open_session(path: &PathBuf) -> Result<AnalysisSession> {
    let start = Instant::now();
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading {}...", path.display()));

    let session = AnalysisSession::open(path);
    // Force the load so a bad dataset fails here, once.
    session
        .graph()
        .with_context(|| format!("Failed to load {}", path.display()))?;

    pb.finish_with_message(format!("Loaded in {:.2?}", start.elapsed()));
    Ok(session)
}

fn cmd_stats(input: &PathBuf) -> Result<()> {
    let session = open_session(input)?;
    let report = session.report(FilterMode::Full, 1)?;

    println!("Network Statistics");
    println!("==================");
    println!("Nodes:    {}", report.node_count);
    println!("Edges:    {}", report.edge_count);
    println!("Directed: {}", if report.directed { "yes" } else { "no" });
    println!("Density:  {:.4}", report.metrics.density);

    Ok(())
}

fn cmd_report(input: &PathBuf, mode: FilterMode, top: usize) -> Result<()> {
    let session = open_session(input)?;

    let start = Instant::now();
    let report = session.report(mode, top)?;
    println!("Analyzed {} in {:.2?}", mode, start.elapsed());
    println!();

    if report.node_count == 0 {
        println!("The selected subset has no nodes. Adjust the filters.");
        return Ok(());
    }

    print_metrics(&report);
    print_histogram(&report.histogram);
    print_rankings(&report);

    Ok(())
}

fn print_metrics(report: &DashboardReport) {
    println!("Structural Metrics");
    println!("==================");
    println!("Nodes:          {}", report.node_count);
    println!("Edges:          {}", report.edge_count);
    println!("Density:        {:.4}", report.metrics.density);
    println!("Transitivity:   {:.4}", report.metrics.transitivity);
    match report.metrics.assortativity {
        Some(r) => println!("Assortativity:  {:.4}", r),
        None => println!("Assortativity:  undefined for this graph"),
    }
    match report.metrics.components {
        ComponentCounts::Undirected { connected } => {
            println!("Components:     {}", connected);
        }
        ComponentCounts::Directed { weak, strong } => {
            println!("Weak components:   {}", weak);
            println!("Strong components: {}", strong);
        }
    }
    println!();
}

fn print_histogram(histogram: &DegreeHistogram) {
    println!("Degree Distribution");
    println!("===================");
    match histogram {
        DegreeHistogram::Undirected { degrees } => print_frequency("degree", degrees),
        DegreeHistogram::Directed {
            in_degrees,
            out_degrees,
        } => {
            print_frequency("in-degree", in_degrees);
            print_frequency("out-degree", out_degrees);
        }
    }
    println!();
}

fn print_frequency(name: &str, values: &[usize]) {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_default() += 1;
    }

    println!("{} (value: nodes)", name);
    for (value, count) in counts {
        println!("  {:>3}: {} {}", value, "#".repeat(count.min(60)), count);
    }
}

fn print_rankings(report: &DashboardReport) {
    for tab in &report.tabs {
        println!("{} Centrality", tab.kind);
        println!("----------------------");
        match &tab.outcome {
            CentralityOutcome::Table(table) => {
                for (i, row) in table.rows.iter().enumerate() {
                    println!("{:>3}. {} ({}) {:.4}", i + 1, row.label, row.id, row.score);
                }
            }
            CentralityOutcome::Warning(msg) => {
                println!("warning: {}", msg);
            }
        }
        println!();
    }
}

fn cmd_render(input: &PathBuf, output: Option<&std::path::Path>, mode: FilterMode) -> Result<()> {
    let session = open_session(input)?;
    let report = session.report(mode, 1)?;

    let json = report.render.to_json()?;
    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Wrote {} nodes / {} edges to {}",
                report.render.node_count(),
                report.render.edge_count(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
