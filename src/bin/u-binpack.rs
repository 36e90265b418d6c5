//! Command-line front end: reads an instance, runs the GA, prints the
//! packing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_binpack::ga::GaConfig;
use u_binpack::packing::{pack_with_observer, PackingSolution, ProblemInstance};

const SAMPLE_ITEMS: [f64; 14] = [
    4.0, 8.0, 1.0, 4.0, 2.0, 1.0, 7.0, 3.0, 6.0, 5.0, 2.0, 9.0, 3.0, 2.0,
];

/// Pack items into bins with a genetic algorithm.
#[derive(Debug, Parser)]
#[command(name = "u-binpack", version, about)]
struct Args {
    /// Item sizes. Defaults to a 14-item sample instance.
    items: Vec<f64>,

    /// Read item sizes from a file (separated by whitespace or commas).
    #[arg(short, long, conflicts_with = "items")]
    file: Option<PathBuf>,

    /// Bin capacity.
    #[arg(short, long, default_value_t = 10.0)]
    capacity: f64,

    /// Population size.
    #[arg(short, long, default_value_t = 100)]
    population: usize,

    /// Number of generations.
    #[arg(short, long, default_value_t = 500)]
    generations: usize,

    /// Per-gene mutation probability.
    #[arg(short, long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Tournament size.
    #[arg(short, long, default_value_t = 3)]
    tournament: usize,

    /// Random seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log progress every N generations (0 disables).
    #[arg(long, default_value_t = 50)]
    log_every: usize,

    /// Score populations in parallel (requires the `parallel` feature).
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let items = match (&args.file, args.items.is_empty()) {
        (Some(path), _) => read_items(path)?,
        (None, true) => SAMPLE_ITEMS.to_vec(),
        (None, false) => args.items.clone(),
    };
    let instance = ProblemInstance::new(items, args.capacity)?;

    let mut config = GaConfig::default()
        .with_population_size(args.population)
        .with_max_generations(args.generations)
        .with_mutation_rate(args.mutation_rate)
        .with_tournament_size(args.tournament)
        .with_parallel(args.parallel)
        .with_log_interval(args.log_every);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let log_every = args.log_every;
    let solution = pack_with_observer(&instance, &config, |generation, best| {
        if log_every > 0 && generation % log_every == 0 {
            info!("Generation {generation} - Best fitness: {best}");
        }
    })?;

    print_solution(&instance, &solution);
    Ok(())
}

fn read_items(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("invalid item size {token:?} in {}", path.display()))
        })
        .collect()
}

fn print_solution(instance: &ProblemInstance, solution: &PackingSolution) {
    let capacity = instance.capacity();

    println!("\nFinal Bin Packing Solution:");
    for (bin, items) in solution.grouping.iter() {
        let sizes: Vec<String> = items.iter().map(|&s| fmt_size(s)).collect();
        let total: f64 = items.iter().sum();
        println!(
            "Bin {bin}: [{}] (Total: {}/{})",
            sizes.join(", "),
            fmt_size(total),
            fmt_size(capacity)
        );
    }

    println!("\nTotal bins used: {}", solution.bins_used);
    println!("Lower bound: {}", instance.lower_bound());
    if !solution.is_feasible() {
        println!("Overflow: {}", fmt_size(solution.overflow));
    }
}

/// Formats whole numbers without a trailing `.0`.
fn fmt_size(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
