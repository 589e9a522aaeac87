//! CLI for telemetry-select: same answer, different cost.

mod commands;

use clap::{Parser, Subcommand};
use telemetry_select_core::CountingAllocator;

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator;

#[derive(Parser)]
#[command(name = "telemetry-select")]
#[command(about = "telemetry-select: compare selection strategies over synthetic telemetry")]
#[command(version = telemetry_select_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic telemetry records and list them
    Generate {
        /// Number of records to generate
        #[arg(long, default_value = "10")]
        count: usize,

        /// Seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,

        /// Order the listing by a field
        #[arg(long, value_parser = ["avg", "read-at"])]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        descending: bool,
    },

    /// Run one selection variant (or all of them) on a generated dataset
    Select {
        /// Variant name (see `variants`), or "all"
        #[arg(long, default_value = "all")]
        variant: String,

        /// Number of records in the dataset
        #[arg(long, default_value = "1000")]
        count: usize,

        /// Seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the available selection variants
    Variants,

    /// Benchmark the variants of one or both families and rank them.
    /// Each variant gets its own dataset; a control case also times generation.
    Bench {
        /// Which family to benchmark
        #[arg(long, default_value = "all", value_parser = ["fastest", "closest", "all"])]
        suite: String,

        /// Records per dataset
        #[arg(long, default_value = "1000")]
        size: usize,

        /// Measured calls per variant
        #[arg(long, default_value = "100")]
        iterations: usize,

        /// Warmup calls per variant (not measured)
        #[arg(long, default_value = "3")]
        warmup: usize,

        /// Skip the control cases
        #[arg(long)]
        no_control: bool,

        /// Seed for reproducible datasets
        #[arg(long)]
        seed: Option<u64>,

        /// Write the ranked report(s) as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Walk through generation, minimum and closest-to-mean on small datasets
    Playground {
        /// Seed for reproducible datasets
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            count,
            seed,
            sort,
            descending,
        } => commands::generate::run(count, seed, sort.as_deref(), descending),
        Commands::Select {
            variant,
            count,
            seed,
        } => commands::select::run(&variant, count, seed),
        Commands::Variants => {
            commands::variants::run();
            Ok(())
        }
        Commands::Bench {
            suite,
            size,
            iterations,
            warmup,
            no_control,
            seed,
            output,
        } => commands::bench::run(commands::bench::BenchCommandConfig {
            suite: &suite,
            size,
            iterations,
            warmup,
            include_control: !no_control,
            seed,
            output_path: output.as_deref(),
        }),
        Commands::Playground { seed } => commands::playground::run(seed),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
