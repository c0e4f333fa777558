//! Pascal Lattice - CLI

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use pascal_lattice::lattice::{
    evaluate, generate_values, render_text, validate, Lattice, MemoTable, Mode,
};
use pascal_lattice::util::config::{load_config_from, load_user_config, GenerateConfig};
use pascal_lattice::util::logger;
use pascal_lattice::{generate, generate_with_values, NAME, VERSION};

/// Build a triangular lattice and find its optimal path sum
#[derive(Parser, Debug)]
#[command(name = "pascal-lattice")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read configuration from this file instead of the user config
    #[arg(long = "config", value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build, evaluate and print one lattice
    Generate {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// Recompute shared nodes instead of memoizing
        #[arg(long)]
        no_memo: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Do not highlight the optimal path
        #[arg(long)]
        no_color: bool,
    },

    /// Evaluate the same lattice with and without memoization
    Compare {
        #[command(flatten)]
        lattice: LatticeArgs,
    },

    /// Print the effective configuration
    Config,
}

#[derive(ClapArgs, Debug)]
struct LatticeArgs {
    /// Number of rows
    #[arg(short, long)]
    depth: Option<usize>,

    /// Largest generated value
    #[arg(short, long)]
    max_value: Option<i64>,

    /// Maximize or minimize the path sum
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Seed for reproducible values
    #[arg(long)]
    seed: Option<u64>,

    /// Explicit comma-separated values, row by row (overrides generation)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl LatticeArgs {
    fn apply(
        &self,
        config: &mut GenerateConfig,
    ) {
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(max_value) = self.max_value {
            config.max_value = max_value;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<GenerateConfig> {
    let mut config = match path {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => load_user_config().context("Failed to load user config")?,
    };
    config
        .apply_env_overrides()
        .context("Invalid environment override")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli(args.verbose);

    let mut config = load_config(args.config_file.as_ref())?;

    match args.command {
        Commands::Generate {
            lattice,
            no_memo,
            format,
            no_color,
        } => {
            lattice.apply(&mut config);
            if no_memo {
                config.persist_memo = false;
            }

            let view = match &lattice.values {
                Some(values) => generate_with_values(&config, values),
                None => generate(&config),
            }
            .context("Failed to generate lattice")?;

            match format {
                Format::Json => println!("{}", view.to_json()?),
                Format::Text => {
                    println!("{}", render_text(&view, !no_color));
                    println!();
                    println!("{} sum: {}", view.mode, view.root_optimal_sum);
                    println!(
                        "evaluation: {:?} ({} visits, {} cache hits)",
                        view.elapsed, view.stats.visits, view.stats.cache_hits
                    );
                }
            }
        }
        Commands::Compare { lattice } => {
            lattice.apply(&mut config);
            config.persist_memo = false;

            validate(&config, lattice.values.as_deref())
                .context("Naive evaluation is not possible for this configuration")?;
            let values = match lattice.values {
                Some(values) => values,
                None => generate_values(config.depth, config.max_value, config.seed)?,
            };
            let built = Lattice::build(config.depth, &values)?;

            println!("{} nodes, {} rows, {}", built.len(), built.depth(), config.mode);
            for persist in [true, false] {
                let mut memo = MemoTable::for_lattice(&built);
                let started = Instant::now();
                let evaluation = evaluate(&built, config.mode, persist, &mut memo);
                let elapsed = started.elapsed();
                println!(
                    "{:<10} sum={:<8} visits={:<10} cache_hits={:<8} elapsed={:?}",
                    if persist { "memoized" } else { "naive" },
                    evaluation.sum,
                    evaluation.stats.visits,
                    evaluation.stats.cache_hits,
                    elapsed
                );
            }
        }
        Commands::Config => {
            print!(
                "{}",
                toml::to_string_pretty(&config).context("Failed to serialize config")?
            );
        }
    }

    Ok(())
}
