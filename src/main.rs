use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use hp_fold::{bounds::Bound, config::FoldConfig, fold_on, lattice::LatticeKind};

mod logging;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Chain to fold, e.g. HPHPPHHPH. Defaults to a benchmark chain for the
    /// selected lattice.
    pattern: Option<String>,

    /// Only report foldings scoring at least this much. Higher values prune
    /// more aggressively.
    #[arg(short = 's', long)]
    min_score: Option<i32>,

    #[arg(short, long)]
    lattice: Option<LatticeKind>,

    /// Pruning bounds to apply.
    #[arg(short, long, value_delimiter = ',')]
    bounds: Option<Vec<Bound>>,

    /// Enumerate every folding without pruning.
    #[arg(long, conflicts_with = "bounds")]
    naive: bool,

    /// Also enumerate mirror images of foldings.
    #[arg(long)]
    no_mirror_breaking: bool,

    /// Lattice extent of the board. Derived from the chain length by default.
    #[arg(long)]
    dimension: Option<usize>,

    /// TOML file with fold settings; command-line values take precedence.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase verbosity (-v new records, -vv ties, -vvv partial foldings)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> FoldConfig {
        FoldConfig {
            pattern: self.pattern.clone(),
            lattice: self.lattice,
            min_score: self.min_score,
            bounds: if self.naive {
                Some(Vec::new())
            } else {
                self.bounds.clone()
            },
            break_mirror_symmetry: self.no_mirror_breaking.then_some(false),
            dimension: self.dimension,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;
    debug!("parsed arguments: {:?}", cli);

    let base = match &cli.config {
        Some(path) => FoldConfig::from_file(path)?,
        None => FoldConfig::default(),
    };
    let config = base.merge(cli.overrides());

    let pattern = config.pattern()?;
    let options = config.options();
    let lattice = config.lattice();

    println!(
        "Folding {pattern} on the {lattice} lattice for scores >= {}",
        options.initial_max_score
    );
    let summary =
        fold_on(lattice, &pattern, &options).with_context(|| format!("Failed to fold {pattern}"))?;

    println!(
        "Found {} optimal solutions (score {}):\n",
        summary.solutions.len(),
        summary.max_score
    );
    for solution in &summary.solutions {
        print!("{solution}");
    }
    println!(
        "Found {} optimal solutions (score {}).",
        summary.solutions.len(),
        summary.max_score
    );
    println!("Runtime: {} milliseconds", summary.elapsed.as_millis());
    Ok(())
}
