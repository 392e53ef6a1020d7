mod analysis;
mod config;
mod display;
mod error;
mod history;
mod source;

use analysis::advanced::analyze_advanced;
use analysis::selection::analyze_selection;
use analysis::strategy::{generate_random, generate_smart, suggest, Strategy};
use analysis::StatsReport;
use anyhow::Context;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_error, display_history, display_info, display_numbers, display_report,
    display_selection_analysis, display_success, display_suggestion, display_summary,
    display_warning,
};
use error::AppError;
use history::document::{export_file, import_file, DEFAULT_EXPORT_FILE};
use history::draw::parse_numbers;
use history::store::{HistoryStore, LoadOutcome};
use history::History;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Lotto Stats")]
#[command(about = "Track lotto draws, analyze them and suggest new numbers", long_about = None)]
struct Args {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show statistics for the recorded draws (default)
    Stats {
        /// Print one JSON object instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Record a new draw, e.g. `add 3,11,19,27,33,42`
    Add {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// Generate 6 uniformly random numbers
    Random {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate 6 numbers guided by hot/cold/overdue statistics
    Smart {
        /// Force a strategy instead of picking one at random
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show sum, odd/even split and consecutive pairs of 6 numbers
    Analyze {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// List the most recent draws
    List {
        /// Number of draws to show
        #[arg(short, long, default_value = "10")]
        last: usize,
    },

    /// Replace the history with a JSON data file
    Import {
        file: PathBuf,
    },

    /// Save the history to a JSON data file
    Export {
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        let code = match e.downcast_ref::<AppError>() {
            Some(err) if err.is_user_error() => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let store = HistoryStore::new(&config.data_dir);

    // Load once, before any analysis; a failed fallback still leaves a usable empty history.
    let (mut history, outcome) = store.load_initial(&config.seed_source, config.max_history);
    let machine_output = matches!(args.command, Some(Command::Stats { json: true }));
    match &outcome {
        LoadOutcome::Failed(e) => {
            display_warning(&format!("{} (starting with an empty history)", e));
        }
        LoadOutcome::Seeded(source) if !machine_output => {
            display_info(&format!("Loaded {} draws from {}", history.len(), source));
        }
        _ => {}
    }

    match args.command.unwrap_or(Command::Stats { json: false }) {
        Command::Stats { json } => cmd_stats(&history, json),
        Command::Add { numbers } => cmd_add(&store, &mut history, &numbers.join(" ")),
        Command::Random { seed } => {
            display_numbers(&generate_random(&mut make_rng(seed)));
            Ok(())
        }
        Command::Smart { strategy, seed } => cmd_smart(&history, strategy, seed),
        Command::Analyze { numbers } => cmd_analyze(&numbers.join(" ")),
        Command::List { last } => {
            display_history(history.recent(last));
            Ok(())
        }
        Command::Import { file } => cmd_import(&store, &mut history, &file),
        Command::Export { output } => cmd_export(&history, &output),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn cmd_stats(history: &History, json: bool) -> anyhow::Result<()> {
    let report = StatsReport::compute(history);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::JsonError(e.to_string()))?;
        println!("{}", out);
    } else {
        display_report(&report);
    }
    Ok(())
}

fn cmd_add(store: &HistoryStore, history: &mut History, input: &str) -> anyhow::Result<()> {
    let numbers = parse_numbers(input).map_err(AppError::from)?;
    let draw = history.add(&numbers).map_err(AppError::from)?;
    store
        .save(history)
        .context("the draw was accepted but could not be saved")?;

    display_success(&format!(
        "Added draw {:?} ({} draws recorded)",
        draw.sorted(),
        history.len()
    ));
    display_summary(&StatsReport::compute(history).summary);
    Ok(())
}

fn cmd_smart(
    history: &History,
    strategy: Option<Strategy>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    if history.is_empty() {
        display_info("No draws recorded yet, statistics-based picks fall back to random numbers");
    }

    let mut rng = make_rng(seed);
    // recomputed on every request so the suggestion reflects the current history
    let stats = analyze_advanced(history.draws());

    let suggestion = match strategy {
        Some(s) => suggest(&stats, s, &mut rng),
        None => generate_smart(&stats, &mut rng),
    };
    display_suggestion(&suggestion);
    Ok(())
}

fn cmd_analyze(input: &str) -> anyhow::Result<()> {
    let numbers = parse_numbers(input).map_err(AppError::from)?;
    let analysis = analyze_selection(&numbers).map_err(AppError::from)?;
    display_selection_analysis(&analysis);
    Ok(())
}

fn cmd_import(store: &HistoryStore, history: &mut History, file: &Path) -> anyhow::Result<()> {
    let count = import_file(file, history)
        .with_context(|| format!("could not import {}", file.display()))?;
    store.save(history)?;

    display_success(&format!("Imported {} draws from {}", count, file.display()));
    Ok(())
}

fn cmd_export(history: &History, output: &Path) -> anyhow::Result<()> {
    export_file(output, history)?;
    display_success(&format!(
        "Saved {} draws to {}",
        history.len(),
        output.display()
    ));
    Ok(())
}
