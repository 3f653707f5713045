mod display;
mod input;
mod line_source;
mod session;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::{DataLoadError, MovieTable};
use rand::rngs::StdRng;
use rand::SeedableRng;
use recommender::{AppContext, Recommender};
use rustyline::DefaultEditor;
use sentiment::{LexiconScorer, PolarityScorer};
use session::{Session, SessionOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Movie Mood - mood-aware movie recommendations
#[derive(Parser)]
#[command(name = "movie-mood")]
#[command(about = "Interactive movie recommendations by genre, mood and rating", long_about = None)]
struct Cli {
    /// Path to the IMDB top 1000 CSV file
    #[arg(short, long, default_value = "imdb_top_1000.csv")]
    data_file: PathBuf,

    /// Number of movies to show per round
    #[arg(short = 'n', long, default_value = "5")]
    count: usize,

    /// Seed for shuffling and random picks (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file of extra word polarities, e.g. {"cozy": 0.6}
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Skip the progress dots
    #[arg(long)]
    no_animation: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    ensure!(cli.count > 0, "--count must be at least 1");

    let start = Instant::now();
    let table = match MovieTable::load_from_file(&cli.data_file) {
        Ok(table) => table,
        Err(DataLoadError::FileNotFound { path }) => {
            println!("{}", format!("Error! File '{}' was not found.", path).red());
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Failed to load movie dataset"),
    };

    let scorer: Arc<dyn PolarityScorer> = match &cli.lexicon {
        Some(path) => Arc::new(
            LexiconScorer::with_overrides_from_file(path)
                .with_context(|| format!("Failed to load lexicon {}", path.display()))?,
        ),
        None => Arc::new(LexiconScorer::new()),
    };

    let context = Arc::new(AppContext::new(table, scorer));
    info!("Ready in {:?}", start.elapsed());

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let options = SessionOptions {
        count: cli.count,
        animation_delay: if cli.no_animation {
            Duration::ZERO
        } else {
            SessionOptions::default().animation_delay
        },
    };

    let editor = DefaultEditor::new().context("Failed to start line editor")?;
    let stdout = io::stdout();
    let mut session = Session::new(
        Recommender::new(context),
        editor,
        stdout.lock(),
        rng,
        options,
    );
    session.run()
}
