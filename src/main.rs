//! Cryptograms - CLI
//!
//! Play letter-substitution cryptograms in a full-screen TUI or a plain text prompt.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cryptograms::{
    commands::{Controller, Outcome, run_text},
    interactive::{App, run_tui},
    puzzle::CryptogramModel,
    quotes::{FixedQuote, QuoteList, QuoteSource},
};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "cryptograms",
    about = "Solve letter-substitution cryptograms in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quotes: 'embedded' (default) or path to a file with one quote per line
    #[arg(short, long, global = true, default_value = "embedded")]
    quotes: String,

    /// Play this quote instead of a random one
    #[arg(long, global = true)]
    quote: Option<String>,

    /// Seed for reproducible quote choice and cipher
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Text mode: type commands at a prompt
    Text,
}

/// Build the quote source from the -q and --quote flags
fn quote_source(cli: &Cli) -> Result<Box<dyn QuoteSource>> {
    if let Some(quote) = &cli.quote {
        return Ok(Box::new(FixedQuote::new(quote.as_str())));
    }

    let quotes = match cli.quotes.as_str() {
        "embedded" => QuoteList::embedded(),
        path => QuoteList::from_file(path)?,
    };
    debug!("Quote source holds {} quotes", quotes.len());
    Ok(Box::new(quotes))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let source = quote_source(&cli)?;
    let rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(source, rng),
        Commands::Text => run_text_command(source, rng),
    }
}

fn run_play_command(source: Box<dyn QuoteSource>, rng: StdRng) -> Result<()> {
    let app = App::new(source, rng).context("Could not create a puzzle")?;
    run_tui(app)
}

fn run_text_command(mut source: Box<dyn QuoteSource>, mut rng: StdRng) -> Result<()> {
    let model =
        CryptogramModel::new(source.as_mut(), &mut rng).context("Could not create a puzzle")?;
    let mut controller = Controller::new(model);

    let stdin = io::stdin();
    let outcome = run_text(&mut controller, &mut stdin.lock(), &mut io::stdout())?;
    info!("Text game finished: {outcome:?}");

    if outcome == Outcome::Quit {
        debug!("Answer was {:?}", controller.model().answer());
    }
    Ok(())
}
