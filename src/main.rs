//! Infinite Wordle - CLI
//!
//! Word-guessing game with TUI and line-based modes, replay links and saved games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use infinite_wordle::{
    commands::{check_guess, open_game, run_simple, saved_share_text},
    config::{Config, DEFAULT_SHARE_URL},
    core::{WORD_LENGTHS, is_supported_length},
    interactive::{App, run_tui},
    output::{print_check_result, print_share},
    wordlists::WordCatalog,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "infinite_wordle",
    about = "Wordle with 5, 6 and 7-letter words, endless new puzzles and shareable replays",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for the saved game
    #[arg(long, global = true, env = "WORDLE_STATE_DIR", default_value = ".")]
    state_dir: PathBuf,

    /// Page that replay links point at
    #[arg(long, global = true, env = "WORDLE_SHARE_URL", default_value = DEFAULT_SHARE_URL)]
    share_url: String,

    /// Remote word check endpoint (default: built-in dictionary)
    #[arg(long, global = true, env = "WORDLE_CHECK_URL")]
    check_url: Option<String>,

    /// Catalog file, one word per line (default: built-in catalog)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Word length for a new game: 5, 6 or 7
    #[arg(short, long, global = true, value_parser = parse_length)]
    length: Option<usize>,

    /// Replay link to start from, e.g. http://localhost:3000/?s=42
    #[arg(short, long, global = true)]
    replay: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Show the feedback for a guess against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Print the share text for the saved game
    Share,
}

fn parse_length(value: &str) -> Result<usize, String> {
    let length: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if is_supported_length(length) {
        Ok(length)
    } else {
        Err(format!("word length must be one of {WORD_LENGTHS:?}"))
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            state_dir: cli.state_dir.clone(),
            share_url: cli.share_url.clone(),
            check_url: cli.check_url.clone(),
            words: cli.words.clone(),
            word_length: cli.length,
            replay: cli.replay.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from(&cli);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config).await,
        Commands::Simple => run_simple_command(&config).await,
        Commands::Check { guess, target } => run_check_command(&guess, &target),
        Commands::Share => run_share_command(&config),
    }
}

fn load_catalog(config: &Config) -> Result<WordCatalog> {
    config.catalog().context("Failed to load word catalog")
}

async fn run_play_command(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    let validator = config.validator(&catalog)?;
    let engine = open_game(&catalog, config.store(), config);

    let app = App::new(engine, validator, config.share_url.clone(), config.share_path());
    run_tui(app).await
}

async fn run_simple_command(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    let validator = config.validator(&catalog)?;
    let mut engine = open_game(&catalog, config.store(), config);

    run_simple(
        &mut engine,
        &validator,
        &config.share_url,
        &config.share_path(),
    )
    .await
    .map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target)?;
    print_check_result(&result);
    Ok(())
}

fn run_share_command(config: &Config) -> Result<()> {
    let text =
        saved_share_text(&config.store(), &config.share_url).map_err(|e| anyhow::anyhow!(e))?;
    print_share(&text);
    Ok(())
}
