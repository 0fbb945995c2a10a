//! Word Scramble - CLI
//!
//! Line-mode driver for the word game engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use word_scramble::{
    commands::{run_check, run_play},
    game::Session,
    lexicon::Lexicon,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Dictionary of real words, one per line (default: embedded dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Hard mode: words need 4 or more letters
    #[arg(long, global = true)]
    hard: bool,

    /// Seed for root word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Validate words against a given root word
    Check {
        /// Root word for the round
        #[arg(short, long)]
        root: String,

        /// Words to submit, in order
        words: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // The game cannot run without its word lists
    let lexicon = Lexicon::load(cli.wordlist.as_deref(), cli.dictionary.as_deref())
        .context("Failed to load word lists")?;

    let mut session = match cli.seed {
        Some(seed) => Session::with_seed(lexicon, seed),
        None => Session::new(lexicon),
    };
    session.set_mode(cli.hard);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let stdin = io::stdin();
            run_play(&mut session, stdin.lock(), io::stdout())?;
        }
        Commands::Check { root, words } => {
            run_check(&mut session, &root, &words, io::stdout())?;
        }
    }

    Ok(())
}
