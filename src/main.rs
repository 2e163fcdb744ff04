//! Word Scramble - CLI
//!
//! Word game with TUI and simple CLI modes, plus tools for inspecting word lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{find_solutions, run_simple, run_survey},
    core::RootWord,
    dictionary::{DEFAULT_LANGUAGE, WordListDictionary},
    game::GameSession,
    output::{print_solutions, print_survey_statistics},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Dictionary language
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for reproducible root words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// List every word that can be scored from a root word
    Solutions {
        /// The root word to solve
        root: String,
    },

    /// Count solutions for every root word in the word list
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the root word source based on the -w flag
fn load_word_source(wordlist: &str) -> Result<WordSource> {
    match wordlist {
        "embedded" => Ok(WordSource::embedded()),
        path => WordSource::load(path)
            .with_context(|| format!("cannot start without a root word list ({path})")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary: &str, language: &str) -> Result<WordListDictionary> {
    match dictionary {
        "embedded" => Ok(WordListDictionary::embedded()),
        path => WordListDictionary::load(path, language)
            .with_context(|| format!("cannot start without a dictionary ({path})")),
    }
}

/// Refuse a language the dictionary has no words for
///
/// Every submission would otherwise be rejected as unrecognized.
fn ensure_language(dictionary: &WordListDictionary, language: &str) -> Result<()> {
    if !dictionary.speaks(language) {
        anyhow::bail!(
            "dictionary language is '{}' but '{language}' was requested; pass -d <file> with a {language} word list",
            dictionary.language()
        );
    }
    Ok(())
}

/// Install the stderr log subscriber
///
/// The TUI owns the terminal, so it stays silent unless `RUST_LOG` asks otherwise.
fn init_logging(verbose: u8, tui: bool) {
    let level = match (tui, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("word_scramble={level}"))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let source = load_word_source(&cli.wordlist)?;
    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;
    ensure_language(&dictionary, &cli.language)?;
    info!(
        roots = source.len(),
        words = dictionary.len(),
        language = %cli.language,
        "word lists ready"
    );

    match command {
        Commands::Play => run_play_command(&source, &dictionary, &cli.language, cli.seed),
        Commands::Simple => run_simple_command(&source, &dictionary, &cli.language, cli.seed),
        Commands::Solutions { root } => {
            run_solutions_command(&root, &dictionary, &cli.language);
            Ok(())
        }
        Commands::Survey { limit } => {
            run_survey_command(&source, &dictionary, &cli.language, limit);
            Ok(())
        }
    }
}

fn new_session<'a>(
    source: &'a WordSource,
    dictionary: &'a WordListDictionary,
    language: &str,
    seed: Option<u64>,
) -> GameSession<'a, WordListDictionary> {
    let session = GameSession::new(source, dictionary).with_language(language);
    match seed {
        Some(seed) => session.with_seed(seed),
        None => session,
    }
}

fn run_play_command(
    source: &WordSource,
    dictionary: &WordListDictionary,
    language: &str,
    seed: Option<u64>,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(new_session(source, dictionary, language, seed));
    run_tui(app)
}

fn run_simple_command(
    source: &WordSource,
    dictionary: &WordListDictionary,
    language: &str,
    seed: Option<u64>,
) -> Result<()> {
    let mut session = new_session(source, dictionary, language, seed);
    run_simple(&mut session)
}

fn run_solutions_command(root: &str, dictionary: &WordListDictionary, language: &str) {
    let result = find_solutions(&RootWord::new(root), dictionary, language);
    print_solutions(&result);
}

fn run_survey_command(
    source: &WordSource,
    dictionary: &WordListDictionary,
    language: &str,
    limit: Option<usize>,
) {
    let count = limit.map_or(source.len(), |n| n.min(source.len()));
    println!("🔍 Surveying {count} root words...");

    let stats = run_survey(source, dictionary, language, limit);
    print_survey_statistics(&stats);
}
