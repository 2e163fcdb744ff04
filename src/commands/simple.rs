//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Every line is a submission unless it is one of
//! the `:` commands.

use crate::dictionary::Dictionary;
use crate::game::{GameSession, Submission};
use crate::output::formatters::{count_noun, length_badge};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary + ?Sized>(session: &mut GameSession<'_, D>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the simple interactive CLI mode on arbitrary input and output streams
///
/// Ends at `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<D, R, W>(
    session: &mut GameSession<'_, D>,
    mut input: R,
    mut out: W,
) -> Result<()>
where
    D: Dictionary + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Word Scramble - Simple Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Spell real words of three or more letters using the root word's letters.")?;
    writeln!(out, "Each letter of the root word can be used once per word.\n")?;
    writeln!(out, "Commands: ':restart' for a new root word, ':words' to list your words, ':quit' to exit\n")?;

    if !session.is_active() {
        session.reset();
    }
    print_root(session, &mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "Enter your word: ")?;
        out.flush().context("failed to flush output")?;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":restart" | ":new" | ":n" => {
                session.reset();
                writeln!(out, "\n🔄 New game started!")?;
                print_root(session, &mut out)?;
            }
            ":words" | ":w" => print_words(session, &mut out)?,
            ":help" | ":h" => {
                writeln!(out, "Commands: ':restart', ':words', ':quit'\n")?;
            }
            entry => match session.submit(entry) {
                Ok(Submission::Accepted { word, score }) => {
                    writeln!(
                        out,
                        "{} {} {}   Score: {}\n",
                        "✓".green().bold(),
                        length_badge(&word).bright_black(),
                        word.bright_white().bold(),
                        score.to_string().bright_yellow().bold()
                    )?;
                }
                Ok(Submission::Ignored) => {}
                Err(rejection) => {
                    writeln!(
                        out,
                        "{} {}: {}\n",
                        "✗".red().bold(),
                        rejection.title().red().bold(),
                        rejection.message()
                    )?;
                }
            },
        }
    }

    writeln!(out, "👋 Thanks for playing! Final score: {}", session.score())?;
    Ok(())
}

fn print_root<D: Dictionary + ?Sized, W: Write>(
    session: &GameSession<'_, D>,
    out: &mut W,
) -> io::Result<()> {
    let root = session
        .root_word()
        .map(|r| r.text().to_uppercase())
        .unwrap_or_default();
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(out, "Root word: {}", root.bright_yellow().bold())?;
    writeln!(out, "────────────────────────────────────────────────────────────\n")
}

fn print_words<D: Dictionary + ?Sized, W: Write>(
    session: &GameSession<'_, D>,
    out: &mut W,
) -> io::Result<()> {
    let words = session.accepted_words();
    writeln!(
        out,
        "\n{} so far (score {}):",
        count_noun(words.len(), "word", "words"),
        session.score()
    )?;
    for word in words {
        writeln!(out, "  {} {word}", length_badge(word))?;
    }
    writeln!(out)
}
