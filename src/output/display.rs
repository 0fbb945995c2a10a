//! Display functions for verdicts and round state

use super::formatters::{spaced_letters, word_with_badge};
use crate::core::{LetterPool, Mode, Verdict};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner for a freshly started round
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_round_banner<W: Write>(out: &mut W, root_word: &str, mode: Mode) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {}   {}",
        "ROOT WORD:".bright_cyan().bold(),
        root_word.to_uppercase().bright_yellow().bold(),
        format!("[{mode} mode]").bright_black()
    )?;

    let pool = LetterPool::new(root_word);
    if !pool.is_empty() {
        writeln!(
            out,
            " {}    {} ({} letters)",
            "LETTERS:".bright_cyan().bold(),
            spaced_letters(&pool),
            pool.len()
        )?;
    }
    writeln!(out, "{}", "═".repeat(60).cyan())
}

/// Print the outcome of one submission
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_verdict<W: Write>(out: &mut W, verdict: &Verdict) -> io::Result<()> {
    match verdict {
        Verdict::Accepted(word) => {
            writeln!(out, "{} {}", "✅".green(), word.bright_white().bold())
        }
        Verdict::Rejected(rejection) => {
            writeln!(
                out,
                "{} {} {}",
                "❌".red(),
                rejection.title().red().bold(),
                rejection.message()
            )
        }
    }
}

/// Print the accepted words, most recent first
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_used_words<W: Write>(out: &mut W, used_words: &[String]) -> io::Result<()> {
    if used_words.is_empty() {
        return writeln!(out, "{}", "No words yet".bright_black());
    }

    writeln!(
        out,
        "\n📜 {} ({})",
        "Your words".bright_cyan().bold(),
        used_words.len()
    )?;
    for word in used_words {
        writeln!(out, "   {}", word_with_badge(word))?;
    }
    Ok(())
}
