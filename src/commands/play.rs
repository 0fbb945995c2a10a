//! Interactive line-mode game
//!
//! Reads one submission per line and prints the verdict. Lines starting with
//! `:` are commands rather than words.

use crate::game::{Session, SessionState};
use crate::lexicon::SpellChecker;
use crate::output::{write_round_banner, write_used_words, write_verdict};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Word(String),
    NewRound,
    Hard,
    Normal,
    ShowWords,
    Help,
    Quit,
    Unknown(String),
}

impl PlayInput {
    /// Classify a raw input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return Self::Word(line.to_string());
        };

        match command.to_lowercase().as_str() {
            "new" | "n" => Self::NewRound,
            "hard" => Self::Hard,
            "normal" | "easy" => Self::Normal,
            "words" | "w" => Self::ShowWords,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Run the interactive game loop until `:quit` or end of input
///
/// Starts a round first if the session has none yet.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn run_play<C, R, W>(session: &mut Session<C>, mut reader: R, mut out: W) -> io::Result<()>
where
    C: SpellChecker,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Word Scramble                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════╝")?;
    write_help(&mut out)?;

    if session.state() == SessionState::AwaitingRound {
        session.start_new_round();
    }
    write_round_banner(&mut out, session.root_word(), session.mode())?;

    let mut line = String::new();
    loop {
        write!(out, "\nEnter your word: ")?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match PlayInput::parse(&line) {
            PlayInput::Word(raw) => {
                let verdict = session.submit(&raw);
                write_verdict(&mut out, &verdict)?;
                if verdict.is_accepted() {
                    write_used_words(&mut out, session.used_words())?;
                }
            }
            PlayInput::NewRound => {
                session.start_new_round();
                write_round_banner(&mut out, session.root_word(), session.mode())?;
            }
            PlayInput::Hard => {
                session.set_mode(true);
                writeln!(out, "Hard mode on: words need 4 or more letters")?;
            }
            PlayInput::Normal => {
                session.set_mode(false);
                writeln!(out, "Hard mode off")?;
            }
            PlayInput::ShowWords => {
                write_used_words(&mut out, session.used_words())?;
            }
            PlayInput::Help => write_help(&mut out)?,
            PlayInput::Quit => break,
            PlayInput::Unknown(command) => {
                writeln!(out, "{} unknown command ':{command}'", "❓".yellow())?;
            }
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! You found {} {}.",
        session.used_words().len(),
        if session.used_words().len() == 1 {
            "word"
        } else {
            "words"
        }
    )?;
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nSpell new words using the letters of the root word.")?;
    writeln!(
        out,
        "Commands: ':new' new round, ':hard' / ':normal' difficulty, ':words' list, ':quit' exit"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_keep_raw_text() {
        assert_eq!(PlayInput::parse("Silk\n"), PlayInput::Word("Silk\n".to_string()));
        assert_eq!(PlayInput::parse("\n"), PlayInput::Word("\n".to_string()));
    }

    #[test]
    fn parse_commands() {
        assert_eq!(PlayInput::parse(":new\n"), PlayInput::NewRound);
        assert_eq!(PlayInput::parse("  :HARD "), PlayInput::Hard);
        assert_eq!(PlayInput::parse(":normal"), PlayInput::Normal);
        assert_eq!(PlayInput::parse(":w"), PlayInput::ShowWords);
        assert_eq!(PlayInput::parse(":?"), PlayInput::Help);
        assert_eq!(PlayInput::parse(":q"), PlayInput::Quit);
        assert_eq!(
            PlayInput::parse(":undo"),
            PlayInput::Unknown("undo".to_string())
        );
    }

    #[test]
    fn quit_is_a_word_without_colon() {
        assert_eq!(PlayInput::parse("quit"), PlayInput::Word("quit".to_string()));
    }
}
