//! Non-interactive validation of a word list against a fixed root word

use crate::core::{RejectionKind, Verdict};
use crate::game::Session;
use crate::lexicon::SpellChecker;
use crate::output::{write_used_words, write_verdict};
use rustc_hash::FxHashMap;
use std::io::{self, Write};

/// Tally of one `check` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub accepted: usize,
    pub rejected: FxHashMap<RejectionKind, usize>,
}

impl CheckSummary {
    #[must_use]
    pub fn total_rejected(&self) -> usize {
        self.rejected.values().sum()
    }

    #[must_use]
    pub fn rejected_for(&self, kind: RejectionKind) -> usize {
        self.rejected.get(&kind).copied().unwrap_or(0)
    }

    fn record(&mut self, verdict: &Verdict) {
        match verdict.rejection_kind() {
            None => self.accepted += 1,
            Some(kind) => *self.rejected.entry(kind).or_insert(0) += 1,
        }
    }
}

/// Start a round on `root` and submit each word in order
///
/// # Errors
///
/// Returns an I/O error if writing output fails.
pub fn run_check<C, W, S>(
    session: &mut Session<C>,
    root: &str,
    words: &[S],
    mut out: W,
) -> io::Result<CheckSummary>
where
    C: SpellChecker,
    W: Write,
    S: AsRef<str>,
{
    let root = session.start_round_with(root).to_string();
    writeln!(out, "Root word: {root} ({} mode)", session.mode())?;

    let mut summary = CheckSummary::default();
    for word in words {
        let verdict = session.submit(word.as_ref());
        write!(out, "{:>12}  ", word.as_ref())?;
        write_verdict(&mut out, &verdict)?;
        summary.record(&verdict);
    }

    write_used_words(&mut out, session.used_words())?;
    writeln!(
        out,
        "\n{} accepted, {} rejected",
        summary.accepted,
        summary.total_rejected()
    )?;
    Ok(summary)
}
