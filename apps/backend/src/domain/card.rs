//! Human-readable rendering of a game session.
//!
//! Terminal cards carry the exact same field set regardless of how the
//! session ended, so downstream displays (and tests) can rely on the
//! shape.

use std::fmt::{Display, Formatter, Result as FmtResult};

use time::{Duration, OffsetDateTime};

use crate::domain::gallows::Gallows;
use crate::domain::session::{GameSession, SessionState};

/// What the ledger actually paid out for a terminal session, next to
/// what the outcome asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settlement {
    pub credited: i64,
    pub requested: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCard {
    pub title: String,
    pub description: String,
    pub fields: Vec<(&'static str, String)>,
}

impl SessionCard {
    /// Render the session as it stands at `now`. `settlement` is the
    /// ledger's answer for a settled terminal session, `None` while the
    /// game is still running.
    pub fn render(session: &GameSession, now: OffsetDateTime, settlement: Option<Settlement>) -> Self {
        let state = session.state();
        let title = match state {
            SessionState::InProgress => "Hangman".to_string(),
            SessionState::Won => "**Won** Hangman".to_string(),
            SessionState::Lost => "**Failed** Hangman".to_string(),
            SessionState::Cancelled => "**Cancelled** Hangman".to_string(),
            SessionState::TimedOut => "**Timed out** Hangman".to_string(),
        };
        let description = match state {
            SessionState::Won => format!("Congrats! `{}`", session.masked_word()),
            _ => format!("Guess the word: `{}`", session.masked_word()),
        };

        let guessed = if session.guesses().is_empty() {
            "None".to_string()
        } else {
            session
                .guesses()
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        // Only a finished (or lost) game gives the word away.
        let word = match state {
            SessionState::InProgress => "???".to_string(),
            _ => session.word().to_string(),
        };

        let mut fields = vec![
            ("Stage", Gallows::at(session.mistakes()).label().to_string()),
            ("Guesses", session.guesses().len().to_string()),
            ("Mistakes", session.mistakes().to_string()),
            ("Word", word),
            ("Guess history", guessed),
            ("Time taken", fmt_elapsed(session.elapsed(now))),
        ];
        if state.is_terminal() {
            fields.push((
                "Reputation gained",
                fmt_settlement(settlement.unwrap_or_default()),
            ));
        }

        Self {
            title,
            description,
            fields,
        }
    }
}

impl Display for SessionCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        for (name, value) in &self.fields {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

fn fmt_settlement(settlement: Settlement) -> String {
    if settlement.credited < settlement.requested {
        format!("{} Reputation (Daily Cap Hit)", settlement.credited)
    } else {
        format!("{} Reputation", settlement.credited)
    }
}

fn fmt_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.whole_seconds().max(0);
    format!("{}m {:02}s", secs / 60, secs % 60)
}
