//! Hangman game session state machine.
//!
//! Pure state: no timers, no storage, no rendering. The runtime in
//! `services::games` drives transitions and settles awards; everything
//! here is synchronous and deterministic, which is what makes the
//! terminal-state rules testable.

use time::{Duration, OffsetDateTime};

use crate::domain::gallows::Gallows;
use crate::domain::rules::{
    is_valid_letter, PARTICIPATION_POINTS, STOP_MIN_ELAPSED, STOP_MIN_GUESSES,
};

pub const MASK_PLACEHOLDER: char = '-';

/// Session lifecycle. Every state except `InProgress` is terminal and
/// immutable once entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
    Cancelled,
    TimedOut,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        self != SessionState::InProgress
    }
}

/// Why an input was refused. These are feedback to the actor, not
/// errors: the session is never mutated on a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Only the player who started the session may act on it.
    NotAuthor,
    /// The session already reached a terminal state.
    Finished,
    /// Not a letter of the guessable alphabet.
    InvalidLetter,
    /// The letter was already tried.
    AlreadyGuessed,
}

/// A point award produced by a terminal transition, to be handed to the
/// ledger exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointAward {
    pub points: i64,
    pub bonus: i64,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    author_id: i64,
    word: String,
    mask: Vec<char>,
    guesses: Vec<char>,
    mistakes: u8,
    state: SessionState,
    started_at: OffsetDateTime,
    /// Set on the terminal transition, consumed by the settlement path.
    award: Option<PointAward>,
}

impl GameSession {
    pub fn new(author_id: i64, word: String, started_at: OffsetDateTime) -> Self {
        let mask = word.chars().map(|_| MASK_PLACEHOLDER).collect();
        Self {
            author_id,
            word,
            mask,
            guesses: Vec::new(),
            mistakes: 0,
            state: SessionState::InProgress,
            started_at,
            award: None,
        }
    }

    /// Guess a letter. On a hit all matching positions are revealed; on
    /// a miss the mistake count goes up. Reaching the full gallows loses
    /// the game, a fully revealed word wins it. Returns the state after
    /// the transition.
    pub fn guess(&mut self, actor_id: i64, letter: char) -> Result<SessionState, Rejection> {
        self.check_actor(actor_id)?;
        let letter = letter.to_ascii_lowercase();
        if !is_valid_letter(letter) {
            return Err(Rejection::InvalidLetter);
        }
        if self.guesses.contains(&letter) {
            return Err(Rejection::AlreadyGuessed);
        }

        self.guesses.push(letter);

        if !self.word.contains(letter) {
            self.mistakes += 1;
            if self.mistakes >= Gallows::MAX_MISTAKES {
                self.state = SessionState::Lost;
                self.award = Some(PointAward {
                    points: PARTICIPATION_POINTS,
                    bonus: 0,
                });
            }
            return Ok(self.state);
        }

        for (slot, c) in self.mask.iter_mut().zip(self.word.chars()) {
            if c == letter {
                *slot = c;
            }
        }
        if !self.mask.contains(&MASK_PLACEHOLDER) {
            self.state = SessionState::Won;
            // Fewer mistakes, bigger bonus.
            let spare = Gallows::MAX_MISTAKES - self.mistakes;
            self.award = Some(PointAward {
                points: PARTICIPATION_POINTS,
                bonus: i64::from(spare.div_ceil(2)),
            });
        }
        Ok(self.state)
    }

    /// Cancel the session. Pays out participation only when the game ran
    /// long enough and saw enough guesses to rule out stop-immediately
    /// farming.
    pub fn stop(&mut self, actor_id: i64, now: OffsetDateTime) -> Result<SessionState, Rejection> {
        self.check_actor(actor_id)?;
        self.state = SessionState::Cancelled;
        let earnest =
            self.elapsed(now) > STOP_MIN_ELAPSED && self.guesses.len() >= STOP_MIN_GUESSES;
        if earnest {
            self.award = Some(PointAward {
                points: PARTICIPATION_POINTS,
                bonus: 0,
            });
        }
        Ok(self.state)
    }

    /// Idle expiry. Returns whether the timeout actually fired; firing
    /// against an already-terminal session is a no-op.
    pub fn time_out(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = SessionState::TimedOut;
        true
    }

    /// Take the award produced by the terminal transition. Subsequent
    /// calls return `None`, which is what bounds the ledger to at most
    /// one call per session.
    pub fn take_award(&mut self) -> Option<PointAward> {
        self.award.take()
    }

    fn check_actor(&self, actor_id: i64) -> Result<(), Rejection> {
        if actor_id != self.author_id {
            return Err(Rejection::NotAuthor);
        }
        if self.state.is_terminal() {
            return Err(Rejection::Finished);
        }
        Ok(())
    }

    pub fn author_id(&self) -> i64 {
        self.author_id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// The word with unguessed letters masked out.
    pub fn masked_word(&self) -> String {
        self.mask.iter().collect()
    }

    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    pub fn elapsed(&self, now: OffsetDateTime) -> Duration {
        now - self.started_at
    }
}
