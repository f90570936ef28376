//! Game session runtime.
//!
//! Each session lives behind one async mutex: player input, ledger
//! settlement and the idle watchdog all take the same lock, so a
//! timeout can never race a manual stop into a double terminal
//! transition. The watchdog re-checks the deadline after waking because
//! accepted interactions push it forward.

use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::card::{SessionCard, Settlement};
use crate::domain::rules::SESSION_IDLE_TIMEOUT;
use crate::domain::session::{GameSession, Rejection};
use crate::error::AppError;
use crate::notify::Notice;
use crate::services::ledger;
use crate::state::AppState;

pub const GAME_NAME: &str = "hangman";

/// What the caller shows the actor after an input.
#[derive(Debug, Clone)]
pub enum SessionReply {
    /// Game continues; updated card.
    Progress(SessionCard),
    /// Terminal transition happened and was settled with the ledger.
    Finished(SessionCard),
    /// Input refused; session untouched.
    Rejected(Rejection),
}

struct ActiveSession {
    session: GameSession,
    deadline: Instant,
}

/// Cloneable handle to one running session.
#[derive(Clone)]
pub struct SessionHandle {
    shared: Arc<Mutex<ActiveSession>>,
}

impl SessionHandle {
    /// Snapshot of the current session state (primarily for displays
    /// and tests).
    pub async fn snapshot(&self) -> GameSession {
        self.shared.lock().await.session.clone()
    }
}

pub struct GameService {
    state: Arc<AppState>,
}

impl GameService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Start a session with a word drawn from the configured list.
    pub fn start_session(&self, author_id: i64) -> SessionHandle {
        let word = self.state.words.pick().to_string();
        self.start_session_with_word(author_id, word)
    }

    /// Start a session with a caller-chosen word.
    pub fn start_session_with_word(&self, author_id: i64, word: String) -> SessionHandle {
        let session = GameSession::new(author_id, word, OffsetDateTime::now_utc());
        info!(author_id, "session started");
        let shared = Arc::new(Mutex::new(ActiveSession {
            session,
            deadline: Instant::now() + SESSION_IDLE_TIMEOUT.unsigned_abs(),
        }));
        tokio::spawn(watchdog(self.state.clone(), Arc::clone(&shared)));
        SessionHandle { shared }
    }

    /// Apply one letter guess.
    pub async fn guess(
        &self,
        handle: &SessionHandle,
        actor_id: i64,
        letter: char,
    ) -> Result<SessionReply, AppError> {
        let mut active = handle.shared.lock().await;
        match active.session.guess(actor_id, letter) {
            Err(rejection) => Ok(SessionReply::Rejected(rejection)),
            Ok(state) if state.is_terminal() => {
                let card = self.settle(&mut active.session).await?;
                Ok(SessionReply::Finished(card))
            }
            Ok(_) => {
                active.deadline = Instant::now() + SESSION_IDLE_TIMEOUT.unsigned_abs();
                let card =
                    SessionCard::render(&active.session, OffsetDateTime::now_utc(), None);
                Ok(SessionReply::Progress(card))
            }
        }
    }

    /// Cancel the session (author only).
    pub async fn stop(
        &self,
        handle: &SessionHandle,
        actor_id: i64,
    ) -> Result<SessionReply, AppError> {
        let mut active = handle.shared.lock().await;
        match active.session.stop(actor_id, OffsetDateTime::now_utc()) {
            Err(rejection) => Ok(SessionReply::Rejected(rejection)),
            Ok(_) => {
                let card = self.settle(&mut active.session).await?;
                Ok(SessionReply::Finished(card))
            }
        }
    }

    /// Settle a terminal session: hand the award (if any) to the ledger
    /// exactly once, render the closing card and push it to the display
    /// sink.
    async fn settle(&self, session: &mut GameSession) -> Result<SessionCard, AppError> {
        let settlement = match session.take_award() {
            Some(award) => {
                let credited = ledger::award_points(
                    &self.state,
                    session.author_id(),
                    GAME_NAME,
                    award.points,
                    award.bonus,
                )
                .await?;
                Settlement {
                    credited,
                    requested: award.points + award.bonus,
                }
            }
            None => Settlement::default(),
        };

        let card = SessionCard::render(session, OffsetDateTime::now_utc(), Some(settlement));
        let text = card.to_string();
        if let Err(e) = self
            .state
            .display
            .send(Notice::plain(&text, &self.state.game.display_name))
            .await
        {
            warn!(author_id = session.author_id(), error = %e, "failed to push session card");
        }
        Ok(card)
    }
}

/// Per-session idle timer. Fires the timeout transition unless the
/// session reached a terminal state first; the terminal check happens
/// under the session lock, which is what makes a late fire a no-op.
async fn watchdog(state: Arc<AppState>, shared: Arc<Mutex<ActiveSession>>) {
    loop {
        let deadline = shared.lock().await.deadline;
        tokio::time::sleep_until(deadline).await;

        let mut active = shared.lock().await;
        if active.session.state().is_terminal() {
            return;
        }
        if Instant::now() < active.deadline {
            // An interaction pushed the deadline while we slept.
            continue;
        }
        if active.session.time_out() {
            info!(author_id = active.session.author_id(), "session timed out");
            let card = SessionCard::render(
                &active.session,
                OffsetDateTime::now_utc(),
                Some(Settlement::default()),
            );
            let text = format!("Your hangman game timed out\n{card}");
            // Best effort; the author may be unreachable.
            if let Err(e) = state
                .display
                .send(Notice::plain(&text, &state.game.display_name))
                .await
            {
                debug!(author_id = active.session.author_id(), error = %e, "timeout notice failed");
            }
        }
        return;
    }
}
