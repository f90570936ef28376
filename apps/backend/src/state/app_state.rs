//! Shared application state: the injected collaborators every service
//! call needs. Built once at startup (or per test) and passed around in
//! an `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::game::GameConfig;
use crate::config::words::WordList;
use crate::notify::Notifier;

pub struct AppState {
    /// Connection-pooled record store.
    pub db: DatabaseConnection,
    pub game: GameConfig,
    pub words: WordList,
    /// Operational log sink: award notices and skew reports.
    pub program_log: Arc<dyn Notifier>,
    /// Player-facing sink: session cards and timeout notices.
    pub display: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        game: GameConfig,
        words: WordList,
        program_log: Arc<dyn Notifier>,
        display: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            db,
            game,
            words,
            program_log,
            display,
        }
    }
}
