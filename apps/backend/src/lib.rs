#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod notify;
pub mod repos;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::db::DbConfig;
pub use config::game::GameConfig;
pub use config::words::WordList;
pub use db::with_txn;
pub use error::AppError;
pub use infra::db::{bootstrap_db, connect_db};
pub use notify::{Notice, Notifier, NotifyError, WebhookNotifier};
pub use services::games::{GameService, SessionHandle, SessionReply};
pub use state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
