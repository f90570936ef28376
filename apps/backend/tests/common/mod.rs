#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use repgames::config::game::GameConfig;
use repgames::config::words::WordList;
use repgames::domain::Cutover;
use repgames::notify::{Notice, Notifier, NotifyError};
use repgames::state::AppState;

// Logging is auto-installed for every test binary that pulls in common.
#[ctor::ctor]
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn,sea_orm=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Fresh in-memory database with the full schema applied. Each test
/// gets its own, so tests never need to serialize on shared state.
pub async fn test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

/// Notification sink that records every sent text for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("notifier lock").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notice: Notice<'_>) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .expect("notifier lock")
            .push(notice.text.to_string());
        Ok(())
    }
}

pub struct TestHarness {
    pub state: Arc<AppState>,
    pub program_log: Arc<RecordingNotifier>,
    pub display: Arc<RecordingNotifier>,
}

/// State wired to an in-memory database and recording sinks, with the
/// default 09:00 UTC-5 day boundary.
pub async fn test_harness() -> TestHarness {
    let program_log = Arc::new(RecordingNotifier::default());
    let display = Arc::new(RecordingNotifier::default());
    let game = GameConfig {
        cutover: Cutover::default(),
        display_name: "repgames".to_string(),
    };
    let state = Arc::new(AppState::new(
        test_db().await,
        game,
        WordList::builtin(),
        program_log.clone(),
        display.clone(),
    ));
    TestHarness {
        state,
        program_log,
        display,
    }
}
