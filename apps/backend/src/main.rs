//! Terminal entry point.
//!
//! The chat platform gateway is an external collaborator; this binary
//! stands in for it with a stdin-driven session so the whole
//! award-and-notify pipeline can be exercised end to end.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use repgames::config::db::DbConfig;
use repgames::config::game::GameConfig;
use repgames::config::words::WordList;
use repgames::domain::card::SessionCard;
use repgames::infra::db::bootstrap_db;
use repgames::notify::{Notice, Notifier, NotifyError, WebhookNotifier};
use repgames::services::games::{GameService, SessionReply};
use repgames::state::AppState;
use repgames::AppError;

mod telemetry;

/// Fallback sink printing to stdout when no webhook is configured.
struct StdoutNotifier;

#[async_trait::async_trait]
impl Notifier for StdoutNotifier {
    async fn send(&self, notice: Notice<'_>) -> Result<(), NotifyError> {
        println!("{}", notice.text);
        Ok(())
    }
}

fn single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn sink_from_env(var: &str) -> Arc<dyn Notifier> {
    match std::env::var(var) {
        Ok(url) => Arc::new(WebhookNotifier::new(url)),
        Err(_) => Arc::new(StdoutNotifier),
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    telemetry::init_tracing();

    let db_cfg = DbConfig::from_env()?;
    let game_cfg = GameConfig::from_env()?;
    let words = WordList::from_env()?;
    let db = bootstrap_db(&db_cfg).await?;
    let state = Arc::new(AppState::new(
        db,
        game_cfg,
        words,
        sink_from_env("LOG_WEBHOOK_URL"),
        sink_from_env("DISPLAY_WEBHOOK_URL"),
    ));

    let author: i64 = std::env::var("PLAYER_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let service = GameService::new(state);
    let handle = service.start_session(author);
    let opening = SessionCard::render(
        &handle.snapshot().await,
        time::OffsetDateTime::now_utc(),
        None,
    );
    println!("{opening}");
    println!("Type a letter to guess, or 'stop' to cancel.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| AppError::internal(format!("stdin closed: {e}")))?
    {
        let input = line.trim();
        let reply = if input.eq_ignore_ascii_case("stop") {
            service.stop(&handle, author).await?
        } else if let Some(letter) = single_char(input) {
            service.guess(&handle, author, letter).await?
        } else {
            println!("Guess a single letter, or 'stop'.");
            continue;
        };

        match reply {
            SessionReply::Progress(card) => println!("{card}"),
            SessionReply::Finished(card) => {
                println!("{card}");
                break;
            }
            SessionReply::Rejected(rejection) => println!("Rejected: {rejection:?}"),
        }
    }
    Ok(())
}
