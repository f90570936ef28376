//! Notification sink.
//!
//! The ledger pushes award notices here and the game runtime pushes
//! rendered session cards. Sends are fire-and-forget from the caller's
//! point of view: failures are surfaced as `NotifyError` so callers can
//! log them, but nothing upstream ever rolls back because a sink was
//! down.

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("notification sink rejected the message: status {status}")]
    Rejected { status: u16 },
}

/// One outbound human-readable message.
#[derive(Debug, Clone)]
pub struct Notice<'a> {
    pub text: &'a str,
    pub display_name: &'a str,
    pub avatar_url: Option<&'a str>,
    /// When false, user/role mentions inside `text` stay inert.
    pub allow_mentions: bool,
}

impl<'a> Notice<'a> {
    pub fn plain(text: &'a str, display_name: &'a str) -> Self {
        Self {
            text,
            display_name,
            avatar_url: None,
            allow_mentions: false,
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notice: Notice<'_>) -> Result<(), NotifyError>;
}

/// Webhook-backed sink posting JSON payloads.
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, notice: Notice<'_>) -> Result<(), NotifyError> {
        let parse: &[&str] = if notice.allow_mentions {
            &["users"]
        } else {
            &[]
        };
        let payload = json!({
            "content": notice.text,
            "username": notice.display_name,
            "avatar_url": notice.avatar_url,
            "allowed_mentions": { "parse": parse },
        });
        let response = self.client.post(&self.url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(NotifyError::Rejected {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}
