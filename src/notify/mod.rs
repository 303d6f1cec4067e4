//! Operator notifications.
//!
//! # Design Decisions
//! - Notification delivery is best-effort: failures are logged, never
//!   propagated, and never affect the claim outcome
//! - An unconfigured channel degrades to a logged no-op
//! - The claimer depends on the [`Notifier`] trait, so tests can count
//!   messages without any network

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::TelegramConfig;

pub mod telegram;

pub use telegram::TelegramNotifier;

/// Best-effort delivery of a plain-text status message to the operator.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str);
}

/// No-op notifier used when no channel is configured.
#[derive(Debug, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify(&self, _text: &str) {
        tracing::warn!("telegram is not configured, dropping notification");
    }
}

/// Build the notifier the config calls for.
pub fn from_config(config: &TelegramConfig) -> Arc<dyn Notifier> {
    match (&config.bot_token, &config.chat_id) {
        (Some(token), Some(chat_id)) => Arc::new(TelegramNotifier::new(token, chat_id)),
        _ => {
            tracing::warn!("telegram is not configured, notifications are disabled");
            Arc::new(DisabledNotifier)
        }
    }
}
