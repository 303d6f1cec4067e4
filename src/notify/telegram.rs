//! Telegram Bot API notifier.
//!
//! Sends plain-text messages via `sendMessage`. Every failure path is
//! logged and swallowed; notification delivery never affects the claim.

use std::time::Duration;

use async_trait::async_trait;

use super::Notifier;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Notifier backed by a Telegram bot and a fixed operator chat.
pub struct TelegramNotifier {
    http: reqwest::Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(SEND_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_base: TELEGRAM_API_BASE.to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    #[cfg(test)]
    fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) {
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        match self.http.post(self.endpoint()).json(&body).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("telegram notification sent");
            }
            Ok(response) => {
                tracing::error!(
                    status = %response.status(),
                    "telegram API rejected the notification"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to send telegram notification");
            }
        }
    }
}

// Keep the bot token out of Debug output.
impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
