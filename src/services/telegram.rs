use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Telegram API returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Telegram rejected message: {0}")]
    Rejected(String),
}

/// Destination for status and failure messages
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API client bound to a single chat.
/// The bot token is part of the request URL, so reqwest errors are stripped
/// of their URL before they can reach a log line.
pub struct TelegramBot {
    client: Client,
    api_url: String,
    token: String,
    chat_id: String,
}

impl TelegramBot {
    pub fn new(api_url: String, token: String, chat_id: String) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            chat_id,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
            config.telegram_chat_id.clone(),
        )
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.token)
    }
}

#[async_trait]
impl Notifier for TelegramBot {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reply: TelegramResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::Network(e.without_url()))?;
        if !reply.ok {
            return Err(NotifyError::Rejected(
                reply.description.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(())
    }
}

/// Best-effort delivery: failures are logged and never reach the caller.
pub async fn send_message(notifier: &dyn Notifier, message: &str) -> bool {
    match notifier.send(message).await {
        Ok(()) => {
            tracing::debug!("Message sent to Telegram");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Message not sent to Telegram");
            false
        }
    }
}
