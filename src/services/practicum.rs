use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Запрос на сервер не отправлен. {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Не удалось получить ответ API, error-status: {status}")]
    UnexpectedStatus { status: StatusCode },
    #[error("Ответ от сервера не в json формате. {0}")]
    InvalidJson(#[source] reqwest::Error),
}

/// Source of homework status answers
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch every status change since `timestamp`; `0` means "now".
    async fn get_api_answer(&self, timestamp: i64) -> Result<Value, FetchError>;
}

/// Practicum homework_statuses API client
pub struct PracticumClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl PracticumClient {
    pub fn new(token: String, endpoint: String) -> Self {
        Self {
            client: Client::new(),
            token,
            endpoint,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.practicum_token.clone(),
            config.practicum_endpoint.clone(),
        )
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn get_api_answer(&self, timestamp: i64) -> Result<Value, FetchError> {
        let from_date = if timestamp == 0 {
            chrono::Utc::now().timestamp()
        } else {
            timestamp
        };

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        tracing::info!(from_date, "Request sent to homework API");

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus { status });
        }

        response.json().await.map_err(FetchError::InvalidJson)
    }
}
