use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::modules::homework::{check_response, parse_status, ResponseError, StatusError};
use crate::services::practicum::{FetchError, HomeworkApi};
use crate::services::telegram::{send_message, Notifier};

use super::state::PollState;

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Response(#[from] ResponseError),
    #[error(transparent)]
    Status(#[from] StatusError),
}

impl PollError {
    /// Text relayed to the chat when a cycle fails
    pub fn failure_message(&self) -> String {
        let reason = self.to_string();
        format!("Сбой в работе программы: {}.", reason.trim_end_matches('.'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Notified { message: String, delivered: bool },
    Unchanged,
}

/// Polls the homework API and relays status changes to the notifier.
/// One cycle is fetch → validate → translate → compare → notify.
pub struct HomeworkMonitor<A, N> {
    api: A,
    notifier: N,
    state: PollState,
    retry_period: Duration,
}

impl<A: HomeworkApi, N: Notifier> HomeworkMonitor<A, N> {
    pub fn new(api: A, notifier: N, initial_cursor: i64, retry_period: Duration) -> Self {
        Self {
            api,
            notifier,
            state: PollState::new(initial_cursor),
            retry_period,
        }
    }

    pub fn from_config(api: A, notifier: N, config: &Config) -> Self {
        Self::new(api, notifier, config.initial_from_date, config.retry_period)
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// One-off connectivity check with the current timestamp, made before the
    /// loop starts. A failure is logged and otherwise ignored.
    pub async fn probe(&self) -> bool {
        match self.api.get_api_answer(chrono::Utc::now().timestamp()).await {
            Ok(_) => {
                tracing::info!("Homework API reachable");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Startup request to homework API failed");
                false
            }
        }
    }

    pub async fn poll_once(&mut self) -> Result<PollOutcome, PollError> {
        let response = self.api.get_api_answer(self.state.cursor).await?;
        let homework = check_response(&response)?;
        let message = parse_status(homework)?;

        if !self.state.is_new(&message) {
            tracing::debug!("Homework status has not changed");
            return Ok(PollOutcome::Unchanged);
        }

        let delivered = send_message(&self.notifier, &message).await;
        self.state
            .record(message.clone(), chrono::Utc::now().timestamp());

        tracing::info!(cursor = self.state.cursor, delivered, "Homework status changed");

        Ok(PollOutcome::Notified { message, delivered })
    }

    /// Run one cycle, turning any failure into a log entry and a
    /// best-effort chat message. Returns `None` when the cycle failed.
    pub async fn tick(&mut self) -> Option<PollOutcome> {
        match self.poll_once().await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                let message = e.failure_message();
                tracing::error!(error = %e, "{}", message);
                send_message(&self.notifier, &message).await;
                None
            }
        }
    }

    /// Poll until `shutdown` resolves. The signal is only observed while
    /// sleeping between cycles; a cycle in flight always completes.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        tracing::info!(
            retry_period_secs = self.retry_period.as_secs(),
            cursor = self.state.cursor,
            "Homework monitor started"
        );

        loop {
            self.tick().await;

            tokio::select! {
                _ = tokio::time::sleep(self.retry_period) => {}
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping homework monitor");
                    break;
                }
            }
        }
    }

    /// Poll until Ctrl-C.
    pub async fn run(&mut self) {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await;
    }
}
