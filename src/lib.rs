pub mod config;
pub mod modules;
pub mod services;

use config::Config;
use services::monitor::HomeworkMonitor;
use services::practicum::PracticumClient;
use services::telegram::TelegramBot;

pub type Bot = HomeworkMonitor<PracticumClient, TelegramBot>;

/// Wire the Practicum client and Telegram bot into a monitor.
/// Only callable with a validated `Config`, so no request can be made
/// before every required variable is present.
pub fn create_bot(config: &Config) -> Bot {
    HomeworkMonitor::from_config(
        PracticumClient::from_config(config),
        TelegramBot::from_config(config),
        config,
    )
}
