use std::env;
use std::time::Duration;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_INITIAL_FROM_DATE: i64 = 1664843799;
pub const DEFAULT_LOG_FILE: &str = "program.log";

/// Variables that must be present before the bot is allowed to start
pub const REQUIRED_VARIABLES: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: String, value: String },
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub practicum_endpoint: String,
    pub telegram_api_url: String,
    pub retry_period: Duration,
    pub initial_from_date: i64,
    pub log_file: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Log path from a raw `LOG_FILE` value; blank counts as unset.
pub fn log_file_or_default(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

/// Log path from the process environment, available before `Config` is built
/// so logging can report configuration failures.
pub fn log_file_from_env() -> String {
    log_file_or_default(env::var("LOG_FILE").ok())
}

impl Config {
    /// Read the process environment. `.env` is loaded once by `main`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    /// Empty values count as missing, and every missing name is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| non_blank(lookup(name));

        let missing: Vec<String> = REQUIRED_VARIABLES
            .iter()
            .filter(|name| read(**name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let practicum_token = read("PRACTICUM_TOKEN").unwrap_or_default();
        let telegram_token = read("TELEGRAM_TOKEN").unwrap_or_default();
        let telegram_chat_id = read("TELEGRAM_CHAT_ID").unwrap_or_default();

        let practicum_endpoint = read("PRACTICUM_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string());

        let telegram_api_url = read("TELEGRAM_API_URL")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        let retry_period_secs = match read("RETRY_PERIOD") {
            Some(value) => match parse_number::<u64>("RETRY_PERIOD", &value)? {
                0 => {
                    return Err(ConfigError::Invalid {
                        name: "RETRY_PERIOD".to_string(),
                        value,
                    })
                }
                secs => secs,
            },
            None => DEFAULT_RETRY_PERIOD_SECS,
        };

        let initial_from_date = match read("INITIAL_FROM_DATE") {
            Some(value) => parse_number::<i64>("INITIAL_FROM_DATE", &value)?,
            None => DEFAULT_INITIAL_FROM_DATE,
        };

        let log_file = log_file_or_default(lookup("LOG_FILE"));

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint,
            telegram_api_url,
            retry_period: Duration::from_secs(retry_period_secs),
            initial_from_date,
            log_file,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name: name.to_string(),
        value: value.to_string(),
    })
}
