use homework_bot::config::environment::log_file_from_env;
use homework_bot::config::{init_logging, init_stdout_logging, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    let log_file = log_file_from_env();

    if let Err(file_error) = init_logging(&log_file) {
        if let Err(e) = init_stdout_logging() {
            eprintln!("{}", e);
        }
        tracing::warn!(error = %file_error, "Logging to stdout only");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(critical = true, error = %e, "Configuration is incomplete, bot not started");
            std::process::exit(0);
        }
    };

    let mut bot = homework_bot::create_bot(&config);

    bot.probe().await;
    bot.run().await;
}
