// src/config/logging.rs
// DOCUMENTATION: Logger setup
// PURPOSE: Install env_logger with RUST_LOG taking precedence over LOG_LEVEL

use crate::config::Config;
use env_logger::Env;

/// Default filter when neither RUST_LOG nor LOG_LEVEL is usable
const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Filter string derived from configuration
pub fn log_filter(config: &Config) -> String {
    if config.log_level.is_empty() {
        DEFAULT_FILTER.to_string()
    } else {
        format!("{},sqlx=warn", config.log_level)
    }
}

/// Initialize logging
/// Safe to call more than once; later calls are ignored
pub fn init_logging(config: &Config) {
    let env = Env::default().default_filter_or(log_filter(config));
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
