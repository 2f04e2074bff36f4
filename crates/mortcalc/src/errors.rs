//! Error handling and exit codes.

use mortcalc_core::constants::exit_codes;
use mortcalc_orchestration::error::ClientError;

/// Invalid startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid timeout: {0}")]
    Timeout(String),
    #[error("{0}")]
    Locale(String),
    #[error("cannot build HTTP client: {0}")]
    HttpClient(String),
}

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(client) = err.downcast_ref::<ClientError>() {
        client.exit_code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}
