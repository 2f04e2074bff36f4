//! Client error taxonomy.

use mortcalc_core::constants::exit_codes;
use mortcalc_core::validation::ValidationError;

/// Everything that can end a calculate or export action unsuccessfully.
///
/// The display text is what the user sees in the error panel.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The form was rejected locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service could not be reached, or answered with something unreadable.
    #[error("{message}")]
    Transport {
        /// Generic user-facing message for the action.
        message: &'static str,
        /// Diagnostic detail, logged but never shown.
        detail: String,
    },

    /// The service answered with an error status or an explicit error message.
    #[error("{message}")]
    Service {
        /// HTTP status of the response.
        status: u16,
        /// Message passed through to the user verbatim.
        message: String,
    },
}

impl ClientError {
    /// Message for the error panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether this is a local validation failure rather than a system fault.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => exit_codes::ERROR_VALIDATION,
            Self::Transport { .. } => exit_codes::ERROR_TRANSPORT,
            Self::Service { .. } => exit_codes::ERROR_SERVICE,
        }
    }
}
