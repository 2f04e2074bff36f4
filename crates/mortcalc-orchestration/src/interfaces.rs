//! Orchestration interfaces: actions, lifecycle states, and the service seam.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use mortcalc_core::constants::EXPORT_FILENAME;
use mortcalc_core::request::CalculationRequest;
use mortcalc_core::result::CalculationResult;

use crate::error::ClientError;

/// A user action that talks to the calculation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Compute and display a schedule.
    Calculate,
    /// Download the schedule as a CSV file.
    Export,
}

impl Action {
    /// Both actions.
    pub const ALL: [Action; 2] = [Self::Calculate, Self::Export];

    /// Service path for this action.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Calculate => "/calculate",
            Self::Export => "/export",
        }
    }

    /// Message shown when the service gives no usable explanation.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Calculate => "calculation failed",
            Self::Export => "export failed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Calculate => "calculate",
            Self::Export => "export",
        })
    }
}

/// Lifecycle state of one action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// A downloaded schedule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Name the file is saved under.
    pub filename: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Wrap an export payload under the standard file name.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            filename: EXPORT_FILENAME.to_string(),
            bytes,
        }
    }

    /// Write the file into `dir`, returning the full path.
    pub fn save_in(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        self.save_as(&path)?;
        Ok(path)
    }

    /// Write the file to an explicit path.
    pub fn save_as(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, &self.bytes)?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "export saved");
        Ok(())
    }
}

/// What a successful action produced.
#[derive(Debug, Clone)]
pub enum ActionOutput {
    Calculation(CalculationResult),
    Export(ExportFile),
}

/// The calculation service, as seen by the client.
pub trait RemoteService: Send + Sync {
    /// `POST /calculate`.
    fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult, ClientError>;

    /// `POST /export`.
    fn export(&self, request: &CalculationRequest) -> Result<ExportFile, ClientError>;
}

/// Receives lifecycle notifications for an action.
pub trait LifecycleObserver: Send + Sync {
    /// The action entered `state`.
    fn on_transition(&self, action: Action, state: ActionState);

    /// The loading affordance should be shown (`true`) or cleared (`false`).
    fn on_loading(&self, action: Action, loading: bool);
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl LifecycleObserver for NoOpObserver {
    fn on_transition(&self, _action: Action, _state: ActionState) {}
    fn on_loading(&self, _action: Action, _loading: bool) {}
}
