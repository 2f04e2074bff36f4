//! Loading spinner driven by request lifecycle notifications.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;

use mortcalc_orchestration::interfaces::{Action, ActionState, LifecycleObserver};

/// Shows an `indicatif` spinner while a request is being submitted.
pub struct CLIProgressReporter {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl CLIProgressReporter {
    /// Create a reporter; a disabled one never draws anything.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
        }
    }

    /// Whether a spinner is currently shown.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.bar.lock().is_some()
    }

    fn start(&self, action: Action) {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
            bar.set_style(style);
        }
        bar.set_message(loading_message(action));
        bar.enable_steady_tick(Duration::from_millis(80));
        if let Some(previous) = self.bar.lock().replace(bar) {
            previous.finish_and_clear();
        }
    }

    fn stop(&self) {
        if let Some(bar) = self.bar.lock().take() {
            bar.finish_and_clear();
        }
    }
}

impl LifecycleObserver for CLIProgressReporter {
    fn on_transition(&self, action: Action, state: ActionState) {
        tracing::debug!(%action, ?state, "lifecycle transition");
    }

    fn on_loading(&self, action: Action, loading: bool) {
        if !self.enabled {
            return;
        }
        if loading {
            self.start(action);
        } else {
            self.stop();
        }
    }
}

fn loading_message(action: Action) -> &'static str {
    match action {
        Action::Calculate => "Calculating schedule...",
        Action::Export => "Exporting schedule...",
    }
}
