//! Request lifecycle: validate, submit, report, and return to idle.
//!
//! Each action owns one [`RequestOrchestrator`]. A run moves it through
//! `Idle → Validating → Submitting → Succeeded | Failed → Idle`; a run
//! started while another is in flight is rejected without touching the
//! network. The loading affordance is cleared on every exit path, including
//! panics inside the service call, by guards that act on drop.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use parking_lot::Mutex;

use mortcalc_core::fields::FormSnapshot;
use mortcalc_core::validation::validate;

use crate::error::ClientError;
use crate::interfaces::{Action, ActionOutput, ActionState, LifecycleObserver, RemoteService};

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The service accepted the request.
    Succeeded(ActionOutput),
    /// Validation or the service call failed.
    Failed(ClientError),
    /// Another run of the same action was still in flight.
    Rejected,
}

/// Drives one action against the calculation service.
pub struct RequestOrchestrator {
    action: Action,
    service: Arc<dyn RemoteService>,
    state: Mutex<ActionState>,
}

impl RequestOrchestrator {
    /// Create an idle orchestrator for `action`.
    #[must_use]
    pub fn new(action: Action, service: Arc<dyn RemoteService>) -> Self {
        Self {
            action,
            service,
            state: Mutex::new(ActionState::Idle),
        }
    }

    /// The action this orchestrator drives.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ActionState {
        *self.state.lock()
    }

    /// Whether a run is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state() != ActionState::Idle
    }

    /// Run the action once for `form`, reporting every transition to `observer`.
    pub fn run(&self, form: &FormSnapshot, observer: &dyn LifecycleObserver) -> Outcome {
        {
            let mut state = self.state.lock();
            if *state != ActionState::Idle {
                tracing::debug!(action = %self.action, state = ?*state, "run rejected, action in flight");
                return Outcome::Rejected;
            }
            *state = ActionState::Validating;
        }
        let _in_flight = InFlight {
            orchestrator: self,
            observer,
        };
        observer.on_transition(self.action, ActionState::Validating);

        let request = match validate(form) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(action = %self.action, error = %e, "form rejected");
                self.enter(ActionState::Failed, observer);
                return Outcome::Failed(e.into());
            }
        };

        self.enter(ActionState::Submitting, observer);
        let result = {
            let _loading = LoadingGuard::show(self.action, observer);
            match self.action {
                Action::Calculate => self
                    .service
                    .calculate(&request)
                    .map(ActionOutput::Calculation),
                Action::Export => self.service.export(&request).map(ActionOutput::Export),
            }
        };

        match result {
            Ok(output) => {
                tracing::info!(action = %self.action, "request succeeded");
                self.enter(ActionState::Succeeded, observer);
                Outcome::Succeeded(output)
            }
            Err(e) => {
                match &e {
                    ClientError::Transport { detail, .. } => {
                        tracing::warn!(action = %self.action, %detail, "service unreachable");
                    }
                    other => tracing::warn!(action = %self.action, error = %other, "request failed"),
                }
                self.enter(ActionState::Failed, observer);
                Outcome::Failed(e)
            }
        }
    }

    fn enter(&self, state: ActionState, observer: &dyn LifecycleObserver) {
        *self.state.lock() = state;
        observer.on_transition(self.action, state);
    }
}

/// Shows the loading affordance for its lifetime.
struct LoadingGuard<'a> {
    action: Action,
    observer: &'a dyn LifecycleObserver,
}

impl<'a> LoadingGuard<'a> {
    fn show(action: Action, observer: &'a dyn LifecycleObserver) -> Self {
        observer.on_loading(action, true);
        Self { action, observer }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.observer.on_loading(self.action, false);
    }
}

/// Returns the orchestrator to idle when a run ends, however it ends.
struct InFlight<'a> {
    orchestrator: &'a RequestOrchestrator,
    observer: &'a dyn LifecycleObserver,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.orchestrator.state.lock() = ActionState::Idle;
        self.observer
            .on_transition(self.orchestrator.action, ActionState::Idle);
    }
}

/// Run `orchestrator` on a worker thread and send the outcome to `results`.
///
/// A closed receiver is not an error; the outcome is dropped.
pub fn spawn_action(
    orchestrator: Arc<RequestOrchestrator>,
    form: FormSnapshot,
    observer: Arc<dyn LifecycleObserver>,
    results: Sender<(Action, Outcome)>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let action = orchestrator.action();
        let outcome = orchestrator.run(&form, observer.as_ref());
        if results.send((action, outcome)).is_err() {
            tracing::debug!(%action, "outcome receiver gone");
        }
    })
}
