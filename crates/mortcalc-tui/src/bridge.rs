//! Bridge between request lifecycle notifications and TUI messages.

use crossbeam_channel::Sender;

use mortcalc_orchestration::interfaces::{Action, ActionState, LifecycleObserver};

use crate::messages::TuiMessage;

/// Lifecycle observer that forwards notifications to the TUI channel.
///
/// Runs on the worker thread; a full or closed channel drops the message.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl LifecycleObserver for TuiBridgeObserver {
    fn on_transition(&self, action: Action, state: ActionState) {
        let _ = self.tx.try_send(TuiMessage::Transition { action, state });
    }

    fn on_loading(&self, action: Action, loading: bool) {
        let _ = self.tx.try_send(TuiMessage::Loading { action, loading });
    }
}
