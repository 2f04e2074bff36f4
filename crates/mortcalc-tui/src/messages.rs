//! TUI message types (Elm Messages).

use mortcalc_orchestration::interfaces::{Action, ActionState};

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// An action's orchestrator changed state.
    Transition { action: Action, state: ActionState },
    /// An action's loading affordance was raised or cleared.
    Loading { action: Action, loading: bool },
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Tick event for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
}
