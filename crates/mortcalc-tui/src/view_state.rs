//! Show/hide transitions for the error and results panels.
//!
//! Showing a panel puts it in the layout immediately and fades it in after
//! a short delay. Hiding fades it out and keeps it in the layout until the
//! transition ends. Panels are independent: showing one never hides the
//! other.

use std::time::{Duration, Instant};

use mortcalc_core::constants::{PANEL_SHOW_DELAY, PANEL_TRANSITION};

/// A panel whose visibility is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Error,
    Results,
}

/// Visibility of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Out of the layout.
    #[default]
    Hidden,
    /// In the layout, fading in since the instant given.
    Entering { since: Instant },
    /// Fully shown.
    Visible,
    /// Still in the layout, fading out since the instant given.
    Leaving { since: Instant },
}

/// Tracks the visibility of the error and results panels.
#[derive(Debug, Clone, Default)]
pub struct ViewStateController {
    error: Visibility,
    results: Visibility,
}

impl ViewStateController {
    /// Both panels hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start showing `panel`. A panel already shown or entering is left as is.
    pub fn show(&mut self, panel: Panel, now: Instant) {
        let slot = self.slot(panel);
        match *slot {
            Visibility::Hidden | Visibility::Leaving { .. } => {
                *slot = Visibility::Entering { since: now };
            }
            Visibility::Entering { .. } | Visibility::Visible => {}
        }
    }

    /// Start hiding `panel`. A hidden or leaving panel is left as is.
    ///
    /// The fade-out starts from the current opacity, so a panel caught
    /// mid-entry fades from where it is and leaves sooner.
    pub fn hide(&mut self, panel: Panel, now: Instant) {
        let opacity = self.opacity(panel, now);
        let slot = self.slot(panel);
        match *slot {
            Visibility::Entering { .. } | Visibility::Visible => {
                let faded = PANEL_TRANSITION.mul_f64(1.0 - opacity);
                *slot = match now.checked_sub(faded) {
                    Some(since) => Visibility::Leaving { since },
                    None => Visibility::Hidden,
                };
            }
            Visibility::Hidden | Visibility::Leaving { .. } => {}
        }
    }

    /// Settle finished transitions.
    pub fn tick(&mut self, now: Instant) {
        for panel in [Panel::Error, Panel::Results] {
            let settled = settle(*self.slot(panel), now);
            *self.slot(panel) = settled;
        }
    }

    /// Visibility of `panel` as of `now`, with finished transitions settled.
    #[must_use]
    pub fn visibility(&self, panel: Panel, now: Instant) -> Visibility {
        settle(self.get(panel), now)
    }

    /// Whether `panel` occupies space in the layout at `now`.
    #[must_use]
    pub fn is_in_layout(&self, panel: Panel, now: Instant) -> bool {
        self.visibility(panel, now) != Visibility::Hidden
    }

    /// Opacity of `panel` in `[0, 1]` at `now`.
    #[must_use]
    pub fn opacity(&self, panel: Panel, now: Instant) -> f64 {
        match self.visibility(panel, now) {
            Visibility::Hidden => 0.0,
            Visibility::Visible => 1.0,
            Visibility::Entering { since } => {
                let elapsed = now.saturating_duration_since(since);
                fraction(elapsed.saturating_sub(PANEL_SHOW_DELAY), PANEL_TRANSITION)
            }
            Visibility::Leaving { since } => {
                1.0 - fraction(now.saturating_duration_since(since), PANEL_TRANSITION)
            }
        }
    }

    fn get(&self, panel: Panel) -> Visibility {
        match panel {
            Panel::Error => self.error,
            Panel::Results => self.results,
        }
    }

    fn slot(&mut self, panel: Panel) -> &mut Visibility {
        match panel {
            Panel::Error => &mut self.error,
            Panel::Results => &mut self.results,
        }
    }
}

fn settle(visibility: Visibility, now: Instant) -> Visibility {
    match visibility {
        Visibility::Entering { since }
            if now.saturating_duration_since(since) >= PANEL_SHOW_DELAY + PANEL_TRANSITION =>
        {
            Visibility::Visible
        }
        Visibility::Leaving { since } if now.saturating_duration_since(since) >= PANEL_TRANSITION => {
            Visibility::Hidden
        }
        other => other,
    }
}

fn fraction(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}
