//! # mortcalc-core
//!
//! Core library for the mortcalc loan calculator client.
//! Validates raw form input into calculation requests, models the schedule
//! returned by the calculation service, formats amounts, and drives the
//! summary counter animations.

pub mod animation;
pub mod constants;
pub mod fields;
pub mod format;
pub mod request;
pub mod result;
pub mod validation;

// Re-exports
pub use animation::{ease_out_quart, CounterAnimation, CounterArena, FrameClock, SystemClock};
pub use constants::{exit_codes, EXPORT_FILENAME};
pub use fields::{sanitize_input, Field, FormSnapshot, InputKind};
pub use format::{Locale, NumberFormatter};
pub use request::{CalculationRequest, PrepaymentStrategy};
pub use result::{principal_share_percent, CalculationResult, ScheduleRow, SummaryFigure};
pub use validation::{ignored_prepayment_month, validate, ValidationError};
