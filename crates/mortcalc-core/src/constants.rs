//! Constants for input limits, presentation timing, and exit codes.

use std::time::Duration;

/// Shortest accepted loan term in years.
pub const MIN_YEARS: u32 = 1;

/// Longest accepted loan term in years.
pub const MAX_YEARS: u32 = 50;

/// Upper bound (inclusive) for the annual interest rate, in percent.
pub const MAX_INTEREST_RATE: f64 = 100.0;

/// Maximum number of digits kept in a currency input field while typing.
pub const CURRENCY_INPUT_MAX_DIGITS: usize = 12;

/// Delay between the panel switch and the start of the summary counters.
pub const COUNTER_START_DELAY: Duration = Duration::from_millis(200);

/// Duration of a single summary counter animation.
pub const COUNTER_DURATION: Duration = Duration::from_secs(1);

/// Delay between the counter start and the progress indicator update.
pub const PROGRESS_APPLY_DELAY: Duration = Duration::from_millis(500);

/// Delay between un-hiding a panel and starting its fade-in.
pub const PANEL_SHOW_DELAY: Duration = Duration::from_millis(10);

/// Duration of the panel fade/slide transition.
pub const PANEL_TRANSITION: Duration = Duration::from_millis(300);

/// File name used when saving an exported schedule.
pub const EXPORT_FILENAME: &str = "mortgage_schedule.csv";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The loan parameters were rejected before any request was made.
    pub const ERROR_VALIDATION: i32 = 2;
    /// The calculation service answered with an error.
    pub const ERROR_SERVICE: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// The calculation service could not be reached or answered garbage.
    pub const ERROR_TRANSPORT: i32 = 5;
}
