//! # mortcalc-cli
//!
//! One-shot terminal output for calculation results, the loading spinner,
//! and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod spinner;
pub mod ui;

pub use presenter::CLIResultPresenter;
pub use spinner::CLIProgressReporter;
