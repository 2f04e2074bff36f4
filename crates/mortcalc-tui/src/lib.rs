//! # mortcalc-tui
//!
//! Interactive loan calculator dashboard using ratatui with Elm architecture.
//!
//! The event loop is single-threaded. Remote calls run on worker threads
//! and report back through channels drained once per frame; animations are
//! sampled against a [`FrameClock`](mortcalc_core::animation::FrameClock).

pub mod bridge;
pub mod chart;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod presenter;
pub mod styles;
pub mod summary;
pub mod table;
pub mod view_state;

pub use bridge::TuiBridgeObserver;
pub use chart::ScheduleChart;
pub use form::FormModel;
pub use logs::LogScrollState;
pub use messages::TuiMessage;
pub use model::{TuiApp, TuiSettings};
pub use presenter::ResultsPresenter;
pub use table::ScheduleTable;
pub use view_state::{Panel, ViewStateController, Visibility};
