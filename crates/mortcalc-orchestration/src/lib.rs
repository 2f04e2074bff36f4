//! # mortcalc-orchestration
//!
//! Request lifecycle for calculate and export actions, the calculation
//! service boundary, and the client error taxonomy.

pub mod error;
pub mod http;
pub mod interfaces;
pub mod orchestrator;

pub use error::ClientError;
pub use http::HttpService;
pub use interfaces::{
    Action, ActionOutput, ActionState, ExportFile, LifecycleObserver, NoOpObserver, RemoteService,
};
pub use orchestrator::{spawn_action, Outcome, RequestOrchestrator};
