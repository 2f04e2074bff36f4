//! mortcalc library: configuration and dispatch for the loan calculator client.

pub mod app;
pub mod config;
pub mod errors;
