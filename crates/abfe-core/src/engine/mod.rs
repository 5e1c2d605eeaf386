//! The stateful setup machinery: run configuration, per-replicate context,
//! progress reporting, errors and the setup tasks themselves.

pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod tasks;
