//! Domain models for ABFE batch preparation: alchemical phases and lambda
//! schedules, replicate naming, and the per-replicate folder layout.

pub mod layout;
pub mod phase;
pub mod replicate;
