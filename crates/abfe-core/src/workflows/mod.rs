//! High-level entry points tying the core models and the engine together.

pub mod setup;
