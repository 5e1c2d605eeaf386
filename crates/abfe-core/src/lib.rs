//! # abfeprep Core Library
//!
//! A library for preparing batches of alchemical binding free-energy (ABFE)
//! simulations with GROMACS and Hamiltonian replica exchange. It creates the
//! per-replicate folder trees, generates the physics input files (Boresch
//! restraint topology, alchemical system, index groups, staged MDP files)
//! and renders the HPC submission scripts.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless domain models (phases, lambda
//!   schedules, replicate naming, folder layout) and the file-format code
//!   (GRO reading, NDX writing, MDP/restraint/script rendering).
//!
//! - **[`engine`]: The Setup Machinery.** Run configuration with a validating
//!   builder, per-replicate context, progress reporting, and one task module
//!   per artifact class written into an ABFE folder.
//!
//! - **[`workflows`]: The Public API.** The ligand × replicate batch loop
//!   with its skip-and-warn semantics. This is the entry point for the CLI
//!   and for library users.
//!
//! Preparation is deliberately sequential and side-effect free outside the
//! target folders: no working-directory changes, no network, no state beyond
//! plain files on disk.

pub mod core;
pub mod engine;
pub mod workflows;
