use thiserror::Error;

use crate::core::index::IndexError;
use crate::core::io::gro::GroError;
use crate::core::restraints::RestraintError;
use crate::core::templates::TemplateError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("I/O error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required input file: '{path}'")]
    MissingInput { path: PathBuf },

    #[error(transparent)]
    Restraints(#[from] RestraintError),

    #[error("Failed to read structure: {source}")]
    Structure {
        #[from]
        source: GroError,
    },

    #[error("Index construction failed: {source}")]
    Index {
        #[from]
        source: IndexError,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Topology '{path}' is malformed: {reason}")]
    Topology { path: PathBuf, reason: String },
}

impl SetupError {
    /// Attaches the offending path to a raw I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetupError::Io {
            path: path.into(),
            source,
        }
    }
}
