use thiserror::Error;

use crate::core::models::molecule::MoleculeError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Engine initialization failed: {0}")]
    Initialization(String),

    #[error("Engine call '{operation}' failed: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },

    #[error("Invalid molecule geometry: {source}")]
    Molecule {
        #[from]
        source: MoleculeError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
