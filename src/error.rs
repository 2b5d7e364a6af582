//! Sign-up workflow errors

use crate::api::ApiError;
use crate::state::ValidationErrors;
use thiserror::Error;

/// Why a submit attempt ended without registering the user
#[derive(Error, Debug)]
pub enum SignUpError {
    /// Field-level violations; shown inline, never as an alert
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Any other failure (network, server)
    #[error("Submission failed: {0}")]
    Submission(#[from] ApiError),
}
