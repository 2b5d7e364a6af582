//! Trait abstraction for the users API to enable mocking in tests

use crate::state::SignUpFormData;
use async_trait::async_trait;

use super::error::ApiError;

/// Trait for users API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApiTrait: Send + Sync {
    /// Register a new user (`POST /users`)
    async fn create_user(&self, data: &SignUpFormData) -> Result<(), ApiError>;
}
