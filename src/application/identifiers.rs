//! Gateway Identifier Generator
//!
//! Draws random UUIDs until one is not yet used by a stored gateway.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::models::gateway::GatewayId;
use crate::domain::ports::GatewayRepository;
use crate::shared::errors::UseCaseError;

/// Source of random 128-bit values
pub type UuidSource = Arc<dyn Fn() -> Uuid + Send + Sync>;

/// Generates collision-free gateway identifiers
pub struct GatewayIdGenerator {
    gateway_repository: Arc<dyn GatewayRepository>,
    source: UuidSource,
    max_attempts: usize,
}

impl GatewayIdGenerator {
    /// Collisions of v4 UUIDs are never expected; hitting this many in a row
    /// means the random source is broken.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

    /// Create a generator backed by `Uuid::new_v4`
    #[must_use]
    pub fn new(gateway_repository: Arc<dyn GatewayRepository>) -> Self {
        Self::with_source(gateway_repository, Arc::new(Uuid::new_v4))
    }

    /// Create a generator with a custom random source
    #[must_use]
    pub fn with_source(gateway_repository: Arc<dyn GatewayRepository>, source: UuidSource) -> Self {
        Self {
            gateway_repository,
            source,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Produce an identifier no stored gateway currently uses
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Internal` if every attempt collided.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn new_gateway_id(&self) -> Result<GatewayId, UseCaseError> {
        for attempt in 1..=self.max_attempts {
            let id = GatewayId::from_uuid((self.source)());

            if self.gateway_repository.get_gateway(&id).await?.is_none() {
                return Ok(id);
            }

            tracing::warn!(gateway_id = %id, attempt, "Generated gateway ID already exists, retrying");
        }

        Err(UseCaseError::Internal(format!(
            "no free gateway ID after {} attempts",
            self.max_attempts
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::InMemoryRepository;
    use std::sync::Mutex;

    fn sequence(values: Vec<Uuid>) -> UuidSource {
        let values = Mutex::new(values.into_iter());
        Arc::new(move || values.lock().unwrap().next().unwrap_or_else(Uuid::new_v4))
    }

    #[tokio::test]
    async fn should_return_fresh_id() {
        let repo = InMemoryRepository::new();
        let generator = GatewayIdGenerator::new(repo);

        let id = generator.new_gateway_id().await.unwrap();
        assert_eq!(id.to_string().len(), 36);
    }

    #[tokio::test]
    async fn should_retry_when_id_collides() {
        let repo = InMemoryRepository::new();
        let existing = repo.seed_gateway("server1", "10.0.0.1");
        let fresh = Uuid::new_v4();

        let generator = GatewayIdGenerator::with_source(repo, sequence(vec![*existing.id().as_uuid(), fresh]));
        let id = generator.new_gateway_id().await.unwrap();

        assert_eq!(id.as_uuid(), &fresh);
    }

    #[tokio::test]
    async fn should_fail_when_every_attempt_collides() {
        let repo = InMemoryRepository::new();
        let existing = *repo.seed_gateway("server1", "10.0.0.1").id().as_uuid();

        let generator = GatewayIdGenerator::with_source(repo, Arc::new(move || existing));
        let result = generator.new_gateway_id().await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Internal(_)));
    }
}
