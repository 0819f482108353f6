//! Per-Gateway Locks
//!
//! Serializes device quota check-and-write sequences that target the same
//! gateway. Locks are in-process only: several service instances sharing one
//! database are not covered.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::models::gateway::GatewayId;

/// Registry of async locks keyed by gateway ID
#[derive(Debug, Default)]
pub struct GatewayLocks {
    locks: Mutex<HashMap<GatewayId, Arc<AsyncMutex<()>>>>,
}

impl GatewayLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to a gateway's device set.
    ///
    /// The lock is released when the returned guard is dropped.
    pub async fn acquire(&self, gateway_id: &GatewayId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries only referenced by the map have no holder and no waiter.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(gateway_id.clone()).or_default().clone()
        };

        lock.lock_owned().await
    }

    /// Number of gateways with a live lock entry
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn should_serialize_same_gateway() {
        let locks = Arc::new(GatewayLocks::new());
        let id = GatewayId::new();

        let guard = locks.acquire(&id).await;

        let contender = {
            let locks = locks.clone();
            let id = id.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(&id).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        contender.await.unwrap();
    }

    #[tokio::test]
    async fn should_not_block_other_gateways() {
        let locks = GatewayLocks::new();
        let _first = locks.acquire(&GatewayId::new()).await;

        let second = tokio::time::timeout(Duration::from_millis(100), locks.acquire(&GatewayId::new())).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn should_prune_released_entries() {
        let locks = GatewayLocks::new();
        {
            let _guard = locks.acquire(&GatewayId::new()).await;
        }
        let _guard = locks.acquire(&GatewayId::new()).await;

        assert_eq!(locks.len(), 1);
    }
}
