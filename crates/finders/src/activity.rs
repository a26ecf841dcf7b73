//! Activity finder trait and in-memory implementation.

use async_trait::async_trait;
use common::{ActivityDeal, Destination};

use crate::error::FinderError;
use crate::memory::InMemoryDealSource;

/// Trait for looking up activities at a destination.
#[async_trait]
pub trait ActivityFinder: Send + Sync {
    /// Returns every activity deal for the destination, or one error.
    async fn find(&self, destination: &Destination) -> Result<Vec<ActivityDeal>, FinderError>;
}

/// In-memory activity finder for testing.
pub type InMemoryActivityFinder = InMemoryDealSource<ActivityDeal>;

#[async_trait]
impl ActivityFinder for InMemoryDealSource<ActivityDeal> {
    async fn find(&self, destination: &Destination) -> Result<Vec<ActivityDeal>, FinderError> {
        self.lookup(destination).await
    }
}
