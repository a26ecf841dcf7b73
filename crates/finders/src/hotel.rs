//! Hotel finder trait and in-memory implementation.

use async_trait::async_trait;
use common::{Destination, HotelDeal};

use crate::error::FinderError;
use crate::memory::InMemoryDealSource;

/// Trait for looking up hotels at a destination.
#[async_trait]
pub trait HotelFinder: Send + Sync {
    /// Returns every hotel deal for the destination, or one error.
    async fn find(&self, destination: &Destination) -> Result<Vec<HotelDeal>, FinderError>;
}

/// In-memory hotel finder for testing.
pub type InMemoryHotelFinder = InMemoryDealSource<HotelDeal>;

#[async_trait]
impl HotelFinder for InMemoryDealSource<HotelDeal> {
    async fn find(&self, destination: &Destination) -> Result<Vec<HotelDeal>, FinderError> {
        self.lookup(destination).await
    }
}
