//! Flight finder trait and in-memory implementation.

use async_trait::async_trait;
use common::{Destination, FlightDeal};

use crate::error::FinderError;
use crate::memory::InMemoryDealSource;

/// Trait for looking up flights to a destination.
#[async_trait]
pub trait FlightFinder: Send + Sync {
    /// Returns every flight deal for the destination, or one error.
    async fn find(&self, destination: &Destination) -> Result<Vec<FlightDeal>, FinderError>;
}

/// In-memory flight finder for testing.
pub type InMemoryFlightFinder = InMemoryDealSource<FlightDeal>;

#[async_trait]
impl FlightFinder for InMemoryDealSource<FlightDeal> {
    async fn find(&self, destination: &Destination) -> Result<Vec<FlightDeal>, FinderError> {
        self.lookup(destination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_returns_canned_flights() {
        let finder = InMemoryFlightFinder::new();
        finder.set_deals("Tokyo", vec![FlightDeal::new("JAL", 1200.50)]);

        let flights = finder.find(&Destination::from("Tokyo")).await.unwrap();
        assert_eq!(flights, vec![FlightDeal::new("JAL", 1200.50)]);
    }

    #[tokio::test]
    async fn test_find_through_trait_object() {
        let finder = InMemoryFlightFinder::new();
        finder.set_failure("Bali", "no flights available for Bali");
        let boxed: Box<dyn FlightFinder> = Box::new(finder.clone());

        let err = boxed.find(&Destination::from("Bali")).await.unwrap_err();
        assert_eq!(err.to_string(), "no flights available for Bali");
        assert_eq!(finder.call_count(), 1);
    }
}
