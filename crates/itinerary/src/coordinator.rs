//! Fan-out coordinator for itinerary requests.

use std::sync::Arc;
use std::time::Instant;

use common::{DealCategory, Destination};
use finders::{ActivityFinder, FinderError, FlightFinder, HotelFinder};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::response::ItineraryResponse;

/// Runs the flight, hotel and activity lookups for a destination
/// concurrently and merges whatever they return.
///
/// Each request gets its own response behind its own lock; nothing is
/// shared between requests except the finders themselves. A lookup holds
/// the lock only while writing its result, never while the finder runs.
pub struct ItineraryCoordinator {
    flights: Arc<dyn FlightFinder>,
    hotels: Arc<dyn HotelFinder>,
    activities: Arc<dyn ActivityFinder>,
}

impl ItineraryCoordinator {
    /// Creates a coordinator over the three finders.
    pub fn new<F, H, A>(flights: F, hotels: H, activities: A) -> Self
    where
        F: FlightFinder + 'static,
        H: HotelFinder + 'static,
        A: ActivityFinder + 'static,
    {
        Self {
            flights: Arc::new(flights),
            hotels: Arc::new(hotels),
            activities: Arc::new(activities),
        }
    }

    /// Collects every category of deal for the destination.
    ///
    /// Returns only after all three lookups have settled. Never fails: a
    /// failed lookup shows up as one entry in `errors` for its category.
    #[tracing::instrument(skip(self, destination), fields(destination = %destination))]
    pub async fn aggregate(&self, destination: &Destination) -> ItineraryResponse {
        metrics::counter!("itinerary_aggregations_total").increment(1);
        let started = Instant::now();
        let shared = Arc::new(Mutex::new(ItineraryResponse::new()));

        let flights = {
            let finder = Arc::clone(&self.flights);
            let destination = destination.clone();
            spawn_lookup(
                DealCategory::Flights,
                Arc::clone(&shared),
                async move { finder.find(&destination).await },
                |response, deals| response.flights = Some(deals),
            )
        };
        let hotels = {
            let finder = Arc::clone(&self.hotels);
            let destination = destination.clone();
            spawn_lookup(
                DealCategory::Hotels,
                Arc::clone(&shared),
                async move { finder.find(&destination).await },
                |response, deals| response.hotels = Some(deals),
            )
        };
        let activities = {
            let finder = Arc::clone(&self.activities);
            let destination = destination.clone();
            spawn_lookup(
                DealCategory::Activities,
                Arc::clone(&shared),
                async move { finder.find(&destination).await },
                |response, deals| response.activities = Some(deals),
            )
        };

        let (flights, hotels, activities) = tokio::join!(flights, hotels, activities);

        let mut response = std::mem::take(&mut *shared.lock().await);
        for (category, outcome) in [
            (DealCategory::Flights, flights),
            (DealCategory::Hotels, hotels),
            (DealCategory::Activities, activities),
        ] {
            if let Err(join_error) = outcome {
                if !response.is_settled(category) {
                    record_failure(
                        &mut response,
                        category,
                        FinderError::Aborted(join_error.to_string()),
                    );
                }
            }
        }

        metrics::histogram!("itinerary_aggregate_duration_seconds")
            .record(started.elapsed().as_secs_f64());
        tracing::info!(failed = response.errors.len(), "itinerary aggregated");
        response
    }
}

/// Spawns one category lookup that writes its outcome into `shared`.
fn spawn_lookup<T, Fut>(
    category: DealCategory,
    shared: Arc<Mutex<ItineraryResponse>>,
    lookup: Fut,
    store: fn(&mut ItineraryResponse, Vec<T>),
) -> JoinHandle<()>
where
    T: Send + 'static,
    Fut: Future<Output = Result<Vec<T>, FinderError>> + Send + 'static,
{
    let task = async move {
        let started = Instant::now();
        let outcome = lookup.await;
        metrics::histogram!("itinerary_finder_duration_seconds", "category" => category.as_str())
            .record(started.elapsed().as_secs_f64());

        let mut response = shared.lock().await;
        match outcome {
            Ok(deals) => {
                tracing::debug!(%category, count = deals.len(), "deals found");
                store(&mut response, deals);
            }
            Err(error) => record_failure(&mut response, category, error),
        }
    };
    tokio::spawn(task.in_current_span())
}

fn record_failure(response: &mut ItineraryResponse, category: DealCategory, error: FinderError) {
    tracing::warn!(%category, %error, "deal lookup failed");
    metrics::counter!("itinerary_category_failures_total", "category" => category.as_str())
        .increment(1);
    response.record_failure(category, error);
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use common::{ActivityDeal, FlightDeal, HotelDeal};
    use finders::{InMemoryActivityFinder, InMemoryFlightFinder, InMemoryHotelFinder};

    use super::*;

    struct PanickingFlights;

    #[async_trait]
    impl FlightFinder for PanickingFlights {
        async fn find(&self, _destination: &Destination) -> Result<Vec<FlightDeal>, FinderError> {
            panic!("flight backend crashed");
        }
    }

    fn stocked() -> (InMemoryFlightFinder, InMemoryHotelFinder, InMemoryActivityFinder) {
        let flights = InMemoryFlightFinder::new();
        flights.set_fallback(vec![FlightDeal::new("JAL", 1200.50)]);
        let hotels = InMemoryHotelFinder::new();
        hotels.set_fallback(vec![HotelDeal::new("Grand Hyatt", 350.75)]);
        let activities = InMemoryActivityFinder::new();
        activities.set_fallback(vec![ActivityDeal::new("City Tour", 45.0, "Guided")]);
        (flights, hotels, activities)
    }

    #[tokio::test]
    async fn test_each_finder_is_called_once() {
        let (flights, hotels, activities) = stocked();
        let coordinator =
            ItineraryCoordinator::new(flights.clone(), hotels.clone(), activities.clone());

        let response = coordinator.aggregate(&Destination::from("Tokyo")).await;

        assert!(response.is_complete());
        assert_eq!(flights.call_count(), 1);
        assert_eq!(hotels.call_count(), 1);
        assert_eq!(activities.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_lists_are_kept_as_settled() {
        let coordinator = ItineraryCoordinator::new(
            InMemoryFlightFinder::new(),
            InMemoryHotelFinder::new(),
            InMemoryActivityFinder::new(),
        );

        let response = coordinator.aggregate(&Destination::from("Nowhere")).await;

        assert_eq!(response.flights, Some(vec![]));
        assert_eq!(response.hotels, Some(vec![]));
        assert_eq!(response.activities, Some(vec![]));
        assert!(response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_panicking_finder_becomes_aborted_failure() {
        let (_, hotels, activities) = stocked();
        let coordinator = ItineraryCoordinator::new(PanickingFlights, hotels, activities);

        let response = coordinator.aggregate(&Destination::from("Tokyo")).await;

        assert_eq!(response.flights, None);
        assert_eq!(response.errors.len(), 1);
        let failure = response.failure(DealCategory::Flights).unwrap();
        assert!(matches!(failure.error, FinderError::Aborted(_)));
        assert!(failure.to_string().starts_with("Flights: lookup aborted"));
        assert_eq!(response.hotels.as_ref().map(Vec::len), Some(1));
        assert_eq!(response.activities.as_ref().map(Vec::len), Some(1));
    }
}
