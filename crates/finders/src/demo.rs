//! Demo catalog served when no remote deal sources are configured.

use common::{ActivityDeal, FlightDeal, HotelDeal};

use crate::activity::InMemoryActivityFinder;
use crate::flight::InMemoryFlightFinder;
use crate::hotel::InMemoryHotelFinder;
use crate::memory::Latency;

/// In-memory finders seeded with a small fixed catalog.
///
/// | destination | flights      | hotels      | activities  |
/// |-------------|--------------|-------------|-------------|
/// | Tokyo       | JAL, ANA     | Grand Hyatt | City Tour   |
/// | Bali        | fails        | fallback    | fallback    |
/// | Paris       | fallback     | Ritz        | fails       |
/// | anything else | fallback   | fallback    | fallback    |
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    pub flights: InMemoryFlightFinder,
    pub hotels: InMemoryHotelFinder,
    pub activities: InMemoryActivityFinder,
}

impl DemoCatalog {
    /// Creates the seeded finders with no simulated latency.
    pub fn new() -> Self {
        let flights = InMemoryFlightFinder::new();
        flights.set_deals(
            "Tokyo",
            vec![FlightDeal::new("JAL", 1200.50), FlightDeal::new("ANA", 1250.00)],
        );
        flights.set_failure("Bali", "no flights available for Bali");
        flights.set_fallback(vec![FlightDeal::new("Generic Air", 899.00)]);

        let hotels = InMemoryHotelFinder::new();
        hotels.set_deals("Tokyo", vec![HotelDeal::new("Grand Hyatt", 350.75)]);
        hotels.set_deals("Paris", vec![HotelDeal::new("Ritz", 990.00)]);
        hotels.set_fallback(vec![HotelDeal::new("City Center Inn", 120.00)]);

        let activities = InMemoryActivityFinder::new();
        activities.set_deals(
            "Tokyo",
            vec![ActivityDeal::new(
                "City Tour",
                45.00,
                "Guided tour of Asakusa, Shibuya and the Imperial Palace gardens",
            )],
        );
        activities.set_failure("Paris", "no activities available for Paris");
        activities.set_fallback(vec![ActivityDeal::new(
            "Walking Tour",
            25.00,
            "Self-guided walk through the old town",
        )]);

        Self {
            flights,
            hotels,
            activities,
        }
    }

    /// Applies one latency profile to all three finders.
    pub fn set_latency(&self, latency: Latency) {
        self.flights.set_latency(latency);
        self.hotels.set_latency(latency);
        self.activities.set_latency(latency);
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}
