//! Merged result of one itinerary request.

use common::{ActivityDeal, DealCategory, FlightDeal, HotelDeal};
use finders::FinderError;

/// A category whose finder failed, tagged with the reason.
///
/// Displays as `"<Category>: <reason>"`, the form clients see in `errors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFailure {
    pub category: DealCategory,
    pub error: FinderError,
}

impl CategoryFailure {
    pub fn new(category: DealCategory, error: FinderError) -> Self {
        Self { category, error }
    }
}

impl std::fmt::Display for CategoryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.error)
    }
}

/// Deals collected for one destination.
///
/// Each category ends up either with its list (possibly empty) or with one
/// [`CategoryFailure`], never both. The order of `errors` follows the order
/// in which the finders completed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItineraryResponse {
    pub flights: Option<Vec<FlightDeal>>,
    pub hotels: Option<Vec<HotelDeal>>,
    pub activities: Option<Vec<ActivityDeal>>,
    pub errors: Vec<CategoryFailure>,
}

impl ItineraryResponse {
    /// Creates an empty response with no category settled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a category's finder failed.
    pub fn record_failure(&mut self, category: DealCategory, error: FinderError) {
        self.errors.push(CategoryFailure::new(category, error));
    }

    /// Returns the failure recorded for a category, if any.
    pub fn failure(&self, category: DealCategory) -> Option<&CategoryFailure> {
        self.errors.iter().find(|f| f.category == category)
    }

    /// Returns the categories that failed, in category order.
    pub fn failed_categories(&self) -> Vec<DealCategory> {
        let mut categories: Vec<DealCategory> = self.errors.iter().map(|f| f.category).collect();
        categories.sort();
        categories
    }

    /// Returns true once a category holds either its deals or a failure.
    pub fn is_settled(&self, category: DealCategory) -> bool {
        let has_deals = match category {
            DealCategory::Flights => self.flights.is_some(),
            DealCategory::Hotels => self.hotels.is_some(),
            DealCategory::Activities => self.activities.is_some(),
        };
        has_deals || self.failure(category).is_some()
    }

    /// Returns true if every finder succeeded.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}
