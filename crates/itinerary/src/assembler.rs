//! Wire rendering of an [`ItineraryResponse`].

use common::{ActivityDeal, FlightDeal, HotelDeal};
use serde::{Deserialize, Serialize};

use crate::response::ItineraryResponse;

/// JSON body returned by `POST /generate-itinerary`.
///
/// Categories without deals and an empty error list are left out of the
/// output entirely rather than written as `null` or `[]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryBody {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flights: Vec<FlightDeal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hotels: Vec<HotelDeal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<ActivityDeal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Renders a finished response into its wire body.
pub fn assemble(response: ItineraryResponse) -> ItineraryBody {
    ItineraryBody {
        errors: response.errors.iter().map(ToString::to_string).collect(),
        flights: response.flights.unwrap_or_default(),
        hotels: response.hotels.unwrap_or_default(),
        activities: response.activities.unwrap_or_default(),
    }
}

impl From<ItineraryResponse> for ItineraryBody {
    fn from(response: ItineraryResponse) -> Self {
        assemble(response)
    }
}

#[cfg(test)]
mod tests {
    use common::DealCategory;
    use finders::FinderError;

    use super::*;

    #[test]
    fn test_empty_response_serializes_to_empty_object() {
        let body = assemble(ItineraryResponse::new());
        assert_eq!(serde_json::to_string(&body).unwrap(), "{}");
    }

    #[test]
    fn test_empty_list_is_omitted_like_a_missing_one() {
        let mut response = ItineraryResponse::new();
        response.flights = Some(vec![]);
        response.hotels = Some(vec![HotelDeal::new("Ritz", 990.0)]);

        let json = serde_json::to_value(assemble(response)).unwrap();
        assert!(json.get("flights").is_none());
        assert!(json.get("activities").is_none());
        assert!(json.get("errors").is_none());
        assert_eq!(json["hotels"][0]["hotel_name"], "Ritz");
        assert_eq!(json["hotels"][0]["price_per_night"], 990.0);
    }

    #[test]
    fn test_errors_render_as_prefixed_strings() {
        let mut response = ItineraryResponse::new();
        response.record_failure(
            DealCategory::Flights,
            FinderError::Unavailable("no flights available for Bali".to_string()),
        );
        response.record_failure(DealCategory::Hotels, FinderError::Status { status: 500 });

        let json = serde_json::to_value(assemble(response)).unwrap();
        assert_eq!(
            json["errors"],
            serde_json::json!([
                "Flights: no flights available for Bali",
                "Hotels: upstream returned status 500"
            ])
        );
    }

    #[test]
    fn test_body_decodes_with_missing_fields() {
        let body: ItineraryBody =
            serde_json::from_str(r#"{"flights":[{"airline":"JAL","price":1200.5}]}"#).unwrap();
        assert_eq!(body.flights, vec![FlightDeal::new("JAL", 1200.5)]);
        assert!(body.hotels.is_empty());
        assert!(body.errors.is_empty());
    }
}
