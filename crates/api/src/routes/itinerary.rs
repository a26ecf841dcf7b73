//! Itinerary generation endpoint.

use std::fmt;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use common::Destination;
use itinerary::{ItineraryBody, ItineraryCoordinator, assemble};
use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub coordinator: ItineraryCoordinator,
}

// -- Request types --

/// Body of `POST /generate-itinerary`.
///
/// Decodes leniently: the `destination` key matches regardless of ASCII
/// case, unknown keys are ignored, and a missing or `null` destination is
/// the empty string. Anything but an object (or a bare `null`) is rejected,
/// as is a destination that is not a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationRequest {
    pub destination: String,
}

impl<'de> Deserialize<'de> for DestinationRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DestinationRequestVisitor)
    }
}

struct DestinationRequestVisitor;

impl<'de> Visitor<'de> for DestinationRequestVisitor {
    type Value = DestinationRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with a string `destination`")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let mut request = DestinationRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("destination") {
                // null leaves the previous value in place
                if let Some(destination) = map.next_value::<Option<String>>()? {
                    request.destination = destination;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(request)
    }
}

/// Decodes the first JSON value of the body; anything after it is ignored.
pub fn decode_request(body: &[u8]) -> Result<DestinationRequest, ApiError> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<DestinationRequest>>();
    match values.next() {
        Some(value) => Ok(value?.unwrap_or_default()),
        None => Err(ApiError::BadRequest(
            "Invalid request body: empty body".to_string(),
        )),
    }
}

// -- Handlers --

/// POST /generate-itinerary — collect flights, hotels and activities for a destination.
///
/// The body is decoded before any finder runs, so a malformed request costs
/// no backend calls. Once decoded, the request always answers 200; failed
/// categories are listed under `errors`.
#[tracing::instrument(skip(state, body))]
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ItineraryBody>, ApiError> {
    let request = decode_request(&body).inspect_err(|_| {
        metrics::counter!("itinerary_requests_rejected_total").increment(1);
    })?;

    let destination = Destination::from(request.destination);
    let response = state.coordinator.aggregate(&destination).await;

    Ok(Json(assemble(response)))
}
