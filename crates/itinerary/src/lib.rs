//! Itinerary aggregation.
//!
//! One destination fans out to three independent deal finders:
//! 1. Flights
//! 2. Hotels
//! 3. Activities
//!
//! The [`ItineraryCoordinator`] runs the three lookups concurrently and waits
//! for all of them. A failing finder degrades only its own category to an
//! entry in [`ItineraryResponse::errors`]; the aggregate itself never fails.
//! The [`assembler`] turns the merged result into the wire body.

pub mod assembler;
pub mod coordinator;
pub mod response;

pub use assembler::{ItineraryBody, assemble};
pub use coordinator::ItineraryCoordinator;
pub use response::{CategoryFailure, ItineraryResponse};
