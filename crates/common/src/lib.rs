//! Shared types for the itinerary aggregator.
//!
//! Every crate in the workspace speaks in terms of a [`Destination`], the
//! [`DealCategory`] a collaborator serves, and the three deal records a
//! collaborator returns.

pub mod deals;
pub mod types;

pub use deals::{ActivityDeal, FlightDeal, HotelDeal};
pub use types::{DealCategory, Destination};
