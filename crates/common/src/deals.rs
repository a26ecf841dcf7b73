//! Deal records returned by the finders.
//!
//! Field names are the wire names, so these types serialize straight into
//! the itinerary response.

use serde::{Deserialize, Serialize};

/// A priced flight to the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDeal {
    pub airline: String,
    pub price: f64,
}

impl FlightDeal {
    pub fn new(airline: impl Into<String>, price: f64) -> Self {
        Self {
            airline: airline.into(),
            price,
        }
    }
}

/// A hotel at the destination, priced per night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelDeal {
    pub hotel_name: String,
    pub price_per_night: f64,
}

impl HotelDeal {
    pub fn new(hotel_name: impl Into<String>, price_per_night: f64) -> Self {
        Self {
            hotel_name: hotel_name.into(),
            price_per_night,
        }
    }
}

/// A bookable activity at the destination, priced per person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDeal {
    pub name: String,
    pub price_per_person: f64,
    pub description: String,
}

impl ActivityDeal {
    pub fn new(name: impl Into<String>, price_per_person: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_per_person,
            description: description.into(),
        }
    }
}
