//! Deal-source collaborators for the itinerary aggregator.
//!
//! Each category of deal has its own capability trait:
//! [`FlightFinder`], [`HotelFinder`] and [`ActivityFinder`]. A finder takes a
//! destination and returns either the complete list of deals or a single
//! [`FinderError`]; there is no partial success.
//!
//! Two families of implementations ship with the crate:
//! - [`InMemoryDealSource`] — canned data, canned failures and simulated
//!   latency, used by tests and by the [`demo`] catalog.
//! - [`HttpDealSource`] — fetches deals from a remote JSON endpoint.

pub mod activity;
pub mod demo;
pub mod error;
pub mod flight;
pub mod hotel;
pub mod http;
pub mod memory;

pub use activity::{ActivityFinder, InMemoryActivityFinder};
pub use demo::DemoCatalog;
pub use error::FinderError;
pub use flight::{FlightFinder, InMemoryFlightFinder};
pub use hotel::{HotelFinder, InMemoryHotelFinder};
pub use http::HttpDealSource;
pub use memory::{InMemoryDealSource, Latency};
