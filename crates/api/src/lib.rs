//! HTTP API server for itinerary generation.
//!
//! Exposes `POST /generate-itinerary`, which fans out to the flight, hotel
//! and activity finders, along with health and Prometheus metrics
//! endpoints. Requests are traced with `tracing` via `tower-http`.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use finders::{DemoCatalog, HttpDealSource, Latency};
use itinerary::ItineraryCoordinator;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::{Config, ConfigError, FinderBackend};
use routes::itinerary::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/generate-itinerary", post(routes::itinerary::generate))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by the in-memory demo catalog.
///
/// The returned catalog shares state with the finders inside the
/// coordinator, so callers can reconfigure or inspect them.
pub fn create_default_state() -> (Arc<AppState>, DemoCatalog) {
    let catalog = DemoCatalog::new();
    let coordinator = ItineraryCoordinator::new(
        catalog.flights.clone(),
        catalog.hotels.clone(),
        catalog.activities.clone(),
    );
    (Arc::new(AppState { coordinator }), catalog)
}

/// Creates application state for the finder backend selected in `config`.
pub fn create_state(config: &Config) -> Result<Arc<AppState>, ConfigError> {
    match config.finder_backend {
        FinderBackend::Memory => {
            let (state, catalog) = create_default_state();
            if !config.simulated_latency.is_zero() {
                catalog.set_latency(Latency::Jitter {
                    min: std::time::Duration::ZERO,
                    max: config.simulated_latency,
                });
            }
            Ok(state)
        }
        FinderBackend::Http => {
            let finders = http_finders(config)?;
            let coordinator =
                ItineraryCoordinator::new(finders.flights, finders.hotels, finders.activities);
            Ok(Arc::new(AppState { coordinator }))
        }
    }
}

/// Remote finders, one per category, sharing a single HTTP client.
#[derive(Debug, Clone)]
pub struct HttpFinders {
    pub flights: HttpDealSource,
    pub hotels: HttpDealSource,
    pub activities: HttpDealSource,
}

/// Builds the remote finders from the configured endpoints.
pub fn http_finders(config: &Config) -> Result<HttpFinders, ConfigError> {
    let endpoint =
        |url: &Option<String>, var: &'static str| url.clone().ok_or(ConfigError::Missing(var));
    let client = HttpDealSource::build_client(config.finder_timeout)?;

    Ok(HttpFinders {
        flights: HttpDealSource::with_client(
            client.clone(),
            endpoint(&config.flights_url, "FLIGHTS_URL")?,
        ),
        hotels: HttpDealSource::with_client(
            client.clone(),
            endpoint(&config.hotels_url, "HOTELS_URL")?,
        ),
        activities: HttpDealSource::with_client(
            client,
            endpoint(&config.activities_url, "ACTIVITIES_URL")?,
        ),
    })
}
