//! HTTP API serving the feature collection and user pins.
//!
//! Query parameters are validated here before anything reaches the filter
//! engine. Failures are reported as a JSON payload with a `response_type`
//! field rather than an HTTP error status, which is what the map client reads.

mod error;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::models::FeatureCollection;
use crate::pins::PinStore;

pub use error::ApiError;

/// Application state shared across handlers
pub struct AppState {
    /// Loaded once at startup and never mutated
    pub collection: Arc<FeatureCollection>,
    pub pins: Arc<dyn PinStore>,
}

impl AppState {
    pub fn new(collection: FeatureCollection, pins: Arc<dyn PinStore>) -> Self {
        Self {
            collection: Arc::new(collection),
            pins,
        }
    }
}

/// Build the router with permissive CORS and request tracing
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/getData", get(handlers::get_data_handler))
        .route("/getArea", get(handlers::get_area_handler))
        .route("/addPin", get(handlers::add_pin_handler))
        .route("/getPins", get(handlers::list_pins_handler))
        .route("/clearPins", get(handlers::clear_pins_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
