use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::{ApiError, AppState};
use crate::adapter;
use crate::filter::{filter_by_keyword, filter_within, BoundingBox};
use crate::models::FeatureCollection;

#[derive(Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    features: usize,
}

/// Health check endpoint
pub(super) async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        features: state.collection.len(),
    })
}

#[derive(Deserialize)]
pub(super) struct BboxQueryParams {
    #[serde(rename = "minLat")]
    min_lat: Option<String>,
    #[serde(rename = "minLong")]
    min_long: Option<String>,
    #[serde(rename = "maxLat")]
    max_lat: Option<String>,
    #[serde(rename = "maxLong")]
    max_long: Option<String>,
}

impl BboxQueryParams {
    /// Parse and range-check the four bounds
    fn bounding_box(&self) -> Result<BoundingBox, ApiError> {
        let (Some(min_lat), Some(min_long), Some(max_lat), Some(max_long)) = (
            self.min_lat.as_deref(),
            self.min_long.as_deref(),
            self.max_lat.as_deref(),
            self.max_long.as_deref(),
        ) else {
            return Err(ApiError::query(
                "Missing required parameters. Please provide minLat, minLong, maxLat, and maxLong",
            ));
        };

        let parse = |s: &str| {
            s.trim().parse::<f64>().map_err(|_| {
                ApiError::query("Invalid coordinate format. All coordinates must be valid numbers")
            })
        };

        Ok(BoundingBox::validated(
            parse(min_lat)?,
            parse(min_long)?,
            parse(max_lat)?,
            parse(max_long)?,
        )?)
    }
}

/// Features lying entirely inside the requested box
pub(super) async fn get_data_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BboxQueryParams>,
) -> Result<Response, ApiError> {
    let bbox = params.bounding_box()?;
    let result = filter_within(&state.collection, &bbox);
    collection_response(&result)
}

#[derive(Deserialize)]
pub(super) struct KeywordQueryParams {
    key: Option<String>,
}

/// Features whose area descriptions mention the keyword
pub(super) async fn get_area_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<KeywordQueryParams>,
) -> Result<Response, ApiError> {
    let keyword = params
        .key
        .ok_or_else(|| ApiError::query("Missing keyword parameters."))?;

    let result = filter_by_keyword(&state.collection, &keyword);
    collection_response(&result)
}

/// Encode a collection as the response body, verbatim
fn collection_response(collection: &FeatureCollection) -> Result<Response, ApiError> {
    let body = adapter::encode(collection)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

#[derive(Deserialize)]
pub(super) struct AddPinParams {
    uid: Option<String>,
    ltd: Option<String>,
    lng: Option<String>,
}

pub(super) async fn add_pin_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddPinParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(uid), Some(ltd), Some(lng)) = (params.uid, params.ltd, params.lng) else {
        return Err(ApiError::pin("Please enter all parameters"));
    };

    let (Ok(lat), Ok(lon)) = (ltd.trim().parse::<f64>(), lng.trim().parse::<f64>()) else {
        return Err(ApiError::pin("Latitude and longitude must be valid numbers"));
    };
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ApiError::pin("Latitude must be between -90 and 90"));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ApiError::pin("Longitude must be between -180 and 180"));
    }

    info!("Adding coordinates: {}, {} for user: {}", lng, ltd, uid);
    state
        .pins
        .add_pin(&uid, lat, lon)
        .map_err(|e| ApiError::pin(e.to_string()))?;

    Ok(Json(json!({
        "response_type": "success",
        "pin": format!("latitude: {}, longitude: {}", ltd, lng),
        "userId": uid,
    })))
}

#[derive(Serialize)]
pub(super) struct PinsResponse {
    /// `[lat, lon]` pairs as strings
    pins: Vec<[String; 2]>,
}

pub(super) async fn list_pins_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PinsResponse>, ApiError> {
    let pins = state
        .pins
        .list_all_pins()
        .map_err(|e| ApiError::pin(e.to_string()))?;

    Ok(Json(PinsResponse {
        pins: pins
            .iter()
            .map(|pin| [pin.lat.to_string(), pin.lon.to_string()])
            .collect(),
    }))
}

#[derive(Deserialize)]
pub(super) struct ClearPinsParams {
    uid: Option<String>,
}

pub(super) async fn clear_pins_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClearPinsParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let uid = params
        .uid
        .filter(|uid| !uid.is_empty())
        .ok_or_else(|| ApiError::pin("User ID is required"))?;

    info!("Clearing pins for user: {}", uid);
    state
        .pins
        .clear_pins(&uid)
        .map_err(|e| ApiError::pin(e.to_string()))?;

    Ok(Json(json!({
        "response_type": "success",
        "message": format!("All pins cleared for user: {}", uid),
    })))
}
