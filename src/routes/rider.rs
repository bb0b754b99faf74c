use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{error::AppError, models::trip::TripRecord, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/find_buses", post(find_buses))
        .route("/get_bus_location", get(get_bus_location))
        .route("/track", get(track))
}

#[derive(Deserialize)]
struct BusQuery {
    current_location: String,
    destination: String,
}

async fn find_buses(
    State(state): State<AppState>,
    Json(query): Json<BusQuery>,
) -> Json<Vec<TripRecord>> {
    let buses = state
        .matcher
        .find_buses(&query.current_location, &query.destination)
        .await;
    Json(buses)
}

#[derive(Deserialize)]
struct DriverQuery {
    driver_id: String,
}

async fn get_bus_location(
    State(state): State<AppState>,
    Query(query): Query<DriverQuery>,
) -> Result<Json<Value>, AppError> {
    let bus = state
        .locations
        .get_by_driver(&query.driver_id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(json!({
        "latitude": bus.latitude,
        "longitude": bus.longitude,
    })))
}

#[derive(Template)]
#[template(path = "track.html")]
struct TrackTemplate {
    lat: f64,
    lon: f64,
    driver_id: String,
    start: String,
    end: String,
}

async fn track(State(state): State<AppState>, Query(query): Query<DriverQuery>) -> Response {
    match state.locations.get_by_driver(&query.driver_id).await {
        Some(bus) => AskamaTemplateResponse::into_response(TrackTemplate {
            lat: bus.latitude,
            lon: bus.longitude,
            driver_id: bus.driver_id,
            start: bus.start,
            end: bus.end,
        }),
        None => (
            StatusCode::NOT_FOUND,
            "No location data found for this driver.",
        )
            .into_response(),
    }
}
