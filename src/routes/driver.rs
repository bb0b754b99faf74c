use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    auth,
    error::AppError,
    models::trip::{TripRecord, TripSubmission},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register_driver", post(register_driver))
        .route("/login_driver", post(login_driver))
        .route("/submit_bus_info", post(submit_bus_info))
}

#[derive(Deserialize)]
struct RegisterPayload {
    driver_id: String,
    full_name: String,
    email: String,
    password: String,
}

async fn register_driver(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<Json<Value>, AppError> {
    auth::register_driver(
        &state,
        &payload.driver_id,
        &payload.full_name,
        &payload.email,
        &payload.password,
    )
    .await?;
    Ok(Json(json!({ "message": "Registration successful" })))
}

#[derive(Deserialize)]
struct LoginPayload {
    driver_id: String,
    password: String,
}

async fn login_driver(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<Value>, AppError> {
    auth::authenticate_driver(&state, &payload.driver_id, &payload.password).await?;
    Ok(Json(json!({ "message": "Login successful" })))
}

async fn submit_bus_info(
    State(state): State<AppState>,
    Json(submission): Json<TripSubmission>,
) -> Result<Json<Value>, AppError> {
    let record = TripRecord::from_submission(submission);
    state.locations.upsert(record).await?;
    Ok(Json(json!({ "message": "Bus location updated" })))
}
