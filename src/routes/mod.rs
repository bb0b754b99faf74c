pub mod driver;
pub mod rider;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(driver::router())
        .merge(rider::router())
        .nest_service("/static", ServeDir::new("static"))
        .layer(cors)
        .with_state(state)
}
