use crate::{
    config::AppConfig,
    db::DbPool,
    services::{locations::LocationStore, matching::RouteMatcher},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub locations: LocationStore,
    pub matcher: RouteMatcher,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        db: DbPool,
        locations: LocationStore,
        matcher: RouteMatcher,
    ) -> Self {
        Self {
            config,
            db,
            locations,
            matcher,
        }
    }
}
