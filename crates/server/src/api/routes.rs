use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{departments, handlers, middleware::metrics_middleware, tickets, timeline};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Approval timeline
        .route("/departments", get(departments::list_departments))
        .route("/timeline", post(timeline::build_timeline))
        // Support tickets
        .route("/tickets", post(tickets::submit_ticket))
        .route_layer(middleware::from_fn(metrics_middleware))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::get_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
