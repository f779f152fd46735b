pub mod adapters;
pub mod config;
pub mod domain;
pub mod infra;
pub mod services;

use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        http::StatusCode,
        routing::{get, post},
    },
    services::transaction_service::TransactionOrchestrator,
    std::{sync::Arc, time::Duration},
    tower::ServiceBuilder,
    tower_http::{timeout::TimeoutLayer, trace::TraceLayer},
};

#[derive(Clone)]
pub struct AppState {
    pub transactions: Arc<TransactionOrchestrator>,
    pub request_timeout: Duration,
}

pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::INTERNAL_SERVER_ERROR,
            state.request_timeout,
        ));

    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/transactions",
            post(adapters::transactions::create_transaction_handler),
        )
        .layer(DefaultBodyLimit::max(64 * 1024)) // checkout payloads are well under 2 KB
        .layer(middleware)
        .with_state(state)
}
