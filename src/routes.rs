//! HTTP router: every route and the layers around them.

use crate::{handlers, state::AppState};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::accounts::list_accounts))
        .route("/account/{name}", get(handlers::accounts::get_account))
        .route(
            "/transfer",
            get(handlers::transfer::transfer_form).post(handlers::transfer::submit_transfer),
        )
        .route(
            "/payment",
            get(handlers::payment::payment_form).post(handlers::payment::submit_payment),
        )
        .route("/health", get(handlers::health::health_check))
        // Request spans for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
