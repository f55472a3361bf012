//! Transfer HTTP handlers.
//!
//! - GET /transfer - Blank transfer form
//! - POST /transfer - Move money between two accounts

use crate::{
    error::AppError, models::forms::TransferForm, services::banking, state::AppState, views,
};
use axum::{Form, extract::State, response::Html};
use std::sync::Arc;

/// Render the blank transfer form.
pub async fn transfer_form(State(state): State<AppState>) -> Html<String> {
    views::transfer_page(None, &state.store.snapshot())
}

/// Apply a transfer and re-render the form.
///
/// # Form Body
///
/// ```text
/// from=savings&to=checking&amount=25
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: Transfer form with "Transfer Completed"
/// - **Error (404)**: `from` or `to` is not an account
/// - **Error (500)**: Accounts file could not be written
pub async fn submit_transfer(
    State(state): State<AppState>,
    Form(form): Form<TransferForm>,
) -> Result<Html<String>, AppError> {
    // The store persists synchronously, so run it off the async workers.
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || {
        banking::execute_transfer(&store, &form.from, &form.to, form.amount.as_deref())
    })
    .await??;

    Ok(views::transfer_page(
        Some("Transfer Completed"),
        &state.store.snapshot(),
    ))
}
