//! Payment HTTP handlers.
//!
//! - GET /payment - Credit account with a payment form
//! - POST /payment - Pay down the credit account

use crate::{
    error::AppError, models::forms::PaymentForm, services::banking, state::AppState, views,
};
use axum::{Form, extract::State, response::Html};
use std::sync::Arc;

/// Render the payment view for the credit account.
///
/// # Response
///
/// - **Success (200 OK)**: Credit account balance and available credit
/// - **Error (404)**: The configured credit account does not exist
pub async fn payment_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let key = &*state.credit_account;
    let account = state
        .store
        .snapshot()
        .remove(key)
        .ok_or_else(|| AppError::AccountNotFound(key.to_string()))?;

    Ok(views::payment_page(None, key, &account))
}

/// Apply a payment and re-render with the updated credit account.
pub async fn submit_payment(
    State(state): State<AppState>,
    Form(form): Form<PaymentForm>,
) -> Result<Html<String>, AppError> {
    let store = Arc::clone(&state.store);
    let key = Arc::clone(&state.credit_account);
    let account = tokio::task::spawn_blocking(move || {
        banking::execute_payment(&store, &key, form.amount.as_deref())
    })
    .await??;

    Ok(views::payment_page(
        Some("Payment Successful"),
        &state.credit_account,
        &account,
    ))
}
