//! Account page handlers.
//!
//! - GET / - Overview of every account
//! - GET /account/{name} - One account's details

use crate::{error::AppError, state::AppState, views};
use axum::{
    extract::{Path, State},
    response::Html,
};

/// List all accounts with their balances.
pub async fn list_accounts(State(state): State<AppState>) -> Html<String> {
    views::index_page(&state.store.snapshot())
}

/// Show a single account.
///
/// # Response
///
/// - **Success (200 OK)**: Account name, balance and available credit
/// - **Error (404)**: No account under `name`
pub async fn get_account(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let account = state
        .store
        .snapshot()
        .remove(&name)
        .ok_or_else(|| AppError::AccountNotFound(name.clone()))?;

    Ok(views::account_page(&name, &account))
}
