//! Shared application state handed to every handler via `State`.

use crate::store::AccountStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The account table
    pub store: Arc<AccountStore>,

    /// Key of the account the payment routes act on
    pub credit_account: Arc<str>,
}

impl AppState {
    pub fn new(store: AccountStore, credit_account: impl Into<Arc<str>>) -> Self {
        Self {
            store: Arc::new(store),
            credit_account: credit_account.into(),
        }
    }
}
