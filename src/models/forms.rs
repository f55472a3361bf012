//! Form bodies submitted by the transfer and payment pages.
//!
//! Every field is optional and amounts stay raw strings: coercion happens
//! in the banking service, and a missing field is coerced rather than
//! rejected by the extractor.

use serde::Deserialize;

/// Body of `POST /transfer`.
///
/// # Form Example
///
/// ```text
/// from=savings&to=checking&amount=25
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TransferForm {
    /// Key of the account to debit
    #[serde(default)]
    pub from: String,

    /// Key of the account to credit
    #[serde(default)]
    pub to: String,

    /// Raw amount as typed by the user
    pub amount: Option<String>,
}

/// Body of `POST /payment`.
#[derive(Debug, Default, Deserialize)]
pub struct PaymentForm {
    /// Raw amount as typed by the user
    pub amount: Option<String>,
}
