//! Data models for the account table and submitted forms.

/// Account record and account table
pub mod account;
/// Transfer and payment form bodies
pub mod forms;
