//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (form body, URL params)
//! 2. Reads or mutates the account store
//! 3. Returns a rendered view (or JSON for health)

/// Account overview and detail pages
pub mod accounts;
/// Service health
pub mod health;
/// Credit account payment form
pub mod payment;
/// Transfer form
pub mod transfer;
