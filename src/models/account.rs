//! Account data model and the account table type.
//!
//! This module defines:
//! - `Account`: one entry of the persisted account table
//! - `Accounts`: the whole table, keyed by account name

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The full account table, keyed by account name (e.g. `savings`, `credit`).
///
/// A `BTreeMap` keeps the persisted file and the rendered pages in a stable order.
pub type Accounts = BTreeMap<String, Account>;

/// Represents one account record from the accounts file.
///
/// # Balance Storage
///
/// Balances are `f64` and are never validated. A failed amount coercion
/// leaves `NaN` in the balance, which is written to the file as `null`
/// and read back as `NaN`. Whole-number amounts are written without a
/// fraction (`100`, not `100.0`).
///
/// # JSON Example
///
/// ```json
/// {
///   "account_name": "Credit",
///   "balance": 200,
///   "available": 0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Every other field from the file (e.g. `account_name`), kept as-is.
    /// Declared first so these fields are written ahead of the amounts.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Current balance
    #[serde(
        serialize_with = "whole_number",
        deserialize_with = "nullable_number"
    )]
    pub balance: f64,

    /// Available credit, only present on credit-style accounts
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_whole_number",
        deserialize_with = "optional_nullable_number"
    )]
    pub available: Option<f64>,
}

impl Account {
    /// Create an account with just a balance.
    pub fn new(balance: f64) -> Self {
        Self {
            balance,
            available: None,
            extra: Map::new(),
        }
    }

    /// Create a credit-style account with a balance and available credit.
    pub fn with_available(balance: f64, available: f64) -> Self {
        Self {
            available: Some(available),
            ..Self::new(balance)
        }
    }

    /// Name shown in views: the `account_name` field when it is a string,
    /// otherwise the table key.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.extra
            .get("account_name")
            .and_then(Value::as_str)
            .unwrap_or(key)
    }

    /// Add to the available credit. A missing `available` counts as `NaN`.
    pub fn credit_available(&mut self, amount: f64) {
        let current = self.available.unwrap_or(f64::NAN);
        self.available = Some(current + amount);
    }
}

/// `serde_json` writes non-finite floats as `null`; read them back as `NaN`.
fn nullable_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

fn optional_nullable_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    nullable_number(deserializer).map(Some)
}

/// Largest magnitude below which every whole `f64` is an exact integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole amounts as integers; fractions and non-finite values as floats.
fn whole_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn optional_whole_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => whole_number(value, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_balance_loads_as_nan() {
        let account: Account =
            serde_json::from_value(json!({ "balance": null, "available": null })).unwrap();

        assert!(account.balance.is_nan());
        assert!(account.available.unwrap().is_nan());
    }

    #[test]
    fn test_missing_available_stays_absent() {
        let account: Account = serde_json::from_value(json!({ "balance": 10 })).unwrap();

        assert_eq!(account.available, None);
        let written = serde_json::to_value(&account).unwrap();
        assert_eq!(written, json!({ "balance": 10 }));
    }

    #[test]
    fn test_amounts_written_as_integers_when_whole() {
        let account = Account::with_available(175.0, 12.5);
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, r#"{"balance":175,"available":12.5}"#);

        let overdrawn = Account::new(-1e21);
        assert_eq!(
            serde_json::to_string(&overdrawn).unwrap(),
            r#"{"balance":-1e21}"#
        );

        let broken = Account::new(f64::NAN);
        assert_eq!(
            serde_json::to_string(&broken).unwrap(),
            r#"{"balance":null}"#
        );
    }

    #[test]
    fn test_extra_fields_written_before_amounts() {
        let input = r#"{"account_name":"Credit","balance":200,"available":0}"#;
        let account: Account = serde_json::from_str(input).unwrap();

        assert_eq!(serde_json::to_string(&account).unwrap(), input);
    }

    #[test]
    fn test_extra_fields_survive_rewrite() {
        let input = json!({
            "account_name": "Savings",
            "balance": 50,
            "nickname": { "short": "sav" }
        });
        let account: Account = serde_json::from_value(input).unwrap();

        assert_eq!(account.display_name("savings"), "Savings");

        let written = serde_json::to_value(&account).unwrap();
        assert_eq!(written["account_name"], "Savings");
        assert_eq!(written["nickname"]["short"], "sav");
    }

    #[test]
    fn test_display_name_falls_back_to_key() {
        let account = Account::new(1.0);
        assert_eq!(account.display_name("checking"), "checking");
    }

    #[test]
    fn test_credit_available_on_missing_field_is_nan() {
        let mut account = Account::new(200.0);
        account.credit_available(25.0);
        assert!(account.available.unwrap().is_nan());

        let mut credit = Account::with_available(200.0, 5.0);
        credit.credit_available(25.0);
        assert_eq!(credit.available, Some(30.0));
    }
}
