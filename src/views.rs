//! Server-side HTML views.
//!
//! Each page is a function returning `Html<String>`. All interpolated text
//! goes through [`escape`]; amounts go through [`format_amount`].

use crate::models::account::{Account, Accounts};
use axum::{http::StatusCode, response::Html};

/// Shared page chrome: title, navigation and body.
fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} | Bank Demo</title>
</head>
<body>
  <nav>
    <a href="/">Accounts</a>
    <a href="/transfer">Transfer</a>
    <a href="/payment">Payment</a>
  </nav>
  <main>
    <h1>{title}</h1>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an amount the way a browser-side number prints:
/// `100`, `12.5`, `NaN`, `Infinity`, `1e+21`, `1e-7`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        // Drop the sign of -0.
        "0".to_string()
    } else {
        finite_amount(value)
    }
}

/// Shortest round-trip digits, placed in plain notation for decimal
/// exponents in `-7..21` and in `d.ddde+N` / `d.ddde-N` form otherwise.
fn finite_amount(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e2".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let n = exponent + 1;
    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (whole, fraction) = digits.split_at(n as usize);
        format!("{whole}.{fraction}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(-n as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let exponent_sign = if n > 0 { '+' } else { '-' };
        format!("{lead}{fraction}e{exponent_sign}{}", (n - 1).abs())
    };

    format!("{sign}{body}")
}

fn message_block(message: Option<&str>) -> String {
    message
        .map(|m| format!("    <p class=\"message\">{}</p>\n", escape(m)))
        .unwrap_or_default()
}

fn account_details(key: &str, account: &Account) -> String {
    let mut out = format!(
        "    <dl class=\"account\">\n      <dt>Account</dt><dd>{}</dd>\n      <dt>Balance</dt><dd>{}</dd>\n",
        escape(account.display_name(key)),
        format_amount(account.balance),
    );
    if let Some(available) = account.available {
        out.push_str(&format!(
            "      <dt>Available</dt><dd>{}</dd>\n",
            format_amount(available)
        ));
    }
    out.push_str("    </dl>\n");
    out
}

/// The `transfer` view: form with from/to selects over the table's keys.
pub fn transfer_page(message: Option<&str>, accounts: &Accounts) -> Html<String> {
    let options: String = accounts
        .iter()
        .map(|(key, account)| {
            format!(
                "        <option value=\"{}\">{}</option>\n",
                escape(key),
                escape(account.display_name(key))
            )
        })
        .collect();

    let body = format!(
        r#"{message}    <form method="post" action="/transfer">
      <label>From
      <select name="from">
{options}      </select></label>
      <label>To
      <select name="to">
{options}      </select></label>
      <label>Amount <input type="text" name="amount"></label>
      <button type="submit">Transfer</button>
    </form>
"#,
        message = message_block(message),
    );
    layout("Transfer", &body)
}

/// The `payment` view: the credit account and a payment form.
pub fn payment_page(message: Option<&str>, key: &str, account: &Account) -> Html<String> {
    let body = format!(
        r#"{message}{details}    <form method="post" action="/payment">
      <label>Amount <input type="text" name="amount"></label>
      <button type="submit">Pay</button>
    </form>
"#,
        message = message_block(message),
        details = account_details(key, account),
    );
    layout("Payment", &body)
}

/// The `index` view: every account with its balance.
pub fn index_page(accounts: &Accounts) -> Html<String> {
    let rows: String = accounts
        .iter()
        .map(|(key, account)| {
            format!(
                "      <tr><td><a href=\"/account/{}\">{}</a></td><td>{}</td><td>{}</td></tr>\n",
                escape(key),
                escape(account.display_name(key)),
                format_amount(account.balance),
                account.available.map(format_amount).unwrap_or_default(),
            )
        })
        .collect();

    let body = format!(
        r#"    <table>
      <tr><th>Account</th><th>Balance</th><th>Available</th></tr>
{rows}    </table>
"#
    );
    layout("Account Summary", &body)
}

/// The `account` view: one account's details.
pub fn account_page(key: &str, account: &Account) -> Html<String> {
    layout(account.display_name(key), &account_details(key, account))
}

/// Error view used by `AppError` responses.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!("    <p class=\"error\">{}</p>\n", escape(message));
    layout(status.canonical_reason().unwrap_or("Error"), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_amount_exponent_forms() {
        assert_eq!(format_amount(1e21), "1e+21");
        assert_eq!(format_amount(-1e21), "-1e+21");
        assert_eq!(format_amount(1.5e22), "1.5e+22");
        assert_eq!(format_amount(1e-7), "1e-7");
        assert_eq!(format_amount(-2.5e-9), "-2.5e-9");

        // Still plain just inside the thresholds.
        assert_eq!(format_amount(1e20), "100000000000000000000");
        assert_eq!(format_amount(0.000001), "0.000001");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_overdrawn_by_huge_transfer_renders_exponent() {
        use crate::services::coerce::to_number;

        let account = Account::new(100.0 - to_number(Some("1e21")));
        let Html(page) = account_page("checking", &account);

        assert!(page.contains("<dt>Balance</dt><dd>-1e+21</dd>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_transfer_page_lists_accounts() {
        let mut savings = Account::new(50.0);
        savings
            .extra
            .insert("account_name".to_string(), "Savings".into());
        let accounts = Accounts::from([
            ("checking".to_string(), Account::new(100.0)),
            ("savings".to_string(), savings),
        ]);

        let Html(page) = transfer_page(Some("Transfer Completed"), &accounts);

        assert!(page.contains(r#"<p class="message">Transfer Completed</p>"#));
        assert!(page.contains(r#"<option value="savings">Savings</option>"#));
        assert!(page.contains(r#"<option value="checking">checking</option>"#));
    }

    #[test]
    fn test_payment_page_shows_available() {
        let Html(page) = payment_page(None, "credit", &Account::with_available(175.0, 25.0));

        assert!(page.contains("<dt>Balance</dt><dd>175</dd>"));
        assert!(page.contains("<dt>Available</dt><dd>25</dd>"));
        assert!(!page.contains("class=\"message\""));
    }

    #[test]
    fn test_account_page_escapes_name() {
        let mut account = Account::new(1.0);
        account
            .extra
            .insert("account_name".to_string(), "<script>".into());

        let Html(page) = account_page("x", &account);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
