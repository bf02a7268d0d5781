//! Normalization from scraper output ([`RawProduct`]) to [`smkt_core::Product`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use smkt_core::Product;

use crate::error::ScraperError;
use crate::types::{RawPrice, RawProduct};

static DISCOUNT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[-/](\d{1,2})[-/](\d{4})\b").expect("valid discount date regex")
});

/// Placeholders the scrapers write instead of leaving a field out.
fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("n/a") || value.eq_ignore_ascii_case("unknown")
}

fn present(value: Option<String>) -> Option<String> {
    value
        .filter(|v| !is_placeholder(v))
        .map(|v| v.trim().to_owned())
}

fn price_text(price: Option<RawPrice>) -> Option<String> {
    match price? {
        RawPrice::Text(text) => present(Some(text)),
        RawPrice::Number(n) if n.is_finite() => Some(format!("{n:.2}")),
        RawPrice::Number(_) => None,
    }
}

/// Extracts a `dd-mm-yyyy` or `dd/mm/yyyy` date from `text` as a Unix
/// timestamp at 23:59:59 UTC, the end of the last day the discount runs.
///
/// The date may be embedded in a label such as `"t/m 09-03-2025"`. Returns
/// `None` when no valid calendar date is found.
#[must_use]
pub fn parse_discount_date(text: &str) -> Option<i64> {
    let caps = DISCOUNT_DATE_RE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let end_of_day = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(23, 59, 59)?;
    Some(end_of_day.and_utc().timestamp())
}

/// Normalizes one scraped record.
///
/// `record` identifies the input (e.g. its index in the import file) for
/// error messages.
///
/// # Errors
///
/// Returns [`ScraperError::Normalization`] when the title, price or
/// supermarket is missing or only a placeholder.
pub fn normalize_product(raw: RawProduct, record: &str) -> Result<Product, ScraperError> {
    let missing = |field: &str| ScraperError::Normalization {
        record: record.to_owned(),
        reason: format!("missing {field}"),
    };

    let title = present(raw.title).ok_or_else(|| missing("title"))?;
    let price = price_text(raw.price).ok_or_else(|| missing("price"))?;
    let supermarket = present(raw.supermarket).ok_or_else(|| missing("supermarket"))?;

    let discount_date = present(raw.discount_date);
    let discount_timestamp = discount_date.as_deref().and_then(parse_discount_date);

    Ok(Product {
        title,
        price,
        size: present(raw.size),
        image: present(raw.image),
        supermarket,
        on_discount: raw.on_discount,
        original_price: price_text(raw.original_price),
        discount_action: present(raw.discount_action),
        discount_date,
        discount_timestamp,
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
