use std::sync::OnceLock;

use regex::Regex;
use saldo_core::Amount;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// 1.234,56 style: 1-3 digits, optional dot-separated thousands, comma, two decimals.
re!(re_currency, r"(\d{1,3}(?:\.\d{3})*,\d{2})");
re!(re_currency_token, r"^\d{1,3}(?:\.\d{3})*,\d{2}$");

// ── Currency recovery ────────────────────────────────────────────────────────

/// First currency-shaped substring of a sliced field.
///
/// Amounts are right-aligned and OCR layouts drift, so a cell rarely holds the
/// bare number; searching inside it recovers values that sit off-centre or
/// carry stray characters.
pub fn find_amount(field: &str) -> Option<&str> {
    re_currency().find(field).map(|m| m.as_str())
}

/// Whether `token` is a currency amount and nothing else.
pub fn is_amount_token(token: &str) -> bool {
    re_currency_token().is_match(token)
}

/// Field text to normalized amount. No match is [`Amount::Empty`].
pub fn recover_amount(field: &str) -> Amount {
    find_amount(field).map(Amount::from_localized).unwrap_or_default()
}

// ── Dates ────────────────────────────────────────────────────────────────────

/// Rows print `DD/MM/YY`; the period balance line prints `DD/MM/YYYY`.
/// Bring four-digit years down to two so the date column reads uniformly.
pub fn compact_year(date: &str) -> String {
    match date.rsplit_once('/') {
        Some((day_month, year)) if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{day_month}/{}", &year[2..])
        }
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    // ── find_amount ───────────────────────────────────────────────────────────

    #[test]
    fn finds_grouped_amount() {
        assert_eq!(find_amount("  2.239.979,46 "), Some("2.239.979,46"));
        assert_eq!(find_amount("36,92"), Some("36,92"));
    }

    #[test]
    fn finds_amount_among_noise() {
        assert_eq!(find_amount("ref 0012745   1.042,23  x"), Some("1.042,23"));
    }

    #[test]
    fn no_amount_without_decimal_comma() {
        assert_eq!(find_amount("0012745"), None);
        assert_eq!(find_amount("2.246."), None);
        assert_eq!(find_amount("31/01/2023"), None);
        assert_eq!(find_amount(""), None);
    }

    #[test]
    fn takes_first_of_several() {
        assert_eq!(find_amount("4.963,00   2.239.979,46"), Some("4.963,00"));
    }

    #[test]
    fn amount_token_must_be_whole() {
        assert!(is_amount_token("2.246.170,50"));
        assert!(is_amount_token("0,00"));
        assert!(!is_amount_token("REF-ABCDEFGH"));
        assert!(!is_amount_token("x1,00"));
        assert!(!is_amount_token("1.000,001.000,00"));
        assert!(!is_amount_token(""));
    }

    // ── recover_amount ────────────────────────────────────────────────────────

    #[test]
    fn recovers_and_normalizes() {
        assert_eq!(
            recover_amount("   0,89   "),
            Amount::Parsed(Decimal::from_str("0.89").unwrap())
        );
        assert_eq!(
            recover_amount("2.239.979,46"),
            Amount::Parsed(Decimal::from_str("2239979.46").unwrap())
        );
        assert_eq!(recover_amount("SIN MOVIMIENTOS"), Amount::Empty);
    }

    // ── compact_year ──────────────────────────────────────────────────────────

    #[test]
    fn shortens_four_digit_year() {
        assert_eq!(compact_year("31/01/2023"), "31/01/23");
        assert_eq!(compact_year("5/1/1999"), "5/1/99");
    }

    #[test]
    fn leaves_short_years_alone() {
        assert_eq!(compact_year("31/12/22"), "31/12/22");
        assert_eq!(compact_year("1/2/123"), "1/2/123");
        assert_eq!(compact_year(""), "");
    }
}
