use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A monetary cell of a statement row.
///
/// Statements print amounts as `2.239.979,46`: dots group thousands and a
/// comma marks the two decimals. Amounts are never signed; whether money left
/// or entered the account is told by the column the amount sits in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Amount {
    /// The cell held no recognizable amount.
    #[default]
    Empty,
    Parsed(Decimal),
    /// Cleaned text that still failed to parse. Kept verbatim so nothing printed
    /// on the statement is silently lost.
    Raw(String),
}

impl Amount {
    /// Normalize a localized amount: drop thousands dots, turn the decimal comma
    /// into a point, then parse. Never fails; unparseable input comes back as
    /// [`Amount::Raw`] holding the cleaned text.
    pub fn from_localized(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return Amount::Empty;
        }
        let clean = s.replace('.', "").replace(',', ".");
        match Decimal::from_str(&clean) {
            Ok(dec) => Amount::Parsed(dec),
            Err(_) => Amount::Raw(clean),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Amount::Empty)
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Amount::Parsed(dec) => Some(*dec),
            _ => None,
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.as_decimal().and_then(|d| d.to_f64())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Empty => Ok(()),
            Amount::Parsed(dec) => write!(f, "{dec}"),
            Amount::Raw(s) => write!(f, "{s}"),
        }
    }
}

// Parsed amounts go out as numbers, everything else as the string a
// spreadsheet user would have seen in the cell.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Empty => serializer.serialize_str(""),
            Amount::Parsed(dec) => match dec.to_f64() {
                Some(v) => serializer.serialize_f64(v),
                None => serializer.collect_str(dec),
            },
            Amount::Raw(s) => serializer.serialize_str(s),
        }
    }
}
