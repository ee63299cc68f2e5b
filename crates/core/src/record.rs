use serde::Serialize;
use std::borrow::Cow;

use super::column::Column;
use super::money::Amount;

/// One row of a movements table.
///
/// Serializes with the statement's own column names as keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TransactionRecord {
    #[serde(rename = "Fecha")]
    pub date: String,
    #[serde(rename = "Conceptos")]
    pub description: String,
    #[serde(rename = "Referencias")]
    pub reference: String,
    #[serde(rename = "Débitos")]
    pub debit: Amount,
    #[serde(rename = "Créditos")]
    pub credit: Amount,
    #[serde(rename = "Saldo")]
    pub balance: Amount,
}

impl TransactionRecord {
    /// A synthesized balance row (opening or closing). Only date, description
    /// and balance are ever set.
    pub fn balance_line(
        date: impl Into<String>,
        description: impl Into<String>,
        balance: Amount,
    ) -> Self {
        TransactionRecord {
            date: date.into(),
            description: description.into(),
            balance,
            ..Default::default()
        }
    }

    /// Rows with neither a date nor a balance are annotations, not movements.
    pub fn is_retained(&self) -> bool {
        !self.date.is_empty() || !self.balance.is_empty()
    }

    pub fn field(&self, column: Column) -> Cow<'_, str> {
        match column {
            Column::Date => Cow::Borrowed(&self.date),
            Column::Description => Cow::Borrowed(&self.description),
            Column::Reference => Cow::Borrowed(&self.reference),
            Column::Debit => Cow::Owned(self.debit.to_string()),
            Column::Credit => Cow::Owned(self.credit.to_string()),
            Column::Balance => Cow::Owned(self.balance.to_string()),
        }
    }
}
