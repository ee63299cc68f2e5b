use regex::Regex;
use saldo_core::Column;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Header text for each column, as printed on the statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnLabels {
    pub date: String,
    pub description: String,
    pub reference: String,
    pub debit: String,
    pub credit: String,
    pub balance: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            date: Column::Date.label().to_string(),
            description: Column::Description.label().to_string(),
            reference: Column::Reference.label().to_string(),
            debit: Column::Debit.label().to_string(),
            credit: Column::Credit.label().to_string(),
            balance: Column::Balance.label().to_string(),
        }
    }
}

impl ColumnLabels {
    pub fn label(&self, column: Column) -> &str {
        match column {
            Column::Date => &self.date,
            Column::Description => &self.description,
            Column::Reference => &self.reference,
            Column::Debit => &self.debit,
            Column::Credit => &self.credit,
            Column::Balance => &self.balance,
        }
    }

    /// Columns paired with their labels, in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &str)> + '_ {
        Column::ALL.into_iter().map(move |c| (c, self.label(c)))
    }

    /// Whether `line` names every column.
    pub fn all_present_in(&self, line: &str) -> bool {
        self.iter().all(|(_, label)| line.contains(label))
    }
}

/// The literals that identify a movements table on a statement page.
///
/// Defaults describe Banco Comafi's "RESUMEN DE OPERACIONES". Any key left out
/// of a TOML layout keeps its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatementLayout {
    pub section_marker: String,
    /// Marks the period balance line that closes a section.
    pub terminal_marker: String,
    /// Marks the carried-over balance line. Empty disables the special case.
    pub opening_marker: String,
    /// Description given to the synthesized closing record.
    pub closing_description: String,
    pub columns: ColumnLabels,
    /// Keep reading further sections on the same page after one closes.
    pub all_sections: bool,
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self {
            section_marker: "DETALLE DE MOVIMIENTOS".to_string(),
            terminal_marker: "Saldo al".to_string(),
            opening_marker: "Saldo Anterior".to_string(),
            closing_description: "Saldo".to_string(),
            columns: ColumnLabels::default(),
            all_sections: false,
        }
    }
}

impl StatementLayout {
    pub fn from_toml(toml_content: &str) -> Result<Self, LayoutError> {
        Ok(toml::from_str(toml_content)?)
    }

    /// Validate the literals and build the patterns derived from them.
    pub fn compile(self) -> Result<CompiledLayout, LayoutError> {
        if self.section_marker.trim().is_empty() {
            return Err(LayoutError::EmptyLiteral("section_marker"));
        }
        if self.terminal_marker.trim().is_empty() {
            return Err(LayoutError::EmptyLiteral("terminal_marker"));
        }
        for (column, label) in self.columns.iter() {
            if label.trim().is_empty() {
                return Err(LayoutError::EmptyLiteral(column_key(column)));
            }
        }

        let terminal_date = Regex::new(&format!(
            r"{}:\s*(\d{{1,2}}/\d{{1,2}}/\d{{2,4}})",
            regex::escape(&self.terminal_marker)
        ))?;

        Ok(CompiledLayout { layout: self, terminal_date })
    }
}

fn column_key(column: Column) -> &'static str {
    match column {
        Column::Date => "columns.date",
        Column::Description => "columns.description",
        Column::Reference => "columns.reference",
        Column::Debit => "columns.debit",
        Column::Credit => "columns.credit",
        Column::Balance => "columns.balance",
    }
}

/// A validated [`StatementLayout`] plus its compiled terminal date pattern.
#[derive(Debug, Clone)]
pub struct CompiledLayout {
    layout: StatementLayout,
    terminal_date: Regex,
}

impl CompiledLayout {
    pub fn section_marker(&self) -> &str {
        &self.layout.section_marker
    }

    pub fn terminal_marker(&self) -> &str {
        &self.layout.terminal_marker
    }

    pub fn opening_marker(&self) -> Option<&str> {
        Some(self.layout.opening_marker.as_str()).filter(|m| !m.trim().is_empty())
    }

    pub fn closing_description(&self) -> &str {
        &self.layout.closing_description
    }

    pub fn labels(&self) -> &ColumnLabels {
        &self.layout.columns
    }

    pub fn all_sections(&self) -> bool {
        self.layout.all_sections
    }

    /// Date following `<terminal marker>:` on a period balance line.
    pub fn terminal_date<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.terminal_date
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}
