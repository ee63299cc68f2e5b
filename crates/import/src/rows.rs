//! Turning the lines under a header into records.

use saldo_core::{Amount, Column, TransactionRecord};

use crate::columns::ColumnLayout;
use crate::layout::CompiledLayout;
use crate::patterns::{compact_year, find_amount, recover_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowState {
    Scanning,
    Terminal,
}

/// What a single line under the header turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// The period balance line; the section ends here.
    Terminal(TransactionRecord),
    Row(TransactionRecord),
    /// Sliced, but with neither date nor balance.
    Annotation,
    Blank,
}

/// Records of one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRows {
    pub records: Vec<TransactionRecord>,
    /// Index, within the lines handed in, of the period balance line.
    /// `None` when the lines ran out first.
    pub terminal_line: Option<usize>,
}

pub struct RowExtractor<'a> {
    columns: &'a ColumnLayout,
    layout: &'a CompiledLayout,
}

impl<'a> RowExtractor<'a> {
    pub fn new(columns: &'a ColumnLayout, layout: &'a CompiledLayout) -> Self {
        Self { columns, layout }
    }

    /// Walk `lines` (everything after the header) until the period balance line.
    pub fn extract(&self, lines: &[&str]) -> SectionRows {
        let mut out = SectionRows::default();
        let mut state = RowState::Scanning;

        for (i, line) in lines.iter().enumerate() {
            if state == RowState::Terminal {
                break;
            }
            match self.classify(line) {
                LineKind::Terminal(record) => {
                    out.records.push(record);
                    out.terminal_line = Some(i);
                    state = RowState::Terminal;
                }
                LineKind::Row(record) => out.records.push(record),
                LineKind::Annotation => tracing::trace!(line = i, "dropping annotation line"),
                LineKind::Blank => {}
            }
        }

        out
    }

    pub fn classify(&self, line: &str) -> LineKind {
        if line.contains(self.layout.terminal_marker()) {
            return LineKind::Terminal(self.closing_balance(line));
        }
        if line.trim().is_empty() {
            return LineKind::Blank;
        }

        let raw = self.columns.slice(line);
        let record = match self.layout.opening_marker() {
            Some(marker) if line.contains(marker) => TransactionRecord::balance_line(
                raw.get(Column::Date),
                marker,
                recover_amount(raw.get(Column::Balance)),
            ),
            _ => TransactionRecord {
                date: raw.get(Column::Date).to_string(),
                description: raw.get(Column::Description).to_string(),
                reference: raw.get(Column::Reference).to_string(),
                debit: recover_amount(raw.get(Column::Debit)),
                credit: recover_amount(raw.get(Column::Credit)),
                balance: recover_amount(raw.get(Column::Balance)),
            },
        };

        if record.is_retained() {
            LineKind::Row(record)
        } else {
            LineKind::Annotation
        }
    }

    fn closing_balance(&self, line: &str) -> TransactionRecord {
        // The date has no decimal comma, so the first amount is the balance.
        let balance = find_amount(line)
            .map(Amount::from_localized)
            .unwrap_or_default();
        let date = self
            .layout
            .terminal_date(line)
            .map(compact_year)
            .unwrap_or_default();
        TransactionRecord::balance_line(date, self.layout.closing_description(), balance)
    }
}
