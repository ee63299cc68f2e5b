//! Column boundaries inferred from a header line, and slicing rows by them.
//!
//! All offsets are counted in characters, not bytes: the header itself carries
//! accented labels and descriptions routinely do too.

use saldo_core::Column;

use crate::error::ColumnError;
use crate::patterns::is_amount_token;
use crate::layout::ColumnLabels;

/// Half-open character range for one column. `end` is `None` for the rightmost
/// column, which runs to the end of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBoundary {
    pub column: Column,
    pub start: usize,
    pub end: Option<usize>,
}

/// Boundaries for one page, ordered left to right as the header prints them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    boundaries: Vec<ColumnBoundary>,
}

impl ColumnLayout {
    /// Derive boundaries from the offsets of each label in `header`.
    ///
    /// The left-to-right order comes from the offsets, not from [`Column::ALL`];
    /// layouts shift between pages and only the header says how.
    pub fn infer(header: &str, labels: &ColumnLabels) -> Result<Self, ColumnError> {
        let mut starts = Vec::with_capacity(Column::ALL.len());
        for (column, label) in labels.iter() {
            let byte = header.find(label).ok_or(ColumnError::Missing(column))?;
            starts.push((column, header[..byte].chars().count()));
        }
        starts.sort_by_key(|&(_, start)| start);

        if let Some(pair) = starts.windows(2).find(|w| w[0].1 == w[1].1) {
            return Err(ColumnError::Overlapping(pair[0].0, pair[1].0));
        }

        let boundaries = starts
            .iter()
            .enumerate()
            .map(|(i, &(column, start))| ColumnBoundary {
                column,
                start,
                end: starts.get(i + 1).map(|&(_, next)| next),
            })
            .collect();

        Ok(Self { boundaries })
    }

    pub fn boundaries(&self) -> &[ColumnBoundary] {
        &self.boundaries
    }

    pub fn get(&self, column: Column) -> Option<&ColumnBoundary> {
        self.boundaries.iter().find(|b| b.column == column)
    }

    /// Cut `line` into its six trimmed fields.
    ///
    /// Two per-line adjustments apply on top of the header boundaries:
    /// the leftmost column starts at the beginning of the line, and a
    /// currency-shaped token straddling the left edge of an amount column is
    /// moved whole into it.
    /// Amounts are right-aligned, so they overflow leftwards.
    pub fn slice<'a>(&self, line: &'a str) -> RawRow<'a> {
        let chars: Vec<(usize, char)> = line.char_indices().collect();
        let len = chars.len();
        let byte_at = |i: usize| chars.get(i).map_or(line.len(), |&(b, _)| b);
        let is_blank = |i: usize| chars[i].1.is_whitespace();

        let mut cuts: Vec<usize> = self.boundaries.iter().map(|b| b.start).collect();
        if let Some(first) = cuts.first_mut() {
            *first = 0;
        }
        for i in 1..cuts.len() {
            if !self.boundaries[i].column.is_amount() {
                continue;
            }
            let floor = cuts[i - 1];
            let cut = cuts[i];
            if cut == 0 || cut >= len || is_blank(cut - 1) || is_blank(cut) {
                continue;
            }
            let mut start = cut;
            while start > 0 && !is_blank(start - 1) {
                start -= 1;
            }
            let mut end = cut;
            while end < len && !is_blank(end) {
                end += 1;
            }
            // Only amounts overflow; any other text keeps the header cut.
            if start >= floor && is_amount_token(&line[byte_at(start)..byte_at(end)]) {
                tracing::trace!(column = %self.boundaries[i].column, from = cut, to = start, "amount overflows column edge");
                cuts[i] = start;
            }
        }

        let mut fields = [""; 6];
        for (i, boundary) in self.boundaries.iter().enumerate() {
            let start = byte_at(cuts[i]);
            let end = cuts.get(i + 1).map_or(line.len(), |&c| byte_at(c));
            fields[boundary.column.index()] = line[start..end].trim();
        }
        RawRow { fields }
    }
}

/// The six raw, trimmed fields of one sliced line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRow<'a> {
    fields: [&'a str; 6],
}

impl<'a> RawRow<'a> {
    pub fn get(&self, column: Column) -> &'a str {
        self.fields[column.index()]
    }
}
