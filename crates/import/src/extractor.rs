use saldo_core::TransactionRecord;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::columns::ColumnLayout;
use crate::layout::{CompiledLayout, StatementLayout};
use crate::rows::RowExtractor;
use crate::section::{self, LocateError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    SectionNotFound,
    HeaderNotFound,
    IncompleteHeader,
    /// The page ended before the period balance line. Rows read so far are kept.
    UnterminatedSection,
}

impl DiagnosticKind {
    /// Whether this diagnostic means the page contributed nothing.
    pub fn skips_page(self) -> bool {
        !matches!(self, DiagnosticKind::UnterminatedSection)
    }
}

/// A non-fatal, page-scoped finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based page number.
    pub page: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {}: {}", self.page, self.message)
    }
}

/// Everything one run produced: the records of all pages in page order, and
/// what went wrong along the way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionReport {
    pub records: Vec<TransactionRecord>,
    pub diagnostics: Vec<Diagnostic>,
    /// Pages that yielded at least one record.
    #[serde(skip)]
    contributed: BTreeSet<usize>,
}

impl ExtractionReport {
    /// No page yielded a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pages that were reported and contributed no record. A page whose
    /// first section was read but whose later section failed is not skipped.
    pub fn skipped_pages(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.kind.skips_page() && !self.contributed.contains(&d.page))
            .map(|d| d.page)
            .collect::<BTreeSet<_>>()
            .len()
    }

    fn warn(&mut self, page: usize, kind: DiagnosticKind, message: String) {
        let diagnostic = Diagnostic { kind, page, message };
        tracing::warn!(kind = ?diagnostic.kind, "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

/// Reads the movements table out of each page of a statement.
pub struct StatementTableExtractor {
    layout: CompiledLayout,
}

impl Default for StatementTableExtractor {
    fn default() -> Self {
        let layout = StatementLayout::default()
            .compile()
            .expect("default layout is valid");
        Self::new(layout)
    }
}

impl StatementTableExtractor {
    pub fn new(layout: CompiledLayout) -> Self {
        Self { layout }
    }

    /// Extract every page in order. Malformed pages are reported and skipped.
    pub fn extract<S: AsRef<str>>(&self, pages: &[S]) -> ExtractionReport {
        let mut report = ExtractionReport::default();
        for (i, page) in pages.iter().enumerate() {
            self.extract_page(i + 1, page.as_ref(), &mut report);
        }
        tracing::debug!(
            pages = pages.len(),
            records = report.records.len(),
            diagnostics = report.diagnostics.len(),
            "extraction finished"
        );
        report
    }

    /// Append the records of one page to `report`.
    pub fn extract_page(&self, page: usize, text: &str, report: &mut ExtractionReport) {
        let lines: Vec<&str> = text.lines().collect();
        let labels = self.layout.labels();
        let marker = self.layout.section_marker();
        let mut from = 0;

        loop {
            let location = match section::locate(&lines, from, marker, labels) {
                Ok(location) => location,
                // Only a page without any section is worth a warning; running
                // out of sections after the first is the normal way to finish.
                Err(LocateError::MarkerNotFound) if from > 0 => return,
                Err(LocateError::MarkerNotFound) => {
                    report.warn(
                        page,
                        DiagnosticKind::SectionNotFound,
                        format!("'{marker}' section not found."),
                    );
                    return;
                }
                Err(LocateError::HeaderNotFound { marker_line }) => {
                    let message = if from > 0 {
                        format!(
                            "Header line not found after '{marker}' at line {}; earlier sections kept.",
                            marker_line + 1
                        )
                    } else {
                        format!("Header line not found after '{marker}'.")
                    };
                    report.warn(page, DiagnosticKind::HeaderNotFound, message);
                    return;
                }
            };

            let columns = match ColumnLayout::infer(lines[location.header_line], labels) {
                Ok(columns) => columns,
                Err(e) => {
                    let message = if from > 0 {
                        format!(
                            "Not all columns found in the header at line {}: {e}; earlier sections kept.",
                            location.header_line + 1
                        )
                    } else {
                        format!("Not all columns found in the header: {e}.")
                    };
                    report.warn(page, DiagnosticKind::IncompleteHeader, message);
                    return;
                }
            };

            let body = &lines[location.header_line + 1..];
            let rows = RowExtractor::new(&columns, &self.layout).extract(body);
            tracing::debug!(page, records = rows.records.len(), "section read");
            if !rows.records.is_empty() {
                report.contributed.insert(page);
            }
            report.records.extend(rows.records);

            let Some(terminal) = rows.terminal_line else {
                report.warn(
                    page,
                    DiagnosticKind::UnterminatedSection,
                    format!("'{}' line not found before end of page.", self.layout.terminal_marker()),
                );
                return;
            };
            if !self.layout.all_sections() {
                return;
            }
            from = location.header_line + 1 + terminal + 1;
        }
    }
}
