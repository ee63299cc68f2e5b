//! Finding a movements table inside a page.

use crate::layout::ColumnLabels;

/// Where a movements table starts on a page, as line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLocation {
    pub marker_line: usize,
    pub header_line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateError {
    MarkerNotFound,
    /// The marker was found but no line after it names every column.
    HeaderNotFound { marker_line: usize },
}

/// First line at or after `from` containing `marker`.
pub fn find_marker(lines: &[&str], from: usize, marker: &str) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| line.contains(marker))
        .map(|(i, _)| i)
}

/// Nearest line at or after `from` that contains every column label.
pub fn find_header(lines: &[&str], from: usize, labels: &ColumnLabels) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| labels.all_present_in(line))
        .map(|(i, _)| i)
}

pub fn locate(
    lines: &[&str],
    from: usize,
    marker: &str,
    labels: &ColumnLabels,
) -> Result<SectionLocation, LocateError> {
    let marker_line = find_marker(lines, from, marker).ok_or(LocateError::MarkerNotFound)?;
    let header_line = find_header(lines, marker_line, labels)
        .ok_or(LocateError::HeaderNotFound { marker_line })?;

    tracing::debug!(marker_line, header_line, "located movements section");
    Ok(SectionLocation { marker_line, header_line })
}
