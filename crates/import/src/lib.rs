pub mod columns;
pub mod error;
pub mod export;
pub mod extractor;
pub mod layout;
pub mod patterns;
pub mod rows;
pub mod section;

pub use columns::{ColumnBoundary, ColumnLayout, RawRow};
pub use error::{ColumnError, ExportError, LayoutError};
pub use extractor::{Diagnostic, DiagnosticKind, ExtractionReport, StatementTableExtractor};
pub use layout::{ColumnLabels, CompiledLayout, StatementLayout};
pub use patterns::{find_amount, recover_amount};
