//! Display formatting for document metadata and source paths.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count: exact below 1 KB, one decimal above.
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Size label with the `N/A` fallback for documents the backend reports
/// without a size.
pub fn size_label(size_bytes: Option<u64>) -> String {
    size_bytes.map_or_else(|| "N/A".to_owned(), format_bytes)
}

/// Uppercased type tag with the `DESCONOCIDO` fallback.
pub fn type_label(file_type: Option<&str>) -> String {
    file_type
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map_or_else(|| "DESCONOCIDO".to_owned(), str::to_uppercase)
}

/// Last path component of a source path, for compact provenance lines.
pub fn source_name(path: &str) -> &str {
    path.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or(path)
}
