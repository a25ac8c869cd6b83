use super::*;

// =============================================================
// Byte formatting
// =============================================================

#[test]
fn bytes_below_one_kb_are_exact() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(500), "500 B");
    assert_eq!(format_bytes(1023), "1023 B");
}

#[test]
fn kilobytes_use_one_decimal() {
    assert_eq!(format_bytes(1024), "1.0 KB");
    assert_eq!(format_bytes(2048), "2.0 KB");
    assert_eq!(format_bytes(1536), "1.5 KB");
}

#[test]
fn megabytes_use_one_decimal() {
    assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    assert_eq!(format_bytes(1024 * 1024 + 512 * 1024), "1.5 MB");
}

#[test]
fn size_label_falls_back_to_na() {
    assert_eq!(size_label(Some(500)), "500 B");
    assert_eq!(size_label(None), "N/A");
}

// =============================================================
// Type tag
// =============================================================

#[test]
fn type_label_uppercases_known_tags() {
    assert_eq!(type_label(Some("pdf")), "PDF");
    assert_eq!(type_label(Some("md")), "MD");
}

#[test]
fn type_label_falls_back_for_missing_or_blank() {
    assert_eq!(type_label(None), "DESCONOCIDO");
    assert_eq!(type_label(Some("")), "DESCONOCIDO");
    assert_eq!(type_label(Some("  ")), "DESCONOCIDO");
}

// =============================================================
// Source paths
// =============================================================

#[test]
fn source_name_takes_last_component() {
    assert_eq!(source_name("data/ejemplos/apuntes.pdf"), "apuntes.pdf");
    assert_eq!(source_name("apuntes.pdf"), "apuntes.pdf");
}

#[test]
fn source_name_handles_trailing_slash_and_empty() {
    assert_eq!(source_name("data/ejemplos/"), "data/ejemplos/");
    assert_eq!(source_name(""), "");
}
