//! Network layer: wire types and REST helpers for the study-assistant backend.

pub mod api;
pub mod types;

use std::sync::OnceLock;

/// Default backend address used when no override is configured.
const DEFAULT_BACKEND: &str = "http://127.0.0.1:8000";

/// Build a full URL for a backend endpoint path.
///
/// The base URL is read once from the `MENTOR_BACKEND_URL` compile-time
/// environment variable and is immutable afterwards. A trailing slash on
/// the configured base is tolerated.
pub fn backend_url(path: &str) -> String {
    static BASE: OnceLock<String> = OnceLock::new();
    let base = BASE.get_or_init(|| {
        option_env!("MENTOR_BACKEND_URL")
            .unwrap_or(DEFAULT_BACKEND)
            .trim_end_matches('/')
            .to_owned()
    });
    format!("{base}{path}")
}

#[cfg(test)]
mod backend_url_test {
    use super::*;

    #[test]
    fn backend_url_joins_path_onto_base() {
        let url = backend_url("/query");
        assert!(url.ends_with("/query"));
        assert!(url.starts_with("http"));
    }

    #[test]
    fn backend_url_has_no_double_slash_before_path() {
        let url = backend_url("/list-docs");
        let after_scheme = url.split("://").nth(1).expect("scheme");
        assert!(!after_scheme.contains("//"));
    }
}
