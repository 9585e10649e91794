//! Service layer for the downloader application.
//!
//! - Project resolution (`resolve_project_keys`)
//! - Hotspot collection and detail enrichment (`collect_all_hotspots`,
//!   `enrich_and_filter`)

mod hotspots;
mod projects;

pub use hotspots::{collect_all_hotspots, collect_hotspots, enrich_and_filter};
pub use projects::resolve_project_keys;

use regex::Regex;

/// Compile a pattern with full-match semantics: it must cover the entire
/// input, not merely a contained substring.
pub fn full_match_regex(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{pattern})\z"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_match_rejects_substrings() {
        let re = full_match_regex("time.ut").unwrap();
        assert!(re.is_match("timeout"));
        assert!(!re.is_match("a timeout happened"));
        assert!(!re.is_match("timeouts"));
    }

    #[test]
    fn full_match_handles_alternation() {
        let re = full_match_regex("a|ab").unwrap();
        assert!(re.is_match("a"));
        assert!(re.is_match("ab"));
        assert!(!re.is_match("abc"));
    }

    #[test]
    fn full_match_propagates_bad_patterns() {
        assert!(full_match_regex("((").is_err());
    }
}
