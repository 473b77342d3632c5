use std::sync::OnceLock;

use regex::Regex;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Normalize an answer for comparison: trim, lowercase, and collapse
/// every internal whitespace run to a single space. Empty input stays
/// empty.
pub fn normalize(s: &str) -> String {
    whitespace_run().replace_all(s.trim(), " ").to_lowercase()
}

/// Same, for a value that may be missing entirely (an input that was
/// never rendered or never touched grades like an empty string).
pub fn normalize_opt(s: Option<&str>) -> String {
    normalize(s.unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  Glue  "), "glue");
        assert_eq!(normalize("A Hotel"), "a hotel");
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(normalize("a \t rucksack"), "a rucksack");
        assert_eq!(normalize("a\n\nrucksack"), "a rucksack");
    }

    #[test]
    fn test_idempotent() {
        for s in ["  Glue  ", "a \t rucksack", "", "soap", "  A   FACTORY "] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(normalize("  Glue  "), normalize("glue"));
        assert_eq!(normalize("A  HOTEL"), normalize("a hotel"));
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("   ")), "");
        assert_eq!(normalize(""), "");
    }
}
