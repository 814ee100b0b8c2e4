//! Case-insensitive free-text matching for list searches

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;

/// How a search term is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// The term is a literal key; `.` or `*` match only themselves
    #[default]
    Literal,
    /// The term is a regular expression
    Pattern,
}

/// Unanchored, case-insensitive test built once per query
#[derive(Debug, Clone)]
pub enum TermMatcher {
    /// Empty term: everything matches
    Any,
    /// Lowercased needle
    Literal(String),
    Pattern(Regex),
}

impl TermMatcher {
    /// Build a matcher for `term`
    ///
    /// # Errors
    ///
    /// In [`SearchMode::Pattern`], returns
    /// [`crate::ExpenseError::InvalidSearchPattern`] if the term does not compile.
    pub fn new(term: &str, mode: SearchMode) -> ExpenseResult<Self> {
        if term.is_empty() {
            return Ok(Self::Any);
        }

        match mode {
            SearchMode::Literal => Ok(Self::Literal(term.to_lowercase())),
            SearchMode::Pattern => {
                let regex = RegexBuilder::new(term).case_insensitive(true).build()?;
                Ok(Self::Pattern(regex))
            }
        }
    }

    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(needle) => haystack.to_lowercase().contains(needle.as_str()),
            Self::Pattern(regex) => regex.is_match(haystack),
        }
    }

    /// Match against a field that may be absent; an absent field only
    /// matches the empty term
    pub fn matches_opt(&self, haystack: Option<&str>) -> bool {
        match haystack {
            Some(text) => self.matches(text),
            None => matches!(self, Self::Any),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_matches_everything() {
        for mode in [SearchMode::Literal, SearchMode::Pattern] {
            let m = TermMatcher::new("", mode).unwrap();
            assert!(m.matches(""));
            assert!(m.matches("anything"));
            assert!(m.matches_opt(None));
        }
    }

    #[test]
    fn test_literal_is_case_insensitive_substring() {
        let m = TermMatcher::new("GROCER", SearchMode::Literal).unwrap();
        assert!(m.matches("Weekly groceries"));
        assert!(!m.matches("Grocr"));
        assert!(!m.matches_opt(None));
    }

    #[test]
    fn test_literal_ignores_metacharacters() {
        let m = TermMatcher::new("a.c", SearchMode::Literal).unwrap();
        assert!(!m.matches("abc"));
        assert!(m.matches("file A.C backup"));

        // would be an invalid pattern, but is fine as a literal
        let m = TermMatcher::new("(50%", SearchMode::Literal).unwrap();
        assert!(m.matches("Sale (50% off)"));
    }

    #[test]
    fn test_pattern_mode() {
        let m = TermMatcher::new("cof+ee", SearchMode::Pattern).unwrap();
        assert!(m.matches("COFFEE beans"));
        assert!(!m.matches("cafe"));

        let err = TermMatcher::new("(", SearchMode::Pattern).unwrap_err();
        assert!(matches!(err, crate::ExpenseError::InvalidSearchPattern(_)));
    }
}
