//! Label and assignee filters.
//!
//! A [`PatternFilter`] is an ordered list of regular expressions plus a
//! [`MatchOperator`]. Patterns use unanchored search semantics, so `bug`
//! matches both `bug` and `type: bug`.

use regex::Regex;

use crate::{BoardError, MatchOperator};

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

/// An ordered set of patterns evaluated against a set of candidate strings.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    patterns: Vec<Regex>,
    operator: MatchOperator,
}

impl PatternFilter {
    /// Creates a filter from compiled patterns.
    pub fn new(patterns: Vec<Regex>, operator: MatchOperator) -> Self {
        Self { patterns, operator }
    }

    /// Builds a filter from a comma-separated input such as `"bug, needs-triage"`.
    ///
    /// Entries are trimmed and empty entries dropped before compilation. An
    /// entry that is not a valid regular expression fails with
    /// [`BoardError::InvalidPattern`].
    pub fn parse_list(raw: &str, operator: MatchOperator) -> Result<Self, BoardError> {
        let patterns = raw
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                Regex::new(p).map_err(|e| BoardError::InvalidPattern {
                    pattern: p.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(patterns, operator))
    }

    /// The operator this filter evaluates with.
    pub fn operator(&self) -> MatchOperator {
        self.operator
    }

    /// Returns `true` if the filter has no patterns and therefore always passes.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Evaluates the filter against `candidates`.
    ///
    /// - [`MatchOperator::And`]: every pattern matches at least one candidate.
    /// - [`MatchOperator::Or`]: at least one pattern matches at least one
    ///   candidate.
    ///
    /// An empty filter passes for both operators.
    pub fn matches<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        let hit = |pattern: &Regex| candidates.iter().any(|c| pattern.is_match(c.as_ref()));

        match self.operator {
            MatchOperator::And => self.patterns.iter().all(hit),
            MatchOperator::Or => self.is_empty() || self.patterns.iter().any(hit),
        }
    }

    /// The patterns joined as `p1, p2` for log and skip messages.
    pub fn describe(&self) -> String {
        self.patterns
            .iter()
            .map(Regex::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
