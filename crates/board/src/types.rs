//! Shared value types for the add-to-project domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! behaviour: the owner kind selects which GraphQL root field is queried, and
//! the match operator decides how a pattern list is evaluated.

use serde::{Deserialize, Serialize};

use crate::{BoardError, ProjectItemId};

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;

// ---------------------------------------------------------------------------
// Owner type
// ---------------------------------------------------------------------------

/// Whether a project board belongs to an organization or to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerType {
    /// Board URL of the form `github.com/orgs/<login>/projects/<n>`.
    Organization,
    /// Board URL of the form `github.com/users/<login>/projects/<n>`.
    User,
}

impl OwnerType {
    /// Maps the owner segment of a project URL to an [`OwnerType`].
    ///
    /// `orgs` maps to [`OwnerType::Organization`] and `users` to
    /// [`OwnerType::User`]. Any other value is rejected with
    /// [`BoardError::UnsupportedOwnerType`].
    pub fn from_url_segment(segment: &str) -> Result<Self, BoardError> {
        match segment {
            "orgs" => Ok(Self::Organization),
            "users" => Ok(Self::User),
            other => Err(BoardError::UnsupportedOwnerType {
                value: other.to_string(),
            }),
        }
    }

    /// The GraphQL root field for this owner kind.
    ///
    /// The lookup query and its response are structurally identical for both
    /// kinds apart from this field name.
    pub fn graphql_field(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for OwnerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.graphql_field())
    }
}

// ---------------------------------------------------------------------------
// Match operator
// ---------------------------------------------------------------------------

/// How the patterns of a filter combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOperator {
    /// Every pattern must match at least one candidate.
    And,
    /// At least one pattern must match at least one candidate.
    #[default]
    Or,
}

impl MatchOperator {
    /// Parses an operator input value.
    ///
    /// The value is trimmed and compared case-insensitively. An empty value
    /// is the default ([`MatchOperator::Or`]). Returns `None` for anything
    /// other than `and`, `or`, or empty.
    pub fn from_input(raw: &str) -> Option<Self> {
        let value = raw.trim().to_lowercase();
        match value.as_str() {
            "and" => Some(Self::And),
            "or" | "" => Some(Self::Or),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => f.write_str("and"),
            Self::Or => f.write_str("or"),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was added; carries the id of the new project item.
    Added {
        /// Id of the created project item, surfaced as the `itemId` output.
        item_id: ProjectItemId,
    },
    /// A filter did not match. No remote call was made.
    Skipped {
        /// Human-readable explanation naming the item and the patterns.
        reason: String,
    },
}
