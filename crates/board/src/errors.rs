//! Error type for the add-to-project domain.
//!
//! [`BoardError`] covers every condition that terminates a run with a non-zero
//! status. A filter mismatch is *not* an error: it is reported as
//! [`crate::AddOutcome::Skipped`].
//!
//! Infrastructure crates define their own error types and convert into
//! [`BoardError::Remote`] at the [`crate::ProjectBoard`] boundary.

use thiserror::Error;

use crate::{OwnerName, OwnerType, ProjectNumber};

/// Format hint included in URL parse failures.
pub const PROJECT_URL_FORMAT: &str =
    "https://github.com/<orgs-or-users>/<ownerName>/projects/<projectNumber>";

/// Fatal errors produced while adding an item to a project board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The configured project URL does not match the GitHub project URL format.
    #[error(
        "Invalid project URL: {url}. Project URL should match the format {}",
        PROJECT_URL_FORMAT
    )]
    InvalidProjectUrl {
        /// The URL exactly as configured.
        url: String,
    },

    /// The owner segment of a project URL is neither `orgs` nor `users`.
    #[error("Unsupported ownerType: {value}. Must be one of 'orgs' or 'users'")]
    UnsupportedOwnerType {
        /// The offending URL segment.
        value: String,
    },

    /// A `labeled` or `assigned` entry is not a valid regular expression.
    #[error("Invalid filter pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as configured (after trimming).
        pattern: String,
        /// Compiler diagnostic from the regex engine.
        message: String,
    },

    /// The event payload carries neither an issue nor a pull request with a
    /// `node_id`, so there is nothing to add.
    #[error("Event payload does not contain an issue or pull request with a node_id")]
    MissingContent,

    /// The lookup query returned no project for the given owner and number.
    #[error("Project {number} not found for {owner_type} '{owner_name}'")]
    ProjectNotFound {
        /// Owner kind the query was scoped to.
        owner_type: OwnerType,
        /// Owner login.
        owner_name: OwnerName,
        /// Project number from the URL.
        number: ProjectNumber,
    },

    /// A remote call failed (transport, HTTP status, or GraphQL errors).
    #[error("{operation} failed: {message}")]
    Remote {
        /// Which step of the protocol failed (e.g. `"resolve project id"`).
        operation: String,
        /// Human-readable description of the failure.
        message: String,
    },
}
