//! Parsing of project board URLs.

use std::sync::LazyLock;

use regex::Regex;

use crate::{BoardError, OwnerName, OwnerType, ProjectNumber};

#[cfg(test)]
#[path = "project_ref_tests.rs"]
mod tests;

// https://github.com/orgs|users/<ownerName>/projects/<projectNumber>
static PROJECT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https://)?github\.com/(?P<owner_type>orgs|users)/(?P<owner_name>[^/]+)/projects/(?P<number>\d+)",
    )
    .expect("project URL pattern is valid")
});

/// A project board reference extracted from its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    /// Organization or user board.
    pub owner_type: OwnerType,
    /// Login of the owning organization or user.
    pub owner_name: OwnerName,
    /// Board number within the owner.
    pub number: ProjectNumber,
}

impl ProjectRef {
    /// Parses a project URL such as `https://github.com/orgs/my-org/projects/5`.
    ///
    /// The scheme is optional and anything after the project number is
    /// ignored. Fails with [`BoardError::InvalidProjectUrl`] when the URL does
    /// not have the expected shape or the number does not fit in a `u64`.
    pub fn parse(url: &str) -> Result<Self, BoardError> {
        let invalid = || BoardError::InvalidProjectUrl {
            url: url.to_string(),
        };

        let captures = PROJECT_URL.captures(url).ok_or_else(invalid)?;

        let owner_type = OwnerType::from_url_segment(&captures["owner_type"])?;
        let owner_name = OwnerName::new(&captures["owner_name"]).ok_or_else(invalid)?;
        let number = captures["number"]
            .parse::<u64>()
            .map(ProjectNumber::new)
            .map_err(|_| invalid())?;

        Ok(Self {
            owner_type,
            owner_name,
            number,
        })
    }
}
