//! Port trait for the remote project board.
//!
//! Infrastructure crates implement [`ProjectBoard`]; this crate never talks to
//! the network itself.

use async_trait::async_trait;

use crate::{BoardError, ContentId, OwnerName, OwnerType, ProjectId, ProjectItemId, ProjectNumber};

/// The two remote operations needed to add an item to a board.
///
/// Calls are made sequentially: the project id from
/// [`resolve_project_id`](ProjectBoard::resolve_project_id) is the input to
/// [`add_item`](ProjectBoard::add_item). Implementations do not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectBoard: Send + Sync {
    /// Looks up the node id of project `number` owned by `owner_name`.
    ///
    /// Returns [`BoardError::ProjectNotFound`] if the owner or project does not
    /// exist (or is not visible to the credentials in use).
    async fn resolve_project_id(
        &self,
        owner_type: OwnerType,
        owner_name: &OwnerName,
        number: ProjectNumber,
    ) -> Result<ProjectId, BoardError>;

    /// Adds the issue or pull request identified by `content_id` to the board.
    ///
    /// Returns the id of the newly created project item.
    async fn add_item(
        &self,
        project_id: &ProjectId,
        content_id: &ContentId,
    ) -> Result<ProjectItemId, BoardError>;
}
