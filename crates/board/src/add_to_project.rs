//! The filter-and-dispatch operation.

use tracing::{debug, info, instrument};

use crate::{
    AddOutcome, BoardError, EventPayload, MatchOperator, PatternFilter, ProjectBoard, ProjectRef,
    TriggerItem,
};

#[cfg(test)]
#[path = "add_to_project_tests.rs"]
mod tests;

/// Inputs that decide whether and where an item is added.
///
/// Credentials are not part of this type; they belong to the
/// [`ProjectBoard`] implementation.
#[derive(Debug, Clone, Default)]
pub struct AddToProjectConfig {
    /// Board URL, e.g. `https://github.com/orgs/my-org/projects/5`.
    pub project_url: String,
    /// Evaluated against the item's label names.
    pub label_filter: PatternFilter,
    /// Evaluated against the item's assignee logins.
    pub assignee_filter: PatternFilter,
}

/// Adds the triggering issue or pull request to the configured project board.
///
/// The label and assignee filters are evaluated first; if either does not
/// match, [`AddOutcome::Skipped`] is returned and `board` is never called.
/// Otherwise the project URL is parsed, the project id resolved, and the item
/// added, in that order. Any failure is returned as-is and nothing is undone.
#[instrument(skip_all, fields(project_url = %config.project_url))]
pub async fn add_to_project(
    board: &dyn ProjectBoard,
    config: &AddToProjectConfig,
    event: &EventPayload,
) -> Result<AddOutcome, BoardError> {
    let item = event.item();
    let item_number = item
        .and_then(TriggerItem::number)
        .map_or_else(|| "<unknown>".to_string(), |n| n.to_string());

    let labels = item.map(TriggerItem::label_names).unwrap_or_default();
    if let Some(reason) = check_filter(&config.label_filter, &labels, "labels", &item_number) {
        info!("{reason}");
        return Ok(AddOutcome::Skipped { reason });
    }

    let assignees = item.map(TriggerItem::assignee_logins).unwrap_or_default();
    if let Some(reason) =
        check_filter(&config.assignee_filter, &assignees, "assignees", &item_number)
    {
        info!("{reason}");
        return Ok(AddOutcome::Skipped { reason });
    }

    debug!(project_url = %config.project_url, "Project URL");

    let project = ProjectRef::parse(&config.project_url)?;

    debug!(owner_name = %project.owner_name, "Owner name");
    debug!(project_number = %project.number, "Project number");
    debug!(owner_type = %project.owner_type, "Owner type");

    let content_id = item
        .and_then(TriggerItem::content_id)
        .ok_or(BoardError::MissingContent)?;

    let project_id = board
        .resolve_project_id(project.owner_type, &project.owner_name, project.number)
        .await?;

    debug!(project_id = %project_id, "Project node ID");
    debug!(content_id = %content_id, "Content ID");

    let item_id = board.add_item(&project_id, &content_id).await?;

    info!(item_id = %item_id, item_number = %item_number, "Added item to project");
    Ok(AddOutcome::Added { item_id })
}

/// Returns the skip reason when `filter` rejects `candidates`.
fn check_filter(
    filter: &PatternFilter,
    candidates: &[String],
    kind: &str,
    item_number: &str,
) -> Option<String> {
    if filter.matches(candidates) {
        return None;
    }

    let reason = match filter.operator() {
        MatchOperator::And => format!(
            "Skipping issue {item_number} because it doesn't match all the {kind}: {}",
            filter.describe()
        ),
        MatchOperator::Or => format!(
            "Skipping issue {item_number} because it does not have one of the {kind}: {}",
            filter.describe()
        ),
    };
    Some(reason)
}
