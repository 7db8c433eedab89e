//! Trigger event payloads.
//!
//! Only the fields the filters and the add mutation need are modelled. Every
//! field is optional on the wire; absent lists deserialise as empty.

use serde::{Deserialize, Serialize};

use crate::{ContentId, ItemNumber};

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

/// The webhook payload of the workflow run that triggered the step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Present for `issues` events.
    #[serde(default)]
    pub issue: Option<TriggerItem>,

    /// Present for `pull_request` and `pull_request_target` events.
    #[serde(default)]
    pub pull_request: Option<TriggerItem>,
}

impl EventPayload {
    /// The item being triaged: the issue if present, otherwise the pull request.
    pub fn item(&self) -> Option<&TriggerItem> {
        self.issue.as_ref().or(self.pull_request.as_ref())
    }
}

/// An issue or pull request as it appears in the event payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerItem {
    /// Issue or pull request number, used in log and skip messages.
    #[serde(default)]
    pub number: Option<u64>,

    /// GraphQL node id, sent as the `contentId` of the add mutation.
    #[serde(default)]
    pub node_id: Option<String>,

    /// Labels currently applied to the item.
    #[serde(default)]
    pub labels: Vec<LabelRef>,

    /// Users currently assigned to the item.
    #[serde(default)]
    pub assignees: Vec<AssigneeRef>,
}

impl TriggerItem {
    /// The item number as an [`ItemNumber`], if the payload carries one.
    pub fn number(&self) -> Option<ItemNumber> {
        self.number.map(ItemNumber::new)
    }

    /// The GraphQL node id of the item, if the payload carries a non-empty one.
    pub fn content_id(&self) -> Option<ContentId> {
        self.node_id.clone().and_then(ContentId::new)
    }

    /// Label names, the candidates for the label filter.
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }

    /// Assignee logins, the candidates for the assignee filter.
    pub fn assignee_logins(&self) -> Vec<String> {
        self.assignees.iter().map(|a| a.login.clone()).collect()
    }
}

/// A label attached to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRef {
    /// Label name, e.g. `bug`.
    pub name: String,
}

/// A user assigned to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeRef {
    /// GitHub login of the assignee.
    pub login: String,
}
