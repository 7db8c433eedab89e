//! Project-board domain for the add-to-project step.
//!
//! This crate decides whether a triggering issue or pull request belongs on a
//! project board and drives the two remote calls that put it there. The remote
//! side is reached only through the [`ProjectBoard`] port; infrastructure
//! crates supply the implementation.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`ProjectId`, `ContentId`, `RunId`, etc.) |
//! | [`types`] | `OwnerType`, `MatchOperator`, `AddOutcome` |
//! | [`errors`] | `BoardError` |
//! | [`event`] | Trigger payload (`EventPayload`, `TriggerItem`) |
//! | [`filter`] | Label / assignee `PatternFilter` |
//! | [`project_ref`] | Project URL parsing |
//! | [`ports`] | The `ProjectBoard` trait |
//! | [`add_to_project`] | The filter-and-dispatch operation |

pub mod add_to_project;
pub mod errors;
pub mod event;
pub mod filter;
pub mod identifiers;
pub mod ports;
pub mod project_ref;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use add_to_project::{add_to_project, AddToProjectConfig};
pub use errors::{BoardError, PROJECT_URL_FORMAT};
pub use event::{AssigneeRef, EventPayload, LabelRef, TriggerItem};
pub use filter::PatternFilter;
pub use identifiers::{
    ContentId, ItemNumber, OwnerName, ProjectId, ProjectItemId, ProjectNumber, RunId,
};
#[cfg(test)]
pub use ports::MockProjectBoard;
pub use ports::ProjectBoard;
pub use project_ref::ProjectRef;
pub use types::{AddOutcome, MatchOperator, OwnerType};
