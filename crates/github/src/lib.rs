//! GitHub infrastructure adapter for add-to-project.
//!
//! Implements the [`board::ProjectBoard`] port against the GitHub GraphQL API
//! using [`reqwest`]. The domain crate never sees HTTP, headers, or GraphQL
//! documents; it only receives ids or a [`board::BoardError`].
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. Filtering and
//! URL parsing stay in [`board`].

pub mod client;
pub mod errors;
pub mod project_board;

pub use client::{GraphQlClient, DEFAULT_GRAPHQL_URL};
pub use errors::GraphQlError;
pub use project_board::GraphQlProjectBoard;
