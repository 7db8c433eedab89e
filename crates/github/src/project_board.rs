//! [`ProjectBoard`] over the GitHub GraphQL API.

use async_trait::async_trait;
use board::{
    BoardError, ContentId, OwnerName, OwnerType, ProjectBoard, ProjectId, ProjectItemId,
    ProjectNumber,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{GraphQlClient, GraphQlError};

#[cfg(test)]
#[path = "project_board_tests.rs"]
mod tests;

const ADD_ITEM_MUTATION: &str = r"
    mutation addIssueToProject($input: AddProjectNextItemInput!) {
        addProjectNextItem(input: $input) {
            projectNextItem {
                id
            }
        }
    }
";

/// Builds the project lookup query for the given owner root field.
///
/// The organization and user variants differ only in the root field.
fn project_lookup_query(owner_type: OwnerType) -> String {
    format!(
        r"
    query getProject($ownerName: String!, $projectNumber: Int!) {{
        {field}(login: $ownerName) {{
            projectNext(number: $projectNumber) {{
                id
            }}
        }}
    }}
",
        field = owner_type.graphql_field()
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupVariables<'a> {
    owner_name: &'a str,
    project_number: u64,
}

#[derive(Debug, Deserialize)]
struct LookupData {
    organization: Option<ProjectOwner>,
    user: Option<ProjectOwner>,
}

#[derive(Debug, Deserialize)]
struct ProjectOwner {
    #[serde(rename = "projectNext")]
    project_next: Option<NodeRef>,
}

#[derive(Debug, Deserialize)]
struct NodeRef {
    id: String,
}

#[derive(Debug, Serialize)]
struct AddItemVariables<'a> {
    input: AddItemInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddItemInput<'a> {
    content_id: &'a str,
    project_id: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddItemData {
    add_project_next_item: AddItemPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddItemPayload {
    project_next_item: NodeRef,
}

/// GitHub-backed [`ProjectBoard`].
#[derive(Debug, Clone)]
pub struct GraphQlProjectBoard {
    client: GraphQlClient,
}

impl GraphQlProjectBoard {
    /// Creates a board that issues its queries through `client`.
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }

    /// Convenience constructor building the underlying [`GraphQlClient`].
    pub fn connect(token: &str, api_url: impl Into<String>) -> Result<Self, GraphQlError> {
        GraphQlClient::new(token, api_url).map(Self::new)
    }
}

#[async_trait]
impl ProjectBoard for GraphQlProjectBoard {
    #[instrument(skip(self), fields(api_url = %self.client.api_url()))]
    async fn resolve_project_id(
        &self,
        owner_type: OwnerType,
        owner_name: &OwnerName,
        number: ProjectNumber,
    ) -> Result<ProjectId, BoardError> {
        let query = project_lookup_query(owner_type);
        let variables = LookupVariables {
            owner_name: owner_name.as_str(),
            project_number: number.as_u64(),
        };

        let data: LookupData = self
            .client
            .execute(&query, variables)
            .await
            .map_err(|e| e.into_board_error("resolve project id"))?;

        let owner = match owner_type {
            OwnerType::Organization => data.organization,
            OwnerType::User => data.user,
        };

        owner
            .and_then(|o| o.project_next)
            .and_then(|p| ProjectId::new(p.id))
            .ok_or_else(|| BoardError::ProjectNotFound {
                owner_type,
                owner_name: owner_name.clone(),
                number,
            })
    }

    #[instrument(skip(self), fields(api_url = %self.client.api_url()))]
    async fn add_item(
        &self,
        project_id: &ProjectId,
        content_id: &ContentId,
    ) -> Result<ProjectItemId, BoardError> {
        let variables = AddItemVariables {
            input: AddItemInput {
                content_id: content_id.as_str(),
                project_id: project_id.as_str(),
            },
        };

        let data: AddItemData = self
            .client
            .execute(ADD_ITEM_MUTATION, variables)
            .await
            .map_err(|e| e.into_board_error("add project item"))?;

        ProjectItemId::new(data.add_project_next_item.project_next_item.id).ok_or_else(|| {
            BoardError::Remote {
                operation: "add project item".to_string(),
                message: "response contained an empty project item id".to_string(),
            }
        })
    }
}
