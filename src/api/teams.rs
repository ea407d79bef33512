//
//  sentry-api
//  api/teams.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Team resource facade.
//!
//! Teams group members inside an organization and own projects. Note the
//! path split the API makes: a team is addressed as
//! `teams/{org}/{team}/`, but teams are created and listed under their
//! organization at `organizations/{org}/teams/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::SentryClient;
use crate::api::common::ApiError;
use crate::api::projects::Project;

/// Represents a Sentry team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Numeric identifier, serialized by the API as a string.
    #[serde(default)]
    pub id: String,

    /// URL-safe identifier used in API paths.
    pub slug: String,

    /// Human-readable name of the team.
    pub name: String,

    /// When the team was created.
    #[serde(rename = "dateCreated", default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// Body for creating a new team.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeam {
    /// The human readable name for the new team.
    pub name: String,

    /// The unique URL slug for this team. If this is not provided a slug
    /// is automatically generated based on the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Body for updating a team.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTeam {
    /// The new name for the team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A new slug for the team. It has to be unique and available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Provides methods for interacting with Teams in the Sentry API.
pub struct Teams<'a> {
    client: &'a SentryClient,
}

impl SentryClient {
    /// Returns the team resource facade.
    pub fn teams(&self) -> Teams<'_> {
        Teams { client: self }
    }
}

impl Teams<'_> {
    /// Retrieve a team.
    pub async fn get(&self, org_slug: &str, team_slug: &str) -> Result<Team, ApiError> {
        let path = format!("teams/{}/{}/", org_slug, team_slug);
        self.client.get(&path, None).await
    }

    /// Create a new team bound to an organization.
    pub async fn create(&self, org_slug: &str, body: &CreateTeam) -> Result<Team, ApiError> {
        let path = format!("organizations/{}/teams/", org_slug);
        self.client.post(&path, body).await
    }

    /// Update a team.
    pub async fn update(
        &self,
        org_slug: &str,
        team_slug: &str,
        body: &UpdateTeam,
    ) -> Result<Team, ApiError> {
        let path = format!("teams/{}/{}/", org_slug, team_slug);
        self.client.put(&path, body).await
    }

    /// Delete a team.
    pub async fn delete(&self, org_slug: &str, team_slug: &str) -> Result<(), ApiError> {
        let path = format!("teams/{}/{}/", org_slug, team_slug);
        self.client.delete(&path).await
    }

    /// Retrieve event counts for a team, as `(timestamp, count)` pairs.
    pub async fn stats(
        &self,
        org_slug: &str,
        team_slug: &str,
    ) -> Result<Vec<(i64, u64)>, ApiError> {
        let path = format!("teams/{}/{}/stats/", org_slug, team_slug);
        self.client.get(&path, None).await
    }

    /// List an organization's teams.
    pub async fn list(&self, org_slug: &str) -> Result<Vec<Team>, ApiError> {
        let path = format!("organizations/{}/teams/", org_slug);
        self.client.get(&path, None).await
    }

    /// List a team's projects.
    pub async fn projects(
        &self,
        org_slug: &str,
        team_slug: &str,
    ) -> Result<Vec<Project>, ApiError> {
        let path = format!("teams/{}/{}/projects/", org_slug, team_slug);
        self.client.get(&path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_deserializes() {
        let json = r#"{"id":"5","slug":"backend","name":"Backend","dateCreated":"2015-06-23T13:57:34.847Z"}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.slug, "backend");
        assert!(team.date_created.is_some());
    }

    #[test]
    fn test_create_team_without_slug() {
        let body = CreateTeam {
            name: "Backend".to_string(),
            slug: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"name": "Backend"})
        );
    }
}
