//
//  sentry-api
//  api/organizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Organization resource facade.
//!
//! Organizations are the top-level unit in Sentry, grouping projects and
//! teams under one slug. This module provides the facade methods plus the
//! request/response models for the organization endpoints.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn example(client: &sentry_api::SentryClient) -> Result<(), sentry_api::ApiError> {
//! let org = client.organizations().get("my-org").await?;
//! println!("{} ({})", org.name, org.slug);
//!
//! for project in client.organizations().projects("my-org").await? {
//!     println!("  {}", project.slug);
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::SentryClient;
use crate::api::common::ApiError;
use crate::api::projects::Project;

/// Represents a Sentry organization.
///
/// # Fields
///
/// * `id` - Numeric identifier, as the API returns it (a string)
/// * `slug` - URL-safe identifier used in API paths
/// * `name` - Human-readable name
/// * `date_created` - When the organization was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Numeric identifier, serialized by the API as a string.
    #[serde(default)]
    pub id: String,

    /// URL-safe identifier used in API paths.
    pub slug: String,

    /// Human-readable name of the organization.
    pub name: String,

    /// When the organization was created.
    #[serde(rename = "dateCreated", default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// Body for creating a new organization.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganization {
    /// The human readable name for the new organization.
    pub name: String,

    /// The unique URL slug for this organization. If this is not provided
    /// a slug is automatically generated based on the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Body for updating an organization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrganization {
    /// An optional new name for the organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// An optional new slug for the organization. Needs to be available
    /// and unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Provides methods for interacting with Organizations in the Sentry API.
///
/// Obtained from [`SentryClient::organizations`]; pure path formatting
/// over the request engine.
pub struct Organizations<'a> {
    client: &'a SentryClient,
}

impl SentryClient {
    /// Returns the organization resource facade.
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations { client: self }
    }
}

impl Organizations<'_> {
    /// Retrieve an organization.
    pub async fn get(&self, org_slug: &str) -> Result<Organization, ApiError> {
        let path = format!("organizations/{}/", org_slug);
        self.client.get(&path, None).await
    }

    /// Create a new organization.
    pub async fn create(&self, body: &CreateOrganization) -> Result<Organization, ApiError> {
        self.client.post("organizations/", body).await
    }

    /// Update an organization.
    pub async fn update(
        &self,
        org_slug: &str,
        body: &UpdateOrganization,
    ) -> Result<Organization, ApiError> {
        let path = format!("organizations/{}/", org_slug);
        self.client.put(&path, body).await
    }

    /// Delete an organization.
    pub async fn delete(&self, org_slug: &str) -> Result<(), ApiError> {
        let path = format!("organizations/{}/", org_slug);
        self.client.delete(&path).await
    }

    /// Retrieve an organization's projects.
    ///
    /// Paginated; pages are merged before this resolves.
    pub async fn projects(&self, org_slug: &str) -> Result<Vec<Project>, ApiError> {
        let path = format!("organizations/{}/projects/", org_slug);
        self.client.get(&path, None).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::ClientConfig;

    use super::*;

    fn test_client(server: &mockito::Server) -> SentryClient {
        let dsn = format!("http://PUBLIC:SECRET@{}/123", server.host_with_port());
        SentryClient::new(&dsn, ClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_get_formats_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/0/organizations/acme/")
            .with_status(200)
            .with_body(
                r#"{"id":"2","slug":"acme","name":"Acme","dateCreated":"2015-06-23T13:57:34.847Z"}"#,
            )
            .create_async()
            .await;

        let client = test_client(&server);
        let org = client.organizations().get("acme").await.unwrap();

        assert_eq!(org.slug, "acme");
        assert_eq!(org.name, "Acme");
        assert!(org.date_created.is_some());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_projects_merges_pages() {
        let mut server = mockito::Server::new_async().await;
        let page2_url = format!("{}/api/0/organizations/acme/projects/2", server.url());
        let _mock = server
            .mock("GET", "/api/0/organizations/acme/projects/")
            .with_status(200)
            .with_header(
                "link",
                &format!(r#"<{}>; rel="next"; results="true""#, page2_url),
            )
            .with_body(r#"[{"id":"1","slug":"one","name":"One"}]"#)
            .create_async()
            .await;
        let _mock = server
            .mock("GET", "/api/0/organizations/acme/projects/2")
            .with_status(200)
            .with_body(r#"[{"id":"2","slug":"two","name":"Two"}]"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let projects = client.organizations().projects("acme").await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].slug, "two");
    }
}
