//
//  sentry-api
//  api/releases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Release resource facade.
//!
//! Releases tie events to a deployed version of a project. This module
//! covers the release endpoints and the release file store (source maps
//! and other artifacts), including the multipart upload path.
//!
//! # Example
//!
//! ```rust,no_run
//! use sentry_api::api::releases::CreateRelease;
//! use sentry_api::FormData;
//!
//! # async fn example(client: &sentry_api::SentryClient) -> Result<(), sentry_api::ApiError> {
//! let release = client
//!     .releases()
//!     .create("my-org", "my-project", &CreateRelease::version("1.2.3"))
//!     .await?;
//!
//! let form = FormData::new()
//!     .text("name", "http://example.com/app.js.map")
//!     .file("file", "app.js.map", std::fs::read("dist/app.js.map").unwrap());
//! client
//!     .releases()
//!     .create_file("my-org", "my-project", &release.version, form)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::{FormData, RequestOptions, SentryClient};
use crate::api::common::ApiError;

/// Represents a release of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// The version identifier (version number, commit hash, ...).
    pub version: String,

    /// Optional commit reference the release was cut from.
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,

    /// URL pointing at the release (e.g. source browser).
    #[serde(default)]
    pub url: Option<String>,

    /// When the release record was created.
    #[serde(rename = "dateCreated", default)]
    pub date_created: Option<DateTime<Utc>>,

    /// When the release process started.
    #[serde(rename = "dateStarted", default)]
    pub date_started: Option<DateTime<Utc>>,

    /// When the release went live.
    #[serde(rename = "dateReleased", default)]
    pub date_released: Option<DateTime<Utc>>,

    /// Number of new groups first seen in this release.
    #[serde(rename = "newGroups", default)]
    pub new_groups: Option<u64>,
}

/// Body for creating a new release.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRelease {
    /// A version identifier for this release. Can be a version number, a
    /// commit hash etc.
    pub version: String,

    /// An optional commit reference. This is useful if a tagged version
    /// has been provided.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// A URL that points to the release. This can be the path to an
    /// online interface to the sourcecode for instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// An optional date that indicates when the release process started.
    #[serde(rename = "dateStarted", skip_serializing_if = "Option::is_none")]
    pub date_started: Option<DateTime<Utc>>,

    /// An optional date that indicates when the release went live. If not
    /// provided the current time is assumed.
    #[serde(rename = "dateReleased", skip_serializing_if = "Option::is_none")]
    pub date_released: Option<DateTime<Utc>>,
}

impl CreateRelease {
    /// Creates a body with just a version identifier.
    pub fn version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            reference: None,
            url: None,
            date_started: None,
            date_released: None,
        }
    }
}

/// Body for updating a release.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRelease {
    /// An optional commit reference.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// A URL that points to the release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// When the release process started.
    #[serde(rename = "dateStarted", skip_serializing_if = "Option::is_none")]
    pub date_started: Option<DateTime<Utc>>,

    /// When the release went live.
    #[serde(rename = "dateReleased", skip_serializing_if = "Option::is_none")]
    pub date_released: Option<DateTime<Utc>>,
}

/// A file attached to a release (source map, artifact, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseFile {
    /// File identifier.
    #[serde(default)]
    pub id: String,

    /// The name (full path) of the file.
    pub name: String,

    /// Headers attached to the file (e.g. a content type).
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// File size in bytes.
    #[serde(default)]
    pub size: Option<u64>,

    /// SHA-1 checksum of the contents.
    #[serde(default)]
    pub sha1: Option<String>,

    /// When the file was uploaded.
    #[serde(rename = "dateCreated", default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// Body for renaming a release file.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateReleaseFile {
    /// The new name of the file.
    pub name: String,
}

/// Provides methods for interacting with Releases in the Sentry API.
pub struct Releases<'a> {
    client: &'a SentryClient,
}

impl SentryClient {
    /// Returns the release resource facade.
    pub fn releases(&self) -> Releases<'_> {
        Releases { client: self }
    }
}

impl Releases<'_> {
    /// Retrieve a release.
    pub async fn get(
        &self,
        org_slug: &str,
        project_slug: &str,
        version: &str,
    ) -> Result<Release, ApiError> {
        let path = format!("projects/{}/{}/releases/{}/", org_slug, project_slug, version);
        self.client.get(&path, None).await
    }

    /// Create a new release.
    pub async fn create(
        &self,
        org_slug: &str,
        project_slug: &str,
        body: &CreateRelease,
    ) -> Result<Release, ApiError> {
        let path = format!("projects/{}/{}/releases/", org_slug, project_slug);
        self.client.post(&path, body).await
    }

    /// Update a release.
    pub async fn update(
        &self,
        org_slug: &str,
        project_slug: &str,
        version: &str,
        body: &UpdateRelease,
    ) -> Result<Release, ApiError> {
        let path = format!("projects/{}/{}/releases/{}/", org_slug, project_slug, version);
        self.client.put(&path, body).await
    }

    /// Delete a release.
    pub async fn delete(
        &self,
        org_slug: &str,
        project_slug: &str,
        version: &str,
    ) -> Result<(), ApiError> {
        let path = format!("projects/{}/{}/releases/{}/", org_slug, project_slug, version);
        self.client.delete(&path).await
    }

    /// List a release's files.
    pub async fn files(
        &self,
        org_slug: &str,
        project_slug: &str,
        version: &str,
    ) -> Result<Vec<ReleaseFile>, ApiError> {
        let path = format!(
            "projects/{}/{}/releases/{}/files/",
            org_slug, project_slug, version
        );
        self.client.get(&path, None).await
    }

    /// Retrieve a file.
    pub async fn get_file(
        &self,
        org_slug: &str,
        project_slug: &str,
        version: &str,
        file_id: &str,
    ) -> Result<ReleaseFile, ApiError> {
        let path = format!(
            "projects/{}/{}/releases/{}/files/{}/",
            org_slug, project_slug, version, file_id
        );
        self.client.get(&path, None).await
    }

    /// Upload a new file.
    ///
    /// The form should carry a `name` text field (the full path of the
    /// file) and a `file` part with the contents; `header` text fields
    /// may be supplied to attach headers to the file.
    pub async fn create_file(
        &self,
        org_slug: &str,
        project_slug: &str,
        version: &str,
        form: FormData,
    ) -> Result<ReleaseFile, ApiError> {
        let path = format!(
            "projects/{}/{}/releases/{}/files/",
            org_slug, project_slug, version
        );
        let options = RequestOptions {
            method: Method::POST,
            form: Some(form),
            ..RequestOptions::default()
        };
        let value = self.client.request(&path, options).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Update (rename) a file.
    pub async fn update_file(
        &self,
        org_slug: &str,
        project_slug: &str,
        version: &str,
        file_id: &str,
        body: &UpdateReleaseFile,
    ) -> Result<ReleaseFile, ApiError> {
        let path = format!(
            "projects/{}/{}/releases/{}/files/{}/",
            org_slug, project_slug, version, file_id
        );
        self.client.put(&path, body).await
    }

    /// Delete a file.
    pub async fn delete_file(
        &self,
        org_slug: &str,
        project_slug: &str,
        version: &str,
        file_id: &str,
    ) -> Result<(), ApiError> {
        let path = format!(
            "projects/{}/{}/releases/{}/files/{}/",
            org_slug, project_slug, version, file_id
        );
        self.client.delete(&path).await
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

    #[test]
    fn test_create_release_serializes_ref_keyword() {
        let body = CreateRelease {
            reference: Some("da39a3ee".to_string()),
            ..CreateRelease::version("1.2.3")
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"version": "1.2.3", "ref": "da39a3ee"})
        );
    }

    #[tokio::test]
    async fn test_create_file_uploads_multipart() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/0/projects/acme/web/releases/1.2.3/files/")
            .match_header(
                "content-type",
                mockito::Matcher::Regex("^multipart/form-data".to_string()),
            )
            .with_status(201)
            .with_body(r#"{"id":"1","name":"http://example.com/app.js"}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let form = FormData::new()
            .text("name", "http://example.com/app.js")
            .file("file", "app.js", b"console.log('hi');".to_vec());
        let file = client
            .releases()
            .create_file("acme", "web", "1.2.3", form)
            .await
            .unwrap();

        assert_eq!(file.name, "http://example.com/app.js");
        mock.assert_async().await;
    }
}
