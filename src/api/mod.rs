//
//  sentry-api
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP request engine for the Sentry web API and
//! the per-resource facades built on top of it.
//!
//! ## Architecture
//!
//! - [`client`]: Core request engine with authentication, status
//!   interpretation, and transparent pagination
//! - [`common`]: Shared types (errors, pagination cursor, merge buffer)
//! - [`organizations`], [`projects`], [`releases`], [`teams`], [`events`]:
//!   Per-resource facades; pure path formatting delegating to the engine
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sentry_api::{ClientConfig, SentryClient};
//!
//! # async fn example() -> Result<(), sentry_api::ApiError> {
//! let client = SentryClient::new(
//!     "https://abc123:@app.getsentry.com/1234",
//!     ClientConfig::default(),
//! )?;
//!
//! // Facade call
//! let org = client.organizations().get("my-org").await?;
//!
//! // Raw call; paginated list endpoints come back fully merged
//! let issues: serde_json::Value = client
//!     .get("projects/my-org/my-project/issues/", None)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`ApiError`]:
//!
//! - `Dsn`: the connection string could not be parsed
//! - `Network`: transport failure (DNS, connect, timeout)
//! - `Api`: the server answered outside the 2xx range
//! - `UnexpectedResponse` / `Decode`: the body did not have the expected
//!   shape
//!
//! No error is retried; every failure surfaces to the caller exactly once.

/// Core HTTP request engine for the Sentry API.
///
/// Provides the [`SentryClient`] which handles DSN-based authentication,
/// transport defaults, status-code interpretation, and cursor pagination.
pub mod client;

/// Common types shared across the API layer.
///
/// Includes:
/// - [`ApiError`]: Standardized error type
/// - [`common::PageCursor`]: Parsed pagination `Link` header
pub mod common;

/// Organization resource facade.
pub mod organizations;

/// Project resource facade (including client keys, stats, and tags).
pub mod projects;

/// Release resource facade (including release file uploads).
pub mod releases;

/// Team resource facade.
pub mod teams;

/// Event resource facade.
pub mod events;

/// Re-export of the main Sentry API client.
pub use client::SentryClient;

/// Re-export of the library-wide error type.
pub use common::ApiError;
