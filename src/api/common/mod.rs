//
//  sentry-api
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared across the API layer: the
//! library-wide error type and the pagination machinery.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`PageCursor`] - Parsed pagination `Link` header
//!
//! # Example
//!
//! ```rust
//! use sentry_api::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::Api { status, message }) => {
//!             println!("Server said no ({}): {}", status, message);
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

use crate::dsn::DsnError;

mod pagination;

pub use pagination::{PageCursor, Relation};

pub(crate) use pagination::PageBuffer;

/// Unified error type for all Sentry API operations.
///
/// `ApiError` covers the failure scenarios of a call end to end: an
/// unusable connection string, a transport-level failure, an HTTP response
/// outside the success range, and a response body that does not have the
/// expected shape.
///
/// # Notes
///
/// - The `Network` variant automatically converts from `reqwest::Error`
/// - No variant is ever retried internally; every failure propagates to
///   the caller exactly once, and a failed call never yields a partial
///   result
#[derive(Error, Debug)]
pub enum ApiError {
    /// The connection string could not be parsed.
    ///
    /// See [`DsnError`] for the specific component that was missing or
    /// malformed.
    #[error(transparent)]
    Dsn(#[from] DsnError),

    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and other transport-layer issues. The underlying error is surfaced
    /// verbatim.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status outside the 2xx range.
    ///
    /// The message is taken from the response body's `detail` field when
    /// present, otherwise formatted as `"<code>: <reason>"`, falling back
    /// to the bare status code.
    #[error("{message}")]
    Api {
        /// The HTTP status code of the failing response.
        status: StatusCode,
        /// The derived, user-facing error message.
        message: String,
    },

    /// A follow-up page did not have the shape established by the first
    /// page of the call.
    ///
    /// The merge strategy of a paginated call is fixed by the first page's
    /// body; a later page of a different shape aborts the call rather than
    /// producing a silently partial merge.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The (merged) response body could not be decoded into the requested
    /// type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
