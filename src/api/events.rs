//
//  sentry-api
//  api/events.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Event resource facade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::SentryClient;
use crate::api::common::ApiError;

/// A single error event stored by Sentry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Internal event identifier.
    #[serde(default)]
    pub id: String,

    /// The client-generated event identifier.
    #[serde(rename = "eventID", default)]
    pub event_id: String,

    /// The logged message, when the event carries one.
    #[serde(default)]
    pub message: Option<String>,

    /// Platform of the SDK that sent the event.
    #[serde(default)]
    pub platform: Option<String>,

    /// When the event was recorded.
    #[serde(rename = "dateCreated", default)]
    pub date_created: Option<DateTime<Utc>>,

    /// Tags attached to the event.
    #[serde(default)]
    pub tags: Vec<EventTag>,
}

/// A key/value tag on an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTag {
    /// Tag key.
    pub key: String,

    /// Tag value.
    pub value: String,
}

/// Provides methods for interacting with Events in the Sentry API.
pub struct Events<'a> {
    client: &'a SentryClient,
}

impl SentryClient {
    /// Returns the event resource facade.
    pub fn events(&self) -> Events<'_> {
        Events { client: self }
    }
}

impl Events<'_> {
    /// Retrieves the details of the latest sample for an aggregate.
    pub async fn latest(&self, group_id: &str) -> Result<Event, ApiError> {
        let path = format!("groups/{}/events/latest/", group_id);
        self.client.get(&path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes() {
        let json = r#"{
            "id": "9999",
            "eventID": "a1b2c3d4e5f60718293a4b5c6d7e8f90",
            "message": "This is an example log entry",
            "platform": "javascript",
            "dateCreated": "2015-06-23T13:57:34.847Z",
            "tags": [{"key": "browser", "value": "Chrome 43.0"}]
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_id, "a1b2c3d4e5f60718293a4b5c6d7e8f90");
        assert_eq!(event.tags[0].key, "browser");
    }
}
