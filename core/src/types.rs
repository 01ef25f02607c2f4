//! Payload types for the announcements API.
//!
//! # Design
//! Announcement bodies belong to the remote service, so responses stay as
//! `serde_json::Value` and are handed back exactly as decoded. `AnnouncementDraft`
//! exists for callers that want a typed request body; the client accepts any
//! `Serialize` payload and does not validate it.

use serde::{Deserialize, Serialize};

/// A decoded announcement response body, untouched by this crate.
pub type Announcement = serde_json::Value;

/// Announcement priority as the service spells it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

/// Mentor-authored request body for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub priority: Priority,
}

impl AnnouncementDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            priority: Priority::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
