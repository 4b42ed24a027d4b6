// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::config::DEFAULT_TOAST_TTL_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Identifiers are allocated by the owning [`Manager`](super::Manager) in
/// strictly increasing order and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wraps a raw identifier, e.g. one received back from the rendering surface.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Category of a notification; drives the toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Error,
    /// Informational message.
    #[default]
    Info,
    /// Something worth attention that didn't block the operation.
    Warning,
}

/// Default time-to-live for a notification.
#[must_use]
pub const fn default_ttl() -> Duration {
    Duration::from_millis(DEFAULT_TOAST_TTL_MS)
}

/// A notification displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    id: NotificationId,
    message: String,
    severity: Severity,
    /// Zero means the notification stays until dismissed.
    #[serde(with = "ttl_millis")]
    ttl: Duration,
}

impl Notification {
    pub(super) fn new(id: NotificationId, message: String, severity: Severity, ttl: Duration) -> Self {
        Self {
            id,
            message,
            severity,
            ttl,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns whether this notification waits for an explicit dismissal.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.ttl.is_zero()
    }
}

mod ttl_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(ttl: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX))
    }
}
