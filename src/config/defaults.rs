// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetime
//! - **Documents**: Recognized markdown file extensions

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time-to-live of a toast notification (in milliseconds).
pub const DEFAULT_TOAST_TTL_MS: u64 = 3000;

// ==========================================================================
// Document Defaults
// ==========================================================================

/// File extensions offered by the open-file filter, lowercase, without dot.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];
