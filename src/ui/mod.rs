// SPDX-License-Identifier: MPL-2.0
//! User interface state shared with the rendering surface.
//!
//! Stores follow the "state down, messages up" pattern: views subscribe to a
//! store, receive its current value immediately, and again after every change.
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`theming`] - Light/Dark/Auto theme preference
//! - [`observers`] - Observer registry used by the stores

pub mod notifications;
pub mod observers;
pub mod theming;
