// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (file saved,
//! export failed, ...) without blocking interaction. The [`Manager`] keeps them
//! in insertion order, expires them after their time-to-live and publishes the
//! list to every subscribed view.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for ordering, expiry and publication
//! - [`clock`] - Injectable time sources
//!
//! # Usage
//!
//! ```
//! use mdview::ui::notifications::{Manager, ManualClock, Severity};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut manager = Manager::with_clock(clock.clone());
//! manager.subscribe(|toasts| println!("{} toast(s) on screen", toasts.len()));
//!
//! let id = manager.show_with("Saved", Severity::Success, Duration::from_millis(1000));
//! assert!(manager.get(id).is_some());
//!
//! clock.advance(Duration::from_millis(1000));
//! manager.tick();
//! assert!(manager.is_empty());
//! ```

mod clock;
mod manager;
mod notification;

pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{default_ttl, Notification, NotificationId, Severity};
