// SPDX-License-Identifier: MPL-2.0
//! `mdview` is the native shell layer of a desktop markdown viewer and editor.
//!
//! It provides the state containers and plumbing the shell shares with its
//! web rendering surface: toast notifications with timed expiry, the
//! light/dark theme preference, and the event bridge carrying opened documents
//! and save/export commands.

pub mod bridge;
pub mod config;
pub mod error;
pub mod paths;
pub mod ui;
