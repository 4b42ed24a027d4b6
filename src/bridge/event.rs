// SPDX-License-Identifier: MPL-2.0
//! Events crossing from the native shell to the rendering surface.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named channel carrying one kind of [`ShellEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    FileOpened,
    SaveFile,
    ExportPdf,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::FileOpened, Channel::SaveFile, Channel::ExportPdf];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::FileOpened => "file-opened",
            Channel::SaveFile => "save-file",
            Channel::ExportPdf => "export-pdf",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Channel::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| Error::Bridge(format!("unknown channel: {s}")))
    }
}

/// A document loaded by the shell and handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenedFile {
    pub content: String,
    pub file_name: String,
}

/// Wire format: `{"channel": "file-opened", "data": {"content": "...", "fileName": "..."}}`.
/// Commands without payload carry no `data` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", content = "data", rename_all = "kebab-case")]
pub enum ShellEvent {
    FileOpened(OpenedFile),
    /// Ask the surface to save the current document.
    SaveFile,
    /// Ask the surface to export the current document as PDF.
    ExportPdf,
}

impl ShellEvent {
    #[must_use]
    pub fn channel(&self) -> Channel {
        match self {
            ShellEvent::FileOpened(_) => Channel::FileOpened,
            ShellEvent::SaveFile => Channel::SaveFile,
            ShellEvent::ExportPdf => Channel::ExportPdf,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
