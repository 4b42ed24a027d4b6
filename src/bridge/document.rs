// SPDX-License-Identifier: MPL-2.0
//! Loading markdown documents from disk.

use super::event::OpenedFile;
use crate::config::MARKDOWN_EXTENSIONS;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Returns whether `path` has a markdown extension (case-insensitive).
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Reads a UTF-8 document. Any extension is accepted.
pub fn open_document(path: &Path) -> Result<OpenedFile> {
    let content = fs::read_to_string(path)?;
    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

    log::debug!("loaded {} ({} bytes)", path.display(), content.len());
    Ok(OpenedFile { content, file_name })
}
