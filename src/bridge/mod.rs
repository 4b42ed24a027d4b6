// SPDX-License-Identifier: MPL-2.0
//! Bridge between the native shell and the rendering surface.
//!
//! The shell turns user commands (open, save, export) into [`ShellEvent`]s.
//! Listeners registered by the surface receive them per [`Channel`]; when the
//! surface runs in a separate process the events travel as JSON
//! ([`ShellEvent::to_json`] / [`Bridge::dispatch_json`]).

mod document;
mod event;

pub use document::{is_markdown, open_document};
pub use event::{Channel, OpenedFile, ShellEvent};

use crate::error::Result;
use std::fmt;
use std::path::Path;

type FileListener = Box<dyn FnMut(&OpenedFile)>;
type CommandListener = Box<dyn FnMut()>;

#[derive(Default)]
pub struct Bridge {
    file_opened: Vec<FileListener>,
    save_file: Vec<CommandListener>,
    export_pdf: Vec<CommandListener>,
}

impl Bridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_file_opened(&mut self, listener: impl FnMut(&OpenedFile) + 'static) {
        self.file_opened.push(Box::new(listener));
    }

    pub fn on_save_file(&mut self, listener: impl FnMut() + 'static) {
        self.save_file.push(Box::new(listener));
    }

    pub fn on_export_pdf(&mut self, listener: impl FnMut() + 'static) {
        self.export_pdf.push(Box::new(listener));
    }

    /// Delivers `event` to its channel's listeners in registration order.
    /// Returns how many listeners were called.
    pub fn send(&mut self, event: &ShellEvent) -> usize {
        let delivered = match event {
            ShellEvent::FileOpened(file) => {
                for listener in &mut self.file_opened {
                    listener(file);
                }
                self.file_opened.len()
            }
            ShellEvent::SaveFile => run_all(&mut self.save_file),
            ShellEvent::ExportPdf => run_all(&mut self.export_pdf),
        };
        log::debug!("{} delivered to {delivered} listener(s)", event.channel());
        delivered
    }

    /// Decodes a JSON message and sends it.
    pub fn dispatch_json(&mut self, raw: &str) -> Result<usize> {
        let event = ShellEvent::from_json(raw)?;
        Ok(self.send(&event))
    }

    /// Loads `path` and sends it on the `file-opened` channel.
    pub fn open_file(&mut self, path: &Path) -> Result<usize> {
        let file = open_document(path)?;
        Ok(self.send(&ShellEvent::FileOpened(file)))
    }

    pub fn remove_all_listeners(&mut self, channel: Channel) {
        match channel {
            Channel::FileOpened => self.file_opened.clear(),
            Channel::SaveFile => self.save_file.clear(),
            Channel::ExportPdf => self.export_pdf.clear(),
        }
    }

    #[must_use]
    pub fn listener_count(&self, channel: Channel) -> usize {
        match channel {
            Channel::FileOpened => self.file_opened.len(),
            Channel::SaveFile => self.save_file.len(),
            Channel::ExportPdf => self.export_pdf.len(),
        }
    }

    /// Host platform, named the way web frontends expect (`darwin`, `win32`, `linux`, ...).
    #[must_use]
    pub fn platform() -> &'static str {
        match std::env::consts::OS {
            "macos" => "darwin",
            "windows" => "win32",
            other => other,
        }
    }

    /// Always true: the surface is hosted by the native shell.
    #[must_use]
    pub fn is_native() -> bool {
        true
    }
}

fn run_all(listeners: &mut [CommandListener]) -> usize {
    for listener in listeners.iter_mut() {
        listener();
    }
    listeners.len()
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("file_opened", &self.file_opened.len())
            .field("save_file", &self.save_file.len())
            .field("export_pdf", &self.export_pdf.len())
            .finish()
    }
}
