// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/Auto theme preference.
//!
//! The [`ThemeStore`] keeps the user's choice in `settings.toml`, resolves
//! whether the interface should currently be dark, and publishes a
//! [`ThemeState`] to observers (the rendering surface toggles its stylesheet
//! from it).

use crate::config::{self, Config};
use crate::error::Result;
use crate::ui::observers::{Observers, SubscriptionId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system appearance.
    #[default]
    Auto,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(self, appearance: &impl SystemAppearance) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::Auto => appearance.prefers_dark(),
        }
    }

    /// Mode selected by the toggle action: light goes dark, anything else goes light.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark | ThemeMode::Auto => ThemeMode::Light,
        }
    }
}

/// Operating system colour-scheme preference.
pub trait SystemAppearance {
    fn prefers_dark(&self) -> bool;
}

/// Asks the platform through `dark-light`. Unknown or failed detection counts as light.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectedAppearance;

impl SystemAppearance for DetectedAppearance {
    fn prefers_dark(&self) -> bool {
        matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
    }
}

/// Appearance with a fixed answer, for hosts that track the preference themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAppearance(pub bool);

impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// What observers receive: the chosen mode and its resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub dark: bool,
}

pub struct ThemeStore<A: SystemAppearance = DetectedAppearance> {
    state: ThemeState,
    /// `None` keeps the preference in memory only.
    settings_path: Option<PathBuf>,
    appearance: A,
    observers: Observers<ThemeState>,
}

impl ThemeStore<DetectedAppearance> {
    /// Store backed by the default `settings.toml` and the detected system appearance.
    #[must_use]
    pub fn open() -> Self {
        Self::new(config::default_config_path(), DetectedAppearance)
    }
}

impl<A: SystemAppearance> ThemeStore<A> {
    /// Creates a store, reading the persisted mode from `settings_path`.
    pub fn new(settings_path: Option<PathBuf>, appearance: A) -> Self {
        let mode = read_persisted(settings_path.as_ref());
        let state = ThemeState {
            mode,
            dark: mode.is_dark(&appearance),
        };
        Self {
            state,
            settings_path,
            appearance,
            observers: Observers::new(),
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ThemeState) + 'static,
    {
        self.observers.subscribe(&self.state, observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Re-reads the persisted mode and applies it.
    pub fn init(&mut self) {
        let mode = read_persisted(self.settings_path.as_ref());
        self.apply(mode);
    }

    /// Persists and applies `mode`.
    ///
    /// The new mode is applied and published even if saving fails; the
    /// failure is returned so the caller can report it.
    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<()> {
        let saved = self.persist(mode);
        if let Err(err) = &saved {
            log::warn!("failed to save theme preference: {err}");
        }
        self.apply(mode);
        saved
    }

    /// Switches between light and dark. From `Auto` the next mode is light.
    pub fn toggle(&mut self) -> Result<()> {
        self.set_theme(self.state.mode.toggled())
    }

    /// Resolves `Auto` again, e.g. after the system appearance changed.
    /// Publishes only when the resolution differs.
    pub fn refresh(&mut self) {
        let dark = self.state.mode.is_dark(&self.appearance);
        if dark != self.state.dark {
            self.state.dark = dark;
            self.observers.notify(&self.state);
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.state.mode
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.state.dark
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Publishes only when the resolved state differs from the current one.
    fn apply(&mut self, mode: ThemeMode) {
        let state = ThemeState {
            mode,
            dark: mode.is_dark(&self.appearance),
        };
        if state == self.state {
            return;
        }
        self.state = state;
        log::info!("theme set to {:?} (dark: {})", mode, state.dark);
        self.observers.notify(&self.state);
    }

    fn persist(&self, mode: ThemeMode) -> Result<()> {
        let Some(path) = &self.settings_path else {
            return Ok(());
        };
        let mut settings = if path.exists() {
            config::load_from_path(path)?
        } else {
            Config::default()
        };
        settings.theme = Some(mode);
        config::save_to_path(&settings, path)
    }
}

impl<A: SystemAppearance> fmt::Debug for ThemeStore<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state)
            .field("settings_path", &self.settings_path)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

fn read_persisted(path: Option<&PathBuf>) -> ThemeMode {
    let Some(path) = path.filter(|p| p.exists()) else {
        return ThemeMode::default();
    };
    match config::load_from_path(path) {
        Ok(settings) => settings.theme.unwrap_or_default(),
        Err(err) => {
            log::warn!("failed to read theme preference: {err}");
            ThemeMode::default()
        }
    }
}
