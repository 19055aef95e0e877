//! Site theme (light/dark) with persistence.
//!
//! Hosts call [`use_theme_provider`] once at the root and hand the returned
//! [`ThemeContext`] to components that need it.

use dioxus::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::core::error::StorageError;
use crate::core::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Unknown values fall back to light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Handle on the shared theme signal.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    pub current: Signal<ThemeMode>,
}

impl ThemeContext {
    pub fn get(&self) -> ThemeMode {
        (self.current)()
    }

    /// Set, apply and persist the mode.
    pub fn set(&self, mode: ThemeMode) {
        let mut current = self.current;
        current.set(mode);
        tracing::info!(theme = mode.as_str(), "site theme changed");

        apply_theme_to_dom(mode);
        if let Err(err) = save_theme(mode) {
            tracing::warn!(%err, "could not persist theme");
        }
    }

    pub fn toggle(&self) {
        self.set(self.get().toggled());
    }
}

/// Create the theme context from the persisted preference. Call once at the root.
pub fn use_theme_provider() -> ThemeContext {
    let current = use_signal(|| {
        let mode = load_theme();
        apply_theme_to_dom(mode);
        mode
    });
    use_context_provider(|| ThemeContext { current })
}

/// Theme context provided by an ancestor.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Persisted mode, or the default when nothing (or garbage) is stored.
pub fn load_theme() -> ThemeMode {
    match storage::read(THEME_STORAGE_KEY) {
        Ok(Some(value)) => ThemeMode::parse(&value),
        Ok(None) => ThemeMode::default(),
        Err(err) => {
            tracing::warn!(%err, "could not read stored theme");
            ThemeMode::default()
        }
    }
}

pub fn save_theme(mode: ThemeMode) -> Result<(), StorageError> {
    storage::write(THEME_STORAGE_KEY, mode.as_str())
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(mode: ThemeMode) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        if root.set_attribute("data-theme", mode.as_str()).is_err() {
            tracing::warn!("could not set data-theme on document root");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_to_dom(_mode: ThemeMode) {}
