use crate::document::{Document, Slot};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;
use tracing::{info, warn};

/// Storage key under which the theme is persisted
pub const THEME_KEY: &str = "theme";

/// Page colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Toggle button icon: it shows the theme a click switches to
    pub fn indicator_icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("Unknown theme '{}', expected 'light' or 'dark'", other),
        }
    }
}

/// Client-local persistent key-value storage
#[async_trait]
pub trait ThemeStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store kept in memory only; nothing survives the process
#[derive(Debug, Default, Clone)]
pub struct MemoryThemeStore {
    entries: HashMap<String, String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThemeStore for MemoryThemeStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file, created on first write
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<HashMap<String, String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content).with_context(|| {
                format!("Failed to parse theme store: {}", self.path.display())
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to read theme store: {}", self.path.display())
            }),
        }
    }
}

#[async_trait]
impl ThemeStore for FileThemeStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create theme store directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write theme store: {}", self.path.display()))
    }
}

/// Two-state theme switch persisted in a [`ThemeStore`]
pub struct ThemeToggle<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeToggle<S> {
    /// Read the persisted theme once.
    ///
    /// A missing or unrecognised value, or an unreadable store, yields `default`.
    pub async fn load(store: S, default: Theme) -> Self {
        let current = match store.get(THEME_KEY).await {
            Ok(Some(value)) => value.parse::<Theme>().unwrap_or_else(|e| {
                warn!("Ignoring stored theme: {}", e);
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!("Theme store unavailable, using {}: {:#}", default, e);
                default
            }
        };

        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reflect the current theme on the page shell
    pub fn apply<D: Document + ?Sized>(&self, doc: &mut D) {
        doc.set_attribute(Slot::Body, "data-theme", self.current.as_str());
        doc.set_attribute(Slot::ThemeToggleIcon, "class", self.current.indicator_icon());
    }

    /// Swap the theme, persist it and update the page shell.
    ///
    /// The in-memory state flips even when persisting fails; the error is
    /// returned so the caller can report it.
    pub async fn toggle<D: Document + ?Sized>(&mut self, doc: &mut D) -> Result<Theme> {
        self.current = self.current.toggled();
        self.apply(doc);
        info!(theme = %self.current, "Theme toggled");

        self.store.set(THEME_KEY, self.current.as_str()).await?;
        Ok(self.current)
    }
}
