use crate::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Location of the profile document when the config does not name one
pub const DEFAULT_DATA_PATH: &str = "assets/data/portfolioData.json";

/// Location of the theme store when the config does not name one
pub const DEFAULT_THEME_STORE: &str = ".folio/theme.json";

/// Site configuration, usually read from `folio.yaml` in the site root.
///
/// All paths are relative to the site root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Profile document to load
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// HTML page shell with `{{ slot }}` placeholders
    /// If not specified, the built-in shell is used
    #[serde(default)]
    pub template_path: Option<PathBuf>,
    /// JSON file holding persisted page state such as the theme
    #[serde(default = "default_theme_store")]
    pub theme_store: PathBuf,
    /// Theme used until the visitor picks one
    #[serde(default)]
    pub default_theme: Theme,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_theme_store() -> PathBuf {
    PathBuf::from(DEFAULT_THEME_STORE)
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            template_path: None,
            theme_store: default_theme_store(),
            default_theme: Theme::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a YAML file and validate it
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).await.with_context(|| {
            format!("Failed to read site config: {}", path.as_ref().display())
        })?;

        Self::from_yaml_str(&content)
    }

    /// Parse YAML content and validate it. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = if content.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml::from_str(content).with_context(|| "Failed to parse site config")?
        };

        config.validate()?;
        Ok(config)
    }

    /// The profile document is always fetched relative to the site root
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            anyhow::bail!("data_path cannot be empty");
        }
        if self.data_path.is_absolute() {
            anyhow::bail!(
                "data_path '{}' must be relative to the site root",
                self.data_path.display()
            );
        }
        Ok(())
    }

    pub fn data_file(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.data_path)
    }

    pub fn template_file(&self, site_root: &Path) -> Option<PathBuf> {
        self.template_path.as_ref().map(|p| site_root.join(p))
    }

    pub fn theme_store_file(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.theme_store)
    }
}
