mod document;
mod effects;
mod error;
mod icons;
mod json_parser;
mod profile;
mod render;
mod session;
mod site_config;
mod text;
mod theme;

pub use document::*;
pub use effects::*;
pub use error::*;
pub use icons::*;
pub use json_parser::*;
pub use profile::*;
pub use render::markup;
pub use render::render;
pub use session::*;
pub use site_config::*;
pub use text::{DEFAULT_DESCRIPTION, DEFAULT_ROLE, DEFAULT_ROLE_PRIMARY, DEFAULT_ROLE_SECONDARY};
pub use theme::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name looked up in the site root when no config path is given
pub const SITE_CONFIG_FILE: &str = "folio.yaml";

/// Main entry point for the folio library: a site root plus its configuration
#[derive(Debug)]
pub struct Site {
    root: PathBuf,
    config: SiteConfig,
}

/// Result of one page session against a site
pub struct RenderedPage {
    pub page: Page,
    pub outcome: SessionOutcome,
    /// The page shell with every placeholder filled
    pub html: String,
}

impl Site {
    /// Open a site, reading `config_path` or, failing that, `folio.yaml` in
    /// the root when it exists
    pub async fn open<P: AsRef<Path>>(root: P, config_path: Option<&Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        let config = match config_path {
            Some(path) => SiteConfig::load(path).await?,
            None => {
                let default_path = root.join(SITE_CONFIG_FILE);
                let exists = fs::try_exists(&default_path).await.with_context(|| {
                    format!("Failed to check for site config: {}", default_path.display())
                })?;
                if exists {
                    SiteConfig::load(&default_path).await?
                } else {
                    SiteConfig::default()
                }
            }
        };

        Ok(Self { root, config })
    }

    pub fn with_config<P: AsRef<Path>>(root: P, config: SiteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Theme store configured for this site
    pub fn theme_store(&self) -> FileThemeStore {
        FileThemeStore::new(self.config.theme_store_file(&self.root))
    }

    /// Run one page session and fill the page shell.
    ///
    /// A failed load or halted render is not an error here: it is reported in
    /// [`RenderedPage::outcome`] and the shell is filled with whatever was
    /// rendered. Only an unreadable or invalid shell template fails.
    pub async fn render_page(&self) -> Result<RenderedPage> {
        self.render_page_with_template(None).await
    }

    /// Like [`Site::render_page`], with a shell template overriding the configured one
    pub async fn render_page_with_template(
        &self,
        template_override: Option<&Path>,
    ) -> Result<RenderedPage> {
        let template = self.read_template(template_override).await?;

        let mut session = PageSession::open(self.theme_store(), self.config.default_theme).await;
        let outcome = session
            .load_and_render(&self.config.data_file(&self.root))
            .await;

        let page = session.into_page();
        let html = page.fill_template(&template)?;

        Ok(RenderedPage {
            page,
            outcome,
            html,
        })
    }

    async fn read_template(&self, template_override: Option<&Path>) -> Result<String> {
        let path = match template_override {
            Some(path) => Some(path.to_path_buf()),
            None => self.config.template_file(&self.root),
        };

        match path {
            Some(path) => fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read page template: {}", path.display())),
            None => Ok(DEFAULT_SHELL.to_string()),
        }
    }
}
