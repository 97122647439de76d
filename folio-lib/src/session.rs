use crate::document::Page;
use crate::effects::{render_code_background, update_scroll_to_top, ScrollMetrics};
use crate::error::{LoadError, RenderError};
use crate::json_parser::load_profile;
use crate::render::render;
use crate::theme::{Theme, ThemeStore, ThemeToggle};
use anyhow::Result;
use std::error::Error as _;
use std::path::Path;
use tracing::{error, info, warn};

/// How the single load-then-render step of a page session ended
#[derive(Debug)]
pub enum SessionOutcome {
    /// Every section was rendered
    Rendered,
    /// The profile could not be loaded; no profile slot was touched
    LoadFailed(LoadError),
    /// Rendering stopped partway; earlier sections stay rendered
    RenderHalted(RenderError),
    /// The profile was already loaded once in this session
    AlreadyLoaded,
}

impl SessionOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SessionOutcome::Rendered)
    }
}

/// One page view: the page shell, its theme toggle and at most one render
pub struct PageSession<S: ThemeStore> {
    page: Page,
    theme: ThemeToggle<S>,
    loaded: bool,
}

impl<S: ThemeStore> PageSession<S> {
    /// Set up the page shell before any profile data arrives
    pub async fn open(store: S, default_theme: Theme) -> Self {
        let mut page = Page::new();
        let theme = ThemeToggle::load(store, default_theme).await;
        theme.apply(&mut page);
        render_code_background(&mut page);

        Self {
            page,
            theme,
            loaded: false,
        }
    }

    /// Await the profile document, then render it once.
    ///
    /// Failures are logged here and reported through the outcome; there is
    /// no retry and the page stays as it was left.
    pub async fn load_and_render(&mut self, data_file: &Path) -> SessionOutcome {
        if self.loaded {
            warn!("Portfolio data already loaded for this page");
            return SessionOutcome::AlreadyLoaded;
        }
        self.loaded = true;

        let profile = match load_profile(data_file).await {
            Ok(profile) => profile,
            Err(e) => {
                let cause = e.source().map(|s| s.to_string()).unwrap_or_default();
                error!(%cause, "Error loading portfolio data: {}", e);
                return SessionOutcome::LoadFailed(e);
            }
        };

        match render(&profile, &mut self.page) {
            Ok(()) => {
                info!(
                    path = %data_file.display(),
                    slots = self.page.populated_slots().len(),
                    "Rendered portfolio"
                );
                SessionOutcome::Rendered
            }
            Err(e) => {
                error!("Error rendering portfolio: {}", e);
                SessionOutcome::RenderHalted(e)
            }
        }
    }

    pub async fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme.toggle(&mut self.page).await
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        update_scroll_to_top(&mut self.page, metrics);
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn into_page(self) -> Page {
        self.page
    }
}
