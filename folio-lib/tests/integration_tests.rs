use folio::*;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::instrument::WithSubscriber;
use tracing_subscriber::fmt::MakeWriter;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/portfolioData.json")
}

/// Log sink shared between the test and a scoped subscriber
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capturing_subscriber(logs: &CapturedLogs) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish()
}

#[tokio::test]
async fn test_fixture_parses() {
    let profile = load_profile(fixture_path()).await.unwrap();
    assert_eq!(profile.name, "Karibasaveshwara TG");
    assert_eq!(profile.experience.len(), 2);
    assert_eq!(profile.projects[0].tech_stack, vec!["Rust", "Tokio"]);
    assert_eq!(profile.contact.as_ref().unwrap().social.len(), 3);
}

#[tokio::test]
async fn test_well_formed_fixture_fills_every_slot() {
    let mut session = PageSession::open(MemoryThemeStore::new(), Theme::Dark).await;
    let outcome = session.load_and_render(&fixture_path()).await;
    assert!(outcome.is_rendered(), "unexpected outcome: {:?}", outcome);

    let page = session.page();
    for slot in Slot::profile_slots() {
        assert!(page.is_populated(slot), "slot {} left empty", slot.id());
    }

    assert_eq!(page.text(Slot::HeroName), Some("Karibasaveshwara"));
    assert_eq!(page.text(Slot::HeroTitlePart1), Some("Full Stack Developer"));
    assert_eq!(page.text(Slot::HeroTitlePart2), Some("(Frontend-Focused)"));
    assert_eq!(
        page.text(Slot::HeroDescription),
        Some("I build fast, accessible interfaces.")
    );
    assert_eq!(page.attribute(Slot::ResumeLink, "href"), Some("assets/resume.pdf"));
    assert_eq!(page.children(Slot::SocialIcons).len(), 4);
    assert_eq!(page.children(Slot::ProjectsGrid).len(), 2);
    assert_eq!(page.children(Slot::SkillsContainer).len(), 5);
    assert_eq!(page.text(Slot::ContactLocation), Some("Bengaluru, India"));
}

#[tokio::test]
async fn test_fixture_awards_and_logo() {
    let mut session = PageSession::open(MemoryThemeStore::new(), Theme::Dark).await;
    session.load_and_render(&fixture_path()).await;

    let timeline = session.page().children(Slot::ExperienceTimeline);
    assert_eq!(timeline.len(), 2);
    assert!(timeline[0].contains("Star Performer"));
    assert!(timeline[0].contains(markup::STANDARD_BANK_LOGO));
    assert!(!timeline[1].contains("Star Performer"));
    assert!(!timeline[1].contains(markup::STANDARD_BANK_LOGO));
}

#[tokio::test]
async fn test_fixture_projects_and_education() {
    let mut session = PageSession::open(MemoryThemeStore::new(), Theme::Dark).await;
    session.load_and_render(&fixture_path()).await;
    let page = session.page();

    let projects = page.children(Slot::ProjectsGrid);
    assert_eq!(projects[0].matches("Live Demo").count(), 1);
    assert!(projects[0].contains(r#"href="https://x""#));
    assert!(!projects[1].contains("Live Demo"));
    assert!(projects[1].contains("Frontend"));
    assert!(projects[1].contains("wip-badge"));

    let skills = page.children(Slot::SkillsContainer);
    assert!(skills[4].contains(DEFAULT_SKILL_ICON));

    let education = page.children(Slot::EducationCards);
    assert!(education[0].contains("CGPA: 8.2"));
    assert!(!education[0].contains("Percentage"));
    assert!(education[1].contains("2015 \u{2022} Percentage: 91.5"));
}

#[tokio::test]
async fn test_load_failure_leaves_slots_empty_and_logs() {
    let dir = tempfile::tempdir().unwrap();
    let logs = CapturedLogs::default();

    let mut session = PageSession::open(MemoryThemeStore::new(), Theme::Dark).await;
    let outcome = session
        .load_and_render(&dir.path().join("missing.json"))
        .with_subscriber(capturing_subscriber(&logs))
        .await;

    assert!(matches!(outcome, SessionOutcome::LoadFailed(LoadError::Read { .. })));
    for slot in Slot::profile_slots() {
        assert!(!session.page().is_populated(slot), "slot {} was populated", slot.id());
    }
    // The page shell is still set up
    assert!(session.page().is_populated(Slot::Body));
    assert!(session.page().is_populated(Slot::CodeBackground));

    let logged = logs.contents();
    assert!(logged.contains("ERROR"), "no error logged: {}", logged);
    assert!(logged.contains("Error loading portfolio data"));
}

#[tokio::test]
async fn test_malformed_document_is_load_failure() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    io::Write::write_all(&mut file, b"[1, 2, 3]").unwrap();

    let mut session = PageSession::open(MemoryThemeStore::new(), Theme::Dark).await;
    let outcome = session.load_and_render(file.path()).await;
    assert!(matches!(outcome, SessionOutcome::LoadFailed(LoadError::Parse { .. })));
    assert!(!session.page().is_populated(Slot::HeroName));
}

#[tokio::test]
async fn test_render_happens_once_per_session() {
    let mut session = PageSession::open(MemoryThemeStore::new(), Theme::Dark).await;
    assert!(session.load_and_render(&fixture_path()).await.is_rendered());

    let skills_before = session.page().children(Slot::SkillsContainer).len();
    let outcome = session.load_and_render(&fixture_path()).await;
    assert!(matches!(outcome, SessionOutcome::AlreadyLoaded));
    assert_eq!(
        session.page().children(Slot::SkillsContainer).len(),
        skills_before
    );
}

#[tokio::test]
async fn test_site_render_page_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("assets/data");
    tokio::fs::create_dir_all(&data_dir).await.unwrap();
    tokio::fs::copy(fixture_path(), data_dir.join("portfolioData.json"))
        .await
        .unwrap();

    let site = Site::open(dir.path(), None).await.unwrap();
    let rendered = site.render_page().await.unwrap();

    assert!(rendered.outcome.is_rendered());
    assert!(rendered.html.contains(r#"<h1 class="hero-name" id="heroName">Karibasaveshwara</h1>"#));
    assert!(rendered.html.contains(r#"<body data-theme="dark">"#));
    assert!(rendered.html.contains(r#"class="fas fa-sun""#));
    assert!(!rendered.html.contains("{{"));
}

#[tokio::test]
async fn test_site_uses_config_and_persisted_theme() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::copy(fixture_path(), dir.path().join("profile.json"))
        .await
        .unwrap();
    tokio::fs::write(
        dir.path().join("folio.yaml"),
        "data_path: profile.json\ntemplate_path: shell.html\ntheme_store: state/theme.json\n",
    )
    .await
    .unwrap();
    tokio::fs::write(
        dir.path().join("shell.html"),
        r#"<body data-theme="{{ body.data-theme }}"><p>{{ footerTagline }}</p></body>"#,
    )
    .await
    .unwrap();

    let site = Site::open(dir.path(), None).await.unwrap();

    // Flip the theme once, as a click on the toggle would
    let mut session = PageSession::open(site.theme_store(), Theme::Dark).await;
    assert_eq!(session.toggle_theme().await.unwrap(), Theme::Light);

    let rendered = site.render_page().await.unwrap();
    assert_eq!(
        rendered.html,
        r#"<body data-theme="light"><p>Designed and built with care.</p></body>"#
    );
}

#[tokio::test]
async fn test_site_open_reports_unreadable_config_location() {
    // A regular file as the site root makes the config lookup fail with ENOTDIR
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = Site::open(file.path(), None).await.unwrap_err();
    assert!(
        format!("{:#}", err).contains("Failed to check for site config"),
        "unexpected error: {:#}",
        err
    );
}

#[tokio::test]
async fn test_site_with_missing_profile_still_emits_shell() {
    let dir = tempfile::tempdir().unwrap();
    let site = Site::with_config(dir.path(), SiteConfig::default()).unwrap();
    let rendered = site.render_page().await.unwrap();

    assert!(matches!(rendered.outcome, SessionOutcome::LoadFailed(_)));
    assert!(rendered.html.contains(r#"<h1 class="hero-name" id="heroName"></h1>"#));
}

#[tokio::test]
async fn test_scroll_to_top_follows_contact_section() {
    let mut session = PageSession::open(MemoryThemeStore::new(), Theme::Dark).await;
    assert_eq!(session.page().attribute(Slot::ScrollToTop, "class"), None);

    session.on_scroll(ScrollMetrics {
        scroll_y: 1500.0,
        viewport_height: 900.0,
        contact_top: Some(2400.0),
    });
    assert_eq!(session.page().attribute(Slot::ScrollToTop, "class"), Some("visible"));

    session.on_scroll(ScrollMetrics {
        scroll_y: 100.0,
        viewport_height: 900.0,
        contact_top: Some(2400.0),
    });
    assert_eq!(session.page().attribute(Slot::ScrollToTop, "class"), Some(""));
}
