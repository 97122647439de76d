use crate::text::escape_html;
use anyhow::Result;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Page shell used when no template is configured
pub const DEFAULT_SHELL: &str = include_str!("shell.html");

/// A named, pre-existing location in the page that rendering writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    // Page shell
    Body,
    ThemeToggleIcon,
    CodeBackground,
    ScrollToTop,
    // Hero
    HeroName,
    HeroTitlePart1,
    HeroTitlePart2,
    HeroDescription,
    ResumeLink,
    // About
    ShortIntro,
    DetailedAbout,
    SocialIcons,
    // Lists
    ExperienceTimeline,
    ProjectsGrid,
    SkillsContainer,
    EducationCards,
    PublicationsCards,
    // Blog
    BlogTitle,
    BlogDescription,
    BlogLink,
    // Contact
    ContactEmail,
    ContactPhone,
    ContactLocation,
    ContactSocialIcons,
    // Footer
    FooterTagline,
    FooterCopyright,
}

impl Slot {
    /// Every slot of the page, shell first, in page order
    pub const ALL: [Slot; 26] = [
        Slot::Body,
        Slot::ThemeToggleIcon,
        Slot::CodeBackground,
        Slot::ScrollToTop,
        Slot::HeroName,
        Slot::HeroTitlePart1,
        Slot::HeroTitlePart2,
        Slot::HeroDescription,
        Slot::ResumeLink,
        Slot::ShortIntro,
        Slot::DetailedAbout,
        Slot::SocialIcons,
        Slot::ExperienceTimeline,
        Slot::ProjectsGrid,
        Slot::SkillsContainer,
        Slot::EducationCards,
        Slot::PublicationsCards,
        Slot::BlogTitle,
        Slot::BlogDescription,
        Slot::BlogLink,
        Slot::ContactEmail,
        Slot::ContactPhone,
        Slot::ContactLocation,
        Slot::ContactSocialIcons,
        Slot::FooterTagline,
        Slot::FooterCopyright,
    ];

    /// Slots filled from the profile record
    pub fn profile_slots() -> impl Iterator<Item = Slot> {
        Self::ALL.into_iter().filter(|slot| !slot.is_shell())
    }

    /// Whether the slot belongs to the page shell rather than the profile content
    pub fn is_shell(self) -> bool {
        matches!(
            self,
            Slot::Body | Slot::ThemeToggleIcon | Slot::CodeBackground | Slot::ScrollToTop
        )
    }

    /// Element id of the slot in the page shell
    pub fn id(self) -> &'static str {
        match self {
            Slot::Body => "body",
            Slot::ThemeToggleIcon => "themeToggleIcon",
            Slot::CodeBackground => "codeBackground",
            Slot::ScrollToTop => "scrollToTop",
            Slot::HeroName => "heroName",
            Slot::HeroTitlePart1 => "heroTitlePart1",
            Slot::HeroTitlePart2 => "heroTitlePart2",
            Slot::HeroDescription => "heroDescription",
            Slot::ResumeLink => "resumeLink",
            Slot::ShortIntro => "shortIntro",
            Slot::DetailedAbout => "detailedAbout",
            Slot::SocialIcons => "socialIcons",
            Slot::ExperienceTimeline => "experienceTimeline",
            Slot::ProjectsGrid => "projectsGrid",
            Slot::SkillsContainer => "skillsContainer",
            Slot::EducationCards => "educationCards",
            Slot::PublicationsCards => "publicationsCards",
            Slot::BlogTitle => "blogTitle",
            Slot::BlogDescription => "blogDescription",
            Slot::BlogLink => "blogLink",
            Slot::ContactEmail => "contactEmail",
            Slot::ContactPhone => "contactPhone",
            Slot::ContactLocation => "contactLocation",
            Slot::ContactSocialIcons => "contactSocialIcons",
            Slot::FooterTagline => "footerTagline",
            Slot::FooterCopyright => "footerCopyright",
        }
    }

    /// Look a slot up by its element id
    pub fn from_id(id: &str) -> Option<Slot> {
        Self::ALL.into_iter().find(|slot| slot.id() == id)
    }
}

/// Write access to the page's output slots
pub trait Document {
    /// Replace the slot's content with plain text (like `textContent`)
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Append a markup fragment as the slot's last child
    fn append_html(&mut self, slot: Slot, html: String);

    /// Set an attribute on the slot's element, replacing any previous value
    fn set_attribute(&mut self, slot: Slot, name: &str, value: &str);
}

/// Content written into one slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotContent {
    pub text: Option<String>,
    pub children: Vec<String>,
    pub attributes: Vec<(String, String)>,
}

impl SlotContent {
    fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, str::is_empty)
            && self.children.is_empty()
            && self.attributes.is_empty()
    }
}

/// In-memory page: every slot exists up front and starts empty
#[derive(Debug, Clone)]
pub struct Page {
    slots: HashMap<Slot, SlotContent>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            slots: Slot::ALL
                .into_iter()
                .map(|slot| (slot, SlotContent::default()))
                .collect(),
        }
    }

    pub fn content(&self, slot: Slot) -> &SlotContent {
        // Every slot is inserted in `new` and never removed
        &self.slots[&slot]
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.content(slot).text.as_deref()
    }

    pub fn children(&self, slot: Slot) -> &[String] {
        &self.content(slot).children
    }

    pub fn attribute(&self, slot: Slot, name: &str) -> Option<&str> {
        self.content(slot)
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether anything at all was written into the slot
    pub fn is_populated(&self, slot: Slot) -> bool {
        !self.content(slot).is_empty()
    }

    /// Slots that received content, in page order
    pub fn populated_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.is_populated(*slot))
            .collect()
    }

    /// Markup for the slot's element content: escaped text followed by children
    pub fn inner_html(&self, slot: Slot) -> String {
        let content = self.content(slot);
        let mut html = content.text.as_deref().map(escape_html).unwrap_or_default();
        for child in &content.children {
            html.push_str(child);
        }
        html
    }

    /// Substitute `{{ slotId }}` and `{{ slotId.attribute }}` placeholders in a page shell.
    ///
    /// Unknown slot ids are rejected so that a typo in the shell does not
    /// silently leave part of the page blank. Unset attributes expand to
    /// nothing.
    pub fn fill_template(&self, template: &str) -> Result<String> {
        let re = placeholder_regex();

        for caps in re.captures_iter(template) {
            if Slot::from_id(&caps[1]).is_none() {
                anyhow::bail!("Unknown slot '{}' in page template", &caps[1]);
            }
        }

        let filled = re.replace_all(template, |caps: &Captures| {
            // Validated above
            let slot = match Slot::from_id(&caps[1]) {
                Some(slot) => slot,
                None => return String::new(),
            };
            match caps.get(2) {
                Some(attr) => self
                    .attribute(slot, attr.as_str())
                    .map(escape_html)
                    .unwrap_or_default(),
                None => self.inner_html(slot),
            }
        });

        Ok(filled.into_owned())
    }
}

impl Document for Page {
    fn set_text(&mut self, slot: Slot, text: &str) {
        let content = self.slots.entry(slot).or_default();
        content.text = Some(text.to_string());
        content.children.clear();
    }

    fn append_html(&mut self, slot: Slot, html: String) {
        self.slots.entry(slot).or_default().children.push(html);
    }

    fn set_attribute(&mut self, slot: Slot, name: &str, value: &str) {
        let attributes = &mut self.slots.entry(slot).or_default().attributes;
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z][A-Za-z0-9]*)(?:\.([A-Za-z][A-Za-z0-9-]*))?\s*\}\}")
            .expect("placeholder pattern is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_ids_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_id(slot.id()), Some(slot));
        }
        assert_eq!(Slot::from_id("nope"), None);
    }

    #[test]
    fn test_new_page_is_empty() {
        let page = Page::new();
        assert!(page.populated_slots().is_empty());
    }

    #[test]
    fn test_set_text_replaces_children() {
        let mut page = Page::new();
        page.append_html(Slot::SkillsContainer, "<div>a</div>".to_string());
        page.set_text(Slot::SkillsContainer, "plain");
        assert!(page.children(Slot::SkillsContainer).is_empty());
        assert_eq!(page.text(Slot::SkillsContainer), Some("plain"));
    }

    #[test]
    fn test_set_attribute_overwrites() {
        let mut page = Page::new();
        page.set_attribute(Slot::Body, "data-theme", "dark");
        page.set_attribute(Slot::Body, "data-theme", "light");
        assert_eq!(page.attribute(Slot::Body, "data-theme"), Some("light"));
        assert_eq!(page.content(Slot::Body).attributes.len(), 1);
    }

    #[test]
    fn test_fill_template() {
        let mut page = Page::new();
        page.set_text(Slot::HeroName, "Ada & co");
        page.append_html(Slot::SkillsContainer, "<i></i>".to_string());
        page.set_attribute(Slot::BlogLink, "href", "https://blog.example");

        let out = page
            .fill_template(
                r#"<h1>{{ heroName }}</h1><div>{{skillsContainer}}</div><a href="{{ blogLink.href }}"></a><p>{{ footerTagline }}</p>"#,
            )
            .unwrap();
        assert_eq!(
            out,
            r#"<h1>Ada &amp; co</h1><div><i></i></div><a href="https://blog.example"></a><p></p>"#
        );
    }

    #[test]
    fn test_fill_template_rejects_unknown_slot() {
        let page = Page::new();
        let err = page.fill_template("{{ heroNmae }}").unwrap_err();
        assert!(err.to_string().contains("heroNmae"));
    }

    #[test]
    fn test_default_shell_uses_only_known_slots() {
        let page = Page::new();
        assert!(page.fill_template(DEFAULT_SHELL).is_ok());
    }
}
