//! Static icon lookup tables.
//!
//! Both tables are total: a name missing from a table resolves to that
//! table's fallback icon, never to an empty class.

/// Icon for skills not listed in [`SKILL_ICONS`]
pub const DEFAULT_SKILL_ICON: &str = "fas fa-code";

/// Icon for social platforms not listed in [`PLATFORM_ICONS`]
pub const DEFAULT_PLATFORM_ICON: &str = "fas fa-link";

/// Skill name (exact, case-sensitive) to Font Awesome class
pub const SKILL_ICONS: &[(&str, &str)] = &[
    ("Angular", "fab fa-angular"),
    ("Ember.js", "fab fa-ember"),
    ("Vue.js", "fab fa-vuejs"),
    ("React", "fab fa-react"),
    ("JavaScript", "fab fa-js-square"),
    ("TypeScript", "fab fa-js-square"),
    ("HTML5", "fab fa-html5"),
    ("CSS3", "fab fa-css3-alt"),
    ("SCSS", "fab fa-sass"),
    ("Tailwind CSS", "fas fa-wind"),
    ("Bootstrap", "fab fa-bootstrap"),
    ("Angular Material", "fab fa-angular"),
    ("NgRx", "fab fa-angular"),
    ("Redux", "fab fa-react"),
    ("RxJS", "fab fa-js-square"),
    ("RESTful APIs", "fas fa-code"),
    ("Golang", "fa-brands fa-golang"),
    ("Node.js", "fab fa-node-js"),
    ("Express.js", "fab fa-node-js"),
    ("MongoDB", "fas fa-database"),
    ("Jasmine", "fas fa-vial"),
    ("Jest", "fas fa-vial"),
    ("Docker", "fab fa-docker"),
    ("Observability", "fas fa-chart-line"),
    ("Accessibility", "fas fa-universal-access"),
    ("Nomad", "fas fa-server"),
];

/// Social platform key, as used in `contact.social`, to Font Awesome class
pub const PLATFORM_ICONS: &[(&str, &str)] = &[
    ("linkedin", "fab fa-linkedin"),
    ("github", "fab fa-github"),
    ("medium", "fab fa-medium"),
    ("instagram", "fab fa-instagram"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, icon)| *icon)
}

/// Icon class for a skill, falling back to [`DEFAULT_SKILL_ICON`]
pub fn skill_icon(skill: &str) -> &'static str {
    lookup(SKILL_ICONS, skill).unwrap_or(DEFAULT_SKILL_ICON)
}

/// Icon class for a social platform, falling back to [`DEFAULT_PLATFORM_ICON`]
pub fn platform_icon(platform: &str) -> &'static str {
    lookup(PLATFORM_ICONS, platform).unwrap_or(DEFAULT_PLATFORM_ICON)
}
