use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A value the profile document may carry either as a JSON string or a JSON number
/// (grades and years are written both ways in the wild)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    /// Whether the value counts as set: empty strings and zero do not
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Introductory texts for the about section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct About {
    /// One or two sentences, also preferred for the hero description
    #[serde(default)]
    pub short_intro: Option<String>,
    /// Longer free-form paragraph
    #[serde(default)]
    pub detailed: Option<String>,
}

/// Contact details shown in the contact section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Takes precedence over the top-level `location` field
    #[serde(default)]
    pub location: Option<String>,
    /// Platform name to profile URL, kept in document order
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub social: Vec<(String, String)>,
}

/// A project carried out within one experience entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// One position held at one company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    #[serde(default)]
    pub position: String,
    /// Empty when absent; an empty company never matches an award
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub projects: Vec<ExperienceProject>,
}

/// An award, attached to experience entries by organization name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Award {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A showcased project with its optional links
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Free-form badge such as "Work in Progress"
    #[serde(default)]
    pub status: Option<String>,
    /// Live deployment
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub demo_video: Option<String>,
    #[serde(default)]
    pub tool_link: Option<String>,
    #[serde(default)]
    pub frontend_repo: Option<String>,
    #[serde(default)]
    pub backend_repo: Option<String>,
    #[serde(default)]
    pub github_repo: Option<String>,
}

/// One degree or certificate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: Scalar,
    #[serde(default)]
    pub cgpa: Option<Scalar>,
    #[serde(default)]
    pub percentage: Option<Scalar>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blog {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Footer {
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub copyright: String,
}

/// Root structure of the profile document.
///
/// Only `name` is required to parse. `about`, `contact` and `footer` are required once rendering reaches their
/// section; list sections that are absent render as empty, and missing text
/// fields inside list entries render as empty text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRecord {
    /// Full name; the hero shows only the first token
    pub name: String,
    /// Job title, optionally with a parenthesized qualifier, e.g. "Engineer (Backend)"
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub about: Option<About>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    /// Link to a downloadable resume
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    /// Only the first entry is ever displayed
    #[serde(default)]
    pub blogs: Vec<Blog>,
    #[serde(default)]
    pub footer: Option<Footer>,
}

impl ProfileRecord {
    /// Awards whose organization and the given company name contain one another,
    /// ignoring case. Both names must be non-empty.
    pub fn awards_for_company<'a>(&'a self, company: &'a str) -> impl Iterator<Item = &'a Award> {
        self.awards.iter().filter(move |award| {
            award
                .organization
                .as_deref()
                .map_or(false, |org| crate::text::names_overlap(org, company))
        })
    }
}

/// Deserialize a JSON object into key/value pairs without losing key order
fn ordered_pairs<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of platform names to URLs")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, String>()? {
                pairs.push((key, value));
            }
            Ok(pairs)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(PairsVisitor)
}
