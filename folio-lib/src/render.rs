pub mod markup;

use crate::document::{Document, Slot};
use crate::error::RenderError;
use crate::icons::platform_icon;
use crate::profile::{Award, ProfileRecord};
use crate::text::{first_name, present, split_role, DEFAULT_DESCRIPTION, DEFAULT_ROLE};
use markup::*;
use tracing::debug;

/// Hero social links in display order: icon class, label
const HERO_SOCIAL_ICONS: [(&str, &str); 4] = [
    ("fab fa-linkedin", "LinkedIn"),
    ("fab fa-github", "GitHub"),
    ("fab fa-medium", "Medium"),
    ("fab fa-instagram", "Instagram"),
];

/// Populate every profile slot of `doc` from `profile`.
///
/// Sections are written top to bottom. When a section needs a nested object
/// the profile lacks, the pass stops there with an error; sections already
/// written stay as they are.
pub fn render<D: Document + ?Sized>(profile: &ProfileRecord, doc: &mut D) -> Result<(), RenderError> {
    render_hero(profile, doc);
    render_about(profile, doc)?;
    render_social_icons(profile, doc);
    render_experience(profile, doc);
    render_projects(profile, doc);
    render_skills(profile, doc);
    render_education(profile, doc);
    render_publications(profile, doc);
    render_blog(profile, doc);
    render_contact(profile, doc)?;
    render_footer(profile, doc)?;

    debug!(name = %profile.name, "Rendered portfolio");
    Ok(())
}

fn render_hero<D: Document + ?Sized>(profile: &ProfileRecord, doc: &mut D) {
    doc.set_text(Slot::HeroName, first_name(&profile.name));

    let role = present(&profile.role).unwrap_or(DEFAULT_ROLE);
    let (primary, secondary) = split_role(role);
    doc.set_text(Slot::HeroTitlePart1, primary);
    doc.set_text(Slot::HeroTitlePart2, secondary);

    // Short intro, then summary, then the stock sentence
    let description = profile
        .about
        .as_ref()
        .and_then(|about| present(&about.short_intro))
        .or_else(|| present(&profile.summary))
        .unwrap_or(DEFAULT_DESCRIPTION);
    doc.set_text(Slot::HeroDescription, description);

    if let Some(resume) = present(&profile.resume) {
        doc.set_attribute(Slot::ResumeLink, "href", resume);
    }
}

fn render_about<D: Document + ?Sized>(
    profile: &ProfileRecord,
    doc: &mut D,
) -> Result<(), RenderError> {
    let about = profile
        .about
        .as_ref()
        .ok_or(RenderError::MissingSection("about"))?;

    doc.set_text(Slot::ShortIntro, about.short_intro.as_deref().unwrap_or_default());
    doc.set_text(Slot::DetailedAbout, about.detailed.as_deref().unwrap_or_default());
    Ok(())
}

fn render_social_icons<D: Document + ?Sized>(profile: &ProfileRecord, doc: &mut D) {
    let urls = [
        &profile.linkedin,
        &profile.github,
        &profile.medium,
        &profile.instagram,
    ];

    for (url, (icon, label)) in urls.into_iter().zip(HERO_SOCIAL_ICONS) {
        if let Some(url) = present(url) {
            doc.append_html(Slot::SocialIcons, social_link(url, icon, label));
        }
    }
}

fn render_experience<D: Document + ?Sized>(profile: &ProfileRecord, doc: &mut D) {
    for exp in &profile.experience {
        let related: Vec<&Award> = profile.awards_for_company(&exp.company).collect();
        doc.append_html(Slot::ExperienceTimeline, experience_item(exp, &related));
    }
}

fn render_projects<D: Document + ?Sized>(profile: &ProfileRecord, doc: &mut D) {
    for project in &profile.projects {
        doc.append_html(Slot::ProjectsGrid, project_card(project));
    }
}

fn render_skills<D: Document + ?Sized>(profile: &ProfileRecord, doc: &mut D) {
    for skill in &profile.skills {
        doc.append_html(Slot::SkillsContainer, skill_item(skill));
    }
}

fn render_education<D: Document + ?Sized>(profile: &ProfileRecord, doc: &mut D) {
    for edu in &profile.education {
        doc.append_html(Slot::EducationCards, education_card(edu));
    }
}

fn render_publications<D: Document + ?Sized>(profile: &ProfileRecord, doc: &mut D) {
    for publication in &profile.publications {
        doc.append_html(Slot::PublicationsCards, publication_card(publication));
    }
}

fn render_blog<D: Document + ?Sized>(profile: &ProfileRecord, doc: &mut D) {
    // Only the first blog is featured
    let Some(blog) = profile.blogs.first() else {
        return;
    };

    doc.set_text(Slot::BlogTitle, &blog.platform);
    doc.set_text(Slot::BlogDescription, &blog.description);
    if let Some(url) = present(&blog.url) {
        doc.set_attribute(Slot::BlogLink, "href", url);
    }
}

fn render_contact<D: Document + ?Sized>(
    profile: &ProfileRecord,
    doc: &mut D,
) -> Result<(), RenderError> {
    let contact = profile
        .contact
        .as_ref()
        .ok_or(RenderError::MissingSection("contact"))?;

    doc.set_text(Slot::ContactEmail, contact.email.as_deref().unwrap_or_default());
    doc.set_text(Slot::ContactPhone, contact.phone.as_deref().unwrap_or_default());

    let location = present(&contact.location)
        .or_else(|| present(&profile.location))
        .unwrap_or_default();
    doc.set_text(Slot::ContactLocation, location);

    for (platform, url) in &contact.social {
        doc.append_html(
            Slot::ContactSocialIcons,
            social_link(url, platform_icon(platform), platform),
        );
    }
    Ok(())
}

fn render_footer<D: Document + ?Sized>(
    profile: &ProfileRecord,
    doc: &mut D,
) -> Result<(), RenderError> {
    let footer = profile
        .footer
        .as_ref()
        .ok_or(RenderError::MissingSection("footer"))?;

    doc.set_text(Slot::FooterTagline, &footer.tagline);
    doc.set_text(Slot::FooterCopyright, &footer.copyright);
    Ok(())
}
