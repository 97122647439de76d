use crate::icons::skill_icon;
use crate::profile::{Award, Education, Experience, Project, Publication};
use crate::text::{contains_ignore_case, escape_html, present};

/// Logo prefixed to experience projects done for Standard Bank
pub const STANDARD_BANK_LOGO: &str = r#"<img src="assets/images/standardBank.png" alt="Standard Bank Logo" class="company-logo-small">"#;

/// Project links in display order: target, icon class, label
fn project_links(project: &Project) -> [(&Option<String>, &'static str, &'static str); 6] {
    [
        (&project.url, "fas fa-external-link-alt", "Live Demo"),
        (&project.demo_video, "fab fa-youtube", "Demo Video"),
        (&project.tool_link, "fas fa-tools", "Tool"),
        (&project.frontend_repo, "fab fa-github", "Frontend"),
        (&project.backend_repo, "fab fa-github", "Backend"),
        (&project.github_repo, "fab fa-github", "GitHub"),
    ]
}

/// Icon-only link to a social profile
pub fn social_link(url: &str, icon: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="social-icon" aria-label="{}"><i class="{}"></i></a>"#,
        escape_html(url),
        escape_html(label),
        icon
    )
}

/// Timeline card for one experience entry with its projects and related awards
pub fn experience_item(exp: &Experience, awards: &[&Award]) -> String {
    let mut html = String::new();

    html.push_str(r#"<div class="experience-item"><div class="experience-card">"#);
    html.push_str(&format!(
        r#"<div class="experience-header"><div><div class="experience-title">{}</div><div class="experience-company">{}</div></div><div class="experience-duration">{}</div></div>"#,
        escape_html(&exp.position),
        escape_html(&exp.company),
        escape_html(&exp.duration)
    ));

    for project in &exp.projects {
        html.push_str(r#"<div class="project-item"><div class="project-title">"#);
        if contains_ignore_case(&project.title, "standard bank") {
            html.push_str(STANDARD_BANK_LOGO);
        }
        html.push_str(&escape_html(&project.title));
        html.push_str("</div>");
        html.push_str(&format!(
            r#"<div class="project-description">{}</div>"#,
            escape_html(&project.description)
        ));
        html.push_str(r#"<ul class="achievements-list">"#);
        for achievement in &project.achievements {
            html.push_str(&format!("<li>{}</li>", escape_html(achievement)));
        }
        html.push_str("</ul></div>");
    }

    if !awards.is_empty() {
        html.push_str(r#"<div class="awards-section"><div class="awards-title"><i class="fas fa-trophy"></i> Awards &amp; Recognition</div>"#);
        for award in awards {
            html.push_str(&format!(
                r#"<div class="award-item"><div class="award-name">{}</div>"#,
                escape_html(&award.title)
            ));
            if let Some(description) = present(&award.description) {
                html.push_str(&format!(
                    r#"<div class="award-description">{}</div>"#,
                    escape_html(description)
                ));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }

    html.push_str("</div></div>");
    html
}

/// Grid card for a showcased project
pub fn project_card(project: &Project) -> String {
    let mut html = String::new();

    html.push_str(r#"<div class="project-card"><div class="project-header">"#);
    html.push_str(&format!(
        r#"<div class="project-name">{}</div>"#,
        escape_html(&project.title)
    ));
    if let Some(status) = present(&project.status) {
        html.push_str(&format!(
            r#"<span class="wip-badge">{}</span>"#,
            escape_html(status)
        ));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<div class="project-description">{}</div>"#,
        escape_html(&project.description)
    ));

    html.push_str(r#"<div class="tech-stack">"#);
    for tech in &project.tech_stack {
        html.push_str(&format!(
            r#"<span class="tech-badge">{}</span>"#,
            escape_html(tech)
        ));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="project-links">"#);
    for (target, icon, label) in project_links(project) {
        if let Some(href) = present(target) {
            html.push_str(&format!(
                r#"<a href="{}" class="project-link" target="_blank" rel="noopener noreferrer"><i class="{}"></i> {}</a>"#,
                escape_html(href),
                icon,
                label
            ));
        }
    }
    html.push_str("</div></div>");

    html
}

pub fn skill_item(skill: &str) -> String {
    format!(
        r#"<div class="skill-item"><i class="{}"></i><span>{}</span></div>"#,
        skill_icon(skill),
        escape_html(skill)
    )
}

/// Grade line suffix: CGPA wins over percentage, and neither shows when both are absent
pub fn grade_info(edu: &Education) -> Option<String> {
    if let Some(cgpa) = edu.cgpa.as_ref().filter(|v| v.is_present()) {
        Some(format!("CGPA: {}", cgpa))
    } else {
        edu.percentage
            .as_ref()
            .filter(|v| v.is_present())
            .map(|percentage| format!("Percentage: {}", percentage))
    }
}

pub fn education_card(edu: &Education) -> String {
    let mut text = escape_html(&edu.year.to_string());
    if let Some(grade) = grade_info(edu) {
        text.push_str(" \u{2022} ");
        text.push_str(&escape_html(&grade));
    }

    format!(
        r#"<div class="info-card"><div class="info-card-icon"><i class="fas fa-graduation-cap"></i></div><div class="info-card-title">{}</div><div class="info-card-subtitle">{}</div><div class="info-card-text">{}</div></div>"#,
        escape_html(&edu.degree),
        escape_html(&edu.institution),
        text
    )
}

pub fn publication_card(publication: &Publication) -> String {
    format!(
        r#"<div class="info-card"><div class="info-card-icon"><i class="fas fa-book"></i></div><div class="info-card-title">{}</div><div class="info-card-subtitle">{}</div><a href="{}" class="info-card-link" target="_blank" rel="noopener noreferrer">Read Publication <i class="fas fa-external-link-alt"></i></a></div>"#,
        escape_html(&publication.title),
        escape_html(&publication.publisher),
        escape_html(&publication.link)
    )
}
