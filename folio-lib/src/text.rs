/// Role shown when the profile has none
pub const DEFAULT_ROLE: &str = "Full Stack Developer (Frontend-Focused)";
/// Fallback for an empty text before the parenthesis
pub const DEFAULT_ROLE_PRIMARY: &str = "Full Stack Developer";
/// Fallback for an empty text from the parenthesis onward
pub const DEFAULT_ROLE_SECONDARY: &str = "(Frontend-Focused)";
/// Hero description when neither a short intro nor a summary is available
pub const DEFAULT_DESCRIPTION: &str =
    "I'm a developer passionate about building beautiful and functional web experiences.";

/// First space-separated token of a full name, or the whole name when it has no space
pub(crate) fn first_name(full_name: &str) -> &str {
    match full_name.split(' ').next() {
        Some(first) if !first.is_empty() => first,
        _ => full_name,
    }
}

/// Split a role into its primary title and parenthesized qualifier.
///
/// "Engineer (Backend)" becomes ("Engineer", "(Backend)"). Without a `(`
/// the whole role is primary and the qualifier is empty.
pub(crate) fn split_role(role: &str) -> (&str, &str) {
    match role.find('(') {
        Some(idx) => {
            let primary = role[..idx].trim();
            let secondary = role[idx..].trim();
            (
                non_empty_or(primary, DEFAULT_ROLE_PRIMARY),
                non_empty_or(secondary, DEFAULT_ROLE_SECONDARY),
            )
        }
        None => (role, ""),
    }
}

fn non_empty_or<'a>(s: &'a str, fallback: &'a str) -> &'a str {
    if s.is_empty() {
        fallback
    } else {
        s
    }
}

/// Case-insensitive substring test
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether two organization names contain one another, ignoring case.
/// Empty names never match.
pub(crate) fn names_overlap(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    contains_ignore_case(a, b) || contains_ignore_case(b, a)
}

/// Borrow an optional string only when it is set and non-empty
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Escape text for use inside HTML element content and quoted attributes
pub(crate) fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
