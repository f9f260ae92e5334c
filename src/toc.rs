//! GitHub-flavored markdown anchor/slug generation.

/// Generate a table-of-contents link for a function name.
pub fn render_toc_link(text: &str) -> String {
    format!("[{}](#{})", text, github_slug(text))
}

/// Generate a TOC list item.
pub fn render_toc_item(title: &str) -> String {
    format!("* {}", render_toc_link(title))
}

/// GitHub heading anchor slug generation.
///
/// Matches the algorithm at:
/// https://github.com/jch/html-pipeline/blob/master/lib/html/pipeline/toc_filter.rb#L44-L45
///
/// - lowercase
/// - remove all chars that aren't alphanumeric, space, underscore or hyphen
/// - replace spaces with hyphens
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '_' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
