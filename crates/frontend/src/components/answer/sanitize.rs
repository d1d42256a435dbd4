//! HTML sanitization and markdown rendering for answer bodies
//!
//! Backend text is untrusted: it is sanitized before markdown rendering and
//! the rendered HTML is sanitized again before it is mounted.

use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

static COPY_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<a [^>]*><sup>\d+</sup></a>|<[^>]+>").unwrap());

fn answer_sanitizer() -> ammonia::Builder<'static> {
    let mut builder = ammonia::Builder::default();
    builder
        .add_allowed_classes("a", &["supContainer"])
        .add_tags(&["input"])
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .link_rel(Some("noopener noreferrer"));
    builder
}

/// Remove scripts, event handlers and anything else outside the allow-list
pub fn sanitize_html(html: &str) -> String {
    answer_sanitizer().clean(html).to_string()
}

/// Render GitHub-flavoured markdown (raw inline HTML is passed through)
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Markdown body ready to mount as inner HTML
pub fn render_answer_body(sanitized_html: &str) -> String {
    sanitize_html(&render_markdown(sanitized_html))
}

/// Plain text for the clipboard: citation anchors and all tags removed
pub fn strip_for_copy(sanitized_html: &str) -> String {
    COPY_STRIP_RE.replace_all(sanitized_html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITED: &str = r#"Covered <a class="supContainer" title="a.pdf"><sup>1</sup></a>."#;

    #[test]
    fn test_sanitize_strips_scripts_and_handlers() {
        let dirty = r#"<p onclick="steal()">Hi</p><script>alert(1)</script><img src=x onerror=alert(1)>"#;
        let clean = sanitize_html(dirty);
        assert!(!clean.contains("script"));
        assert!(!clean.contains("onclick"));
        assert!(!clean.contains("onerror"));
        assert!(clean.contains("<p>Hi</p>"));
    }

    #[test]
    fn test_sanitize_keeps_citation_anchor() {
        let clean = sanitize_html(CITED);
        assert!(clean.contains(r#"class="supContainer""#));
        assert!(clean.contains(r#"title="a.pdf""#));
        assert!(clean.contains("<sup>1</sup>"));
    }

    #[test]
    fn test_sanitize_drops_foreign_classes() {
        let clean = sanitize_html(r#"<a class="evil supContainer" title="x">y</a>"#);
        assert!(!clean.contains("evil"));
    }

    #[test]
    fn test_render_markdown_gfm() {
        let html = render_markdown("**bold** ~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_answer_body_keeps_inline_citation() {
        let body = render_answer_body(&sanitize_html(CITED));
        assert!(body.contains("<sup>1</sup>"));
        assert!(body.starts_with("<p>"));
    }

    #[test]
    fn test_strip_for_copy_removes_citations_and_tags() {
        assert_eq!(strip_for_copy(CITED), "Covered .");
        assert_eq!(strip_for_copy("<p>Line <b>one</b></p>"), "Line one");
        let with_rel = r#"x <a class="supContainer" title="a.pdf" rel="noopener noreferrer"><sup>12</sup></a>"#;
        assert_eq!(strip_for_copy(with_rel), "x ");
    }
}
