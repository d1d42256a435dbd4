//! Answer text -> HTML with numbered citation anchors

use contracts::chat::ChatAppResponse;
use once_cell::sync::Lazy;
use regex::Regex;

static CITATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]").unwrap());
static FOLLOWUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<<([^<>]*)>>").unwrap());
static FILENAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+\.\w+(#\S*)?$").unwrap());

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HtmlParsedAnswer {
    pub answer_html: String,
    /// Unique citations in order of first appearance
    pub citations: Vec<String>,
}

/// Turn the accumulated answer text into displayable markup.
///
/// Every `[source]` marker becomes a superscript anchor numbered by first
/// appearance. A marker is a citation only when it looks like a file name and
/// names one of the response's data points; markdown links, task boxes and
/// indexing such as `arr[0]` stay as raw text, as does anything unparsable.
pub fn parse_answer_to_html(answer: &ChatAppResponse, is_streaming: bool) -> HtmlParsedAnswer {
    let mut text = answer.message.content.trim().to_string();

    // Follow-up questions are shown as chips, not inline.
    text = FOLLOWUP_RE.replace_all(&text, "").into_owned();
    if is_streaming {
        if let Some(pos) = text.rfind("<<") {
            text.truncate(pos);
        }
        text = truncate_open_marker(&text).to_string();
    }
    let text = text.trim_end();

    let data_points = &answer.context.data_points;
    let mut citations: Vec<String> = Vec::new();
    let mut html = String::with_capacity(text.len());
    let mut last = 0;

    for caps in CITATION_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let citation = inner.as_str().trim();
        if citation.is_empty() || !is_known_citation(data_points, citation) {
            continue;
        }

        html.push_str(&text[last..whole.start()]);
        let number = match citations.iter().position(|c| c == citation) {
            Some(i) => i + 1,
            None => {
                citations.push(citation.to_string());
                citations.len()
            }
        };
        html.push_str(&format!(
            r#"<a class="supContainer" title="{}"><sup>{}</sup></a>"#,
            escape_attr(citation),
            number
        ));
        last = whole.end();
    }
    html.push_str(&text[last..]);

    HtmlParsedAnswer {
        answer_html: html,
        citations,
    }
}

/// Drop a trailing `[` that has not been closed yet (mid-stream marker)
fn truncate_open_marker(text: &str) -> &str {
    match (text.rfind('['), text.rfind(']')) {
        (Some(open), Some(close)) if open < close => text,
        (Some(open), _) => &text[..open],
        _ => text,
    }
}

fn is_known_citation(data_points: &[String], citation: &str) -> bool {
    FILENAME_RE.is_match(citation) && data_points.iter().any(|dp| dp.starts_with(citation))
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::chat::{ResponseContext, ResponseMessage};

    fn answer(content: &str, data_points: &[&str]) -> ChatAppResponse {
        ChatAppResponse {
            message: ResponseMessage::assistant(content),
            context: ResponseContext {
                data_points: data_points.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_citations_numbered_by_first_appearance() {
        let parsed = parse_answer_to_html(
            &answer(
                "Dental [a.pdf] and vision [b.pdf], again dental [a.pdf].",
                &["a.pdf: dental", "b.pdf: vision"],
            ),
            false,
        );
        assert_eq!(parsed.citations, vec!["a.pdf", "b.pdf"]);
        assert_eq!(
            parsed.answer_html,
            r#"Dental <a class="supContainer" title="a.pdf"><sup>1</sup></a> and vision <a class="supContainer" title="b.pdf"><sup>2</sup></a>, again dental <a class="supContainer" title="a.pdf"><sup>1</sup></a>."#
        );
    }

    #[test]
    fn test_only_known_data_points_are_citations() {
        let parsed = parse_answer_to_html(
            &answer(
                "See [doc1.pdf#page=2] and [the manual](http://x).",
                &["doc1.pdf#page=2: Some content"],
            ),
            false,
        );
        assert_eq!(parsed.citations, vec!["doc1.pdf#page=2"]);
        assert!(parsed.answer_html.contains("[the manual](http://x)"));
    }

    #[test]
    fn test_malformed_markers_left_as_text() {
        let content = "Broken [marker and ] stray ]] and [] empty [doc.pdf]";
        let parsed = parse_answer_to_html(&answer(content, &["doc.pdf: text"]), false);
        assert_eq!(parsed.citations, vec!["doc.pdf"]);
        assert!(parsed.answer_html.starts_with("Broken [marker and ] stray ]] and [] empty"));

        let parsed = parse_answer_to_html(&answer("Unclosed [doc.pdf", &["doc.pdf: text"]), false);
        assert!(parsed.citations.is_empty());
        assert_eq!(parsed.answer_html, "Unclosed [doc.pdf");
    }

    #[test]
    fn test_streaming_hides_partial_marker() {
        let parsed =
            parse_answer_to_html(&answer("Covered [a.pdf] per [b.p", &["a.pdf: x", "b.pdf: y"]), true);
        assert_eq!(parsed.citations, vec!["a.pdf"]);
        assert!(!parsed.answer_html.contains("[b.p"));
        assert!(parsed.answer_html.ends_with("per"));
    }

    #[test]
    fn test_followup_blocks_removed() {
        let parsed = parse_answer_to_html(
            &answer("Yes it is.\n<<Is vision covered?>><<What about dental?>>", &[]),
            false,
        );
        assert_eq!(parsed.answer_html, "Yes it is.");

        let parsed = parse_answer_to_html(&answer("Yes it is. <<Is vis", &[]), true);
        assert_eq!(parsed.answer_html, "Yes it is.");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let response = answer("Plan [a.pdf] covers [b.pdf].", &["a.pdf: x", "b.pdf: y"]);
        assert_eq!(
            parse_answer_to_html(&response, false),
            parse_answer_to_html(&response, false)
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let parsed = parse_answer_to_html(&answer(r#"x [a"b.pdf]"#, &[r#"a"b.pdf: x"#]), false);
        assert!(parsed.answer_html.contains(r#"title="a&quot;b.pdf""#));
    }

    #[test]
    fn test_brackets_without_data_points_stay_text() {
        for content in [
            "See [the manual](http://x).",
            "- [x] done",
            "Use arr[0] here",
            "Footnote [1] text",
            "Plan [a.pdf] covers it.",
        ] {
            let parsed = parse_answer_to_html(&answer(content, &[]), false);
            assert!(parsed.citations.is_empty(), "{content}");
            assert_eq!(parsed.answer_html, content);
        }
    }

    #[test]
    fn test_non_filename_marker_is_not_a_citation() {
        let parsed = parse_answer_to_html(
            &answer("Step [1] of [guide.md#intro]", &["1: x", "guide.md#intro: y"]),
            false,
        );
        assert_eq!(parsed.citations, vec!["guide.md#intro"]);
        assert!(parsed.answer_html.starts_with("Step [1] of "));
    }
}
