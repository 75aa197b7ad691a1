//! Rich-text to HTML conversion.
//!
//! Blocks arrive as structured nodes: raw text plus styled spans addressed
//! by character offsets. Conversion escapes all text, applies spans as
//! nested tags, folds consecutive list items into one list, and passes the
//! final string through [`ammonia`] before it reaches the page.

use crate::{BlockKind, RichTextBlock, Span, SpanKind};

/// Convert an ordered block sequence into a sanitized HTML string.
pub fn render_html(blocks: &[RichTextBlock]) -> String {
    let mut out = String::new();
    let mut open_list: Option<BlockKind> = None;

    for block in blocks {
        let list_kind = match block.kind {
            BlockKind::ListItem | BlockKind::OListItem => Some(block.kind),
            _ => None,
        };
        if open_list != list_kind {
            close_list(&mut out, open_list);
            match list_kind {
                Some(BlockKind::ListItem) => out.push_str("<ul>"),
                Some(BlockKind::OListItem) => out.push_str("<ol>"),
                _ => {}
            }
            open_list = list_kind;
        }

        let inner = span_html(&block.text, &block.spans);
        match block.kind {
            BlockKind::Heading3 => {
                out.push_str("<h3>");
                out.push_str(&inner);
                out.push_str("</h3>");
            }
            BlockKind::Preformatted => {
                out.push_str("<pre>");
                out.push_str(&inner);
                out.push_str("</pre>");
            }
            BlockKind::ListItem | BlockKind::OListItem => {
                out.push_str("<li>");
                out.push_str(&inner);
                out.push_str("</li>");
            }
            BlockKind::Paragraph | BlockKind::Other => {
                out.push_str("<p>");
                out.push_str(&inner);
                out.push_str("</p>");
            }
        }
    }
    close_list(&mut out, open_list);

    ammonia::clean(&out)
}

fn close_list(out: &mut String, open_list: Option<BlockKind>) {
    match open_list {
        Some(BlockKind::ListItem) => out.push_str("</ul>"),
        Some(BlockKind::OListItem) => out.push_str("</ol>"),
        _ => {}
    }
}

/// Apply spans to one block's text. Offsets are characters, clamped to the
/// text length; spans are expected to nest, not overlap.
fn span_html(text: &str, spans: &[Span]) -> String {
    if spans.is_empty() {
        return escape(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut ordered: Vec<&Span> = spans
        .iter()
        .filter(|span| span.end > span.start && span.kind != SpanKind::Other)
        .collect();
    ordered.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut out = String::new();
    let mut open: Vec<&Span> = Vec::new();
    let mut pending = ordered.into_iter().peekable();

    for (index, ch) in chars.iter().enumerate() {
        while open
            .last()
            .is_some_and(|span| span.end.min(chars.len()) == index)
        {
            if let Some(span) = open.pop() {
                out.push_str(close_tag(span));
            }
        }
        while pending.peek().is_some_and(|span| span.start == index) {
            if let Some(span) = pending.next() {
                out.push_str(&open_tag(span));
                open.push(span);
            }
        }
        push_escaped(&mut out, *ch);
    }
    while let Some(span) = open.pop() {
        out.push_str(close_tag(span));
    }

    out
}

fn open_tag(span: &Span) -> String {
    match span.kind {
        SpanKind::Strong => "<strong>".to_string(),
        SpanKind::Em => "<em>".to_string(),
        SpanKind::Hyperlink => {
            let url = span
                .data
                .as_ref()
                .and_then(|data| data.url.as_deref())
                .unwrap_or("#");
            format!("<a href=\"{}\">", escape(url))
        }
        SpanKind::Other => String::new(),
    }
}

fn close_tag(span: &Span) -> &'static str {
    match span.kind {
        SpanKind::Strong => "</strong>",
        SpanKind::Em => "</em>",
        SpanKind::Hyperlink => "</a>",
        SpanKind::Other => "",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut out, ch);
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpanData;

    fn block(kind: BlockKind, text: &str, spans: Vec<Span>) -> RichTextBlock {
        RichTextBlock {
            kind,
            text: text.to_string(),
            spans,
        }
    }

    fn span(start: usize, end: usize, kind: SpanKind) -> Span {
        Span {
            start,
            end,
            kind,
            data: None,
        }
    }

    #[test]
    fn renders_a_plain_paragraph() {
        let html = render_html(&[block(BlockKind::Paragraph, "Hello world", vec![])]);
        assert_eq!(html, "<p>Hello world</p>");
    }

    #[test]
    fn escapes_markup_in_text() {
        let html = render_html(&[block(
            BlockKind::Paragraph,
            "<script>alert(1)</script>",
            vec![],
        )]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn applies_a_strong_span() {
        let html = render_html(&[block(
            BlockKind::Paragraph,
            "Hello world",
            vec![span(0, 5, SpanKind::Strong)],
        )]);
        assert_eq!(html, "<p><strong>Hello</strong> world</p>");
    }

    #[test]
    fn nests_spans() {
        let html = render_html(&[block(
            BlockKind::Paragraph,
            "Hello world",
            vec![span(0, 11, SpanKind::Strong), span(6, 11, SpanKind::Em)],
        )]);
        assert_eq!(html, "<p><strong>Hello <em>world</em></strong></p>");
    }

    #[test]
    fn renders_hyperlinks_with_escaped_target() {
        let html = render_html(&[block(
            BlockKind::Paragraph,
            "read the docs",
            vec![Span {
                start: 9,
                end: 13,
                kind: SpanKind::Hyperlink,
                data: Some(SpanData {
                    url: Some("https://example.com/docs?a=1&b=2".to_string()),
                }),
            }],
        )]);
        assert!(html.contains("href=\"https://example.com/docs?a=1&amp;b=2\""));
        assert!(html.contains(">docs</a>"));
    }

    #[test]
    fn folds_consecutive_list_items_into_one_list() {
        let html = render_html(&[
            block(BlockKind::ListItem, "One", vec![]),
            block(BlockKind::ListItem, "Two", vec![]),
            block(BlockKind::Paragraph, "after", vec![]),
        ]);
        assert_eq!(html, "<ul><li>One</li><li>Two</li></ul><p>after</p>");
    }

    #[test]
    fn ordered_and_unordered_lists_do_not_merge() {
        let html = render_html(&[
            block(BlockKind::ListItem, "bullet", vec![]),
            block(BlockKind::OListItem, "first", vec![]),
        ]);
        assert_eq!(html, "<ul><li>bullet</li></ul><ol><li>first</li></ol>");
    }

    #[test]
    fn span_offsets_are_clamped_to_text_length() {
        let html = render_html(&[block(
            BlockKind::Paragraph,
            "short",
            vec![span(0, 99, SpanKind::Em)],
        )]);
        assert_eq!(html, "<p><em>short</em></p>");
    }

    #[test]
    fn unknown_blocks_degrade_to_paragraphs() {
        let html = render_html(&[block(BlockKind::Other, "mystery", vec![])]);
        assert_eq!(html, "<p>mystery</p>");
    }

    #[test]
    fn span_offsets_count_characters_not_bytes() {
        // "café " is five characters; the span starts after it.
        let html = render_html(&[block(
            BlockKind::Paragraph,
            "café now",
            vec![span(5, 8, SpanKind::Strong)],
        )]);
        assert_eq!(html, "<p>café <strong>now</strong></p>");
    }
}
