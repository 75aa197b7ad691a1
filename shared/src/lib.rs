//! Shared data model and content logic for the spacetrail blog.
//!
//! The wire shapes mirror the headless CMS JSON: summary documents for the
//! listing feed, full documents for the detail page, and an opaque
//! `next_page` cursor for pagination. The processing modules ([`richtext`],
//! [`readtime`], [`dates`], [`feed`]) are pure so they test natively.

pub mod dates;
pub mod feed;
pub mod readtime;
pub mod richtext;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use feed::{PostFeed, PostListItem};

// 完整文章数据模型

/// One page of post summaries returned by a document search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    /// Summaries in API order.
    pub results: Vec<PostSummary>,
    /// Opaque URL of the next page; `None` means the feed is exhausted.
    pub next_page: Option<String>,
}

/// Listing entry as delivered by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Document slug, also the detail-route parameter.
    pub uid: String,
    /// Publication timestamp; the CMS may deliver `null` for unpublished
    /// drafts surfaced through previews.
    pub first_publication_date: Option<DateTime<Utc>>,
    /// Summary field block.
    pub data: PostSummaryData,
}

/// Field block of a listing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummaryData {
    /// Post title.
    pub title: String,
    /// One-line teaser shown under the title.
    pub subtitle: String,
    /// Author display name.
    pub author: String,
}

// 文章详情（detail 页面）

/// Full post document for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    /// Document slug.
    pub uid: String,
    /// Publication timestamp, `null` for previewed drafts.
    pub first_publication_date: Option<DateTime<Utc>>,
    /// Full field block.
    pub data: PostData,
}

/// Field block of a full post document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostData {
    /// Post title.
    pub title: String,
    /// One-line teaser.
    pub subtitle: String,
    /// Banner image shown above the article.
    pub banner: Banner,
    /// Author display name.
    pub author: String,
    /// Ordered content sections.
    pub content: Vec<ContentSection>,
}

/// Banner image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    /// Absolute image URL served by the CMS media store.
    pub url: String,
}

/// One content section: a heading plus its rich-text body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    /// Section heading (plain text).
    pub heading: String,
    /// Ordered rich-text body blocks, consumed by [`richtext`].
    pub body: Vec<RichTextBlock>,
}

/// Structured rich-text node. Opaque to the pages; only the renderer looks
/// inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    /// Block-level kind.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Raw block text (unescaped).
    pub text: String,
    /// Styled ranges over `text`, addressed by character offset.
    #[serde(default)]
    pub spans: Vec<Span>,
}

/// Block-level node kinds the renderer understands. Anything newer the CMS
/// starts emitting degrades to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    /// Plain paragraph.
    Paragraph,
    /// In-body subheading.
    Heading3,
    /// Verbatim block, rendered as `pre`.
    Preformatted,
    /// Unordered list entry.
    ListItem,
    /// Ordered list entry.
    OListItem,
    /// Unrecognized block type.
    #[serde(other)]
    Other,
}

/// Styled range inside a block's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start, in characters.
    pub start: usize,
    /// Exclusive end, in characters.
    pub end: usize,
    /// Style applied to the range.
    #[serde(rename = "type")]
    pub kind: SpanKind,
    /// Extra payload; only hyperlinks carry one.
    #[serde(default)]
    pub data: Option<SpanData>,
}

/// Span styles the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Bold range.
    Strong,
    /// Emphasized range.
    Em,
    /// Linked range; target URL in [`Span::data`].
    Hyperlink,
    /// Unrecognized span type, rendered as plain text.
    #[serde(other)]
    Other,
}

/// Payload of a hyperlink span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanData {
    /// Link target.
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_listing_page_with_cursor() {
        let page: PostPage = serde_json::from_str(
            r#"{
                "results": [{
                    "uid": "first-post",
                    "first_publication_date": "2021-03-15T10:30:00Z",
                    "data": {
                        "title": "First post",
                        "subtitle": "It begins",
                        "author": "Ada"
                    }
                }],
                "next_page": "https://cms.example.com/documents/search?page=2"
            }"#,
        )
        .expect("decode page");

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].uid, "first-post");
        assert!(page.results[0].first_publication_date.is_some());
        assert_eq!(
            page.next_page.as_deref(),
            Some("https://cms.example.com/documents/search?page=2")
        );
    }

    #[test]
    fn decodes_a_final_page_with_null_cursor_and_null_date() {
        let page: PostPage = serde_json::from_str(
            r#"{
                "results": [{
                    "uid": "draft",
                    "first_publication_date": null,
                    "data": {"title": "t", "subtitle": "s", "author": "a"}
                }],
                "next_page": null
            }"#,
        )
        .expect("decode page");

        assert_eq!(page.next_page, None);
        assert_eq!(page.results[0].first_publication_date, None);
    }

    #[test]
    fn decodes_rich_text_blocks_and_spans() {
        let block: RichTextBlock = serde_json::from_str(
            r#"{
                "type": "list-item",
                "text": "read the docs",
                "spans": [
                    {"start": 9, "end": 13, "type": "hyperlink",
                     "data": {"url": "https://example.com/docs"}}
                ]
            }"#,
        )
        .expect("decode block");

        assert_eq!(block.kind, BlockKind::ListItem);
        assert_eq!(block.spans[0].kind, SpanKind::Hyperlink);
        assert_eq!(
            block.spans[0]
                .data
                .as_ref()
                .and_then(|data| data.url.as_deref()),
            Some("https://example.com/docs")
        );
    }

    #[test]
    fn unknown_block_and_span_types_degrade_instead_of_failing() {
        let block: RichTextBlock = serde_json::from_str(
            r#"{
                "type": "embed",
                "text": "x",
                "spans": [{"start": 0, "end": 1, "type": "label"}]
            }"#,
        )
        .expect("decode block");

        assert_eq!(block.kind, BlockKind::Other);
        assert_eq!(block.spans[0].kind, SpanKind::Other);
    }

    #[test]
    fn missing_spans_default_to_empty() {
        let block: RichTextBlock =
            serde_json::from_str(r#"{"type": "paragraph", "text": "hello"}"#).expect("decode");
        assert!(block.spans.is_empty());
    }
}
