//! Listing feed state: formatted post cards plus the pagination cursor.

use chrono::{DateTime, Utc};

use crate::{dates, PostPage, PostSummary};

/// One formatted entry in the listing feed.
///
/// The publication date is rendered to its display string when the entry is
/// built, which is the shape the listing page keeps in view state.
#[derive(Debug, Clone, PartialEq)]
pub struct PostListItem {
    /// Document slug, used to build the detail link.
    pub slug: String,
    /// Localized publication date, ready for display.
    pub date: String,
    /// Post title.
    pub title: String,
    /// One-line teaser.
    pub subtitle: String,
    /// Author display name.
    pub author: String,
}

impl PostListItem {
    /// Build a card from a wire summary. `now` is the fallback instant for
    /// summaries without a publication date.
    pub fn from_summary(summary: &PostSummary, now: DateTime<Utc>) -> Self {
        PostListItem {
            slug: summary.uid.clone(),
            date: dates::format_publication_date(summary.first_publication_date, now),
            title: summary.data.title.clone(),
            subtitle: summary.data.subtitle.clone(),
            author: summary.data.author.clone(),
        }
    }
}

/// Accumulated listing state: every card fetched so far plus the cursor for
/// the next page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostFeed {
    /// Cards in fetch order.
    pub posts: Vec<PostListItem>,
    /// Cursor for the next page; `None` once the feed is exhausted.
    pub next_page: Option<String>,
}

impl PostFeed {
    /// Build the feed from the initial listing page.
    pub fn from_page(page: &PostPage, now: DateTime<Utc>) -> Self {
        let mut feed = PostFeed::default();
        feed.extend(page, now);
        feed
    }

    /// Merge one fetched page: append its results without touching prior
    /// entries and replace the cursor with the page's `next_page`.
    pub fn extend(&mut self, page: &PostPage, now: DateTime<Utc>) {
        self.posts.extend(
            page.results
                .iter()
                .map(|summary| PostListItem::from_summary(summary, now)),
        );
        self.next_page = page.next_page.clone();
    }

    /// Whether a further page can be requested.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::PostSummaryData;

    fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 8, 1, 12, 0, 0).single().expect("clock")
    }

    fn summary(uid: &str) -> PostSummary {
        PostSummary {
            uid: uid.to_string(),
            first_publication_date: Utc.with_ymd_and_hms(2021, 3, 15, 10, 0, 0).single(),
            data: PostSummaryData {
                title: format!("Title {uid}"),
                subtitle: "sub".to_string(),
                author: "Ada".to_string(),
            },
        }
    }

    #[test]
    fn final_page_leaves_no_cursor() {
        let page = PostPage {
            results: vec![summary("a")],
            next_page: None,
        };
        let feed = PostFeed::from_page(&page, clock());
        assert!(!feed.has_more());
        assert_eq!(feed.posts.len(), 1);
    }

    #[test]
    fn extend_appends_and_replaces_the_cursor() {
        let first = PostPage {
            results: vec![summary("a"), summary("b")],
            next_page: Some("https://cms.example.com/search?page=2".to_string()),
        };
        let mut feed = PostFeed::from_page(&first, clock());
        assert!(feed.has_more());

        let second = PostPage {
            results: vec![summary("c")],
            next_page: None,
        };
        feed.extend(&second, clock());

        let slugs: Vec<&str> = feed.posts.iter().map(|post| post.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b", "c"]);
        assert!(!feed.has_more());
    }

    #[test]
    fn repeated_results_are_kept_as_delivered() {
        // The feed does not deduplicate; the API owns the window boundaries.
        let page = PostPage {
            results: vec![summary("a"), summary("a")],
            next_page: None,
        };
        let feed = PostFeed::from_page(&page, clock());
        assert_eq!(feed.posts.len(), 2);
    }

    #[test]
    fn cards_carry_formatted_dates() {
        let page = PostPage {
            results: vec![summary("a")],
            next_page: None,
        };
        let feed = PostFeed::from_page(&page, clock());
        assert_eq!(feed.posts[0].date, "15 mar 2021");
    }

    #[test]
    fn undated_cards_render_the_injected_clock() {
        let mut undated = summary("draft");
        undated.first_publication_date = None;
        let page = PostPage {
            results: vec![undated],
            next_page: None,
        };
        let feed = PostFeed::from_page(&page, clock());
        assert_eq!(feed.posts[0].date, "01 ago 2022");
    }
}
