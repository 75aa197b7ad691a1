use web_sys::window;

const SITE_NAME: &str = "spacetrail";

/// Compose the `{page} | {site}` title pattern.
pub fn page_title(page: &str) -> String {
    format!("{} | {}", page, SITE_NAME)
}

/// Set the document title for the current page.
pub fn set_page_title(page: &str) {
    if let Some(doc) = window().and_then(|win| win.document()) {
        doc.set_title(&page_title(page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_the_site_pattern() {
        assert_eq!(page_title("Home"), "Home | spacetrail");
        assert_eq!(page_title("404"), "404 | spacetrail");
    }
}
