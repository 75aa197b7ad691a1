//! Estimated reading time for a post body.

use crate::ContentSection;

/// Assumed reading speed.
const WORDS_PER_MINUTE: usize = 200;

/// Total word count across all content sections: every section heading plus
/// every rich-text block, counted as whitespace-delimited tokens.
///
/// Whitespace splitting is a documented assumption; scripts without word
/// spacing are undercounted.
pub fn word_count(sections: &[ContentSection]) -> usize {
    sections
        .iter()
        .map(|section| {
            section.heading.split_whitespace().count()
                + section
                    .body
                    .iter()
                    .map(|block| block.text.split_whitespace().count())
                    .sum::<usize>()
        })
        .sum()
}

/// Estimated minutes to read, rounded up to the next whole minute.
pub fn estimate_read_time(sections: &[ContentSection]) -> u32 {
    word_count(sections).div_ceil(WORDS_PER_MINUTE) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockKind, RichTextBlock};

    fn section(heading: &str, bodies: &[&str]) -> ContentSection {
        ContentSection {
            heading: heading.to_string(),
            body: bodies
                .iter()
                .map(|text| RichTextBlock {
                    kind: BlockKind::Paragraph,
                    text: text.to_string(),
                    spans: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn counts_heading_and_body_tokens() {
        let sections = [section("A B", &["C D E"])];
        assert_eq!(word_count(&sections), 5);
        assert_eq!(estimate_read_time(&sections), 1);
    }

    #[test]
    fn four_hundred_words_read_in_two_minutes() {
        let body = ["word"; 398].join(" ");
        let sections = [section("A B", &[&body])];
        assert_eq!(word_count(&sections), 400);
        assert_eq!(estimate_read_time(&sections), 2);
    }

    #[test]
    fn sums_across_sections() {
        let sections = [section("One two", &["three four"]), section("five", &["six", "seven"])];
        assert_eq!(word_count(&sections), 7);
    }

    #[test]
    fn partial_minute_rounds_up() {
        let body = ["w"; 201].join(" ");
        let sections = [section("", &[&body])];
        assert_eq!(estimate_read_time(&sections), 2);
    }

    #[test]
    fn empty_content_reads_in_zero_minutes() {
        assert_eq!(estimate_read_time(&[]), 0);
    }
}
