//! Publication-date formatting for display.

use chrono::{DateTime, Locale, Utc};

const DISPLAY_FORMAT: &str = "%d %b %Y";
const DISPLAY_LOCALE: Locale = Locale::pt_BR;

/// Format a publication timestamp as a localized `dd MMM yyyy` string.
///
/// A missing timestamp renders `fallback_now` instead. The caller injects
/// the clock, which keeps the fallback deterministic under test and leaves
/// the fallback instant a call-site decision.
pub fn format_publication_date(
    date: Option<DateTime<Utc>>,
    fallback_now: DateTime<Utc>,
) -> String {
    date.unwrap_or(fallback_now)
        .format_localized(DISPLAY_FORMAT, DISPLAY_LOCALE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 8, 1, 12, 0, 0).single().expect("clock")
    }

    #[test]
    fn formats_a_timestamp_as_localized_short_date() {
        let date = Utc.with_ymd_and_hms(2021, 3, 15, 10, 30, 0).single();
        assert_eq!(format_publication_date(date, clock()), "15 mar 2021");
    }

    #[test]
    fn null_timestamp_falls_back_to_the_injected_clock() {
        assert_eq!(format_publication_date(None, clock()), "01 ago 2022");
    }
}
