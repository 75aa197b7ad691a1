use chrono::{DateTime, TimeZone, Utc};

/// Current instant from the host clock.
///
/// Injected into the shared formatting helpers so the fallback for undated
/// documents stays a call-site decision.
pub fn now_utc() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(js_sys::Date::now() as i64)
        .single()
        .unwrap_or_default()
}
