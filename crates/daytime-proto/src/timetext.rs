// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Daytime text formatting.
//!
//! The payload of a daytime record is the current date and time rendered
//! as `YYYY-MM-DD HH:MM:SS` followed by the line-end marker. Formatting
//! can fail when the clock-to-calendar conversion produces no value for a
//! timestamp (an ambiguous or nonexistent local time); callers substitute
//! an empty payload in that case.

use core::fmt;

use chrono::{DateTime, Local, LocalResult, TimeZone, Utc};

use crate::protocol::LINE_END;

/// `strftime` pattern for daytime text (`YYYY-MM-DD HH:MM:SS`).
pub const DAYTIME_FORMAT: &str = "%F %T";

/// Render a clock-to-calendar conversion result as daytime text.
///
/// Returns `None` when the conversion produced no single value.
fn stamp<Tz>(converted: LocalResult<DateTime<Tz>>) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let datetime = converted.single()?;
    Some(format!("{}{}", datetime.format(DAYTIME_FORMAT), LINE_END))
}

/// Current date and time in the local timezone, as daytime text.
///
/// Returns `None` if the local calendar conversion cannot produce a value
/// for the current instant.
pub fn local_daytime() -> Option<String> {
    let now = Utc::now().timestamp();
    stamp(Local.timestamp_opt(now, 0))
}

/// Current date and time in UTC, as daytime text.
pub fn gmt_daytime() -> Option<String> {
    let now = Utc::now().timestamp();
    stamp(Utc.timestamp_opt(now, 0))
}

/// Strip a received payload at the first line-end marker.
///
/// Text beyond the marker is discarded along with the marker itself;
/// payloads without a marker are returned unchanged.
pub fn strip_line_end(text: &str) -> &str {
    match text.find(LINE_END) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn assert_daytime_shape(text: &str) {
        assert!(text.ends_with(LINE_END), "missing line end: {text:?}");
        let stripped = strip_line_end(text);
        assert!(
            NaiveDateTime::parse_from_str(stripped, DAYTIME_FORMAT).is_ok(),
            "unexpected daytime text: {stripped:?}"
        );
    }

    #[test]
    fn test_local_daytime_shape() {
        assert_daytime_shape(&local_daytime().unwrap());
    }

    #[test]
    fn test_gmt_daytime_shape() {
        assert_daytime_shape(&gmt_daytime().unwrap());
    }

    #[test]
    fn test_stamp_known_instant() {
        let text = stamp(Utc.timestamp_opt(1_754_352_000, 0)).unwrap();
        assert_eq!(text, "2025-08-05 00:00:00\r\n");
    }

    #[test]
    fn test_stamp_none_on_failed_conversion() {
        let none: LocalResult<DateTime<Utc>> = LocalResult::None;
        assert_eq!(stamp(none), None);
    }

    #[test]
    fn test_strip_line_end() {
        assert_eq!(strip_line_end("2026-08-05 12:00:00\r\n"), "2026-08-05 12:00:00");
        assert_eq!(strip_line_end("no marker"), "no marker");
        assert_eq!(strip_line_end("first\r\nsecond"), "first");
        assert_eq!(strip_line_end(""), "");
    }
}
