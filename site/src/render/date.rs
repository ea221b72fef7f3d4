//! Article date formatting
//!
//! Feed dates arrive in whatever form the upstream source used. Parsed
//! dates are shown in the site's display offset; anything unparseable is
//! shown verbatim.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};

/// Korean weekday names, Sunday first
const WEEKDAYS_KR: [&str; 7] = [
    "일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일",
];

/// The site is written for a Korean audience
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Which date layout the pages use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `YYYY. MM. DD. HH:MM`
    #[default]
    Timestamp,
    /// `YYYY.MM.DD.<weekday>`
    Weekday,
}

impl std::str::FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timestamp" => Ok(DateStyle::Timestamp),
            "weekday" => Ok(DateStyle::Weekday),
            _ => Err(format!("Unknown date style: {}", s)),
        }
    }
}

/// Formats feed dates for display
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    style: DateStyle,
    offset: FixedOffset,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(
            DateStyle::Timestamp,
            display_offset(DEFAULT_UTC_OFFSET_HOURS),
        )
    }
}

/// Fixed offset for whole hours east of UTC; out-of-range values mean UTC
pub fn display_offset(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
}

impl DateFormatter {
    pub fn new(style: DateStyle, offset: FixedOffset) -> Self {
        Self { style, offset }
    }

    /// Parse a feed date into local wall-clock time.
    ///
    /// Offset-carrying timestamps are shifted into the display offset;
    /// naive ones are taken as already local. A bare date is UTC midnight.
    pub fn parse(&self, raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&self.offset).naive_local());
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
            return Some(dt.with_timezone(&self.offset).naive_local());
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive);
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|midnight| {
                Utc.from_utc_datetime(&midnight)
                    .with_timezone(&self.offset)
                    .naive_local()
            })
    }

    /// Full display form in the configured style
    pub fn format(&self, raw: &str) -> String {
        match self.parse(raw) {
            Some(dt) => match self.style {
                DateStyle::Timestamp => format!(
                    "{}. {:02}. {:02}. {:02}:{:02}",
                    dt.year(),
                    dt.month(),
                    dt.day(),
                    dt.hour(),
                    dt.minute()
                ),
                DateStyle::Weekday => weekday_form(&dt),
            },
            None => raw.to_string(),
        }
    }

    /// Date-only form used on category cards
    pub fn format_short(&self, raw: &str) -> String {
        match self.parse(raw) {
            Some(dt) => match self.style {
                DateStyle::Timestamp => {
                    format!("{}. {:02}. {:02}.", dt.year(), dt.month(), dt.day())
                }
                DateStyle::Weekday => weekday_form(&dt),
            },
            None => raw.to_string(),
        }
    }
}

fn weekday_form(dt: &NaiveDateTime) -> String {
    let weekday = WEEKDAYS_KR[dt.weekday().num_days_from_sunday() as usize];
    format!(
        "{}.{:02}.{:02}.{}",
        dt.year(),
        dt.month(),
        dt.day(),
        weekday
    )
}
