use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Pickups run all day; the time window is not selectable yet
pub const DEFAULT_TIME_RANGE: &str = "08:00-16:00";

/// Human wording of [`DEFAULT_TIME_RANGE`]
pub const DEFAULT_WINDOW_LABEL: &str = "8am-4pm";

/// A day offered on the date selection page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOption {
    /// ISO date, e.g. "2025-01-11"
    pub date: String,
    /// Short label rendered on the day tile, e.g. "Jan. 11"
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl DayOption {
    /// Label for the info line, falls back to the ISO date
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.date)
    }
}

/// Text under the submit button once a day is chosen
pub fn selection_info(label: &str) -> String {
    format!("Between {} on {}", DEFAULT_WINDOW_LABEL, label)
}

/// Format ISO date to "Sunday, Jan. 12th"
/// Returns `None` when the input is not a valid date
pub fn format_pickup_date(date_str: &str) -> Option<String> {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let date = NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()?;
    Some(format!(
        "{}, {} {}",
        weekday_name(date.weekday()),
        month_abbrev(date.month()),
        ordinal(date.day())
    ))
}

/// Format "08:00-12:00" to "8:00am-12:00pm"
pub fn format_time_range(range: &str) -> Option<String> {
    let (start, end) = range.split_once('-')?;
    Some(format!("{}-{}", format_clock(start)?, format_clock(end)?))
}

fn format_clock(value: &str) -> Option<String> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()?;
    let period = if time.hour() >= 12 { "pm" } else { "am" };
    let hour = match time.hour() % 12 {
        0 => 12,
        h => h,
    };
    Some(format!("{}:{:02}{}", hour, time.minute(), period))
}

fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan.",
        2 => "Feb.",
        3 => "Mar.",
        4 => "Apr.",
        5 => "May",
        6 => "Jun.",
        7 => "Jul.",
        8 => "Aug.",
        9 => "Sep.",
        10 => "Oct.",
        11 => "Nov.",
        _ => "Dec.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pickup_date() {
        assert_eq!(
            format_pickup_date("2025-01-12").as_deref(),
            Some("Sunday, Jan. 12th")
        );
        assert_eq!(
            format_pickup_date("2025-05-01T00:00:00Z").as_deref(),
            Some("Thursday, May 1st")
        );
        assert_eq!(
            format_pickup_date("2025-03-22").as_deref(),
            Some("Saturday, Mar. 22nd")
        );
    }

    #[test]
    fn test_ordinal_teens() {
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(31), "31st");
    }

    #[test]
    fn test_format_time_range() {
        assert_eq!(
            format_time_range("08:00-12:00").as_deref(),
            Some("8:00am-12:00pm")
        );
        assert_eq!(
            format_time_range("00:30-16:05").as_deref(),
            Some("12:30am-4:05pm")
        );
        assert_eq!(format_time_range("noon"), None);
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(format_pickup_date("invalid"), None);
    }

    #[test]
    fn test_day_option_label_fallback() {
        let days: Vec<DayOption> = serde_json::from_str(
            r#"[{"date": "2025-01-11", "label": "Jan. 11"}, {"date": "2025-01-12", "label": " "}]"#,
        )
        .unwrap();
        assert_eq!(days[0].display_label(), "Jan. 11");
        assert_eq!(days[1].display_label(), "2025-01-12");
        assert!(days[1].available);
        assert_eq!(selection_info(days[0].display_label()), "Between 8am-4pm on Jan. 11");
    }
}
