//! Date utility functions
//!
//! This module provides helpers for date parsing and human-readable formatting
//! (e.g., "yesterday", "today", "tomorrow").

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date in human-readable relative form
///
/// # Arguments
/// * `date` - The date to format
///
/// # Returns
/// * `String` - "today", "tomorrow", "next Friday", "in 12 days", or a
///   month-day form ("Jan 15", with the year for other years)
pub fn format_human_date(date: NaiveDate) -> String {
    let today = today();

    // Calculate the difference in days
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => {
            // Within the next week - show day name
            format!("next {}", weekday_name(date.weekday()))
        }
        diff if (-7..-1).contains(&diff) => {
            // Within the past week - show day name
            format!("last {}", weekday_name(date.weekday()))
        }
        diff if diff > 7 && diff <= 30 => {
            // Within the next month - show "in X days"
            format!("in {} days", diff)
        }
        diff if (-30..-7).contains(&diff) => {
            // Within the past month - show "X days ago"
            format!("{} days ago", -diff)
        }
        _ => {
            // For dates further out, show the actual date
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
