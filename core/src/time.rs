use chrono::{Datelike, Duration, NaiveDate, Weekday};
use anyhow::{anyhow, Result};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Short English name for a zero-based month index. Panics if `index > 11`.
pub fn month_label(index: usize) -> &'static str {
    MONTH_LABELS[index]
}

/// Resolves an `--as-of` value relative to `today`.
///
/// Accepts `today`, `yesterday`, `-Nd`, `-Nw` and `YYYY-MM-DD`.
pub fn parse_as_of(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty date string"));
    }

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => {
            return today
                .pred_opt()
                .ok_or_else(|| anyhow!("No day before {}", today));
        }
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('-') {
        if rest.len() < 2 {
            return Err(anyhow!("Invalid relative format: {}", input));
        }
        let (num_str, unit) = rest.split_at(rest.len() - 1);
        let count = num_str
            .parse::<i64>()
            .ok()
            .filter(|n| *n >= 0)
            .ok_or_else(|| anyhow!("Invalid relative format: {}", input))?;
        let offset = match unit.to_lowercase().as_str() {
            "d" => Duration::try_days(count),
            "w" => Duration::try_weeks(count),
            _ => return Err(anyhow!("Unknown unit in relative time: {}", unit)),
        };
        return offset
            .and_then(|offset| today.checked_sub_signed(offset))
            .ok_or_else(|| anyhow!("Invalid relative format: {}", input));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

/// First and last day of `year`.
pub fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| anyhow!("Year out of range: {}", year))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| anyhow!("Year out of range: {}", year))?;
    Ok((start, end))
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_sub_signed(Duration::days(date.weekday().num_days_from_sunday() as i64))
        .ok_or_else(|| anyhow!("Week start out of range: {}", date))
}

/// Saturday on or after `date`.
pub fn week_end(date: NaiveDate) -> Result<NaiveDate> {
    let days_to_saturday = Weekday::Sat.num_days_from_sunday() as i64
        - date.weekday().num_days_from_sunday() as i64;
    date.checked_add_signed(Duration::days(days_to_saturday))
        .ok_or_else(|| anyhow!("Week end out of range: {}", date))
}
