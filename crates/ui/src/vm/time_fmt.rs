use chrono::NaiveDate;

/// Countdown as `m:ss`; minutes are not padded and may exceed 59.
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

/// Calendar date as `m/d/yyyy`.
#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%-m/%-d/%Y").to_string()
}
