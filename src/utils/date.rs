// Report date handling

use anyhow::Result;
use chrono::{NaiveDate, Utc};

/// Today's date in UTC; reports are stamped with the UTC calendar day
/// regardless of the local time zone
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a report date: `YYYY-MM-DD`, `today` or `yesterday`
pub fn parse_report_date(expr: &str) -> Result<NaiveDate> {
    match expr.trim() {
        "today" => Ok(today()),
        "yesterday" => today()
            .pred_opt()
            .ok_or_else(|| anyhow::anyhow!("Invalid date")),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid date: '{}'. Expected YYYY-MM-DD.", other)),
    }
}

/// Long form used by the analytics panel, e.g. "Monday, January 15, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
