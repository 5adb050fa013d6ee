//! Shared utility functions for THM crates.

/// Date utility functions
pub mod dates {
    use chrono::{Month, NaiveDate};

    /// Date format used by the daily temperature CSV: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Format a (year, month) pair as "YYYY-MM".
    pub fn format_year_month(year: i32, month: u32) -> String {
        format!("{:04}-{:02}", year, month)
    }

    /// Full English month name for a 1-based month number.
    pub fn month_name(month: u32) -> Option<&'static str> {
        let month = u8::try_from(month).ok()?;
        Month::try_from(month).ok().map(|m| m.name())
    }

}

/// Temperature value parsing and display
pub mod numbers {
    /// Placeholder shown for an absent temperature.
    pub const MISSING: &str = "n/a";

    /// Coerce a CSV field into a temperature.
    ///
    /// Blank, non-numeric and non-finite fields yield `None`.
    pub fn parse_temperature(s: &str) -> Option<f64> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        s.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Shortest round-trip representation, `15` rather than `15.0`.
    pub fn format_temperature(value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{}", v),
            None => MISSING.to_string(),
        }
    }

}
