use anyhow::{bail, Context};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use thm_utils::{dates, numbers};

/// Columns the daily temperature CSV must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "max_temperature", "min_temperature"];

/// A CSV row before any coercion. Temperatures stay as text so that a bad
/// value only affects its own field.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub max_temperature: String,
    pub min_temperature: String,
}

/// One day of observations.
///
/// `None` temperatures come from fields that did not coerce to a number and
/// are skipped by every max/min reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub max_temperature: Option<f64>,
    pub min_temperature: Option<f64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, max_temperature: Option<f64>, min_temperature: Option<f64>) -> Self {
        Self {
            date,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            max_temperature,
            min_temperature,
        }
    }

    /// True when either temperature field is absent.
    pub fn has_missing_temperature(&self) -> bool {
        self.max_temperature.is_none() || self.min_temperature.is_none()
    }
}

impl TryFrom<RawRow> for DailyRecord {
    type Error = anyhow::Error;

    fn try_from(row: RawRow) -> Result<Self, Self::Error> {
        let date = dates::parse_date(&row.date)
            .with_context(|| format!("unparseable date `{}`", row.date))?;
        Ok(DailyRecord::new(
            date,
            numbers::parse_temperature(&row.max_temperature),
            numbers::parse_temperature(&row.min_temperature),
        ))
    }
}

/// Counters collected while parsing, logged once per load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    pub parsed: u32,
    /// Rows dropped because their date did not parse.
    pub skipped: u32,
    /// Rows the CSV reader itself rejected.
    pub unreadable: u32,
    pub missing_temperature: u32,
}

/// Parse the daily temperature CSV (with headers) into records.
///
/// Rows with an unparseable date are skipped. Short rows are padded with
/// blank fields, so a missing trailing temperature reads as absent. A missing
/// header column is an error.
///
/// ```
/// let csv = "date,max_temperature,min_temperature\n1997-01-05,10,2\n";
/// let records = thm_core::record::parse_csv(csv).unwrap();
/// assert_eq!(records[0].year, 1997);
/// assert_eq!(records[0].max_temperature, Some(10.0));
/// ```
pub fn parse_csv(csv_data: &str) -> anyhow::Result<Vec<DailyRecord>> {
    let (records, summary) = parse_csv_with_summary(csv_data)?;
    log::info!(
        "[THM] parser: Parsed {} daily records, skipped {} undated and {} unreadable rows, {} with absent temperatures",
        summary.parsed,
        summary.skipped,
        summary.unreadable,
        summary.missing_temperature
    );
    Ok(records)
}

/// Same as [`parse_csv`] but also returns the row counters.
pub fn parse_csv_with_summary(csv_data: &str) -> anyhow::Result<(Vec<DailyRecord>, ParseSummary)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers().context("failed to read CSV header")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("temperature CSV is missing the `{}` column", column);
        }
    }

    let mut records = Vec::new();
    let mut summary = ParseSummary::default();
    for result in rdr.records() {
        let row = result.and_then(|fields| {
            padded(fields, headers.len()).deserialize::<RawRow>(Some(&headers))
        });
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                log::debug!("[THM] parser: unreadable row: {}", e);
                summary.unreadable += 1;
                continue;
            }
        };
        match DailyRecord::try_from(row) {
            Ok(record) => {
                if record.has_missing_temperature() {
                    summary.missing_temperature += 1;
                }
                summary.parsed += 1;
                records.push(record);
            }
            Err(e) => {
                log::debug!("[THM] parser: skipping row: {:#}", e);
                summary.skipped += 1;
            }
        }
    }
    Ok((records, summary))
}

/// Fit a flexible row to the header width: missing trailing fields become
/// blank, extra ones are dropped.
fn padded(mut fields: csv::StringRecord, width: usize) -> csv::StringRecord {
    fields.truncate(width);
    while fields.len() < width {
        fields.push_field("");
    }
    fields
}
