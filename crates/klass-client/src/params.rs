//! Validation and formatting of query parameters.
//!
//! Each function checks one recognized parameter and returns the exact
//! string sent on the wire. The API is strict about casing and formats
//! (`includeFuture=true`, dates as `2024-01-01`, timestamps with
//! milliseconds and offset), so everything funnels through here.

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, Utc};

use crate::error::{ClientError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const KLASS_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

fn invalid(name: &str, reason: impl Into<String>) -> ClientError {
    ClientError::InvalidParameter {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Validates a `from`/`to`/`date` parameter as a strict ISO date.
pub fn date(name: &str, value: &str) -> Result<String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| invalid(name, format!("'{value}' is not a YYYY-MM-DD date")))?;
    Ok(value.to_string())
}

/// Today's date in the API's date format, used when a from-date is
/// defaulted.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Booleans go on the wire as lowercase `true`/`false`.
pub fn bool_value(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Validates a `selectCodes` expression: digits, wildcards, ranges and
/// commas. Spaces are stripped before sending.
pub fn select_codes(value: &str) -> Result<String> {
    let stripped: String = value.chars().filter(|c| *c != ' ').collect();
    if stripped.is_empty()
        || !stripped
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '*' | '-' | ','))
    {
        return Err(invalid(
            "selectCodes",
            format!("'{value}' may only contain digits, '*', '-' and ','"),
        ));
    }
    Ok(stripped)
}

/// Validates a numeric parameter such as `selectLevel` or
/// `targetClassificationId`.
pub fn whole_number(name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(name, format!("'{value}' is not a whole number")));
    }
    Ok(trimmed.to_string())
}

/// Validates a `presentationNamePattern` such as `{code} - {name}`.
pub fn presentation_name_pattern(value: &str) -> Result<String> {
    let meaningful: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '{' | '}' | '/' | '(' | ')' | '-'))
        .collect();
    if meaningful.is_empty() || !meaningful.chars().all(char::is_alphabetic) {
        return Err(invalid(
            "presentationNamePattern",
            format!("'{value}' is not a valid pattern"),
        ));
    }
    Ok(value.to_string())
}

/// Validates free-text parameters (`query`, `variantName`): anything
/// alphanumeric once spaces, parentheses and hyphens are set aside.
pub fn query_text(name: &str, value: &str) -> Result<String> {
    let meaningful: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')' | '-'))
        .collect();
    if !meaningful.chars().all(char::is_alphanumeric) {
        return Err(invalid(
            name,
            format!("'{value}' contains characters the API rejects"),
        ));
    }
    Ok(value.to_string())
}

/// Validates a `changedSince` timestamp in the API's own form,
/// `2024-01-01T00:00:00.000+0100`.
pub fn changed_since(value: &str) -> Result<String> {
    DateTime::parse_from_str(value, KLASS_DATETIME_FORMAT).map_err(|_| {
        invalid(
            "changedSince",
            format!("'{value}' is not a KLASS timestamp (YYYY-MM-DDThh:mm:ss.fff+offset)"),
        )
    })?;
    Ok(value.to_string())
}

/// Formats a timestamp the way KLASS expects it, at the API's home
/// offset of UTC+1.
pub fn format_klass_datetime(at: DateTime<Utc>) -> String {
    match chrono::FixedOffset::east_opt(3600) {
        Some(offset) => at
            .with_timezone(&offset)
            .format(KLASS_DATETIME_FORMAT)
            .to_string(),
        None => at.format(KLASS_DATETIME_FORMAT).to_string(),
    }
}

/// The last day of the `quarters`-th quarter of `start`'s year, so a
/// correspondence request ends on a quarter boundary. The quarter is
/// anchored to the year, not counted from `start`: `quarters = 3`
/// always means September 30th of `start`'s year.
pub fn quarter_end(start: NaiveDate, quarters: u32) -> Result<NaiveDate> {
    if !(1..=4).contains(&quarters) {
        return Err(invalid(
            "containQuarter",
            format!("{quarters} is not a quarter between 1 and 4"),
        ));
    }
    let month_start = NaiveDate::from_ymd_opt(start.year(), quarters * 3, 1)
        .ok_or_else(|| {
            invalid("containQuarter", "date arithmetic overflowed".to_string())
        })?;
    month_start
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .ok_or_else(|| invalid("containQuarter", "date arithmetic overflowed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_must_be_iso() {
        assert!(date("from", "2024-01-31").is_ok());
        assert!(date("from", "31.01.2024").is_err());
        assert!(date("from", "2024-1-31").is_err());
    }

    #[test]
    fn select_codes_accepts_ranges_and_wildcards() {
        assert_eq!(select_codes("0301, 01-04, 35*").unwrap(), "0301,01-04,35*");
        assert!(select_codes("03;01").is_err());
        assert!(select_codes("").is_err());
    }

    #[test]
    fn whole_numbers_only() {
        assert_eq!(whole_number("selectLevel", "2").unwrap(), "2");
        assert!(whole_number("selectLevel", "two").is_err());
    }

    #[test]
    fn presentation_patterns() {
        assert!(presentation_name_pattern("{code} - {name}").is_ok());
        assert!(presentation_name_pattern("{code}: {name}").is_err());
    }

    #[test]
    fn query_text_is_lenient_about_punctuation_the_api_takes() {
        assert!(query_text("query", "Standard for kommuneinndeling").is_ok());
        assert!(query_text("query", "NUS (utdanningsgruppering)").is_ok());
        assert!(query_text("query", "kommune;drop").is_err());
    }

    #[test]
    fn klass_timestamps_round_trip() {
        let formatted = changed_since("2024-01-01T00:00:00.000+0100").unwrap();
        assert_eq!(formatted, "2024-01-01T00:00:00.000+0100");
        assert!(changed_since("2024-01-01").is_err());
    }

    #[test]
    fn datetime_formatting_uses_utc_plus_one() {
        let at = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_klass_datetime(at), "2024-06-01T13:00:00.000+0100");
        // What we format must be what the changedSince validator takes,
        // since classifications_changed_since chains the two.
        assert!(changed_since(&format_klass_datetime(at)).is_ok());
    }

    #[test]
    fn quarter_ends_are_anchored_to_the_start_year() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        assert_eq!(
            quarter_end(start, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
        assert_eq!(
            quarter_end(start, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        // The quarter index means "of the year", regardless of where
        // in the year the start date falls.
        let spring = NaiveDate::from_ymd_opt(2020, 4, 15).unwrap();
        assert_eq!(
            quarter_end(spring, 3).unwrap(),
            NaiveDate::from_ymd_opt(2020, 9, 30).unwrap()
        );
        let autumn = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        assert_eq!(
            quarter_end(autumn, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
        assert!(quarter_end(start, 5).is_err());
    }
}
