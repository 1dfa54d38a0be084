//! Dates printed on letters.
//!
//! Relieving letters are dated a notice period after resignation; offer
//! letters a number of working days before joining.

use std::fmt::Write;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::DocumentsConfig;
use crate::error::{EngineError, EngineResult};

/// Date format used by the form's date inputs.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` form value, returning `None` for blank input.
pub fn parse_form_date(field: &str, value: Option<&str>) -> EngineResult<Option<NaiveDate>> {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT)
        .map(Some)
        .map_err(|_| EngineError::InvalidDate {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Returns the date the employee is relieved after resigning.
pub fn relieving_date(resignation: NaiveDate, notice_days: u32) -> NaiveDate {
    resignation + Duration::days(i64::from(notice_days))
}

fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Steps back `working_days` Monday-to-Friday days from `date`.
///
/// `date` itself is never counted.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hr_document_engine::calculation::previous_working_day;
///
/// // Monday 2024-03-11, one working day back is Friday 2024-03-08.
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
/// assert_eq!(previous_working_day(monday, 1), NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
/// ```
pub fn previous_working_day(date: NaiveDate, working_days: u32) -> NaiveDate {
    let mut current = date;
    let mut counted = 0;
    while counted < working_days {
        current -= Duration::days(1);
        if is_working_day(current) {
            counted += 1;
        }
    }
    current
}

/// Dates prepared for a letter, already formatted for printing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentDates {
    /// Formatted joining date.
    pub joining_date: Option<String>,
    /// Formatted offer letter date, working days before joining.
    pub offer_date: Option<String>,
    /// Formatted resignation date.
    pub resignation_date: Option<String>,
    /// Formatted relieving date, notice days after resignation.
    pub relieving_date: Option<String>,
}

impl DocumentDates {
    /// Prepares letter dates from raw `YYYY-MM-DD` form values.
    ///
    /// Blank values leave the corresponding dates unset; malformed values
    /// are an `InvalidDate` error.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_document_engine::calculation::DocumentDates;
    /// use hr_document_engine::config::DocumentsConfig;
    ///
    /// let dates = DocumentDates::prepare(None, Some("2024-03-01"), &DocumentsConfig::default()).unwrap();
    /// assert_eq!(dates.relieving_date.as_deref(), Some("31 March 2024"));
    /// ```
    pub fn prepare(
        joining: Option<&str>,
        resignation: Option<&str>,
        config: &DocumentsConfig,
    ) -> EngineResult<Self> {
        let joining = parse_form_date("joining_date", joining)?;
        let resignation = parse_form_date("resignation_date", resignation)?;
        let format = |d: NaiveDate| format_date(d, &config.date_format);

        Ok(Self {
            joining_date: joining.map(format).transpose()?,
            offer_date: joining
                .map(|d| previous_working_day(d, config.offer_lead_working_days))
                .map(format)
                .transpose()?,
            resignation_date: resignation.map(format).transpose()?,
            relieving_date: resignation
                .map(|d| relieving_date(d, config.notice_days))
                .map(format)
                .transpose()?,
        })
    }
}

/// Formats a date for printing, rejecting format strings chrono cannot render.
fn format_date(date: NaiveDate, format: &str) -> EngineResult<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).map_err(|_| EngineError::ConfigParseError {
        path: "documents.date_format".to_string(),
        message: format!("invalid date_format '{}'", format),
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relieving_date_is_thirty_days_later() {
        assert_eq!(relieving_date(date(2024, 3, 1), 30), date(2024, 3, 31));
        assert_eq!(relieving_date(date(2024, 12, 15), 30), date(2025, 1, 14));
    }

    #[test]
    fn test_previous_working_day_skips_weekend() {
        // 2024-03-18 is a Monday; eight working days back is Wednesday 2024-03-06.
        assert_eq!(previous_working_day(date(2024, 3, 18), 8), date(2024, 3, 6));
    }

    #[test]
    fn test_previous_working_day_from_sunday() {
        // 2024-03-17 is a Sunday.
        assert_eq!(previous_working_day(date(2024, 3, 17), 1), date(2024, 3, 15));
    }

    #[test]
    fn test_zero_working_days_returns_same_date() {
        assert_eq!(previous_working_day(date(2024, 3, 16), 0), date(2024, 3, 16));
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert_eq!(parse_form_date("joining_date", None).unwrap(), None);
        assert_eq!(parse_form_date("joining_date", Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_parse_malformed_is_invalid_date() {
        assert_eq!(
            parse_form_date("resignation_date", Some("01/03/2024")),
            Err(EngineError::InvalidDate {
                field: "resignation_date".to_string(),
                value: "01/03/2024".to_string(),
            })
        );
    }

    #[test]
    fn test_prepare_formats_all_dates() {
        let dates = DocumentDates::prepare(
            Some("2024-03-18"),
            Some("2025-01-10"),
            &DocumentsConfig::default(),
        )
        .unwrap();

        assert_eq!(dates.joining_date.as_deref(), Some("18 March 2024"));
        assert_eq!(dates.offer_date.as_deref(), Some("06 March 2024"));
        assert_eq!(dates.resignation_date.as_deref(), Some("10 January 2025"));
        assert_eq!(dates.relieving_date.as_deref(), Some("09 February 2025"));
    }

    #[test]
    fn test_prepare_without_dates_is_empty() {
        let dates = DocumentDates::prepare(None, None, &DocumentsConfig::default()).unwrap();
        assert_eq!(dates, DocumentDates::default());
    }

    #[test]
    fn test_invalid_date_format_is_an_error() {
        let config = DocumentsConfig {
            date_format: "%Q".to_string(),
            ..DocumentsConfig::default()
        };

        assert!(matches!(
            DocumentDates::prepare(None, Some("2024-03-01"), &config),
            Err(EngineError::ConfigParseError { .. })
        ));
    }
}
