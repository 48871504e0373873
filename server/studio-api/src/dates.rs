//! Day-granularity dates for the calendar, analytics and revenue filters.

use chrono::{DateTime, NaiveDate, Utc};

/// `YYYY-MM-DD`, or the UTC day of an RFC 3339 timestamp.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
  let s = s.trim();
  if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
    return Some(day);
  }
  let dt = DateTime::parse_from_rfc3339(s).ok()?.with_timezone(&Utc);
  Some(dt.date_naive())
}

/// Inclusive day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
  pub start: NaiveDate,
  pub end: NaiveDate,
}

impl DateRange {
  /// No filter unless both bounds are given; a bound that does not parse is an error.
  pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> Result<Option<Self>, String> {
    fn blank(v: Option<&str>) -> Option<&str> {
      v.map(str::trim).filter(|v| !v.is_empty())
    }
    let (Some(start), Some(end)) = (blank(start), blank(end)) else {
      return Ok(None);
    };
    let parse = |v: &str| parse_day(v).ok_or_else(|| format!("Invalid date: {}", v));
    Ok(Some(Self {
      start: parse(start)?,
      end: parse(end)?,
    }))
  }

  /// Records whose date does not parse are never inside a range.
  pub fn contains(&self, date: &str) -> bool {
    parse_day(date).is_some_and(|d| d >= self.start && d <= self.end)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_plain_days_and_timestamps() {
    let day = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
    assert_eq!(parse_day("2025-03-09"), Some(day));
    assert_eq!(parse_day("2025-03-09T23:30:00-02:00"), NaiveDate::from_ymd_opt(2025, 3, 10));
    assert_eq!(parse_day("next tuesday"), None);
  }

  #[test]
  fn range_needs_both_bounds() {
    assert_eq!(DateRange::from_bounds(Some("2025-01-01"), None), Ok(None));
    assert_eq!(DateRange::from_bounds(Some(""), Some("2025-01-01")), Ok(None));
    assert!(DateRange::from_bounds(Some("2025-01-01"), Some("soon")).is_err());
  }

  #[test]
  fn range_is_inclusive() {
    let range = DateRange::from_bounds(Some("2025-01-01"), Some("2025-01-31"))
      .unwrap()
      .unwrap();
    assert!(range.contains("2025-01-01"));
    assert!(range.contains("2025-01-31"));
    assert!(!range.contains("2025-02-01"));
    assert!(!range.contains("garbage"));
  }
}
