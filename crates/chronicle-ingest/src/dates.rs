//! Timestamp extraction from document text
//!
//! OCR'd documents carry dates in many shapes: month-name forms
//! ("January 5, 2017", "5 Jan 2017"), numeric forms with ambiguous field
//! order, `Date:` prefixed headers, and legalese ("dated this 5th day of
//! January, 2017"). Patterns are tried in a fixed priority order; the first
//! match of the first matching pattern that resolves to a plausible
//! calendar date wins.
//!
//! Numeric field-order ambiguity resolves ISO-first (YYYY-MM-DD), then
//! US-first (MM/DD/YYYY), then EU-first (DD/MM/YYYY).

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Sanity range for extracted years; anything outside is OCR noise, not a
/// document date. The ingest validity window is applied separately.
const YEAR_MIN: i32 = 1900;
const YEAR_MAX: i32 = 2030;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";
const MONTHS_ABBREV: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec";

/// How to interpret a pattern's capture groups
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// (month-name, day, year)
    MonthDayYear,
    /// (day, month-name, year)
    DayMonthYear,
    /// (a, b, year) - try a/b as MM/DD, then DD/MM
    NumericYearLast,
    /// (year, a, b) - try a/b as MM-DD, then DD-MM
    NumericYearFirst,
    /// (iso-date)
    Iso,
}

static PATTERNS: LazyLock<Vec<(Regex, Shape)>> = LazyLock::new(|| {
    let make = |re: String| Regex::new(&re).expect("static regex");
    vec![
        // Full month name forms
        (
            make(format!(r"(?i)\b({MONTHS})\s+(\d{{1,2}}),?\s+(\d{{4}})\b")),
            Shape::MonthDayYear,
        ),
        (
            make(format!(r"(?i)\b(\d{{1,2}})\s+({MONTHS}),?\s+(\d{{4}})\b")),
            Shape::DayMonthYear,
        ),
        // Abbreviated month forms
        (
            make(format!(r"(?i)\b({MONTHS_ABBREV})\.?\s+(\d{{1,2}}),?\s+(\d{{4}})\b")),
            Shape::MonthDayYear,
        ),
        (
            make(format!(r"(?i)\b(\d{{1,2}})\s+({MONTHS_ABBREV})\.?,?\s+(\d{{4}})\b")),
            Shape::DayMonthYear,
        ),
        // Numeric forms
        (
            make(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4})\b".to_string()),
            Shape::NumericYearLast,
        ),
        (
            make(r"\b(\d{4})[/-](\d{1,2})[/-](\d{1,2})\b".to_string()),
            Shape::NumericYearFirst,
        ),
        // Date: prefixed headers
        (
            make(r"Date:\s*(\d{4}-\d{2}-\d{2})".to_string()),
            Shape::Iso,
        ),
        (
            make(format!(r"(?i)Date:\s*({MONTHS})\s+(\d{{1,2}}),?\s+(\d{{4}})")),
            Shape::MonthDayYear,
        ),
        // Legalese: "dated at X this 5th day of January, 2017"
        (
            make(format!(
                r"(?i)dated\s+(?:at\s+)?(?:\w+,?\s+)?(?:\w+\s+)?(?:this\s+)?(\d{{1,2}})(?:st|nd|rd|th)?\s+day\s+of\s+({MONTHS}),?\s+(\d{{4}})"
            )),
            Shape::DayMonthYear,
        ),
    ]
});

/// Extract the first plausible date from free text, or `None`.
pub fn extract_first_date(text: &str) -> Option<NaiveDate> {
    for (re, shape) in PATTERNS.iter() {
        for caps in re.captures_iter(text) {
            let groups: Vec<&str> = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .collect();
            if let Some(date) = resolve(&groups, *shape) {
                return Some(date);
            }
        }
    }
    None
}

/// Parse an explicit ISO-8601 timestamp field (date or datetime prefix).
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn resolve(groups: &[&str], shape: Shape) -> Option<NaiveDate> {
    match shape {
        Shape::MonthDayYear => {
            let &[month, day, year] = groups else { return None };
            build(year.parse().ok()?, month_number(month)?, day.parse().ok()?)
        }
        Shape::DayMonthYear => {
            let &[day, month, year] = groups else { return None };
            build(year.parse().ok()?, month_number(month)?, day.parse().ok()?)
        }
        Shape::NumericYearLast => {
            let &[a, b, year] = groups else { return None };
            let (a, b, year) = (a.parse().ok()?, b.parse().ok()?, year.parse().ok()?);
            // US format first, EU as fallback
            build(year, a, b).or_else(|| build(year, b, a))
        }
        Shape::NumericYearFirst => {
            let &[year, a, b] = groups else { return None };
            let (year, a, b) = (year.parse().ok()?, a.parse().ok()?, b.parse().ok()?);
            // ISO format first, year-day-month as fallback
            build(year, a, b).or_else(|| build(year, b, a))
        }
        Shape::Iso => {
            let &[iso] = groups else { return None };
            let date = parse_iso_date(iso)?;
            in_sanity_range(date).then_some(date)
        }
    }
}

fn build(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn in_sanity_range(date: NaiveDate) -> bool {
    use chrono::Datelike;
    (YEAR_MIN..=YEAR_MAX).contains(&date.year())
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.trim_end_matches('.').to_lowercase();
    let n = match lower.as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(n)
}
