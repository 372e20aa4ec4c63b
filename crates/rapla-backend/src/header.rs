//! Date header cells.
//!
//! Each day column group is headed by a cell like `"Mo 01.09."`. The
//! export never states the year; it is supplied by the caller (the
//! current year in the default entry point).

use chrono::NaiveDate;

/// German day-name table, abbreviation to full name.
const DAY_NAMES: [(&str, &str); 7] = [
    ("Mo", "Montag"),
    ("Di", "Dienstag"),
    ("Mi", "Mittwoch"),
    ("Do", "Donnerstag"),
    ("Fr", "Freitag"),
    ("Sa", "Samstag"),
    ("So", "Sonntag"),
];

/// A resolved day column heading: the calendar date and the localized
/// day name. Intermediate value; not part of the parsed result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateHeader {
    pub date: NaiveDate,
    pub day_name: String,
}

/// Parse one header cell's text.
///
/// The text is expected to split into an abbreviation token and a
/// `"<day>.<month>."` fragment. Returns `None` when the fragment does
/// not name a valid date in `year`; the caller drops the header and
/// keeps going. An abbreviation outside the Mo–So table passes through
/// verbatim as the day name.
pub(crate) fn parse_header(raw: &str, year: i32) -> Option<DateHeader> {
    let mut tokens = raw.split_whitespace();
    let abbrev = tokens.next().unwrap_or("");
    let fragment = tokens.next().unwrap_or("");

    let date = parse_day_month(fragment, year)?;
    let day_name = DAY_NAMES
        .iter()
        .find(|(short, _)| *short == abbrev)
        .map_or_else(|| abbrev.to_string(), |(_, full)| (*full).to_string());

    Some(DateHeader { date, day_name })
}

/// Two-field `"<day>.<month>."` date fragment.
fn parse_day_month(fragment: &str, year: i32) -> Option<NaiveDate> {
    let mut fields = fragment.split('.');
    let day: u32 = fields.next()?.trim().parse().ok()?;
    let month: u32 = fields.next()?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
