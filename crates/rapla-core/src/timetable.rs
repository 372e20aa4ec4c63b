//! Value objects for a parsed week-grid timetable.
//!
//! Everything here is constructed once by a parser and read afterwards;
//! nothing is mutated after construction. Derived views (`event_titles`,
//! `upcoming`) compute from the stored weeks on each call.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;

/// A parsed timetable: the ordered sequence of weeks found in one
/// week-grid document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Timetable {
    /// Weeks in document order.
    pub weeks: Vec<Week>,
}

/// One calendar week of the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Week {
    /// Calendar week number from the week-number header cell.
    pub number: WeekNumber,

    /// Events of the week, ascending by date. Events sharing a date keep
    /// the order they appeared in the source markup.
    pub events: Vec<Event>,
}

/// A calendar week number.
///
/// Week-number header cells carry labels like `"KW 37"`; the number is
/// whatever digits the label contains.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct WeekNumber(u32);

impl WeekNumber {
    /// Wrap an already-known week number.
    #[inline]
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Extract the week number from a header label by stripping every
    /// non-digit character. A label with no digits yields 0 so that week
    /// parsing stays total.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        Self(digits.parse().unwrap_or(0))
    }

    /// The numeric value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scheduled event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Event title. Never empty; cells without a usable title produce no
    /// event at all.
    pub title: String,

    /// Calendar date the event takes place on, day precision.
    pub date: NaiveDate,

    /// Start time in `HH:MM` form, if one could be read from the cell.
    pub start: Option<String>,

    /// End time in `HH:MM` form, if one could be read from the cell.
    pub end: Option<String>,

    /// Localized full day name, e.g. `"Montag"`.
    pub day_of_week: String,

    /// Course label: the first resource annotation of the cell, if any.
    pub course: Option<String>,

    /// Room label: the second resource annotation of the cell, if any.
    pub room: Option<String>,
}

impl Timetable {
    /// Create a timetable from already-parsed weeks.
    #[inline]
    #[must_use]
    pub fn new(weeks: Vec<Week>) -> Self {
        Self { weeks }
    }

    /// All events across all weeks, in week order then in-week order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.weeks.iter().flat_map(|week| week.events.iter())
    }

    /// The distinct event titles across all weeks.
    ///
    /// Duplicates within a week or across weeks collapse to one entry.
    /// The set is unordered.
    #[must_use]
    pub fn event_titles(&self) -> HashSet<&str> {
        self.events().map(|event| event.title.as_str()).collect()
    }

    /// All events dated on or after `on`, across weeks, ascending by
    /// date. Events sharing a date keep week order.
    #[must_use]
    pub fn upcoming(&self, on: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events().filter(|event| event.date >= on).collect();
        events.sort_by_key(|event| event.date);
        events
    }
}

impl Week {
    /// Create a week from its number and its date-sorted events.
    #[inline]
    #[must_use]
    pub fn new(number: WeekNumber, events: Vec<Event>) -> Self {
        Self { number, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, date: NaiveDate) -> Event {
        Event {
            title: title.to_string(),
            date,
            start: Some("09:00".to_string()),
            end: Some("10:30".to_string()),
            day_of_week: "Montag".to_string(),
            course: None,
            room: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_number_from_label() {
        assert_eq!(WeekNumber::from_label("KW 37").get(), 37);
        assert_eq!(WeekNumber::from_label("37").get(), 37);
        assert_eq!(WeekNumber::from_label(" Woche 5 ").get(), 5);
    }

    #[test]
    fn test_week_number_without_digits_is_zero() {
        assert_eq!(WeekNumber::from_label("").get(), 0);
        assert_eq!(WeekNumber::from_label("no digits here").get(), 0);
    }

    #[test]
    fn test_week_number_display() {
        assert_eq!(WeekNumber::new(42).to_string(), "42");
    }

    #[test]
    fn test_event_titles_deduplicates_across_weeks() {
        let timetable = Timetable::new(vec![
            Week::new(
                WeekNumber::new(37),
                vec![
                    event("Algorithms", date(2025, 9, 8)),
                    event("Databases", date(2025, 9, 9)),
                ],
            ),
            Week::new(
                WeekNumber::new(38),
                vec![
                    event("Algorithms", date(2025, 9, 15)),
                    event("Networks", date(2025, 9, 16)),
                ],
            ),
        ]);

        let titles = timetable.event_titles();
        assert_eq!(titles.len(), 3);
        assert!(titles.contains("Algorithms"));
        assert!(titles.contains("Databases"));
        assert!(titles.contains("Networks"));
    }

    #[test]
    fn test_upcoming_filters_and_sorts() {
        let timetable = Timetable::new(vec![
            Week::new(
                WeekNumber::new(37),
                vec![
                    event("Past", date(2025, 9, 8)),
                    event("Today", date(2025, 9, 10)),
                ],
            ),
            Week::new(
                WeekNumber::new(38),
                vec![event("Later", date(2025, 9, 15))],
            ),
        ]);

        let upcoming = timetable.upcoming(date(2025, 9, 10));
        let titles: Vec<&str> = upcoming.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Today", "Later"]);
        assert!(upcoming.iter().all(|e| e.date >= date(2025, 9, 10)));
    }

    #[test]
    fn test_upcoming_on_empty_timetable() {
        let timetable = Timetable::default();
        assert!(timetable.upcoming(date(2025, 1, 1)).is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let timetable = Timetable::new(vec![Week::new(
            WeekNumber::new(40),
            vec![Event {
                title: "Seminar".to_string(),
                date: date(2025, 10, 2),
                start: None,
                end: None,
                day_of_week: "Donnerstag".to_string(),
                course: Some("CS101".to_string()),
                room: None,
            }],
        )]);

        let json = serde_json::to_string(&timetable).unwrap();
        let back: Timetable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, timetable);
    }
}
