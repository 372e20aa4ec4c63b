//! Week table parsing.

use rapla_core::{Week, WeekNumber};

use crate::dom::{self, DomNode};
use crate::event;
use crate::header::{self, DateHeader};

/// Class marker on each week table element.
pub(crate) const CLASS_WEEK_TABLE: &str = "week_table";

/// Class marker on the week-number header cell.
const CLASS_WEEK_NUMBER: &str = "week_number";

/// Class marker on the day heading cells.
const CLASS_WEEK_HEADER: &str = "week_header";

/// Class marker on the event block cells.
const CLASS_WEEK_BLOCK: &str = "week_block";

/// Parse one week table into a [`Week`].
///
/// Total: a table with no usable headers or block cells still yields a
/// well-formed week with an empty event list. Headers that fail to parse
/// are dropped in place — no placeholders — so block-cell lookups stay
/// aligned to the surviving headers' positions.
pub(crate) fn parse_week<N: DomNode>(table: &N, year: i32) -> Week {
    let number = dom::select_class(table, CLASS_WEEK_NUMBER)
        .first()
        .map(|cell| WeekNumber::from_label(cell.text().trim()))
        .unwrap_or_default();

    let headers: Vec<DateHeader> = dom::select_class(table, CLASS_WEEK_HEADER)
        .iter()
        .filter_map(|cell| {
            let raw = cell.text();
            let parsed = header::parse_header(raw.trim(), year);
            if parsed.is_none() {
                log::debug!("dropping unparsable date header {:?}", raw.trim());
            }
            parsed
        })
        .collect();

    let mut events: Vec<_> = dom::select_class(table, CLASS_WEEK_BLOCK)
        .iter()
        .filter_map(|cell| event::extract_event(cell, &headers))
        .collect();
    // stable: events on the same date keep source order
    events.sort_by_key(|event| event.date);

    Week::new(number, events)
}
