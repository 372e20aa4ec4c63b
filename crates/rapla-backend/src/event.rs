//! Event extraction from block cells.

use rapla_core::Event;

use crate::dom::{self, DomNode};
use crate::grid;
use crate::header::DateHeader;

/// Sub-columns per day column group.
///
/// Layout contract of the export: every date header spans this many
/// logical columns, so a block cell's owning day is its column index
/// divided by this width. Shared between the header row and the block
/// rows of each week table.
pub(crate) const COLUMNS_PER_DAY: usize = 3;

/// Class marker on the course/room annotation spans inside a block cell.
const CLASS_RESOURCE: &str = "resource";

/// Extract the event displayed in one block cell, if any.
///
/// Returns `None` for the structurally absent cases the markup
/// legitimately contains: spacer cells without a link, link content
/// without the time/title line break, and cells whose column position
/// matches no surviving date header.
pub(crate) fn extract_event<N: DomNode>(cell: &N, headers: &[DateHeader]) -> Option<Event> {
    let link = dom::first_tag(cell, "a")?;

    let segments = link.lines();
    if segments.len() < 2 {
        log::debug!("skipping block cell: link content has no time/title separator");
        return None;
    }
    let (start, end) = parse_time_range(&segments[0]);
    let title = segments[1].trim();
    if title.is_empty() {
        log::debug!("skipping block cell: empty title");
        return None;
    }

    let resources: Vec<String> = dom::select_class(cell, CLASS_RESOURCE)
        .iter()
        .map(|span| span.text().trim().to_string())
        .collect();

    let column = grid::column_index(cell);
    let Some(header) = headers.get(column / COLUMNS_PER_DAY) else {
        log::debug!("skipping block cell at column {column}: no matching date header");
        return None;
    };

    Some(Event {
        title: title.to_string(),
        date: header.date,
        start,
        end,
        day_of_week: header.day_name.clone(),
        course: resources.first().filter(|s| !s.is_empty()).cloned(),
        room: resources.get(1).filter(|s| !s.is_empty()).cloned(),
    })
}

/// Split a `"09:00 - 10:30"` segment into start and end times.
///
/// Non-breaking spaces are normalized away first (the export writes
/// `&#160;` around the hyphen); each side is then reduced to its digits
/// and colons. A side that ends up empty is an absent time, not an
/// error.
fn parse_time_range(raw: &str) -> (Option<String>, Option<String>) {
    let normalized = raw.replace("&#160;", " ").replace('\u{a0}', " ");
    let mut parts = normalized.split('-');
    let start = parts.next().and_then(sanitize_time);
    let end = parts.next().and_then(sanitize_time);
    (start, end)
}

fn sanitize_time(part: &str) -> Option<String> {
    let time: String = part
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':')
        .collect();
    (!time.is_empty()).then_some(time)
}
