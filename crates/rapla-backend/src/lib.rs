//! # rapla-backend
//!
//! HTML week-grid parser for Rapla timetable exports.
//!
//! A Rapla server exports a calendar as an HTML document containing one
//! `<table class="week_table">` per week. The layout is positional: each
//! day heading spans a fixed group of columns, and an event cell's day is
//! recovered from the colspan widths of the cells before it in its row.
//! This crate turns that layout back into the typed model of
//! [`rapla_core`].
//!
//! ## Markup Contract
//!
//! | Class marker | Element | Meaning |
//! |--------------|---------|---------|
//! | `week_table` | table | One calendar week |
//! | `week_number` | header cell | Week-number label, e.g. `"KW 37"` |
//! | `week_header` | cell | Day heading, e.g. `"Mo 08.09."` |
//! | `week_block` | cell | One scheduled event |
//! | `resource` | span | Course or room annotation in a block cell |
//!
//! ## Quick Start
//!
//! ```
//! use rapla_backend::parse_timetable_with_year;
//!
//! let html = r#"
//!   <table class="week_table">
//!     <tr>
//!       <th class="week_number">KW 37</th>
//!       <td class="week_header" colspan="3">Mo 08.09.</td>
//!     </tr>
//!     <tr>
//!       <td class="week_block"><a>09:00&#160;-&#160;10:30<br>Algorithms</a></td>
//!     </tr>
//!   </table>"#;
//!
//! let timetable = parse_timetable_with_year(html, 2025)?;
//! assert_eq!(timetable.weeks.len(), 1);
//! assert_eq!(timetable.weeks[0].events[0].title, "Algorithms");
//! # Ok::<(), rapla_core::RaplaError>(())
//! ```
//!
//! ## Leniency
//!
//! The document tree is built by html5ever with the usual best-effort
//! repair, so unclosed tags or missing quotes never abort a parse. Empty
//! spacer cells, malformed block cells, and unparsable day headings are
//! dropped individually; only an input with no markup at all is an error.
//!
//! ## Year Inference
//!
//! Day headings carry no year. [`parse_timetable`] uses the current local
//! year; [`parse_timetable_with_year`] takes it explicitly. A timetable
//! spanning a year boundary gets the inference year on both sides — known
//! limitation of the export format, deliberately left visible.
//!
//! The parser is a pure transformation of its input: no I/O, no shared
//! state, safe to call concurrently.

mod dom;
mod event;
mod grid;
mod header;
mod week;

use chrono::{Datelike, Local};
use scraper::Html;

use rapla_core::{RaplaError, Result, Timetable};

use crate::dom::HtmlNode;

/// Parse a week-grid document, inferring dates into the current year.
///
/// # Errors
///
/// Returns [`RaplaError::EmptyDocument`] when `html` contains no markup
/// (empty or whitespace-only input). Zero week tables is not an error;
/// it parses to an empty timetable.
pub fn parse_timetable(html: &str) -> Result<Timetable> {
    parse_timetable_with_year(html, Local::now().year())
}

/// Parse a week-grid document, inferring dates into the given year.
///
/// Deterministic variant of [`parse_timetable`] for tests and for
/// callers handling documents from another year.
///
/// # Errors
///
/// Returns [`RaplaError::EmptyDocument`] when `html` contains no markup.
pub fn parse_timetable_with_year(html: &str, year: i32) -> Result<Timetable> {
    if html.trim().is_empty() {
        return Err(RaplaError::EmptyDocument);
    }

    let document = Html::parse_document(html);
    let root = HtmlNode(document.root_element());

    let weeks = dom::select_class(&root, week::CLASS_WEEK_TABLE)
        .iter()
        .map(|table| week::parse_week(table, year))
        .collect();

    Ok(Timetable::new(weeks))
}
