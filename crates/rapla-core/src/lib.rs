//! # rapla-core
//!
//! Data model for Rapla week-grid timetables.
//!
//! Rapla resource-scheduling servers export calendars as HTML documents in
//! which each week is one table and each scheduled event is one table cell.
//! This crate holds the typed values such a document parses into; the
//! parsing itself lives in `rapla-backend`.
//!
//! ## Data Model
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Timetable`] | Ordered sequence of weeks, one per week table |
//! | [`Week`] | Week number plus events sorted ascending by date |
//! | [`WeekNumber`] | Calendar week number extracted from a header label |
//! | [`Event`] | Title, date, times, day name, optional course and room |
//!
//! All values are immutable once constructed. Optional fields use
//! `Option` uniformly — a missing room is `None`, never an empty string.
//!
//! ## Derived Views
//!
//! ```
//! use chrono::NaiveDate;
//! use rapla_core::Timetable;
//!
//! let timetable = Timetable::default();
//!
//! // Distinct event titles across all weeks, deduplicated.
//! let titles = timetable.event_titles();
//! assert!(titles.is_empty());
//!
//! // Events on or after a date, ascending by date.
//! let from = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
//! assert!(timetable.upcoming(from).is_empty());
//! ```
//!
//! ## Error Handling
//!
//! [`RaplaError`] covers the failure modes of the whole toolchain: an
//! unparseable (empty) document, I/O when reading input, and JSON
//! serialization of results. Everything that can be absent for an
//! individual cell or header is modeled as `Option`, not as an error.

pub mod error;
pub mod timetable;

pub use error::{RaplaError, Result};
pub use timetable::{Event, Timetable, Week, WeekNumber};
