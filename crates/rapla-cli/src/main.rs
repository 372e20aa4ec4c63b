//! Rapla CLI - convert week-grid HTML exports to structured timetables.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rapla_core::{Event, Timetable};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "rapla",
    version,
    about = "Convert Rapla week-grid HTML exports to structured timetables"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an export and print the whole timetable
    Convert {
        /// Input HTML file, or `-` for stdin
        input: PathBuf,

        /// Output format
        #[arg(long = "to", value_enum, default_value_t = OutputFormat::Summary)]
        to: OutputFormat,

        /// Year to date the headers into (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// List events on or after a date, ascending across weeks
    Agenda {
        /// Input HTML file, or `-` for stdin
        input: PathBuf,

        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Year to date the headers into (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Print the distinct event titles, one per line
    Titles {
        /// Input HTML file, or `-` for stdin
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable per-week summary
    Summary,
    /// JSON form of the timetable
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Convert { input, to, year } => {
            let timetable = load(&input, year)?;
            match to {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&timetable)?),
                OutputFormat::Summary => print_summary(&timetable),
            }
        }
        Command::Agenda { input, from, year } => {
            let timetable = load(&input, year)?;
            let from = from.unwrap_or_else(|| Local::now().date_naive());
            for event in timetable.upcoming(from) {
                print_event(event);
            }
        }
        Command::Titles { input } => {
            let timetable = load(&input, None)?;
            let mut titles: Vec<&str> = timetable.event_titles().into_iter().collect();
            titles.sort_unstable();
            for title in titles {
                println!("{title}");
            }
        }
    }

    Ok(())
}

/// Read and parse the input document.
fn load(input: &Path, year: Option<i32>) -> Result<Timetable> {
    let html = read_input(input)?;
    let timetable = match year {
        Some(year) => rapla_backend::parse_timetable_with_year(&html, year),
        None => rapla_backend::parse_timetable(&html),
    };
    timetable.with_context(|| format!("failed to parse {}", input.display()))
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
    }
}

fn print_summary(timetable: &Timetable) {
    if timetable.weeks.is_empty() {
        println!("no week tables found");
        return;
    }

    for week in &timetable.weeks {
        println!(
            "{} ({} events)",
            format!("KW {}", week.number).bold(),
            week.events.len()
        );
        for event in &week.events {
            print_event(event);
        }
    }
}

fn print_event(event: &Event) {
    let time = match (event.start.as_deref(), event.end.as_deref()) {
        (Some(start), Some(end)) => format!("{start} - {end}"),
        (Some(start), None) => start.to_string(),
        _ => "--:--".to_string(),
    };

    let mut line = format!(
        "  {} {:<10} {:<13} {}",
        event.date,
        event.day_of_week,
        time.cyan(),
        event.title.bold()
    );
    if let Some(course) = &event.course {
        line.push_str(&format!("  [{course}]"));
    }
    if let Some(room) = &event.room {
        line.push_str(&format!(" @ {}", room.green()));
    }
    println!("{line}");
}
