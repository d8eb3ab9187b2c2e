//! The interactive prompt-loop state machine.
//!
//! States advance `CollectCity → CollectMonth → CollectDay → Load → Filter →
//! Report → AskRestart`, looping back to `CollectCity` only when the restart
//! answer is an explicit "yes". All reads and writes go through abstract
//! `BufRead` / `Write` handles so tests can drive a whole session with
//! scripted input.

use std::io::{BufRead, Write};

use bikeshare_core::cities::CityCatalog;
use bikeshare_core::error::Result;
use bikeshare_core::formatting::separator_line;
use bikeshare_core::models::{FilterCriteria, Month, TripTable, Weekday};
use bikeshare_data::analysis::analyze_table;
use bikeshare_data::filter::apply_filters;
use bikeshare_data::reader::load_trip_table;
use tracing::{error, info};

use crate::report::render_report;

const MONTH_PROMPT: &str = "\nEnter the full name of a month (example january) or all:";
const DAY_PROMPT: &str = "\nEnter the full name of a day (example monday) or all:";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

// ── State machine ─────────────────────────────────────────────────────────────

/// The controller's states, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    CollectCity,
    CollectMonth,
    CollectDay,
    Load,
    Filter,
    Report,
    AskRestart,
    Done,
}

/// Interactive controller over an injected city catalog.
pub struct Controller<'a> {
    catalog: &'a CityCatalog,
}

impl<'a> Controller<'a> {
    pub fn new(catalog: &'a CityCatalog) -> Self {
        Self { catalog }
    }

    /// Run the interactive session until the user declines to restart or the
    /// input stream ends.
    ///
    /// Invalid prompt answers never terminate a collect state; only
    /// end-of-input does, and that exits cleanly from any state. A load
    /// failure is reported and control returns to the city prompt without
    /// corrupting the outer loop.
    pub fn run(&self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        writeln!(output, "Hello! Let's explore some US bikeshare data!")?;

        let mut state = ControllerState::CollectCity;
        let mut city = String::new();
        let mut month: Option<Month> = None;
        let mut day: Option<Weekday> = None;
        let mut loaded: Option<TripTable> = None;
        let mut filtered: Option<TripTable> = None;

        loop {
            state = match state {
                ControllerState::CollectCity => {
                    let prompt = format!("\nEnter a city: {}", self.catalog.names().join(", "));
                    match prompt_until_valid(input, output, &prompt, |s| {
                        self.catalog.resolve(s).map(|e| e.name.clone())
                    })? {
                        Some(value) => {
                            city = value;
                            ControllerState::CollectMonth
                        }
                        None => ControllerState::Done,
                    }
                }

                ControllerState::CollectMonth => {
                    match prompt_until_valid(input, output, MONTH_PROMPT, parse_month_selection)? {
                        Some(selection) => {
                            month = selection;
                            ControllerState::CollectDay
                        }
                        None => ControllerState::Done,
                    }
                }

                ControllerState::CollectDay => {
                    match prompt_until_valid(input, output, DAY_PROMPT, parse_day_selection)? {
                        Some(selection) => {
                            day = selection;
                            writeln!(output, "{}", separator_line())?;
                            ControllerState::Load
                        }
                        None => ControllerState::Done,
                    }
                }

                ControllerState::Load => match load_trip_table(self.catalog, &city) {
                    Ok(table) => {
                        loaded = Some(table);
                        ControllerState::Filter
                    }
                    Err(err) => {
                        error!(city = city.as_str(), error = %err, "dataset load failed");
                        writeln!(output, "\nCould not load data for {}: {}", city, err)?;
                        writeln!(output, "{}", separator_line())?;
                        ControllerState::CollectCity
                    }
                },

                ControllerState::Filter => {
                    // Load always precedes Filter, so the table is present.
                    if let Some(table) = &loaded {
                        let criteria = FilterCriteria {
                            city: city.clone(),
                            month,
                            day,
                        };
                        info!(
                            city = criteria.city.as_str(),
                            month = criteria.month_label(),
                            day = criteria.day_label(),
                            "applying filters"
                        );
                        filtered = Some(apply_filters(table, &criteria));
                    }
                    ControllerState::Report
                }

                ControllerState::Report => {
                    if let Some(table) = &filtered {
                        let analysis = analyze_table(table);
                        render_report(&analysis, output)?;
                    }
                    ControllerState::AskRestart
                }

                ControllerState::AskRestart => match read_answer(input, output, RESTART_PROMPT)? {
                    Some(answer) if restart_requested(&answer) => ControllerState::CollectCity,
                    _ => ControllerState::Done,
                },

                ControllerState::Done => break,
            };
        }

        Ok(())
    }
}

// ── Input helpers ─────────────────────────────────────────────────────────────

/// `true` only for the exact affirmative token, case-insensitively.
pub fn restart_requested(answer: &str) -> bool {
    answer.trim().to_lowercase() == "yes"
}

/// Parse a month selection: `"all"` clears the dimension, a full month name
/// sets it, anything else is rejected.
fn parse_month_selection(input: &str) -> Option<Option<Month>> {
    if input.eq_ignore_ascii_case("all") {
        Some(None)
    } else {
        Month::parse(input).map(Some)
    }
}

/// Parse a day selection: `"all"` clears the dimension, a full weekday name
/// sets it, anything else is rejected.
fn parse_day_selection(input: &str) -> Option<Option<Weekday>> {
    if input.eq_ignore_ascii_case("all") {
        Some(None)
    } else {
        Weekday::parse(input).map(Some)
    }
}

/// Prompt repeatedly until `parse` accepts the trimmed answer.
///
/// Returns `Ok(None)` on end-of-input.
fn prompt_until_valid<T>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    loop {
        writeln!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(value) = parse(line.trim()) {
            return Ok(Some(value));
        }
    }
}

/// Ask once and return the trimmed answer, or `None` on end-of-input.
fn read_answer(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    writeln!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
