//! Console rendering of the four statistics blocks.
//!
//! The blocks print in fixed order (times, stations, durations, users), each
//! with its heading, statistics lines, elapsed-seconds line and a dashed
//! separator. Empty-table and unavailable-column outcomes render as clear
//! in-block messages instead of aborting the report.

use std::io::{self, Write};

use bikeshare_core::formatting::{format_float, format_integer, separator_line};
use bikeshare_data::aggregator::{ColumnOutcome, UserStats};
use bikeshare_data::analysis::{TableAnalysis, TimedBlock};

/// Line printed inside a block when the filtered table held no rows.
const NO_DATA_LINE: &str = "No trips matched the current filter.";

/// Render the full four-block report.
pub fn render_report(analysis: &TableAnalysis, out: &mut impl Write) -> io::Result<()> {
    render_time_block(&analysis.time_travel, out)?;
    render_station_block(&analysis.stations, out)?;
    render_duration_block(&analysis.durations, out)?;
    render_user_block(&analysis.users, out)?;
    Ok(())
}

// ── Individual blocks ─────────────────────────────────────────────────────────

fn render_time_block(
    block: &TimedBlock<bikeshare_data::aggregator::TimeOfTravelStats>,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;

    match &block.stats {
        Some(stats) => {
            writeln!(
                out,
                "The most common month for travel is {}",
                stats.most_common_month
            )?;
            writeln!(
                out,
                "The most common day for travel is {}",
                stats.most_common_weekday
            )?;
            writeln!(
                out,
                "The most common hour for travel is {}",
                stats.most_common_hour
            )?;
        }
        None => writeln!(out, "{}", NO_DATA_LINE)?,
    }

    finish_block(block.elapsed_seconds, out)
}

fn render_station_block(
    block: &TimedBlock<bikeshare_data::aggregator::StationStats>,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;

    match &block.stats {
        Some(stats) => {
            writeln!(
                out,
                "The most commonly used start station is {}",
                stats.most_common_start_station
            )?;
            writeln!(
                out,
                "The most commonly used end station is {}",
                stats.most_common_end_station
            )?;
            writeln!(
                out,
                "The most common start and end station combo is {}",
                stats.most_common_trip
            )?;
        }
        None => writeln!(out, "{}", NO_DATA_LINE)?,
    }

    finish_block(block.elapsed_seconds, out)
}

fn render_duration_block(
    block: &TimedBlock<bikeshare_data::aggregator::DurationStats>,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;

    match &block.stats {
        Some(stats) => {
            writeln!(
                out,
                "The total travel time is {} seconds",
                format_float(stats.total_seconds, 1)
            )?;
            writeln!(
                out,
                "The average travel time is {} seconds",
                format_float(stats.mean_seconds, 1)
            )?;
        }
        None => writeln!(out, "{}", NO_DATA_LINE)?,
    }

    finish_block(block.elapsed_seconds, out)
}

fn render_user_block(block: &TimedBlock<UserStats>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;

    match &block.stats {
        Some(stats) => {
            writeln!(out, "Users grouped by type:")?;
            for (user_type, count) in &stats.user_type_counts {
                writeln!(out, "  {}: {}", user_type, format_integer(*count as u64))?;
            }

            writeln!(out, "\nUsers grouped by gender:")?;
            match &stats.gender_counts {
                ColumnOutcome::Available(counts) => {
                    for (gender, count) in counts {
                        writeln!(out, "  {}: {}", gender, format_integer(*count as u64))?;
                    }
                }
                ColumnOutcome::Empty => writeln!(out, "  No gender values in the filtered data.")?,
                ColumnOutcome::Unavailable => {
                    writeln!(out, "  Gender data is not available for this city.")?
                }
            }

            writeln!(out)?;
            match &stats.birth_years {
                ColumnOutcome::Available(years) => {
                    writeln!(out, "Earliest birth year: {}", years.earliest)?;
                    writeln!(out, "Latest birth year: {}", years.latest)?;
                    writeln!(out, "Most common birth year: {}", years.most_common)?;
                }
                ColumnOutcome::Empty => {
                    writeln!(out, "No birth year values in the filtered data.")?
                }
                ColumnOutcome::Unavailable => {
                    writeln!(out, "Birth year data is not available for this city.")?
                }
            }
        }
        None => writeln!(out, "{}", NO_DATA_LINE)?,
    }

    finish_block(block.elapsed_seconds, out)
}

// ── Shared block footer ───────────────────────────────────────────────────────

fn finish_block(elapsed_seconds: f64, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nThis took {:.4} seconds.", elapsed_seconds)?;
    writeln!(out, "{}", separator_line())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
