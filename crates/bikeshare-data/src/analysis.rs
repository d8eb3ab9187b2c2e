//! Per-table analysis pipeline.
//!
//! Runs the four aggregators in fixed report order over the same immutable
//! table and captures per-block wall-clock seconds for the console output.
//! Each block's outcome is independent: an empty table or unavailable column
//! in one block never prevents the others from producing their results.

use std::time::Instant;

use bikeshare_core::models::TripTable;
use tracing::debug;

use crate::aggregator::{
    duration_stats, station_stats, time_of_travel_stats, user_stats, DurationStats, StationStats,
    TimeOfTravelStats, UserStats,
};

// ── Public types ──────────────────────────────────────────────────────────────

/// One report block's statistics plus the wall-clock time spent computing it.
#[derive(Debug, Clone)]
pub struct TimedBlock<T> {
    /// The computed statistics, or `None` when the table held no rows.
    pub stats: Option<T>,
    /// Wall-clock seconds spent inside the aggregator.
    pub elapsed_seconds: f64,
}

/// The complete output of [`analyze_table`], in report order.
#[derive(Debug, Clone)]
pub struct TableAnalysis {
    /// Number of rows the aggregators ran over.
    pub rows_analyzed: usize,
    /// Popular travel times.
    pub time_travel: TimedBlock<TimeOfTravelStats>,
    /// Popular stations and trip.
    pub stations: TimedBlock<StationStats>,
    /// Trip duration totals.
    pub durations: TimedBlock<DurationStats>,
    /// User demographics.
    pub users: TimedBlock<UserStats>,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run all four aggregators over `table`.
pub fn analyze_table(table: &TripTable) -> TableAnalysis {
    let time_travel = timed(|| time_of_travel_stats(table));
    let stations = timed(|| station_stats(table));
    let durations = timed(|| duration_stats(table));
    let users = timed(|| user_stats(table));

    debug!(
        city = table.city.as_str(),
        rows = table.len(),
        "table analysis complete"
    );

    TableAnalysis {
        rows_analyzed: table.len(),
        time_travel,
        stations,
        durations,
        users,
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn timed<T>(f: impl FnOnce() -> Option<T>) -> TimedBlock<T> {
    let start = Instant::now();
    let stats = f();
    TimedBlock {
        stats,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
