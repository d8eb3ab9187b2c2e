//! The four stateless report aggregators.
//!
//! Each one consumes a filtered [`TripTable`] read-only and computes one
//! category of descriptive statistics. An empty table yields `None` instead
//! of a partial result, so rendering can report "no data" per block.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use bikeshare_core::models::{Month, TripRecord, TripTable, Weekday};

/// Group label for rows whose gender value is absent.
pub const GENDER_NOT_RECORDED: &str = "Not recorded";

// ── First-maximal selection ───────────────────────────────────────────────────

/// Pick the most frequent value, breaking ties in favour of the value whose
/// first occurrence comes earliest in iteration order.
///
/// This is an explicit scan (count map plus first-occurrence list); a
/// sort-based approach could silently pick a different tied value.
pub fn most_common<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut first_seen: Vec<T> = Vec::new();

    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(value);
        }
        *count += 1;
    }

    let max = counts.values().copied().max()?;
    first_seen.into_iter().find(|v| counts[v] == max)
}

// ── Time-of-Travel ────────────────────────────────────────────────────────────

/// The most frequent travel times over the table's start timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOfTravelStats {
    /// Most frequent start month.
    pub most_common_month: Month,
    /// Most frequent start weekday.
    pub most_common_weekday: Weekday,
    /// Most frequent start hour-of-day (0–23).
    pub most_common_hour: u32,
}

/// Compute time-of-travel statistics, or `None` for an empty table.
pub fn time_of_travel_stats(table: &TripTable) -> Option<TimeOfTravelStats> {
    Some(TimeOfTravelStats {
        most_common_month: most_common(table.records.iter().map(TripRecord::start_month))?,
        most_common_weekday: most_common(table.records.iter().map(TripRecord::start_weekday))?,
        most_common_hour: most_common(table.records.iter().map(TripRecord::start_hour))?,
    })
}

// ── Stations ──────────────────────────────────────────────────────────────────

/// The most frequent stations and station combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    /// Most frequent start station name.
    pub most_common_start_station: String,
    /// Most frequent end station name.
    pub most_common_end_station: String,
    /// Most frequent trip, as the combined `"Start-End"` label.
    pub most_common_trip: String,
}

/// Combined station label for one record: the two names joined with a
/// literal hyphen.
pub fn combo_label(record: &TripRecord) -> String {
    format!("{}-{}", record.start_station, record.end_station)
}

/// Compute station statistics, or `None` for an empty table.
///
/// The combined label is derived per row on the fly; the table itself is
/// never extended, so later aggregators see exactly the same data.
pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    Some(StationStats {
        most_common_start_station: most_common(
            table.records.iter().map(|r| r.start_station.clone()),
        )?,
        most_common_end_station: most_common(table.records.iter().map(|r| r.end_station.clone()))?,
        most_common_trip: most_common(table.records.iter().map(combo_label))?,
    })
}

// ── Durations ─────────────────────────────────────────────────────────────────

/// Raw sum and arithmetic mean of the trip-duration column.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Sum of all durations, in seconds.
    pub total_seconds: f64,
    /// Arithmetic mean duration, in seconds.
    pub mean_seconds: f64,
}

/// Compute duration statistics, or `None` for an empty table (the mean of
/// zero rows is undefined). No outlier or sign filtering is applied.
pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let total_seconds: f64 = table.records.iter().map(|r| r.duration_seconds).sum();
    Some(DurationStats {
        total_seconds,
        mean_seconds: total_seconds / table.len() as f64,
    })
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// Outcome of a statistic over an optional dataset column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOutcome<T> {
    /// The column exists and produced a value.
    Available(T),
    /// The column exists but no row carried a value under the current filter.
    Empty,
    /// The dataset for this city does not carry the column.
    Unavailable,
}

/// Earliest, latest and most frequent rider birth years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// Rider demographics over the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Row counts per user-type category, keyed alphabetically.
    pub user_type_counts: BTreeMap<String, usize>,
    /// Row counts per gender; rows without a value form their own
    /// [`GENDER_NOT_RECORDED`] group.
    pub gender_counts: ColumnOutcome<BTreeMap<String, usize>>,
    /// Birth-year extremes and mode.
    pub birth_years: ColumnOutcome<BirthYearStats>,
}

/// Compute user statistics, or `None` for an empty table.
///
/// Cities without demographic columns (gender, birth year) yield
/// [`ColumnOutcome::Unavailable`] sub-results instead of failing.
pub fn user_stats(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }

    Some(UserStats {
        user_type_counts: group_counts(table.records.iter().map(|r| r.user_type.clone())),
        gender_counts: gender_outcome(table),
        birth_years: birth_year_outcome(table),
    })
}

/// Count occurrences per distinct value. Summary-only grouping; keys come
/// back in alphabetical order.
fn group_counts<I>(values: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

fn gender_outcome(table: &TripTable) -> ColumnOutcome<BTreeMap<String, usize>> {
    if !table.has_gender {
        return ColumnOutcome::Unavailable;
    }

    ColumnOutcome::Available(group_counts(table.records.iter().map(|r| {
        r.gender
            .clone()
            .unwrap_or_else(|| GENDER_NOT_RECORDED.to_string())
    })))
}

fn birth_year_outcome(table: &TripTable) -> ColumnOutcome<BirthYearStats> {
    if !table.has_birth_year {
        return ColumnOutcome::Unavailable;
    }

    let years: Vec<i32> = table.records.iter().filter_map(|r| r.birth_year).collect();
    let (Some(&earliest), Some(&latest)) = (years.iter().min(), years.iter().max()) else {
        return ColumnOutcome::Empty;
    };
    let Some(most_common_year) = most_common(years.iter().copied()) else {
        return ColumnOutcome::Empty;
    };

    ColumnOutcome::Available(BirthYearStats {
        earliest,
        latest,
        most_common: most_common_year,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
