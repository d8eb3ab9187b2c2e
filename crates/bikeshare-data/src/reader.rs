//! CSV dataset loading for Bikeshare Explorer.
//!
//! Resolves a city through the injected [`CityCatalog`], reads its backing
//! CSV file and converts every row into a typed [`TripRecord`]. Loading is
//! strict: a malformed row aborts the whole load with an error naming the
//! file and 1-based data row, rather than silently dropping the row.

use std::fs::File;
use std::path::Path;

use bikeshare_core::cities::CityCatalog;
use bikeshare_core::error::{ExplorerError, Result};
use bikeshare_core::models::{TripRecord, TripTable};
use bikeshare_core::time_utils::parse_trip_timestamp;
use serde::Deserialize;
use tracing::debug;

/// Columns every city dataset must carry.
const REQUIRED_COLUMNS: &[&str] = &[
    "Start Time",
    "End Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

// ── Raw CSV row ───────────────────────────────────────────────────────────────

/// One CSV record as serde sees it, before explicit conversion.
///
/// Timestamps and numbers stay as strings here so conversion failures can be
/// reported with row context instead of an opaque deserialize error.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the trip table for `city`, resolving the backing file through
/// `catalog`.
///
/// The loader knows nothing about month/day filters; it always returns the
/// complete table. The file handle is scoped to this call and released on
/// every path, including parse failure.
pub fn load_trip_table(catalog: &CityCatalog, city: &str) -> Result<TripTable> {
    let entry = catalog
        .resolve(city)
        .ok_or_else(|| ExplorerError::UnknownCity(city.to_string()))?;
    let path = catalog.path_for(entry);

    let file = File::open(&path).map_err(|source| ExplorerError::FileRead {
        path: path.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| ExplorerError::CsvParse {
            path: path.clone(),
            source,
        })?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(ExplorerError::MissingColumn {
                path: path.clone(),
                column,
            });
        }
    }

    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<RawTrip>().enumerate() {
        // 1-based data row, not counting the header.
        let row = index + 1;
        let raw = result.map_err(|source| ExplorerError::CsvParse {
            path: path.clone(),
            source,
        })?;
        records.push(convert_row(raw, &path, row)?);
    }

    debug!(
        city = entry.name.as_str(),
        rows = records.len(),
        has_gender,
        has_birth_year,
        "trip table loaded"
    );

    Ok(TripTable {
        city: entry.name.clone(),
        records,
        has_gender,
        has_birth_year,
    })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Convert a raw CSV row into a typed [`TripRecord`].
fn convert_row(raw: RawTrip, path: &Path, row: usize) -> Result<TripRecord> {
    let start_time =
        parse_trip_timestamp(&raw.start_time).ok_or_else(|| ExplorerError::TimestampParse {
            path: path.to_path_buf(),
            row,
            value: raw.start_time.clone(),
        })?;

    let end_time =
        parse_trip_timestamp(&raw.end_time).ok_or_else(|| ExplorerError::TimestampParse {
            path: path.to_path_buf(),
            row,
            value: raw.end_time.clone(),
        })?;

    let duration_seconds =
        raw.trip_duration
            .trim()
            .parse::<f64>()
            .map_err(|_| ExplorerError::FieldParse {
                path: path.to_path_buf(),
                row,
                column: "Trip Duration",
                value: raw.trip_duration.clone(),
            })?;

    let birth_year = parse_birth_year(raw.birth_year.as_deref(), path, row)?;

    // Empty strings count as absent values.
    let gender = raw.gender.filter(|g| !g.trim().is_empty());

    Ok(TripRecord {
        start_time,
        end_time,
        start_station: raw.start_station,
        end_station: raw.end_station,
        duration_seconds,
        user_type: raw.user_type,
        gender,
        birth_year,
    })
}

/// Parse a `Birth Year` cell.
///
/// The source files write years either as integers (`"1992"`) or as floats
/// (`"1992.0"`); blank cells mean the rider did not provide one.
fn parse_birth_year(value: Option<&str>, path: &Path, row: usize) -> Result<Option<i32>> {
    let Some(text) = value else {
        return Ok(None);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(year) if year.fract() == 0.0 => Ok(Some(year as i32)),
        _ => Err(ExplorerError::FieldParse {
            path: path.to_path_buf(),
            row,
            column: "Birth Year",
            value: text.to_string(),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
