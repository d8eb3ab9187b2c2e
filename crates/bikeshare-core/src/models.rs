use chrono::{Datelike, NaiveDateTime, Timelike};

// ── Month ─────────────────────────────────────────────────────────────────────

/// Calendar month, validated against the closed set of full English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Full English name, capitalised.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Parse a full month name, case-insensitively.
    ///
    /// Abbreviations are rejected; the accepted set is closed.
    pub fn parse(input: &str) -> Option<Month> {
        let lowered = input.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|m| m.name().to_lowercase() == lowered)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Weekday ───────────────────────────────────────────────────────────────────

/// Day of week, validated against the closed set of full English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Full English name, capitalised.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Parse a full weekday name, case-insensitively.
    pub fn parse(input: &str) -> Option<Weekday> {
        let lowered = input.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().to_lowercase() == lowered)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// One bicycle rental event.
///
/// The optional rider attributes (`gender`, `birth_year`) are absent for
/// cities whose datasets do not carry demographic columns, and may also be
/// empty on individual rows where they do.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// When the rental started.
    pub start_time: NaiveDateTime,
    /// When the rental ended.
    pub end_time: NaiveDateTime,
    /// Name of the station where the trip began.
    pub start_station: String,
    /// Name of the station where the trip ended.
    pub end_station: String,
    /// Trip duration in seconds, as recorded in the source data.
    pub duration_seconds: f64,
    /// Rider category, e.g. "Subscriber" or "Customer".
    pub user_type: String,
    /// Rider gender, when recorded.
    pub gender: Option<String>,
    /// Rider birth year, when recorded.
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Month of the start timestamp.
    pub fn start_month(&self) -> Month {
        Month::ALL[self.start_time.month0() as usize]
    }

    /// Weekday of the start timestamp.
    pub fn start_weekday(&self) -> Weekday {
        Weekday::ALL[self.start_time.weekday().num_days_from_monday() as usize]
    }

    /// Hour-of-day (0–23) of the start timestamp.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

// ── TripTable ─────────────────────────────────────────────────────────────────

/// An in-memory table of trip records loaded from exactly one city's file.
///
/// The `has_gender` / `has_birth_year` flags record whether the source file
/// carried those columns at all, so downstream consumers can distinguish
/// "column absent for this city" from "value absent on this row".
#[derive(Debug, Clone)]
pub struct TripTable {
    /// Canonical city name the records were loaded for.
    pub city: String,
    /// All records, in source-file order.
    pub records: Vec<TripRecord>,
    /// Whether the source header named a `Gender` column.
    pub has_gender: bool,
    /// Whether the source header named a `Birth Year` column.
    pub has_birth_year: bool,
}

impl TripTable {
    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── FilterCriteria ────────────────────────────────────────────────────────────

/// The validated (city, month, day) triple narrowing which records are
/// analyzed. `None` means "all" for that dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Canonical city name from the catalog.
    pub city: String,
    /// Month constraint, or `None` for no month filter.
    pub month: Option<Month>,
    /// Day-of-week constraint, or `None` for no day filter.
    pub day: Option<Weekday>,
}

impl FilterCriteria {
    /// Human-readable month selection, `"all"` when unconstrained.
    pub fn month_label(&self) -> &str {
        self.month.map(|m| m.name()).unwrap_or("all")
    }

    /// Human-readable day selection, `"all"` when unconstrained.
    pub fn day_label(&self) -> &str {
        self.day.map(|d| d.name()).unwrap_or("all")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn record(start: NaiveDateTime) -> TripRecord {
        TripRecord {
            start_time: start,
            end_time: start + chrono::Duration::seconds(600),
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            duration_seconds: 600.0,
            user_type: "Subscriber".to_string(),
            gender: None,
            birth_year: None,
        }
    }

    // ── Month ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_month_parse_case_insensitive() {
        assert_eq!(Month::parse("january"), Some(Month::January));
        assert_eq!(Month::parse("JUNE"), Some(Month::June));
        assert_eq!(Month::parse("  December "), Some(Month::December));
    }

    #[test]
    fn test_month_parse_rejects_abbreviations() {
        assert_eq!(Month::parse("jan"), None);
        assert_eq!(Month::parse("sept"), None);
        assert_eq!(Month::parse(""), None);
    }

    #[test]
    fn test_month_name_round_trip() {
        for m in Month::ALL {
            assert_eq!(Month::parse(m.name()), Some(m));
        }
    }

    // ── Weekday ───────────────────────────────────────────────────────────────

    #[test]
    fn test_weekday_parse_case_insensitive() {
        assert_eq!(Weekday::parse("monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::parse("SUNDAY"), Some(Weekday::Sunday));
    }

    #[test]
    fn test_weekday_parse_rejects_abbreviations() {
        assert_eq!(Weekday::parse("mon"), None);
        assert_eq!(Weekday::parse("tues"), None);
    }

    #[test]
    fn test_weekday_name_round_trip() {
        for d in Weekday::ALL {
            assert_eq!(Weekday::parse(d.name()), Some(d));
        }
    }

    // ── TripRecord accessors ──────────────────────────────────────────────────

    #[test]
    fn test_start_month_and_weekday() {
        // 2017-06-05 was a Monday.
        let r = record(ts(2017, 6, 5, 8));
        assert_eq!(r.start_month(), Month::June);
        assert_eq!(r.start_weekday(), Weekday::Monday);
        assert_eq!(r.start_hour(), 8);
    }

    #[test]
    fn test_start_weekday_sunday() {
        // 2017-01-01 was a Sunday.
        let r = record(ts(2017, 1, 1, 23));
        assert_eq!(r.start_weekday(), Weekday::Sunday);
        assert_eq!(r.start_hour(), 23);
    }

    // ── FilterCriteria labels ─────────────────────────────────────────────────

    #[test]
    fn test_filter_labels() {
        let all = FilterCriteria {
            city: "chicago".to_string(),
            month: None,
            day: None,
        };
        assert_eq!(all.month_label(), "all");
        assert_eq!(all.day_label(), "all");

        let narrowed = FilterCriteria {
            city: "chicago".to_string(),
            month: Some(Month::March),
            day: Some(Weekday::Friday),
        };
        assert_eq!(narrowed.month_label(), "March");
        assert_eq!(narrowed.day_label(), "Friday");
    }

    // ── TripTable ─────────────────────────────────────────────────────────────

    #[test]
    fn test_trip_table_len() {
        let table = TripTable {
            city: "chicago".to_string(),
            records: vec![record(ts(2017, 1, 2, 9))],
            has_gender: true,
            has_birth_year: true,
        };
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
