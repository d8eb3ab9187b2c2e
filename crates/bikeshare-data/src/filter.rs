//! Month / day-of-week narrowing of a loaded trip table.

use bikeshare_core::models::{FilterCriteria, TripRecord, TripTable};
use tracing::debug;

/// Return a new table holding only the rows whose start timestamp satisfies
/// `criteria`. The input table is never mutated; row order is preserved.
///
/// A `None` month or day is a no-op for that dimension, so `(None, None)`
/// yields a table identical in content and order to the input.
pub fn apply_filters(table: &TripTable, criteria: &FilterCriteria) -> TripTable {
    let records: Vec<TripRecord> = table
        .records
        .iter()
        .filter(|r| matches_criteria(r, criteria))
        .cloned()
        .collect();

    debug!(
        city = table.city.as_str(),
        month = criteria.month_label(),
        day = criteria.day_label(),
        before = table.len(),
        after = records.len(),
        "filters applied"
    );

    TripTable {
        city: table.city.clone(),
        records,
        has_gender: table.has_gender,
        has_birth_year: table.has_birth_year,
    }
}

/// Both dimensions must match (logical AND); an unset dimension always does.
fn matches_criteria(record: &TripRecord, criteria: &FilterCriteria) -> bool {
    criteria.month.map_or(true, |m| record.start_month() == m)
        && criteria.day.map_or(true, |d| record.start_weekday() == d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{Month, Weekday};
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, station: &str) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        TripRecord {
            start_time: start,
            end_time: start + chrono::Duration::seconds(300),
            start_station: station.to_string(),
            end_station: "End".to_string(),
            duration_seconds: 300.0,
            user_type: "Subscriber".to_string(),
            gender: None,
            birth_year: None,
        }
    }

    fn table(records: Vec<TripRecord>) -> TripTable {
        TripTable {
            city: "chicago".to_string(),
            records,
            has_gender: false,
            has_birth_year: false,
        }
    }

    fn criteria(month: Option<Month>, day: Option<Weekday>) -> FilterCriteria {
        FilterCriteria {
            city: "chicago".to_string(),
            month,
            day,
        }
    }

    #[test]
    fn test_all_all_is_identity() {
        // 2017-01-02 Mon, 2017-02-03 Fri, 2017-03-04 Sat.
        let input = table(vec![
            record(2017, 1, 2, "a"),
            record(2017, 2, 3, "b"),
            record(2017, 3, 4, "c"),
        ]);

        let out = apply_filters(&input, &criteria(None, None));

        assert_eq!(out.records, input.records);
    }

    #[test]
    fn test_month_filter() {
        let input = table(vec![
            record(2017, 1, 2, "jan"),
            record(2017, 2, 3, "feb"),
            record(2017, 1, 9, "jan2"),
        ]);

        let out = apply_filters(&input, &criteria(Some(Month::January), None));

        assert_eq!(out.len(), 2);
        assert!(out.records.iter().all(|r| r.start_month() == Month::January));
    }

    #[test]
    fn test_day_filter() {
        // 2017-06-05 and 2017-06-12 are Mondays, 2017-06-06 is a Tuesday.
        let input = table(vec![
            record(2017, 6, 5, "mon1"),
            record(2017, 6, 6, "tue"),
            record(2017, 6, 12, "mon2"),
        ]);

        let out = apply_filters(&input, &criteria(None, Some(Weekday::Monday)));

        assert_eq!(out.len(), 2);
        assert_eq!(out.records[0].start_station, "mon1");
        assert_eq!(out.records[1].start_station, "mon2");
    }

    #[test]
    fn test_month_and_day_are_anded() {
        // Mondays in different months plus a June Tuesday.
        let input = table(vec![
            record(2017, 5, 1, "may-mon"),
            record(2017, 6, 5, "jun-mon"),
            record(2017, 6, 6, "jun-tue"),
        ]);

        let out = apply_filters(
            &input,
            &criteria(Some(Month::June), Some(Weekday::Monday)),
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out.records[0].start_station, "jun-mon");
    }

    #[test]
    fn test_filter_can_exclude_everything() {
        let input = table(vec![record(2017, 1, 2, "jan")]);

        let out = apply_filters(&input, &criteria(Some(Month::December), None));

        assert!(out.is_empty());
        assert_eq!(out.city, "chicago");
    }

    #[test]
    fn test_input_table_not_mutated() {
        let input = table(vec![record(2017, 1, 2, "a"), record(2017, 2, 3, "b")]);

        let _ = apply_filters(&input, &criteria(Some(Month::January), None));

        assert_eq!(input.len(), 2, "source table must keep all rows");
    }

    #[test]
    fn test_flags_carried_through() {
        let mut input = table(vec![record(2017, 1, 2, "a")]);
        input.has_gender = true;
        input.has_birth_year = true;

        let out = apply_filters(&input, &criteria(None, None));

        assert!(out.has_gender);
        assert!(out.has_birth_year);
    }
}
