// ABOUTME: Weekly nutrition aggregator building the seven-slot Sunday to Saturday series
// ABOUTME: Merges history rows with today's live snapshot and masks days that have not happened
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weekly Aggregation
//!
//! History rows arrive one per day with a date string in whatever form the server chose.
//! Each row lands in the slot for its weekday. Today's slot in the current week is special:
//! the live snapshot from `/consumed-foods/nutrition` wins over any history row for today,
//! because history is computed in batches and can lag behind the entries just logged.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use habitbite_core::models::{
    DailyNutritionSummary, DayOfWeek, NutritionHistoryRecord, WeeklySeriesEntry,
};
use tracing::{debug, warn};

use super::week_window::WeekWindow;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar date of a history row
///
/// Accepts `YYYY-MM-DD`, RFC 3339 (the date as written, offset ignored) and naive
/// date-times. Returns `None` for anything else.
#[must_use]
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|stamp| stamp.date())
}

/// Seven zero slots; today's slot is flagged only in the current week
#[must_use]
pub fn empty_week(today: NaiveDate, window: WeekWindow) -> Vec<WeeklySeriesEntry> {
    let today_slot = DayOfWeek::from(today.weekday());
    DayOfWeek::ALL
        .iter()
        .map(|day| WeeklySeriesEntry {
            is_today: window.is_current() && *day == today_slot,
            ..WeeklySeriesEntry::empty(*day)
        })
        .collect()
}

/// Build the weekly series for `window`
///
/// `snapshot` is only consulted for the current week. In the current week, slots after
/// today are always zero. Rows outside the window or with unparseable dates are skipped.
#[must_use]
pub fn aggregate_week(
    records: &[NutritionHistoryRecord],
    snapshot: Option<&DailyNutritionSummary>,
    today: NaiveDate,
    window: WeekWindow,
) -> Vec<WeeklySeriesEntry> {
    let mut series = empty_week(today, window);
    let mut written = [false; 7];
    let today_index = DayOfWeek::from(today.weekday()).index();
    // A week past the representable calendar holds no rows
    let range = window.range(today).ok();

    let seeded = match snapshot {
        Some(totals) if window.is_current() => {
            series[today_index].apply(totals);
            written[today_index] = true;
            true
        }
        _ => false,
    };

    for record in records {
        let Some(date) = parse_record_date(&record.date) else {
            warn!(date = %record.date, "Skipping history record with unparseable date");
            continue;
        };
        if !range.is_some_and(|r| r.contains(date)) {
            debug!(%date, "Skipping history record outside the requested week");
            continue;
        }

        let is_today = date == today;
        if is_today && seeded {
            continue;
        }

        let index = DayOfWeek::from(date.weekday()).index();
        if window.is_current() && index > today_index {
            continue;
        }

        if !written[index] || is_today {
            let slot = &mut series[index];
            slot.apply(&record.totals);
            slot.is_today |= is_today;
            written[index] = true;
        }
    }

    series
}
