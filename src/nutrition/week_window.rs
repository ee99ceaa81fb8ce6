// ABOUTME: Week-offset navigation for the weekly nutrition view
// ABOUTME: Maps an offset to a Sunday-anchored date range, its lookahead range and a label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Week windows
//!
//! Offset 0 is the rolling seven days ending today. Offset `n > 0` is the Sunday to Saturday
//! week `n` weeks before the current one. Moving forward is only allowed when the following
//! week has data, which the caller learns by querying [`WeekWindow::lookahead`].

use chrono::{Datelike, Days, NaiveDate};
use habitbite_core::errors::{AppError, AppResult};
use serde::Serialize;

const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";
const LABEL_FORMAT: &str = "%b %-d";

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// First day
    pub start: NaiveDate,
    /// Last day
    pub end: NaiveDate,
}

impl DateRange {
    /// Whether `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// `startDate` query value
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format(DATE_PARAM_FORMAT).to_string()
    }

    /// `endDate` query value
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format(DATE_PARAM_FORMAT).to_string()
    }

    /// Human label such as `Mar 2 - Mar 8`
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(LABEL_FORMAT),
            self.end.format(LABEL_FORMAT)
        )
    }
}

fn ending_on(end: NaiveDate) -> Option<DateRange> {
    end.checked_sub_days(Days::new(6))
        .map(|start| DateRange { start, end })
}

/// Position in week history; 0 is the current week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    offset: u32,
}

impl WeekWindow {
    /// The current week
    #[must_use]
    pub const fn current() -> Self {
        Self { offset: 0 }
    }

    /// Window `offset` weeks back
    #[must_use]
    pub const fn new(offset: u32) -> Self {
        Self { offset }
    }

    /// Window from a signed offset
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative offsets; future weeks are never shown
    pub fn from_signed(offset: i64) -> AppResult<Self> {
        u32::try_from(offset)
            .map(Self::new)
            .map_err(|_| AppError::invalid_input(format!("Invalid week offset: {offset}")))
    }

    /// Weeks back from the current week
    #[must_use]
    pub const fn offset(self) -> u32 {
        self.offset
    }

    /// Whether this is the current week
    #[must_use]
    pub const fn is_current(self) -> bool {
        self.offset == 0
    }

    /// One week further back
    #[must_use]
    pub const fn previous(self) -> Self {
        Self {
            offset: self.offset.saturating_add(1),
        }
    }

    /// Whether moving forward is allowed given the lookahead result
    #[must_use]
    pub const fn can_go_next(self, has_next_week: bool) -> bool {
        self.offset > 0 && has_next_week
    }

    /// One week forward, or unchanged when the lookahead found nothing
    #[must_use]
    pub const fn next(self, has_next_week: bool) -> Self {
        if self.can_go_next(has_next_week) {
            Self {
                offset: self.offset - 1,
            }
        } else {
            self
        }
    }

    /// Dates covered relative to `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the offset reaches past the representable calendar
    pub fn range(self, today: NaiveDate) -> AppResult<DateRange> {
        let end = if self.offset == 0 {
            Some(today)
        } else {
            let to_saturday = 6 - u64::from(today.weekday().num_days_from_sunday());
            today
                .checked_add_days(Days::new(to_saturday))
                .and_then(|saturday| {
                    saturday.checked_sub_days(Days::new(7 * u64::from(self.offset)))
                })
        };
        end.and_then(ending_on).ok_or_else(|| self.out_of_range())
    }

    /// Range checked to decide whether the following week has data; `None` for the current week
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the offset reaches past the representable calendar
    pub fn lookahead(self, today: NaiveDate) -> AppResult<Option<DateRange>> {
        if self.offset == 0 {
            return Ok(None);
        }
        let end = self.range(today)?.end;
        end.checked_add_days(Days::new(7))
            .and_then(ending_on)
            .map(Some)
            .ok_or_else(|| self.out_of_range())
    }

    /// Date-range label relative to `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the offset reaches past the representable calendar
    pub fn label(self, today: NaiveDate) -> AppResult<String> {
        Ok(self.range(today)?.label())
    }

    fn out_of_range(self) -> AppError {
        AppError::invalid_input(format!("Week offset out of range: {}", self.offset))
    }

    /// Navigation caption: `Current Week`, `1 Week Ago`, `3 Weeks Ago`
    #[must_use]
    pub fn caption(self) -> String {
        match self.offset {
            0 => "Current Week".to_owned(),
            1 => "1 Week Ago".to_owned(),
            n => format!("{n} Weeks Ago"),
        }
    }
}
