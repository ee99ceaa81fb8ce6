// ABOUTME: Composite weekly nutrition read backing history views
// ABOUTME: Fetches snapshot, history and lookahead, then aggregates into a WeeklyOverview
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate};
use habitbite_core::errors::AppResult;
use habitbite_core::models::WeeklySeriesEntry;
use serde::Serialize;
use tracing::{debug, warn};

use super::HabitBiteClient;
use crate::nutrition::{aggregate_week, ChartDomain, DateRange, WeekWindow};

/// Channel used by [`HabitBiteClient::load_weekly_series_latest`]
pub const WEEKLY_CHANNEL: &str = "weekly";

/// Everything a weekly chart needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyOverview {
    /// Seven slots, Sunday first
    pub series: Vec<WeeklySeriesEntry>,
    /// Window shown
    pub window: WeekWindow,
    /// Dates covered
    pub range: DateRange,
    /// Whether the following week has data, enabling forward navigation
    pub has_next_week: bool,
    /// Axis maxima
    pub chart_domain: ChartDomain,
}

impl WeeklyOverview {
    /// Date-range label such as `Mar 2 - Mar 8`
    #[must_use]
    pub fn label(&self) -> String {
        self.range.label()
    }

    /// Whether the "next week" control is enabled
    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        self.window.can_go_next(self.has_next_week)
    }
}

impl HabitBiteClient {
    /// Weekly series `week_offset` weeks back from today
    ///
    /// # Errors
    ///
    /// Returns the history request's error; snapshot and lookahead failures are tolerated
    pub async fn load_weekly_series(&self, week_offset: u32) -> AppResult<WeeklyOverview> {
        self.load_weekly_series_at(WeekWindow::new(week_offset), Local::now().date_naive())
            .await
    }

    /// Weekly series, returning `None` when the user flipped to another week before this
    /// one finished loading
    ///
    /// # Errors
    ///
    /// Returns the error of a load that is still current
    pub async fn load_weekly_series_latest(
        &self,
        week_offset: u32,
    ) -> AppResult<Option<WeeklyOverview>> {
        self.load_weekly_series_latest_at(WeekWindow::new(week_offset), Local::now().date_naive())
            .await
    }

    /// [`Self::load_weekly_series_latest`] relative to `today`
    ///
    /// # Errors
    ///
    /// Returns the error of a load that is still current
    pub async fn load_weekly_series_latest_at(
        &self,
        window: WeekWindow,
        today: NaiveDate,
    ) -> AppResult<Option<WeeklyOverview>> {
        let generation = self.tracker.begin(WEEKLY_CHANNEL);
        let result = self.load_weekly_series_at(window, today).await;
        if !self.tracker.is_current(&generation) {
            debug!(offset = window.offset(), "Discarding superseded weekly load");
            return Ok(None);
        }
        result.map(Some)
    }

    /// Weekly series for `window` relative to `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an offset past the representable calendar, otherwise the
    /// history request's error; snapshot and lookahead failures are tolerated
    pub async fn load_weekly_series_at(
        &self,
        window: WeekWindow,
        today: NaiveDate,
    ) -> AppResult<WeeklyOverview> {
        let range = window.range(today)?;

        let snapshot = if window.is_current() {
            match self.get_daily_nutrition(today).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!(error = %e, "Today's nutrition unavailable; using history only");
                    None
                }
            }
        } else {
            None
        };

        let history = self.get_nutrition_history(range.start, range.end).await?;

        let has_next_week = match window.lookahead(today)? {
            Some(ahead) => match self.get_nutrition_history(ahead.start, ahead.end).await {
                Ok(rows) => !rows.is_empty(),
                Err(e) => {
                    warn!(error = %e, "Next-week lookahead failed");
                    false
                }
            },
            None => false,
        };

        let series = aggregate_week(&history, snapshot.as_ref(), today, window);
        let chart_domain = ChartDomain::from_series(&series);
        debug!(
            offset = window.offset(),
            rows = history.len(),
            has_next_week,
            "Built weekly series"
        );

        Ok(WeeklyOverview {
            series,
            window,
            range,
            has_next_week,
            chart_domain,
        })
    }
}
