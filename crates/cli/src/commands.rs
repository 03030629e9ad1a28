//! Command handlers
//!
//! Each handler imports the calendar, runs one insight over the trips and
//! writes text or JSON to the given writer.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::info;
use tripscope_core::insights::{
    monthly_counts, plan_map, summarize, timeline, top_destinations, trip_table, DestinationCount,
    MapFilter, MonthlyCount, TimelineEntry, TripFilter, TripSortOrder, TripSummary,
};
use tripscope_core::{CoordinateResolver, ImportReport, ImportService};
use tripscope_domain::Config;
use tripscope_infra::{IcsFeed, JsonCoordinateStore};

use crate::render;

/// Everything `summary` prints.
#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub summary: TripSummary,
    pub top_destinations: Vec<DestinationCount>,
    pub monthly: Vec<MonthlyCount>,
    pub timeline: Vec<TimelineEntry>,
}

pub struct App {
    config: Config,
    json: bool,
    now: NaiveDateTime,
}

impl App {
    pub fn new(config: Config, json: bool) -> Self {
        Self { config, json, now: Local::now().naive_local() }
    }

    fn load(&self, calendar: &Path) -> ImportReport {
        ImportService::new(&self.config.import).import(&IcsFeed::from_path(calendar))
    }

    /// Import and fail on an unreadable feed.
    fn load_trips(&self, calendar: &Path) -> Result<ImportReport> {
        let report = self.load(calendar);
        if let Some(err) = &report.feed_error {
            bail!("Could not read calendar {}: {err}", calendar.display());
        }
        Ok(report)
    }

    fn emit_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, value).context("Failed to write JSON")?;
        writeln!(out)?;
        Ok(())
    }

    pub fn import(&self, calendar: &Path, out: &mut impl Write) -> Result<()> {
        let report = self.load(calendar);

        if self.json {
            Self::emit_json(out, &report)?;
        } else {
            render::import_report(out, &report)?;
        }

        if let Some(err) = report.feed_error {
            bail!("Could not read calendar {}: {err}", calendar.display());
        }
        Ok(())
    }

    pub fn trips(
        &self,
        calendar: &Path,
        destination: Option<String>,
        year: Option<i32>,
        order: TripSortOrder,
        out: &mut impl Write,
    ) -> Result<()> {
        let report = self.load_trips(calendar)?;
        let filter = TripFilter { destination, year };
        let rows = trip_table(&report.trips, &filter, order, self.now);

        info!(rows = rows.len(), order = %order, "cli.trips_listed");

        if self.json {
            Self::emit_json(out, &rows)
        } else {
            render::trip_rows(out, &rows)
        }
    }

    pub fn summary(&self, calendar: &Path, out: &mut impl Write) -> Result<()> {
        let report = self.load_trips(calendar)?;
        let trips = &report.trips;

        let view = SummaryView {
            summary: summarize(trips, self.now),
            top_destinations: top_destinations(trips),
            monthly: monthly_counts(trips, self.now),
            timeline: timeline(trips, self.now),
        };

        if self.json {
            Self::emit_json(out, &view)
        } else {
            render::summary(out, &view)
        }
    }

    pub fn map(&self, calendar: &Path, filter: MapFilter, out: &mut impl Write) -> Result<()> {
        let report = self.load_trips(calendar)?;

        let cache_path = &self.config.geo.cache_path;
        let store = JsonCoordinateStore::from_config(&self.config.geo)
            .with_context(|| format!("Failed to open coordinate cache {}", cache_path.display()))?;
        let resolver = CoordinateResolver::new(Arc::new(store));

        let plan = plan_map(&report.trips, filter, &resolver, self.now)
            .context("Failed to resolve trip coordinates")?;

        if self.json {
            Self::emit_json(out, &plan)
        } else {
            render::map_plan(out, &plan)
        }
    }
}
