//! Plain-text output

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use tripscope_core::geo::ResolutionSource;
use tripscope_core::insights::{MapPlan, TripRow};
use tripscope_core::ImportReport;
use tripscope_domain::utils::text::truncate_chars;

use crate::commands::SummaryView;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DESTINATION_WIDTH: usize = 24;

fn day(value: NaiveDateTime) -> String {
    value.format(DATE_FORMAT).to_string()
}

fn source_label(source: ResolutionSource) -> &'static str {
    match source {
        ResolutionSource::Embedded => "embedded",
        ResolutionSource::CacheExact => "cache",
        ResolutionSource::CacheSubstring => "cache~",
        ResolutionSource::Gazetteer => "gazetteer",
        ResolutionSource::Region => "region",
    }
}

pub fn import_report(out: &mut impl Write, report: &ImportReport) -> Result<()> {
    writeln!(out, "Source:             {}", report.source)?;
    if let Some(err) = &report.feed_error {
        writeln!(out, "Feed error:         {err}")?;
        return Ok(());
    }

    writeln!(out, "Events parsed:      {}", report.events_parsed)?;
    writeln!(out, "Trips accepted:     {}", report.trips_accepted())?;
    writeln!(out, "Duplicates dropped: {}", report.duplicates_dropped)?;

    if !report.skipped.is_empty() {
        writeln!(out, "Skipped:")?;
        for (kind, count) in &report.skipped {
            writeln!(out, "  {kind:<18} {count}")?;
        }
    }
    Ok(())
}

pub fn trip_rows(out: &mut impl Write, rows: &[TripRow]) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "No trips found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<9} {:<10} {:<10} {:>6}  {:<DESTINATION_WIDTH$} Title",
        "Status", "Start", "End", "Nights", "Destination"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<9} {:<10} {:<10} {:>6}  {:<DESTINATION_WIDTH$} {}",
            row.status.display_label(),
            day(row.start_date),
            day(row.end_date),
            row.nights,
            truncate_chars(&row.destination, DESTINATION_WIDTH),
            row.title,
        )?;
    }
    Ok(())
}

pub fn summary(out: &mut impl Write, view: &SummaryView) -> Result<()> {
    let summary = &view.summary;

    writeln!(out, "Total trips:         {}", summary.total_trips)?;
    writeln!(out, "Unique destinations: {}", summary.unique_destinations)?;
    writeln!(out, "Total nights:        {}", summary.total_nights)?;
    if let Some(average) = summary.average_duration {
        writeln!(out, "Average duration:    {average:.1} days")?;
    }
    if let Some(top) = &summary.most_visited {
        writeln!(out, "Most visited:        {} ({} trips)", top.destination, top.count)?;
    }
    if let Some(next) = &summary.next_trip {
        writeln!(
            out,
            "Next trip:           {} to {} on {} (in {} days)",
            next.title,
            next.destination,
            day(next.start_date),
            next.days_until
        )?;
    }

    if !view.top_destinations.is_empty() {
        writeln!(out, "\nTop destinations:")?;
        for entry in &view.top_destinations {
            writeln!(out, "  {:<DESTINATION_WIDTH$} {}", entry.destination, entry.count)?;
        }
    }

    if !view.monthly.is_empty() {
        writeln!(out, "\nTrips per month:")?;
        for month in &view.monthly {
            writeln!(out, "  {}  {}", month.month, "#".repeat(month.count))?;
        }
    }

    if !view.timeline.is_empty() {
        writeln!(out, "\nTimeline:")?;
        for entry in &view.timeline {
            writeln!(
                out,
                "  {} .. {}  {:<DESTINATION_WIDTH$} {:>3} nights  {}",
                day(entry.start_date),
                day(entry.end_date),
                truncate_chars(&entry.destination, DESTINATION_WIDTH),
                entry.duration_days,
                entry.status.display_label(),
            )?;
        }
    }
    Ok(())
}

pub fn map_plan(out: &mut impl Write, plan: &MapPlan) -> Result<()> {
    writeln!(out, "Placed {} trip(s), {} unplaced", plan.markers.len(), plan.unplaced_count)?;

    if let (Some(center), Some(zoom)) = (plan.center, plan.zoom) {
        writeln!(out, "Center: {:.4}, {:.4} (zoom {zoom})", center.latitude, center.longitude)?;
    }

    for marker in &plan.markers {
        writeln!(
            out,
            "  {:<DESTINATION_WIDTH$} {:>9.4}, {:>9.4}  [{}]  {}",
            truncate_chars(&marker.destination, DESTINATION_WIDTH),
            marker.coordinates.latitude,
            marker.coordinates.longitude,
            source_label(marker.source),
            marker.status.display_label(),
        )?;
    }

    if !plan.unplaced_preview.is_empty() {
        writeln!(out, "Unplaced: {}", plan.unplaced_preview.join(", "))?;
    }
    Ok(())
}
