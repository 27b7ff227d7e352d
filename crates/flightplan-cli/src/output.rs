//! Output formatting for routes and flight listings.
//!
//! Text output is styled through a [`Palette`]; JSON output serialises
//! the library's summary types unchanged.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use flightplan_lib::{Airport, Flight, Route, RouteSummary};

use crate::terminal::{Palette, Style};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Render a planned route with every leg and the layovers between them.
pub fn write_route<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
    palette: &Palette,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, summary);
    }

    let heading = match summary.criterion {
        Some(criterion) => criterion.label().to_string(),
        None => format!("Route {}", summary.id),
    };
    writeln!(
        out,
        "{}: {} -> {}",
        palette.paint(Style::Heading, heading),
        palette.paint(Style::Airport, &summary.origin),
        palette.paint(Style::Airport, &summary.destination)
    )?;
    for leg in &summary.legs {
        if let Some(layover) = leg.layover {
            let wait = format!("layover {} min in {}", layover, leg.origin);
            writeln!(out, "     {}", palette.paint(Style::Layover, wait))?;
        }
        writeln!(
            out,
            "{:>3}. {} {} {} -> {} {} ({} min, {})",
            leg.index,
            palette.paint(Style::Flight, format!("{} {}", leg.airline, leg.flight_number)),
            leg.origin,
            leg.departure,
            leg.destination,
            leg.arrival,
            leg.duration,
            palette.paint(Style::Price, format!("€{:.2}", leg.price))
        )?;
    }
    writeln!(
        out,
        "{} {} min | {} | {} stopover(s)",
        palette.paint(Style::Layover, "Total:"),
        summary.total_duration,
        palette.paint(Style::Price, format!("€{:.2}", summary.total_price)),
        summary.stopovers
    )?;
    Ok(())
}

/// Render a list of routes, one per line.
pub fn write_routes<W: Write>(
    out: &mut W,
    title: &str,
    routes: &[Route],
    format: OutputFormat,
    palette: &Palette,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, routes);
    }
    writeln!(out, "{}", palette.paint(Style::Heading, title))?;
    for route in routes {
        writeln!(out, "{route}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct FlightListing<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    airport: Option<&'a Airport>,
    flights: &'a [&'a Flight],
}

/// Render search results: the matched airport (if any) followed by flights.
pub fn write_flights<W: Write>(
    out: &mut W,
    airport: Option<&Airport>,
    flights: &[&Flight],
    format: OutputFormat,
    palette: &Palette,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &FlightListing { airport, flights });
    }
    if let Some(airport) = airport {
        writeln!(out, "{}", palette.paint(Style::Airport, airport))?;
    }
    if flights.is_empty() {
        writeln!(out, "{}", palette.paint(Style::Problem, "No flights found."))?;
    }
    for flight in flights {
        writeln!(out, "  [{}] {}", flight.id, flight)?;
    }
    Ok(())
}
