//! Route command handler for planning a connection between two airports.

use std::io::Write;

use anyhow::{bail, Context, Result};

use flightplan_lib::lookup::normalize_iata;
use flightplan_lib::{find_route, Criterion, RouteSummary};

use crate::commands::{OutputOptions, Session};
use crate::output::write_route;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin IATA code.
    pub from: String,
    /// Destination IATA code.
    pub to: String,
    pub criterion: Criterion,
    /// Store the route in the session and write `routes.csv`.
    pub save: bool,
}

/// Handle the route subcommand.
///
/// Fails when an airport is unknown or no route satisfies the stopover cap
/// and the connection rule.
pub fn handle_route_command<W: Write>(
    session: &mut Session,
    args: &RouteCommandArgs,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    let origin = normalize_iata(&args.from);
    let destination = normalize_iata(&args.to);
    for code in [&origin, &destination] {
        if !session.network.has_airport(code) {
            bail!("unknown airport {code}");
        }
    }

    let Some(route) = find_route(&session.network, &origin, &destination, args.criterion) else {
        bail!("no route found from {origin} to {destination}");
    };

    let route = if args.save {
        session.book.add(&route).clone()
    } else {
        route
    };
    let summary = RouteSummary::from_route(&session.network, &route, Some(args.criterion))
        .context("failed to summarise the route")?;
    write_route(out, &summary, options.format, &options.palette)?;

    if args.save {
        session.save()?;
    }
    Ok(())
}
