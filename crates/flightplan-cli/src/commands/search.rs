//! Search command handler for flight and airport lookups.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use flightplan_lib::lookup::{by_airline, by_destination, by_flight_number, by_origin};
use flightplan_lib::{LookupResult, Network};

use crate::commands::OutputOptions;
use crate::output::write_flights;

/// What the search value is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    /// Airport and its departing flights.
    Origin,
    /// Airport and the flights arriving there.
    Destination,
    /// Flights whose airline name contains the value.
    Airline,
    /// The flight with this flight number.
    Flight,
}

/// Run one lookup against the network.
pub fn search<'a>(network: &'a Network, kind: SearchKind, value: &str) -> LookupResult<'a> {
    match kind {
        SearchKind::Origin => by_origin(network, value),
        SearchKind::Destination => by_destination(network, value),
        SearchKind::Airline => LookupResult {
            airport: None,
            flights: by_airline(network, value),
        },
        SearchKind::Flight => LookupResult {
            airport: None,
            flights: by_flight_number(network, value).into_iter().collect(),
        },
    }
}

/// Handle the search subcommand.
pub fn handle_search_command<W: Write>(
    network: &Network,
    kind: SearchKind,
    value: &str,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    let result = search(network, kind, value);
    write_flights(
        out,
        result.airport,
        &result.flights,
        options.format,
        &options.palette,
    )
}
