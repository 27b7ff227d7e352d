//! Read-only flight and airport queries over a [`Network`].

use serde::Serialize;

use crate::graph::Network;
use crate::model::{Airport, Flight};

/// An airport together with the flights associated with it by a query.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResult<'a> {
    pub airport: Option<&'a Airport>,
    pub flights: Vec<&'a Flight>,
}

impl LookupResult<'_> {
    fn empty() -> Self {
        Self {
            airport: None,
            flights: Vec::new(),
        }
    }

    /// True when an airport or at least one flight was found.
    pub fn has_results(&self) -> bool {
        self.airport.is_some() || !self.flights.is_empty()
    }
}

/// Normalise user input into the form IATA codes are stored in.
pub fn normalize_iata(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}

/// The airport and all flights departing from it.
pub fn by_origin<'a>(network: &'a Network, iata: &str) -> LookupResult<'a> {
    let code = normalize_iata(iata);
    let Some(airport) = network.airport(&code) else {
        return LookupResult::empty();
    };
    LookupResult {
        airport: Some(airport),
        flights: network.flights_from(&code).collect(),
    }
}

/// The airport and all flights arriving at it.
pub fn by_destination<'a>(network: &'a Network, iata: &str) -> LookupResult<'a> {
    let code = normalize_iata(iata);
    let Some(airport) = network.airport(&code) else {
        return LookupResult::empty();
    };
    LookupResult {
        airport: Some(airport),
        flights: network
            .all_flights()
            .filter(|flight| flight.destination.eq_ignore_ascii_case(&code))
            .collect(),
    }
}

/// Flights whose airline name contains `fragment`, ignoring case.
pub fn by_airline<'a>(network: &'a Network, fragment: &str) -> Vec<&'a Flight> {
    let needle = fragment.trim().to_lowercase();
    network
        .all_flights()
        .filter(|flight| flight.airline.to_lowercase().contains(&needle))
        .collect()
}

/// The lowest-id flight with the given flight number, ignoring case.
pub fn by_flight_number<'a>(network: &'a Network, number: &str) -> Option<&'a Flight> {
    let number = number.trim();
    network
        .all_flights()
        .find(|flight| flight.flight_number.eq_ignore_ascii_case(number))
}
