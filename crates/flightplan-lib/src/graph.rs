use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::error::{Error, Result};
use crate::model::{Airport, Flight, FlightId};

/// How the network treats a flight whose id is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightIdPolicy {
    /// The newest flight replaces the old one in the id index; both stay in
    /// their adjacency lists.
    #[default]
    LastWriteWins,
    /// A repeated id is rejected with [`Error::DuplicateFlightId`].
    Strict,
}

/// Directed multigraph of airports (vertices) and flights (edges).
///
/// Flights are stored once in an append-only arena; the adjacency lists and
/// the id index refer to arena slots so that internal lists are never handed
/// out mutably.
#[derive(Debug, Clone, Default)]
pub struct Network {
    policy: FlightIdPolicy,
    airports: HashMap<String, Airport>,
    flights: Vec<Flight>,
    adjacency: HashMap<String, Vec<usize>>,
    by_id: BTreeMap<FlightId, usize>,
}

impl Network {
    /// Empty network with last-write-wins flight ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty network that refuses duplicate flight ids.
    pub fn strict() -> Self {
        Self {
            policy: FlightIdPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> FlightIdPolicy {
        self.policy
    }

    /// Insert an airport, replacing any airport registered under the same code.
    pub fn add_airport(&mut self, airport: Airport) {
        self.adjacency.entry(airport.iata.clone()).or_default();
        self.airports.insert(airport.iata.clone(), airport);
    }

    /// Insert a flight after checking that both endpoints are registered.
    pub fn add_flight(&mut self, flight: Flight) -> Result<()> {
        for iata in [&flight.origin, &flight.destination] {
            if !self.airports.contains_key(iata) {
                return Err(Error::UnknownAirport {
                    flight: flight.id,
                    iata: iata.clone(),
                });
            }
        }

        if self.by_id.contains_key(&flight.id) {
            match self.policy {
                FlightIdPolicy::Strict => {
                    return Err(Error::DuplicateFlightId { id: flight.id });
                }
                FlightIdPolicy::LastWriteWins => {
                    warn!(
                        "flight id {} inserted twice; id lookups now return {}",
                        flight.id, flight.flight_number
                    );
                }
            }
        }

        let slot = self.flights.len();
        self.adjacency
            .entry(flight.origin.clone())
            .or_default()
            .push(slot);
        self.by_id.insert(flight.id, slot);
        self.flights.push(flight);
        Ok(())
    }

    /// Outgoing flights of an airport; empty for unknown codes.
    pub fn flights_from<'a>(&'a self, iata: &str) -> impl Iterator<Item = &'a Flight> + 'a {
        self.departure_slots(iata)
            .iter()
            .map(move |&slot| &self.flights[slot])
    }

    pub fn airport(&self, iata: &str) -> Option<&Airport> {
        self.airports.get(iata)
    }

    pub fn has_airport(&self, iata: &str) -> bool {
        self.airports.contains_key(iata)
    }

    pub fn flight_by_id(&self, id: FlightId) -> Option<&Flight> {
        self.by_id.get(&id).map(|&slot| &self.flights[slot])
    }

    /// Every flight reachable through the id index, ordered by id.
    pub fn all_flights(&self) -> impl Iterator<Item = &Flight> + '_ {
        self.by_id.values().map(move |&slot| &self.flights[slot])
    }

    /// All registered airports ordered by IATA code.
    pub fn airports(&self) -> Vec<&Airport> {
        let mut airports: Vec<&Airport> = self.airports.values().collect();
        airports.sort_by(|a, b| a.iata.cmp(&b.iata));
        airports
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of distinct flight ids.
    pub fn flight_count(&self) -> usize {
        self.by_id.len()
    }

    pub(crate) fn departure_slots(&self, iata: &str) -> &[usize] {
        self.adjacency
            .get(iata)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn flight_at(&self, slot: usize) -> &Flight {
        &self.flights[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{airport, flight};

    fn two_airports() -> Network {
        let mut network = Network::new();
        network.add_airport(airport(1, "VIE"));
        network.add_airport(airport(2, "LHR"));
        network
    }

    #[test]
    fn airport_with_same_code_is_replaced() {
        let mut network = two_airports();
        network.add_airport(Airport::new(9, "VIE", "Wien", "Österreich", 48.1, 16.5));

        assert_eq!(network.airport_count(), 2);
        assert_eq!(network.airport("VIE").map(|a| a.id), Some(9));
    }

    #[test]
    fn replacing_an_airport_keeps_its_departures() {
        let mut network = two_airports();
        network
            .add_flight(flight(1, "VIE", "LHR", 60, 100.0, (8, 0)))
            .unwrap();
        network.add_airport(airport(7, "VIE"));

        assert_eq!(network.flights_from("VIE").count(), 1);
    }

    #[test]
    fn flight_with_unknown_endpoint_is_rejected() {
        let mut network = two_airports();
        let err = network
            .add_flight(flight(1, "VIE", "XYZ", 60, 100.0, (8, 0)))
            .unwrap_err();

        assert!(matches!(err, Error::UnknownAirport { ref iata, .. } if iata == "XYZ"));
        assert_eq!(network.flights_from("VIE").count(), 0);
        assert_eq!(network.all_flights().count(), 0);
    }

    #[test]
    fn unknown_airport_yields_no_departures() {
        let network = two_airports();
        assert_eq!(network.flights_from("ZZZ").count(), 0);
        assert!(network.airport("ZZZ").is_none());
        assert!(network.flight_by_id(42).is_none());
    }

    #[test]
    fn duplicate_id_keeps_latest_in_index_and_both_edges() {
        let mut network = two_airports();
        network
            .add_flight(flight(1, "VIE", "LHR", 60, 100.0, (8, 0)))
            .unwrap();
        network
            .add_flight(flight(1, "LHR", "VIE", 70, 120.0, (12, 0)))
            .unwrap();

        assert_eq!(network.flight_count(), 1);
        assert_eq!(
            network.flight_by_id(1).map(|f| f.origin.as_str()),
            Some("LHR")
        );
        assert_eq!(network.flights_from("VIE").count(), 1);
        assert_eq!(network.flights_from("LHR").count(), 1);
    }

    #[test]
    fn strict_network_rejects_duplicate_ids() {
        let mut network = Network::strict();
        network.add_airport(airport(1, "VIE"));
        network.add_airport(airport(2, "LHR"));
        network
            .add_flight(flight(1, "VIE", "LHR", 60, 100.0, (8, 0)))
            .unwrap();

        let err = network
            .add_flight(flight(1, "LHR", "VIE", 70, 120.0, (12, 0)))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateFlightId { id: 1 }));
        assert_eq!(network.flights_from("LHR").count(), 0);
    }

    #[test]
    fn multigraph_keeps_parallel_flights() {
        let mut network = two_airports();
        network
            .add_flight(flight(1, "VIE", "LHR", 60, 100.0, (8, 0)))
            .unwrap();
        network
            .add_flight(flight(2, "VIE", "LHR", 65, 90.0, (14, 0)))
            .unwrap();

        let ids: Vec<_> = network.flights_from("VIE").map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
