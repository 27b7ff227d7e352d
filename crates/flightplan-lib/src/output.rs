use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::Network;
use crate::model::FlightId;
use crate::route::{Route, RouteId};
use crate::routing::{layover_minutes, Criterion};

/// One flight within a summarised route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegSummary {
    pub index: usize,
    pub flight_id: FlightId,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub duration: u32,
    pub price: f64,
    /// Minutes spent waiting before this leg; absent for the first leg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layover: Option<u32>,
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub id: RouteId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterion: Option<Criterion>,
    pub origin: String,
    pub destination: String,
    pub total_duration: u32,
    pub total_price: f64,
    pub stopovers: usize,
    pub legs: Vec<LegSummary>,
}

impl RouteSummary {
    /// Resolve every flight of `route` against `network`.
    pub fn from_route(network: &Network, route: &Route, criterion: Option<Criterion>) -> Result<Self> {
        if route.flights().is_empty() {
            return Err(Error::EmptyRoute { id: route.id() });
        }

        let flights = route
            .flights()
            .iter()
            .map(|id| network.flight_by_id(*id).ok_or(Error::UnknownFlight { id: *id }))
            .collect::<Result<Vec<_>>>()?;
        if flights
            .windows(2)
            .any(|pair| pair[0].destination != pair[1].origin)
        {
            return Err(Error::DisconnectedRoute { id: route.id() });
        }

        let legs = flights
            .iter()
            .enumerate()
            .map(|(index, flight)| LegSummary {
                index: index + 1,
                flight_id: flight.id,
                airline: flight.airline.clone(),
                flight_number: flight.flight_number.clone(),
                origin: flight.origin.clone(),
                destination: flight.destination.clone(),
                departure: flight.departure.format("%H:%M").to_string(),
                arrival: flight.arrival().format("%H:%M").to_string(),
                duration: flight.duration,
                price: flight.price,
                layover: index
                    .checked_sub(1)
                    .map(|previous| layover_minutes(flights[previous], flight)),
            })
            .collect::<Vec<_>>();

        let origin = legs.first().map(|leg| leg.origin.clone()).unwrap_or_default();
        let destination = legs
            .last()
            .map(|leg| leg.destination.clone())
            .unwrap_or_default();

        Ok(Self {
            id: route.id(),
            criterion,
            origin,
            destination,
            total_duration: route.total_duration(),
            total_price: route.total_price(),
            stopovers: route.stopovers(),
            legs,
        })
    }
}

/// Write routes as CSV with a header row; prices keep two decimals.
pub fn write_routes_csv<W: Write>(writer: W, routes: &[Route]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["id", "flights", "totalDuration", "totalPrice", "stopovers"])?;
    for route in routes {
        csv_writer.write_record([
            route.id().to_string(),
            route.flight_list(),
            route.total_duration().to_string(),
            format!("{:.2}", route.total_price()),
            route.stopovers().to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Replace the file at `path` with `routes`, creating parent directories.
pub fn save_routes(path: &Path, routes: &[Route]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_routes_csv(File::create(path)?, routes)?;
    info!("saved {} route(s) to {}", routes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::find_route;
    use crate::test_helpers::{airport, flight, vienna_network};

    #[test]
    fn summary_resolves_legs_and_layovers() {
        let network = vienna_network();
        let route = find_route(&network, "VIE", "JFK", Criterion::Cheapest).expect("route");
        let summary = RouteSummary::from_route(&network, &route, Some(Criterion::Cheapest))
            .expect("summary");

        assert_eq!(summary.origin, "VIE");
        assert_eq!(summary.destination, "JFK");
        assert_eq!(summary.legs.len(), 2);
        assert_eq!(summary.legs[0].layover, None);
        assert_eq!(summary.legs[0].arrival, "09:00");
        assert_eq!(summary.legs[1].layover, Some(60));
        assert_eq!(summary.legs[0].flight_number, "OS100");
        assert_eq!(summary.total_price, 500.0);
    }

    #[test]
    fn summary_rejects_unknown_flights() {
        let network = vienna_network();
        let route = Route::from_parts(1, vec![1, 99], 0, 0.0, 1);
        let err = RouteSummary::from_route(&network, &route, None).unwrap_err();
        assert!(matches!(err, Error::UnknownFlight { id: 99 }));
    }

    #[test]
    fn summary_rejects_legs_that_do_not_connect() {
        let mut network = Network::new();
        network.add_airport(airport(1, "VIE"));
        network.add_airport(airport(2, "LHR"));
        network.add_airport(airport(3, "JFK"));
        network
            .add_flight(flight(1, "VIE", "LHR", 60, 100.0, (8, 0)))
            .expect("first flight");
        network
            .add_flight(flight(1, "LHR", "JFK", 360, 400.0, (10, 0)))
            .expect("reused id");

        let route = find_route(&network, "VIE", "JFK", Criterion::Cheapest).expect("route");
        assert_eq!(route.flights(), &[1, 1]);

        let err = RouteSummary::from_route(&network, &route, None).unwrap_err();
        assert!(matches!(err, Error::DisconnectedRoute { .. }));
    }

    #[test]
    fn routes_csv_uses_two_decimal_prices() {
        let routes = vec![
            Route::from_parts(1, vec![1, 2], 420, 500.0, 1),
            Route::from_parts(2, vec![3], 500, 549.999, 0),
        ];
        let mut buffer = Vec::new();
        write_routes_csv(&mut buffer, &routes).expect("write");

        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(
            text,
            "id,flights,totalDuration,totalPrice,stopovers\n1,1-2,420,500.00,1\n2,3,500,550.00,0\n"
        );
    }

    #[test]
    fn saved_routes_load_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let routes = vec![Route::from_parts(4, vec![1, 2], 420, 500.0, 1)];
        save_routes(&dir.path().join("routes.csv"), &routes).expect("save");

        let loaded = crate::dataset::load_routes(dir.path()).expect("load");
        assert_eq!(loaded, routes);
    }
}
