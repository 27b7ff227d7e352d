//! Shared fixture helpers for the integration tests.

use std::path::PathBuf;

use chrono::NaiveTime;
use flightplan_lib::{load_network, Airport, Flight, FlightId, Network};

/// Directory holding `airports.csv`, `flights.csv` and `routes.csv`.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The fixture network loaded from [`fixtures_dir`].
#[allow(dead_code)]
pub fn fixture_network() -> Network {
    let (network, report) = load_network(&fixtures_dir()).expect("fixture dataset loads");
    assert_eq!(report.skipped_records, 0, "fixtures should parse cleanly");
    network
}

#[allow(dead_code)]
pub fn airport(id: i64, iata: &str) -> Airport {
    Airport::new(id, iata, iata, "Testland", 0.0, 0.0)
}

#[allow(dead_code)]
pub fn flight(
    id: FlightId,
    origin: &str,
    destination: &str,
    duration: u32,
    price: f64,
    (hour, minute): (u32, u32),
) -> Flight {
    Flight::new(
        id,
        origin,
        destination,
        "Test Air",
        format!("TA{id}"),
        duration,
        price,
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time"),
    )
}

/// Ids of the route's flights, for compact assertions.
#[allow(dead_code)]
pub fn ids(route: &flightplan_lib::Route) -> Vec<FlightId> {
    route.flights().to_vec()
}
