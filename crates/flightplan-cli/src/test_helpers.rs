// Test utilities used across `flightplan-cli` unit tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use flightplan_lib::model::parse_time_of_day;
use flightplan_lib::{Airport, Flight, Network, RouteBook};

use crate::commands::Session;

/// Three airports and three flights:
/// VIE->LHR (OS100, 08:00, 60 min, 100), LHR->JFK (BA150, 10:00, 360 min, 400),
/// VIE->JFK (OS101, 09:00, 500 min, 550).
pub fn network() -> Network {
    let mut network = Network::new();
    for (id, iata, city) in [(1, "VIE", "Vienna"), (2, "LHR", "London"), (3, "JFK", "New York")] {
        network.add_airport(Airport::new(id, iata, city, "Testland", 0.0, 0.0));
    }
    let flights = [
        (1, "VIE", "LHR", "Austrian", "OS100", 60, 100.0, "08:00"),
        (2, "LHR", "JFK", "British Airways", "BA150", 360, 400.0, "10:00"),
        (3, "VIE", "JFK", "Austrian", "OS101", 500, 550.0, "09:00"),
    ];
    for (id, origin, destination, airline, number, duration, price, departs) in flights {
        network
            .add_flight(Flight::new(
                id,
                origin,
                destination,
                airline,
                number,
                duration,
                price,
                parse_time_of_day(departs).expect("valid time"),
            ))
            .expect("airports registered");
    }
    network
}

/// Session over [`network`] with no saved routes, rooted in the temp dir.
pub fn session() -> Session {
    Session {
        data_dir: std::env::temp_dir(),
        network: network(),
        book: RouteBook::new(),
    }
}
