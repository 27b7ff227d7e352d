// Test-only helpers for `flightplan-lib` unit tests
#![allow(dead_code)]
use chrono::NaiveTime;

use crate::graph::Network;
use crate::model::{Airport, Flight, FlightId};

/// Airport with placeholder city and coordinates.
pub fn airport(id: i64, iata: &str) -> Airport {
    Airport::new(id, iata, format!("{iata} City"), "Testland", 0.0, 0.0)
}

/// Flight with a generated airline and flight number.
pub fn flight(
    id: FlightId,
    origin: &str,
    destination: &str,
    duration: u32,
    price: f64,
    departure: (u32, u32),
) -> Flight {
    FlightBuilder::new(id, origin, destination)
        .duration(duration)
        .price(price)
        .departs(departure.0, departure.1)
        .build()
}

/// Builder to create `Flight` instances in tests with sensible defaults.
pub struct FlightBuilder {
    flight: Flight,
}

impl FlightBuilder {
    #[must_use]
    pub fn new(id: FlightId, origin: &str, destination: &str) -> Self {
        Self {
            flight: Flight {
                id,
                origin: origin.to_string(),
                destination: destination.to_string(),
                airline: "Test Air".to_string(),
                flight_number: format!("TA{id}"),
                duration: 60,
                price: 100.0,
                departure: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            },
        }
    }

    pub fn airline(mut self, airline: &str) -> Self {
        self.flight.airline = airline.to_string();
        self
    }

    pub fn number(mut self, number: &str) -> Self {
        self.flight.flight_number = number.to_string();
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.flight.duration = minutes;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.flight.price = price;
        self
    }

    pub fn departs(mut self, hour: u32, minute: u32) -> Self {
        self.flight.departure = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        self
    }

    pub fn build(self) -> Flight {
        self.flight
    }
}

/// The three-airport network used across the search tests:
/// VIE→LHR (60 min, 08:00, 100), LHR→JFK (360 min, 10:00, 400),
/// VIE→JFK (500 min, 09:00, 550).
pub fn vienna_network() -> Network {
    let mut network = Network::new();
    network.add_airport(Airport::new(1, "VIE", "Vienna", "Austria", 48.2, 16.3));
    network.add_airport(Airport::new(2, "JFK", "New York", "USA", 40.6, -73.8));
    network.add_airport(Airport::new(3, "LHR", "London", "UK", 51.5, -0.4));

    for flight in [
        FlightBuilder::new(1, "VIE", "LHR")
            .airline("Austrian")
            .number("OS100")
            .duration(60)
            .price(100.0)
            .departs(8, 0)
            .build(),
        FlightBuilder::new(2, "LHR", "JFK")
            .airline("British Airways")
            .number("BA150")
            .duration(360)
            .price(400.0)
            .departs(10, 0)
            .build(),
        FlightBuilder::new(3, "VIE", "JFK")
            .airline("Austrian")
            .number("OS101")
            .duration(500)
            .price(550.0)
            .departs(9, 0)
            .build(),
    ] {
        network.add_flight(flight).expect("fixture airports registered");
    }
    network
}
