//! Route records and the packaging of a flight sequence into one.

use std::fmt;

use serde::Serialize;

use crate::model::{Flight, FlightId};

/// Identifier assigned to a route by the session that owns it.
pub type RouteId = u32;

/// Immutable route with cached aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    id: RouteId,
    flights: Vec<FlightId>,
    total_duration: u32,
    total_price: f64,
    stopovers: usize,
}

impl Route {
    /// Package an ordered flight sequence, summing its durations and prices.
    pub fn from_flights<'a, I>(id: RouteId, flights: I) -> Self
    where
        I: IntoIterator<Item = &'a Flight>,
    {
        let mut ids = Vec::new();
        let mut total_duration = 0u32;
        let mut total_price = 0.0;
        for flight in flights {
            ids.push(flight.id);
            total_duration = total_duration.saturating_add(flight.duration);
            total_price += flight.price;
        }
        let stopovers = ids.len().saturating_sub(1);

        Self {
            id,
            flights: ids,
            total_duration,
            total_price,
            stopovers,
        }
    }

    /// Rebuild a route from previously stored aggregates.
    pub fn from_parts(
        id: RouteId,
        flights: Vec<FlightId>,
        total_duration: u32,
        total_price: f64,
        stopovers: usize,
    ) -> Self {
        Self {
            id,
            flights,
            total_duration,
            total_price,
            stopovers,
        }
    }

    /// Copy of this route under another identifier.
    #[must_use]
    pub fn with_id(&self, id: RouteId) -> Self {
        Self { id, ..self.clone() }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Flight ids in travel order.
    pub fn flights(&self) -> &[FlightId] {
        &self.flights
    }

    pub fn total_duration(&self) -> u32 {
        self.total_duration
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn stopovers(&self) -> usize {
        self.stopovers
    }

    /// Flight ids joined with `-`, the form used in saved route files.
    pub fn flight_list(&self) -> String {
        self.flights
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route {}: {} flight(s) | {} min | €{:.2} | {} stopover(s) | Flights: {}",
            self.id,
            self.flights.len(),
            self.total_duration,
            self.total_price,
            self.stopovers,
            self.flight_list()
        )
    }
}
