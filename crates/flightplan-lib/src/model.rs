//! Immutable airport and flight entities.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};
use serde::Serialize;

/// Numeric identifier for an airport record.
pub type AirportId = i64;

/// Numeric identifier for a flight record.
pub type FlightId = i64;

/// Airport (graph vertex), keyed by its IATA code within a network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub id: AirportId,
    pub iata: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(
        id: AirportId,
        iata: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            iata: iata.into(),
            city: city.into(),
            country: country.into(),
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}, {} [Lat: {:.2}, Lon: {:.2}]",
            self.iata, self.id, self.city, self.country, self.latitude, self.longitude
        )
    }
}

/// Directed flight between two airports.
///
/// A flight recurs every day at the same departure time; there is no date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    pub id: FlightId,
    pub origin: String,
    pub destination: String,
    pub airline: String,
    pub flight_number: String,
    /// Block time in minutes.
    pub duration: u32,
    pub price: f64,
    #[serde(serialize_with = "serialize_time_of_day")]
    pub departure: NaiveTime,
}

impl Flight {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: FlightId,
        origin: impl Into<String>,
        destination: impl Into<String>,
        airline: impl Into<String>,
        flight_number: impl Into<String>,
        duration: u32,
        price: f64,
        departure: NaiveTime,
    ) -> Self {
        Self {
            id,
            origin: origin.into(),
            destination: destination.into(),
            airline: airline.into(),
            flight_number: flight_number.into(),
            duration,
            price,
            departure,
        }
    }

    /// Arrival time-of-day, wrapping past midnight.
    pub fn arrival(&self) -> NaiveTime {
        let (arrival, _) = self
            .departure
            .overflowing_add_signed(Duration::minutes(i64::from(self.duration)));
        arrival
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} -> {} | {} min | €{:.2} | Dep: {}",
            self.airline,
            self.flight_number,
            self.origin,
            self.destination,
            self.duration,
            self.price,
            self.departure.format("%H:%M")
        )
    }
}

/// Minutes elapsed since midnight for a time-of-day.
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse a departure time written as `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

fn serialize_time_of_day<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&time.format("%H:%M"))
}
