//! Route criteria and search limits.
//!
//! This module provides:
//! - [`Criterion`] - the optimisation objective that selects a cost function
//! - [`SearchLimits`] - stopover cap and minimum connection time
//! - [`is_valid_connection`] - the daily-recurring layover rule
//!
//! The search itself lives in [`crate::path`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::model::{minute_of_day, Flight};

/// Maximum number of intermediate landings (3 stopovers = 4 flights).
pub const MAX_STOPOVERS: usize = 3;

/// Minimum layover between two consecutive flights, in minutes.
pub const MIN_CONNECTION_MINUTES: u32 = 20;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Optimisation objective for route search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Criterion {
    /// Minimise the summed ticket price.
    #[default]
    Cheapest,
    /// Minimise the summed flight duration.
    Fastest,
    /// Maximise the summed flight duration.
    Slowest,
    /// Minimise the number of flights.
    FewestStopovers,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Cheapest,
        Criterion::Fastest,
        Criterion::Slowest,
        Criterion::FewestStopovers,
    ];

    pub const NAMES: &'static [&'static str] =
        &["cheapest", "fastest", "slowest", "fewest-stopovers"];

    /// Cost of a partial path under this criterion; lower is better.
    ///
    /// Slowest negates the duration so that a single ascending order serves
    /// all four criteria.
    pub fn cost(self, totals: &PathTotals) -> f64 {
        match self {
            Criterion::Cheapest => totals.price,
            Criterion::Fastest => f64::from(totals.duration),
            Criterion::Slowest => -f64::from(totals.duration),
            Criterion::FewestStopovers => totals.flights as f64,
        }
    }

    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Cheapest => "Cheapest route",
            Criterion::Fastest => "Fastest route",
            Criterion::Slowest => "Slowest route",
            Criterion::FewestStopovers => "Fewest stopovers",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Criterion::Cheapest => "cheapest",
            Criterion::Fastest => "fastest",
            Criterion::Slowest => "slowest",
            Criterion::FewestStopovers => "fewest-stopovers",
        };
        f.write_str(value)
    }
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "cheapest" | "price" => Ok(Criterion::Cheapest),
            "fastest" | "duration" => Ok(Criterion::Fastest),
            "slowest" | "duration-max" => Ok(Criterion::Slowest),
            "fewest-stopovers" | "stopovers" => Ok(Criterion::FewestStopovers),
            _ => Err(Error::UnknownCriterion {
                value: value.to_string(),
            }),
        }
    }
}

/// Running sums over a partial path. Empty paths cost 0 under every criterion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathTotals {
    pub price: f64,
    pub duration: u32,
    pub flights: usize,
}

impl PathTotals {
    /// Totals after appending `flight`.
    #[must_use]
    pub fn extend(self, flight: &Flight) -> Self {
        Self {
            price: self.price + flight.price,
            duration: self.duration.saturating_add(flight.duration),
            flights: self.flights + 1,
        }
    }
}

/// Bounds applied while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stopover cap; a path holds at most `max_stopovers + 1` flights.
    pub max_stopovers: usize,
    /// Minimum layover, in minutes.
    pub min_connection_minutes: u32,
}

impl SearchLimits {
    pub fn max_flights(&self) -> usize {
        self.max_stopovers + 1
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_stopovers: MAX_STOPOVERS,
            min_connection_minutes: MIN_CONNECTION_MINUTES,
        }
    }
}

/// Layover in minutes between arriving on `previous` and departing on `next`.
///
/// A departure earlier in the day than the arrival is taken to be the next
/// day's occurrence of that flight.
pub fn layover_minutes(previous: &Flight, next: &Flight) -> u32 {
    let arrival = minute_of_day(previous.arrival());
    let mut departure = minute_of_day(next.departure);
    if departure < arrival {
        departure += MINUTES_PER_DAY;
    }
    departure - arrival
}

/// Whether `next` may follow `previous` under the given minimum layover.
/// The first flight of a path (`previous == None`) is always valid.
pub fn is_valid_connection(previous: Option<&Flight>, next: &Flight, limits: &SearchLimits) -> bool {
    match previous {
        None => true,
        Some(previous) => layover_minutes(previous, next) >= limits.min_connection_minutes,
    }
}
