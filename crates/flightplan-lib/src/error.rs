use std::path::PathBuf;

use thiserror::Error;

use crate::model::FlightId;
use crate::route::RouteId;

/// Convenient result alias for the flight planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a flight references an airport that was never registered.
    #[error("flight {flight} references unknown airport {iata}")]
    UnknownAirport { flight: FlightId, iata: String },

    /// Raised by a strict network when a flight id is inserted twice.
    #[error("flight id {id} is already present in the network")]
    DuplicateFlightId { id: FlightId },

    /// A route references a flight the network does not contain.
    #[error("flight {id} is not part of the loaded network")]
    UnknownFlight { id: FlightId },

    /// No route with this id exists in the session.
    #[error("no route with id {id}")]
    UnknownRoute { id: RouteId },

    /// A route without flights cannot be summarised.
    #[error("route {id} contains no flights")]
    EmptyRoute { id: RouteId },

    /// The flights of a route do not connect end to end.
    #[error("route {id} does not form a connected itinerary")]
    DisconnectedRoute { id: RouteId },

    /// A required data file could not be located.
    #[error("dataset file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// A single CSV record could not be turned into a domain value.
    #[error("invalid record in {file} at line {line}: {message}")]
    InvalidRecord {
        file: String,
        line: u64,
        message: String,
    },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the flight data")]
    ProjectDirsUnavailable,

    /// Raised when a criterion name could not be parsed.
    #[error("unknown route criterion: {value}{}", format_choices(crate::Criterion::NAMES))]
    UnknownCriterion { value: String },

    /// Raised when a sort key or sort algorithm name could not be parsed.
    #[error("unknown sort option: {value}")]
    UnknownSortKey { value: String },

    /// Wrapper for CSV reader and writer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_choices(choices: &[&str]) -> String {
    if choices.is_empty() {
        String::new()
    } else {
        format!(
            ". Expected one of: {}",
            choices
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
