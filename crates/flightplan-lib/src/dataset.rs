//! Loading airports, flights and saved routes from CSV files.
//!
//! Every file carries a header row. A record that cannot be parsed is logged
//! and skipped so that one malformed line never aborts a load.

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::Network;
use crate::model::{parse_time_of_day, Airport, Flight, FlightId};
use crate::route::{Route, RouteId};

/// File name of the airport table inside a data directory.
pub const AIRPORTS_FILENAME: &str = "airports.csv";
/// File name of the flight table inside a data directory.
pub const FLIGHTS_FILENAME: &str = "flights.csv";
/// File name of the saved route table inside a data directory.
pub const ROUTES_FILENAME: &str = "routes.csv";

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "FLIGHTPLAN_DATA_DIR";

/// Longest flight duration accepted from `flights.csv`, in minutes.
pub const MAX_FLIGHT_MINUTES: u32 = 24 * 60;

/// Locations of the three data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub airports: PathBuf,
    pub flights: PathBuf,
    pub routes: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            airports: dir.join(AIRPORTS_FILENAME),
            flights: dir.join(FLIGHTS_FILENAME),
            routes: dir.join(ROUTES_FILENAME),
        }
    }
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "flightplan", "flightplan")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Pick the data directory: explicit path, then `FLIGHTPLAN_DATA_DIR`, then
/// the platform default.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(value) = env::var_os(DATA_DIR_ENV) {
        if !value.is_empty() {
            debug!("using data directory from {}", DATA_DIR_ENV);
            return Ok(PathBuf::from(value));
        }
    }
    default_data_dir()
}

/// Records parsed from one file, with the number of lines that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Totals gathered while building a network from a data directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub airports: usize,
    pub flights: usize,
    /// Lines that could not be parsed in either file.
    pub skipped_records: usize,
    /// Parsed flights the network refused.
    pub rejected_flights: usize,
}

#[derive(Debug, Deserialize)]
struct AirportRecord {
    id: i64,
    iata: String,
    city: String,
    country: String,
    latitude: f64,
    longitude: f64,
}

impl From<AirportRecord> for Airport {
    fn from(record: AirportRecord) -> Self {
        Airport::new(
            record.id,
            record.iata,
            record.city,
            record.country,
            record.latitude,
            record.longitude,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlightRecord {
    id: FlightId,
    origin: String,
    destination: String,
    airline: String,
    flight_number: String,
    duration: u32,
    price: f64,
    departure_time: String,
}

impl TryFrom<FlightRecord> for Flight {
    type Error = String;

    fn try_from(record: FlightRecord) -> std::result::Result<Self, Self::Error> {
        let departure = parse_time_of_day(&record.departure_time)
            .ok_or_else(|| format!("invalid departure time '{}'", record.departure_time))?;
        if record.duration > MAX_FLIGHT_MINUTES {
            return Err(format!(
                "duration {} exceeds {MAX_FLIGHT_MINUTES} minutes",
                record.duration
            ));
        }
        Ok(Flight::new(
            record.id,
            record.origin,
            record.destination,
            record.airline,
            record.flight_number,
            record.duration,
            record.price,
            departure,
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteRecord {
    id: RouteId,
    flights: String,
    total_duration: u32,
    total_price: f64,
    stopovers: usize,
}

impl TryFrom<RouteRecord> for Route {
    type Error = String;

    fn try_from(record: RouteRecord) -> std::result::Result<Self, Self::Error> {
        let flights = record
            .flights
            .split('-')
            .map(|part| {
                part.trim()
                    .parse::<FlightId>()
                    .map_err(|err| format!("invalid flight id '{}': {err}", part.trim()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Route::from_parts(
            record.id,
            flights,
            record.total_duration,
            record.total_price,
            record.stopovers,
        ))
    }
}

/// Parse an airport table.
pub fn read_airports<R: Read>(reader: R) -> Result<Parsed<Airport>> {
    read_table::<AirportRecord, Airport, _>(reader, AIRPORTS_FILENAME, |record| Ok(record.into()))
}

/// Parse a flight table.
pub fn read_flights<R: Read>(reader: R) -> Result<Parsed<Flight>> {
    read_table::<FlightRecord, Flight, _>(reader, FLIGHTS_FILENAME, Flight::try_from)
}

/// Parse a saved route table.
pub fn read_routes<R: Read>(reader: R) -> Result<Parsed<Route>> {
    read_table::<RouteRecord, Route, _>(reader, ROUTES_FILENAME, Route::try_from)
}

fn read_table<T, U, R>(
    reader: R,
    file: &str,
    convert: impl Fn(T) -> std::result::Result<U, String>,
) -> Result<Parsed<U>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut raw = StringRecord::new();
    loop {
        match csv_reader.read_record(&mut raw) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                let line = err.position().map(|p| p.line()).unwrap_or_default();
                warn!("{}", record_error(file, line, err.to_string()));
                skipped += 1;
                continue;
            }
        }

        let line = raw.position().map(|p| p.line()).unwrap_or_default();
        let parsed = raw
            .deserialize::<T>(Some(&headers))
            .map_err(|err| err.to_string())
            .and_then(&convert);
        match parsed {
            Ok(value) => records.push(value),
            Err(message) => {
                warn!("{}", record_error(file, line, message));
                skipped += 1;
            }
        }
    }

    debug!(
        "parsed {} records from {} ({} skipped)",
        records.len(),
        file,
        skipped
    );
    Ok(Parsed { records, skipped })
}

fn record_error(file: &str, line: u64, message: String) -> Error {
    Error::InvalidRecord {
        file: file.to_string(),
        line,
        message,
    }
}

fn open_required(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(File::open(path)?)
}

/// Build a network from parsed airports and flights.
///
/// Flights referencing unregistered airports are logged and skipped; the
/// rest of the load continues.
pub fn build_network(
    network: &mut Network,
    airports: Vec<Airport>,
    flights: Vec<Flight>,
) -> LoadReport {
    let mut report = LoadReport::default();
    for airport in airports {
        network.add_airport(airport);
    }
    report.airports = network.airport_count();

    for flight in flights {
        let number = flight.flight_number.clone();
        match network.add_flight(flight) {
            Ok(()) => report.flights += 1,
            Err(err) => {
                warn!("flight {} could not be loaded: {}", number, err);
                report.rejected_flights += 1;
            }
        }
    }
    report
}

/// Load `airports.csv` and `flights.csv` from `dir` into a new network.
///
/// Flight ids must be unique: a repeated id is rejected and the first
/// record with that id is kept.
pub fn load_network(dir: &Path) -> Result<(Network, LoadReport)> {
    let paths = DataPaths::in_dir(dir);
    let airports = read_airports(open_required(&paths.airports)?)?;
    let flights = read_flights(open_required(&paths.flights)?)?;

    let mut network = Network::strict();
    let mut report = build_network(&mut network, airports.records, flights.records);
    report.skipped_records = airports.skipped + flights.skipped;

    info!(
        "loaded {} airports and {} flights from {}",
        report.airports,
        report.flights,
        dir.display()
    );
    Ok((network, report))
}

/// Load previously saved routes; a missing `routes.csv` yields no routes.
pub fn load_routes(dir: &Path) -> Result<Vec<Route>> {
    let path = DataPaths::in_dir(dir).routes;
    if !path.exists() {
        debug!("no saved routes at {}", path.display());
        return Ok(Vec::new());
    }
    let parsed = read_routes(File::open(&path)?)?;
    Ok(parsed.records)
}
