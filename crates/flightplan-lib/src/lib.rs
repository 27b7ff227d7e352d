//! Flight planner library entry points.
//!
//! This crate loads airports and flights from CSV files into a directed
//! flight network, searches it for the best connection under a chosen
//! criterion, and orders, looks up and stores the resulting routes.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod book;
pub mod compare;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod lookup;
pub mod model;
pub mod output;
pub mod path;
pub mod route;
pub mod routing;
pub mod sort;

#[cfg(test)]
mod test_helpers;

pub use book::RouteBook;
pub use compare::SortKey;
pub use dataset::{load_network, load_routes, resolve_data_dir, DataPaths, LoadReport};
pub use error::{Error, Result};
pub use graph::{FlightIdPolicy, Network};
pub use lookup::LookupResult;
pub use model::{Airport, AirportId, Flight, FlightId};
pub use output::{save_routes, write_routes_csv, LegSummary, RouteSummary};
pub use path::{find_route, find_route_with_limits};
pub use route::{Route, RouteId};
pub use routing::{Criterion, SearchLimits, MAX_STOPOVERS, MIN_CONNECTION_MINUTES};
pub use sort::SortAlgorithm;
