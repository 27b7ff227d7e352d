//! Handlers for the CLI subcommands.
//!
//! `main.rs` parses arguments and loads a [`Session`]; each handler here
//! works against the session and writes its rendering to a caller-supplied
//! writer so the same code serves stdout and tests.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use flightplan_lib::{
    load_network, load_routes, resolve_data_dir, save_routes, DataPaths, Network, RouteBook,
};

use crate::output::OutputFormat;
use crate::terminal::Palette;

pub mod menu;
pub mod route;
pub mod search;
pub mod sort;

/// Rendering choices shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub palette: Palette,
}

/// Loaded network plus the routes of the current session.
#[derive(Debug)]
pub struct Session {
    pub data_dir: PathBuf,
    pub network: Network,
    pub book: RouteBook,
}

impl Session {
    /// Resolve the data directory and load flights and saved routes from it.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let data_dir =
            resolve_data_dir(explicit).context("failed to resolve the flight data directory")?;
        let (network, report) = load_network(&data_dir)
            .with_context(|| format!("failed to load flight data from {}", data_dir.display()))?;
        if report.skipped_records > 0 || report.rejected_flights > 0 {
            warn!(
                "{} record(s) skipped and {} flight(s) rejected while loading",
                report.skipped_records, report.rejected_flights
            );
        }
        let routes = load_routes(&data_dir).with_context(|| {
            format!("failed to load saved routes from {}", data_dir.display())
        })?;

        Ok(Self {
            data_dir,
            network,
            book: RouteBook::from_routes(routes),
        })
    }

    /// Location of the saved route file.
    pub fn routes_path(&self) -> PathBuf {
        DataPaths::in_dir(&self.data_dir).routes
    }

    /// Write every session route to `routes.csv`.
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.routes_path();
        save_routes(&path, self.book.routes())
            .with_context(|| format!("failed to save routes to {}", path.display()))?;
        Ok(path)
    }
}
