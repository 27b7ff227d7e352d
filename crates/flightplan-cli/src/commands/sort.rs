//! Sort command handler for ordering saved routes.

use std::io::Write;

use anyhow::{bail, Context, Result};
use tracing::warn;

use flightplan_lib::{Route, RouteBook, RouteId, SortAlgorithm, SortKey};

use crate::commands::OutputOptions;
use crate::output::write_routes;

/// Pick the routes to sort: the requested ids in order, or every route.
///
/// Repeated ids are ignored after their first occurrence.
pub fn select_routes(book: &RouteBook, ids: &[RouteId]) -> Result<Vec<Route>> {
    if ids.is_empty() {
        return Ok(book.routes().to_vec());
    }
    let mut unique: Vec<RouteId> = Vec::with_capacity(ids.len());
    for id in ids {
        if unique.contains(id) {
            warn!("route {} selected more than once", id);
        } else {
            unique.push(*id);
        }
    }
    book.select(&unique).context("cannot sort the requested routes")
}

/// Handle the sort subcommand.
pub fn handle_sort_command<W: Write>(
    book: &RouteBook,
    ids: &[RouteId],
    key: SortKey,
    algorithm: SortAlgorithm,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()> {
    if book.is_empty() {
        bail!("there are no saved routes to sort");
    }
    let mut routes = select_routes(book, ids)?;
    algorithm.sort_by(&mut routes, key.comparator());

    let title = format!("Sorted by {} using {}", key.label(), algorithm.label());
    write_routes(out, &title, &routes, options.format, &options.palette)
}
