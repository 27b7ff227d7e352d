use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::graph::Network;
use crate::model::{minute_of_day, Flight};
use crate::route::Route;
use crate::routing::{is_valid_connection, Criterion, PathTotals, SearchLimits};

/// Find the best route between two airports under the default limits.
///
/// Returns `None` when either airport is unknown or no path satisfies the
/// stopover cap and the connection rule. The returned route carries id 0;
/// callers assign their own identifiers.
pub fn find_route(
    network: &Network,
    origin: &str,
    destination: &str,
    criterion: Criterion,
) -> Option<Route> {
    find_route_with_limits(
        network,
        origin,
        destination,
        criterion,
        &SearchLimits::default(),
    )
}

/// Best-first search over partial paths.
///
/// States are popped in ascending cost order. A state at the destination is
/// recorded as a candidate and never expanded; other states are settled per
/// (airport, flight count, arrival time-of-day) and expanded through every
/// departing flight that forms a valid connection. Paths never grow past
/// `limits.max_flights()`, which also bounds the search on cyclic networks.
pub fn find_route_with_limits(
    network: &Network,
    origin: &str,
    destination: &str,
    criterion: Criterion,
    limits: &SearchLimits,
) -> Option<Route> {
    let origin = network.airport(origin)?.iata.as_str();
    let destination = network.airport(destination)?.iata.as_str();

    let mut queue = BinaryHeap::new();
    let mut settled: HashMap<SettleKey<'_>, f64> = HashMap::new();
    let mut best: Option<QueueEntry<'_>> = None;
    let mut sequence = 0usize;
    let mut popped = 0usize;
    let mut expanded = 0usize;

    queue.push(QueueEntry::new(
        SearchState {
            airport: origin,
            path: Vec::new(),
            totals: PathTotals::default(),
        },
        criterion,
        sequence,
    ));

    while let Some(entry) = queue.pop() {
        popped += 1;
        let state = &entry.state;

        if state.airport == destination {
            let improves = best
                .as_ref()
                .map(|current| entry.cost < current.cost)
                .unwrap_or(true);
            if !state.path.is_empty() && improves {
                best = Some(entry);
            }
            continue;
        }

        let last = state.path.last().map(|&slot| network.flight_at(slot));
        let key = SettleKey {
            airport: state.airport,
            flights: state.path.len(),
            arrival: last.map(|flight| minute_of_day(flight.arrival())),
        };
        if settled
            .get(&key)
            .is_some_and(|&cost| FloatOrd(cost) <= entry.cost)
        {
            continue;
        }
        settled.insert(key, entry.cost.0);

        // Full paths are settled but never expanded, so none grows past the cap.
        if state.path.len() >= limits.max_flights() {
            continue;
        }
        expanded += 1;

        for &slot in network.departure_slots(state.airport) {
            let flight = network.flight_at(slot);
            if !is_valid_connection(last, flight, limits) {
                continue;
            }

            let mut path = Vec::with_capacity(state.path.len() + 1);
            path.extend_from_slice(&state.path);
            path.push(slot);

            sequence += 1;
            queue.push(QueueEntry::new(
                SearchState {
                    airport: flight.destination.as_str(),
                    path,
                    totals: state.totals.extend(flight),
                },
                criterion,
                sequence,
            ));
        }
    }

    debug!(
        "{} search {} -> {}: {} states popped, {} expanded, {} settled",
        criterion,
        origin,
        destination,
        popped,
        expanded,
        settled.len()
    );

    best.map(|entry| {
        let flights: Vec<&Flight> = entry
            .state
            .path
            .iter()
            .map(|&slot| network.flight_at(slot))
            .collect();
        Route::from_flights(0, flights)
    })
}

/// Partial path ending at `airport`.
#[derive(Debug, Clone)]
struct SearchState<'a> {
    airport: &'a str,
    /// Arena slots of the flights taken, in travel order.
    path: Vec<usize>,
    totals: PathTotals,
}

/// Two states with the same key have the same set of valid continuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SettleKey<'a> {
    airport: &'a str,
    flights: usize,
    arrival: Option<u32>,
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        // -0.0 and 0.0 are the same cost.
        (self.0 + 0.0).total_cmp(&(other.0 + 0.0))
    }
}

#[derive(Debug)]
struct QueueEntry<'a> {
    cost: FloatOrd,
    sequence: usize,
    state: SearchState<'a>,
}

impl<'a> QueueEntry<'a> {
    fn new(state: SearchState<'a>, criterion: Criterion, sequence: usize) -> Self {
        Self {
            cost: FloatOrd(criterion.cost(&state.totals)),
            sequence,
            state,
        }
    }
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs pop in insertion order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
