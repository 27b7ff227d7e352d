//! Routes collected during one planning session.

use crate::error::{Error, Result};
use crate::route::{Route, RouteId};

/// Ordered collection of routes with session-unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteBook {
    routes: Vec<Route>,
}

impl RouteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously saved routes, keeping their ids.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The id the next added route receives: one past the largest id in use.
    pub fn next_id(&self) -> RouteId {
        self.routes
            .iter()
            .map(Route::id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Store `route` under a fresh id and return the stored copy.
    pub fn add(&mut self, route: &Route) -> &Route {
        let stored = route.with_id(self.next_id());
        self.routes.push(stored);
        &self.routes[self.routes.len() - 1]
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|route| route.id() == id)
    }

    /// Copies of the routes with the given ids, in request order.
    pub fn select(&self, ids: &[RouteId]) -> Result<Vec<Route>> {
        ids.iter()
            .map(|id| self.get(*id).cloned().ok_or(Error::UnknownRoute { id: *id }))
            .collect()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
