use super::error::{DirectionsError, DirectionsStatus, RouteInputError};
use super::route::{Route, RouteRequest, TravelMode, Waypoint};
use super::service::DirectionsProvider;

/// Origin, destination and stops as the user typed them, plus the last fetched routes.
#[derive(Debug, Clone)]
pub struct RouteComposer {
    pub origin: String,
    pub destination: String,
    stops: Vec<String>,
    pub alternatives: bool,
    routes: Vec<Route>,
    active: Option<usize>,
    error: Option<String>,
}

impl Default for RouteComposer {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            stops: Vec::new(),
            alternatives: true,
            routes: Vec::new(),
            active: None,
            error: None,
        }
    }
}

impl RouteComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Appends an empty stop slot.
    pub fn add_stop(&mut self) {
        self.stops.push(String::new());
    }

    pub fn remove_stop(&mut self, index: usize) {
        if index < self.stops.len() {
            self.stops.remove(index);
        } else {
            log::debug!("No stop at index {} to remove ({} stops)", index, self.stops.len());
        }
    }

    pub fn update_stop(&mut self, index: usize, value: impl Into<String>) {
        match self.stops.get_mut(index) {
            Some(stop) => *stop = value.into(),
            None => log::debug!("No stop at index {} to update", index),
        }
    }

    pub fn has_endpoints(&self) -> bool {
        !self.origin.trim().is_empty() && !self.destination.trim().is_empty()
    }

    /// Builds the directions request. Blank stops are skipped.
    pub fn request(&self) -> Result<RouteRequest, RouteInputError> {
        if self.origin.trim().is_empty() {
            return Err(RouteInputError::MissingOrigin);
        }
        if self.destination.trim().is_empty() {
            return Err(RouteInputError::MissingDestination);
        }

        let waypoints = self
            .stops
            .iter()
            .filter(|stop| !stop.trim().is_empty())
            .map(|stop| Waypoint::stopover(stop.as_str()))
            .collect();

        Ok(RouteRequest {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            waypoints,
            mode: TravelMode::Driving,
            alternatives: self.alternatives,
        })
    }

    /// Fetches routes for `request` and makes the first one active.
    /// On failure the route list is emptied and the user-facing message kept.
    pub fn submit<P: DirectionsProvider + ?Sized>(
        &mut self,
        request: &RouteRequest,
        provider: &P,
    ) -> Result<&Route, DirectionsError> {
        let fetched = provider.directions(request).and_then(|routes| {
            if routes.is_empty() {
                Err(DirectionsError::Status {
                    status: DirectionsStatus::ZeroResults,
                    message: None,
                })
            } else {
                Ok(routes)
            }
        });

        match fetched {
            Ok(routes) => {
                log::info!(
                    "Found {} route(s) from {} to {}",
                    routes.len(),
                    request.origin,
                    request.destination
                );
                self.routes = routes;
                self.active = Some(0);
                self.error = None;
                Ok(&self.routes[0])
            }
            Err(e) => {
                log::error!("Error getting directions: {}", e);
                self.clear_routes();
                self.error = Some(e.user_message().to_string());
                Err(e)
            }
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_route(&self) -> Option<&Route> {
        self.active.and_then(|i| self.routes.get(i))
    }

    /// Picks one of the fetched alternatives. Returns false for an unknown index.
    pub fn select_route(&mut self, index: usize) -> bool {
        if index < self.routes.len() {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_routes(&mut self) {
        self.routes.clear();
        self.active = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
