use super::error::DirectionsError;
use super::route::{Route, RouteRequest};

pub trait DirectionsProvider: Send + Sync {
    /// Resolves a request into zero or more candidate routes, best first.
    fn directions(&self, request: &RouteRequest) -> Result<Vec<Route>, DirectionsError>;
}
