pub mod composer;
pub mod error;
pub mod provider;
pub mod route;
pub mod service;

pub use composer::RouteComposer;
pub use error::{DirectionsError, DirectionsStatus, RouteInputError};
pub use provider::GoogleDirectionsProvider;
pub use route::{Route, RouteLeg, RouteRequest, TravelMode, Waypoint};
pub use service::DirectionsProvider;
