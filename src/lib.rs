pub mod sdk;

pub use sdk::config::TripConfig;
pub use sdk::routing::{DirectionsProvider, GoogleDirectionsProvider, Route, RouteComposer, RouteLeg};
pub use sdk::trip::{gas_cost, total_distance_miles, FormPhase, GasPrice, TripForm, TripSummary};
pub use sdk::vehicle::{FuelEconomyGovProvider, FuelEconomyProvider, MenuItem, VehicleSelector};
