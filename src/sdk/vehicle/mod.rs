pub mod error;
pub mod provider;
pub mod selector;
pub mod service;
pub mod types;

pub use error::LookupError;
pub use provider::FuelEconomyGovProvider;
pub use selector::{LookupOutcome, PendingLookup, VehicleQuery, VehicleSelector};
pub use service::FuelEconomyProvider;
pub use types::{MenuItem, VehicleSelection};
