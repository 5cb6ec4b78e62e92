pub mod cost;
pub mod form;
pub mod gas_price;
pub mod summary;

pub use cost::{gas_cost, total_distance_miles, CostError, TripEstimate};
pub use form::{CalculateError, FormPhase, TripForm};
pub use gas_price::{GasPrice, GasPriceError, GasPriceState};
pub use summary::TripSummary;
