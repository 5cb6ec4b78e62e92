use super::error::LookupError;
use super::types::MenuItem;

pub trait FuelEconomyProvider: Send + Sync {
    /// Lists the model years the service knows about.
    fn years(&self) -> Result<Vec<MenuItem>, LookupError>;

    /// Lists the makes sold in `year`.
    fn makes(&self, year: &str) -> Result<Vec<MenuItem>, LookupError>;

    /// Lists the models of `make` sold in `year`.
    fn models(&self, year: &str, make: &str) -> Result<Vec<MenuItem>, LookupError>;

    /// Resolves the combined fuel efficiency, in MPG, of a fully specified vehicle.
    fn combined_mpg(&self, year: &str, make: &str, model: &str) -> Result<f64, LookupError>;
}
