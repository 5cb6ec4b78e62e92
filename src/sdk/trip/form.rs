use thiserror::Error;

use super::cost::{CostError, TripEstimate};
use super::gas_price::{GasPrice, GasPriceState};
use super::summary::TripSummary;
use crate::sdk::routing::composer::RouteComposer;
use crate::sdk::routing::error::{DirectionsError, RouteInputError};
use crate::sdk::routing::service::DirectionsProvider;
use crate::sdk::vehicle::selector::VehicleSelector;
use crate::sdk::vehicle::types::VehicleSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Ready,
    Calculating,
    Shown,
    ErrorShown,
}

#[derive(Error, Debug)]
pub enum CalculateError {
    #[error("An origin, a destination, the vehicle's fuel efficiency and a valid gas price are required")]
    NotReady,

    #[error(transparent)]
    RouteInput(#[from] RouteInputError),

    #[error(transparent)]
    Directions(#[from] DirectionsError),

    #[error(transparent)]
    Cost(#[from] CostError),
}

impl CalculateError {
    pub fn user_message(&self) -> String {
        match self {
            CalculateError::Directions(e) => e.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
enum Stage {
    Editing,
    Calculating,
    Shown(TripSummary),
    Failed(String),
}

/// Inputs captured when the calculate action ran.
#[derive(Debug, Clone)]
struct Frozen {
    vehicle: VehicleSelection,
    mpg: f64,
    gas_price: f64,
    gas_price_text: String,
}

/// The whole trip form: vehicle, route, gas price and the last outcome.
#[derive(Debug)]
pub struct TripForm {
    pub vehicle: VehicleSelector,
    pub route: RouteComposer,
    gas_price: GasPrice,
    stage: Stage,
    frozen: Option<Frozen>,
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            vehicle: VehicleSelector::new(),
            route: RouteComposer::new(),
            gas_price: GasPrice::default(),
            stage: Stage::Editing,
            frozen: None,
        }
    }
}

impl TripForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gas_price(&self) -> &GasPrice {
        &self.gas_price
    }

    pub fn set_gas_price(&mut self, raw: impl Into<String>) -> GasPriceState {
        self.gas_price.set(raw)
    }

    /// Mirrors the enabled state of the calculate control.
    pub fn can_calculate(&self) -> bool {
        self.route.has_endpoints()
            && self.vehicle.fuel_efficiency().is_some()
            && self.gas_price.is_valid()
    }

    pub fn phase(&self) -> FormPhase {
        match self.stage {
            Stage::Calculating => FormPhase::Calculating,
            Stage::Failed(_) => FormPhase::ErrorShown,
            Stage::Shown(_) if self.summary().is_some() => FormPhase::Shown,
            _ if self.can_calculate() => FormPhase::Ready,
            _ => FormPhase::Idle,
        }
    }

    /// The last summary, rendered only while an active route exists and the
    /// vehicle it was priced for is still selected with a known fuel efficiency.
    pub fn summary(&self) -> Option<&TripSummary> {
        let same_vehicle = self
            .frozen
            .as_ref()
            .is_some_and(|frozen| &frozen.vehicle == self.vehicle.selection());
        match &self.stage {
            Stage::Shown(summary)
                if same_vehicle
                    && self.route.active_route().is_some()
                    && self.vehicle.fuel_efficiency().is_some() =>
            {
                Some(summary)
            }
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.stage {
            Stage::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fetches directions and prices the first route. Refused while the form is
    /// not ready; a summary that can no longer render is dropped then.
    pub fn calculate<P: DirectionsProvider + ?Sized>(
        &mut self,
        provider: &P,
    ) -> Result<TripSummary, CalculateError> {
        let (mpg, gas_price) = match (self.vehicle.fuel_efficiency(), self.gas_price.value()) {
            (Some(mpg), Some(price)) if self.route.has_endpoints() => (mpg, price),
            _ => {
                if matches!(self.stage, Stage::Shown(_)) && self.summary().is_none() {
                    self.stage = Stage::Editing;
                }
                return Err(CalculateError::NotReady);
            }
        };
        let request = self.route.request()?;

        self.stage = Stage::Calculating;
        self.frozen = Some(Frozen {
            vehicle: self.vehicle.selection().clone(),
            mpg,
            gas_price,
            gas_price_text: self.gas_price.raw().to_string(),
        });
        log::info!(
            "Calculating trip {} -> {} ({} stop(s)) at {:.1} MPG",
            request.origin,
            request.destination,
            request.waypoints.len(),
            mpg
        );

        let submitted = self.route.submit(&request, provider).map(|_| ());
        if let Err(e) = submitted {
            return Err(self.fail(e.into()));
        }
        self.summarize()
    }

    /// Switches to another fetched alternative. A shown summary is re-derived
    /// with the inputs frozen at calculation time.
    pub fn select_route(&mut self, index: usize) -> Result<Option<TripSummary>, CalculateError> {
        if !self.route.select_route(index) {
            log::debug!("No alternative route at index {}", index);
            return Ok(None);
        }
        if self.summary().is_none() {
            return Ok(None);
        }
        self.summarize().map(Some)
    }

    /// Back to an empty form. The year menu is kept.
    pub fn restart(&mut self) {
        self.vehicle.reset();
        self.route.reset();
        self.gas_price.clear();
        self.stage = Stage::Editing;
        self.frozen = None;
    }

    fn summarize(&mut self) -> Result<TripSummary, CalculateError> {
        let (route, frozen) = match (self.route.active_route(), &self.frozen) {
            (Some(route), Some(frozen)) => (route, frozen),
            _ => return Err(self.fail(CalculateError::NotReady)),
        };
        match TripEstimate::for_route(route, frozen.mpg, frozen.gas_price) {
            Ok(estimate) => {
                let summary = TripSummary::new(route.summary.clone(), estimate, frozen.gas_price_text.clone());
                log::info!(
                    "Trip is {} costing {}",
                    summary.distance_display(),
                    summary.cost_display()
                );
                self.stage = Stage::Shown(summary.clone());
                Ok(summary)
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    fn fail(&mut self, error: CalculateError) -> CalculateError {
        self.stage = Stage::Failed(error.user_message());
        error
    }
}
