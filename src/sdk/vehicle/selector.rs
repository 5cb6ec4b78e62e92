//! Cascading year -> make -> model -> fuel efficiency selection.
//!
//! Every change to a field clears the fields below it right away and yields a
//! [`PendingLookup`]. The caller runs the lookup whenever it likes and hands the
//! outcome back to [`VehicleSelector::resolve`]. Each lookup carries a ticket;
//! results for a ticket that is no longer the latest for its field are dropped,
//! so a slow response can never overwrite a newer selection.

use super::error::LookupError;
use super::service::FuelEconomyProvider;
use super::types::{MenuItem, VehicleSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupField {
    Years,
    Makes,
    Models,
    FuelEfficiency,
}

/// Identifies one issued lookup. Only the latest ticket per field is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    field: LookupField,
    seq: u64,
}

impl Ticket {
    pub fn field(&self) -> LookupField {
        self.field
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleQuery {
    Years,
    Makes { year: String },
    Models { year: String, make: String },
    FuelEfficiency { year: String, make: String, model: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Menu(Vec<MenuItem>),
    FuelEfficiency(f64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub ticket: Ticket,
    pub query: VehicleQuery,
}

impl PendingLookup {
    pub fn run<P: FuelEconomyProvider + ?Sized>(&self, provider: &P) -> Result<LookupOutcome, LookupError> {
        match &self.query {
            VehicleQuery::Years => provider.years().map(LookupOutcome::Menu),
            VehicleQuery::Makes { year } => provider.makes(year).map(LookupOutcome::Menu),
            VehicleQuery::Models { year, make } => {
                provider.models(year, make).map(LookupOutcome::Menu)
            }
            VehicleQuery::FuelEfficiency { year, make, model } => provider
                .combined_mpg(year, make, model)
                .map(LookupOutcome::FuelEfficiency),
        }
    }
}

#[derive(Debug, Default)]
struct Sequences {
    years: u64,
    makes: u64,
    models: u64,
    fuel_efficiency: u64,
}

impl Sequences {
    fn get(&self, field: LookupField) -> u64 {
        match field {
            LookupField::Years => self.years,
            LookupField::Makes => self.makes,
            LookupField::Models => self.models,
            LookupField::FuelEfficiency => self.fuel_efficiency,
        }
    }

    fn bump(&mut self, field: LookupField) -> Ticket {
        let slot = match field {
            LookupField::Years => &mut self.years,
            LookupField::Makes => &mut self.makes,
            LookupField::Models => &mut self.models,
            LookupField::FuelEfficiency => &mut self.fuel_efficiency,
        };
        *slot += 1;
        Ticket { field, seq: *slot }
    }
}

#[derive(Debug, Default)]
pub struct VehicleSelector {
    selection: VehicleSelection,
    years: Vec<MenuItem>,
    makes: Vec<MenuItem>,
    models: Vec<MenuItem>,
    seq: Sequences,
    outstanding: Vec<Ticket>,
}

impl VehicleSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &VehicleSelection {
        &self.selection
    }

    pub fn fuel_efficiency(&self) -> Option<f64> {
        self.selection.fuel_efficiency
    }

    pub fn years(&self) -> &[MenuItem] {
        &self.years
    }

    pub fn makes(&self) -> &[MenuItem] {
        &self.makes
    }

    pub fn models(&self) -> &[MenuItem] {
        &self.models
    }

    /// True while a lookup that can still be applied has not come back.
    pub fn loading(&self) -> bool {
        !self.outstanding.is_empty()
    }

    pub fn request_years(&mut self) -> PendingLookup {
        self.issue(LookupField::Years, VehicleQuery::Years)
    }

    /// Sets the year and drops everything below it. An empty year issues no lookup.
    pub fn set_year(&mut self, year: &str) -> Option<PendingLookup> {
        let year = non_empty(year);
        self.selection = VehicleSelection {
            year: year.clone(),
            ..VehicleSelection::default()
        };
        self.makes.clear();
        self.models.clear();
        self.invalidate(LookupField::Models);
        self.invalidate(LookupField::FuelEfficiency);

        match year {
            Some(year) => Some(self.issue(LookupField::Makes, VehicleQuery::Makes { year })),
            None => {
                self.invalidate(LookupField::Makes);
                None
            }
        }
    }

    /// Ignored while no year is chosen.
    pub fn set_make(&mut self, make: &str) -> Option<PendingLookup> {
        let year = match &self.selection.year {
            Some(year) => year.clone(),
            None => {
                log::debug!("Ignoring make {:?}: no year selected", make);
                return None;
            }
        };
        let make = non_empty(make);
        self.selection.make = make.clone();
        self.selection.model = None;
        self.selection.fuel_efficiency = None;
        self.models.clear();
        self.invalidate(LookupField::FuelEfficiency);

        match make {
            Some(make) => Some(self.issue(LookupField::Models, VehicleQuery::Models { year, make })),
            None => {
                self.invalidate(LookupField::Models);
                None
            }
        }
    }

    /// Ignored while year or make is missing.
    pub fn set_model(&mut self, model: &str) -> Option<PendingLookup> {
        let (year, make) = match (&self.selection.year, &self.selection.make) {
            (Some(year), Some(make)) => (year.clone(), make.clone()),
            _ => {
                log::debug!("Ignoring model {:?}: year or make missing", model);
                return None;
            }
        };
        let model = non_empty(model);
        self.selection.model = model.clone();
        self.selection.fuel_efficiency = None;

        match model {
            Some(model) => Some(self.issue(
                LookupField::FuelEfficiency,
                VehicleQuery::FuelEfficiency { year, make, model },
            )),
            None => {
                self.invalidate(LookupField::FuelEfficiency);
                None
            }
        }
    }

    /// Applies a lookup result. Returns whether it was applied; stale results
    /// and failures leave the selector untouched.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<LookupOutcome, LookupError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Discarding stale {:?} lookup result", ticket.field());
            return false;
        }
        self.outstanding.retain(|t| *t != ticket);

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Vehicle {:?} lookup failed: {}", ticket.field(), e);
                return false;
            }
        };

        match (ticket.field(), outcome) {
            (LookupField::Years, LookupOutcome::Menu(items)) => self.years = items,
            (LookupField::Makes, LookupOutcome::Menu(items)) => self.makes = items,
            (LookupField::Models, LookupOutcome::Menu(items)) => self.models = items,
            (LookupField::FuelEfficiency, LookupOutcome::FuelEfficiency(mpg)) => {
                self.selection.fuel_efficiency = Some(round_to_tenth(mpg));
            }
            (field, outcome) => {
                log::warn!("Mismatched outcome {:?} for {:?} lookup", outcome, field);
                return false;
            }
        }
        true
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.seq.get(ticket.field) == ticket.seq
    }

    pub fn load_years<P: FuelEconomyProvider + ?Sized>(&mut self, provider: &P) -> bool {
        let pending = self.request_years();
        self.complete(pending, provider)
    }

    pub fn choose_year<P: FuelEconomyProvider + ?Sized>(&mut self, year: &str, provider: &P) -> bool {
        match self.set_year(year) {
            Some(pending) => self.complete(pending, provider),
            None => false,
        }
    }

    pub fn choose_make<P: FuelEconomyProvider + ?Sized>(&mut self, make: &str, provider: &P) -> bool {
        match self.set_make(make) {
            Some(pending) => self.complete(pending, provider),
            None => false,
        }
    }

    pub fn choose_model<P: FuelEconomyProvider + ?Sized>(&mut self, model: &str, provider: &P) -> bool {
        match self.set_model(model) {
            Some(pending) => self.complete(pending, provider),
            None => false,
        }
    }

    pub fn reset(&mut self) {
        let years = std::mem::take(&mut self.years);
        self.set_year("");
        self.years = years;
    }

    fn complete<P: FuelEconomyProvider + ?Sized>(&mut self, pending: PendingLookup, provider: &P) -> bool {
        let result = pending.run(provider);
        self.resolve(pending.ticket, result)
    }

    fn issue(&mut self, field: LookupField, query: VehicleQuery) -> PendingLookup {
        self.outstanding.retain(|t| t.field != field);
        let ticket = self.seq.bump(field);
        self.outstanding.push(ticket);
        PendingLookup { ticket, query }
    }

    fn invalidate(&mut self, field: LookupField) {
        self.outstanding.retain(|t| t.field != field);
        self.seq.bump(field);
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
