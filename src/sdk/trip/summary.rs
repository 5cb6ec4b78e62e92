use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

use super::cost::{format_distance, format_money, TripEstimate};

/// What the user sees after a calculation. The gas price is frozen as it was
/// typed when the calculation ran; later edits to the field do not show here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub route_summary: String,
    pub estimate: TripEstimate,
    pub gas_price_text: String,
    pub calculated_at: DateTime<Local>,
}

impl TripSummary {
    pub fn new(route_summary: impl Into<String>, estimate: TripEstimate, gas_price_text: impl Into<String>) -> Self {
        Self {
            route_summary: route_summary.into(),
            estimate,
            gas_price_text: gas_price_text.into(),
            calculated_at: Local::now(),
        }
    }

    pub fn distance_display(&self) -> String {
        format!("{} miles", format_distance(self.estimate.distance_miles))
    }

    pub fn cost_display(&self) -> String {
        format!("${}", format_money(self.estimate.cost))
    }

    pub fn gas_price_note(&self) -> String {
        format!("Based on gas price: ${}/gal", self.gas_price_text)
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trip Summary")?;
        if !self.route_summary.is_empty() {
            writeln!(f, "Route: {}", self.route_summary)?;
        }
        writeln!(f, "Fuel Efficiency: {:.1} MPG", self.estimate.fuel_efficiency_mpg)?;
        writeln!(f, "Total Distance: {}", self.distance_display())?;
        writeln!(f, "Estimated Gas Cost: {}", self.cost_display())?;
        write!(f, "{}", self.gas_price_note())
    }
}
