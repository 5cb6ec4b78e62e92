use serde::{Deserialize, Serialize};

/// One entry of a vehicle menu. `value` is what later queries expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub text: String,
    pub value: String,
}

impl MenuItem {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// The vehicle fields chosen so far. Each field is only meaningful when its parent is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VehicleSelection {
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    /// Combined MPG, rounded to one decimal.
    pub fuel_efficiency: Option<f64>,
}

impl VehicleSelection {
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.make.is_some() && self.model.is_some()
    }

    pub fn describe(&self) -> String {
        [&self.year, &self.make, &self.model]
            .iter()
            .filter_map(|field| field.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
