use serde::Deserialize;

use crate::sdk::vehicle::types::MenuItem;

// --- Data Structures for parsing fueleconomy.gov JSON responses ---

/// `menuItem` is an array, or a bare object when the menu has one entry.
#[derive(Deserialize)]
pub struct MenuResponse {
    #[serde(rename = "menuItem", default)]
    pub menu_item: Option<OneOrMany<MenuItem>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl MenuResponse {
    pub fn into_items(self) -> Vec<MenuItem> {
        match self.menu_item {
            Some(OneOrMany::Many(items)) => items,
            Some(OneOrMany::One(item)) => vec![item],
            None => Vec::new(),
        }
    }
}

/// The vehicle record fields we read. Numbers arrive as strings.
#[derive(Deserialize)]
pub struct VehicleRecord {
    #[serde(default)]
    pub comb08: Option<NumberOrText>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }
}
