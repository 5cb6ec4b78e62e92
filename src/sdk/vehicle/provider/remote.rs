use super::types::{MenuResponse, VehicleRecord};
use crate::sdk::util::rate_limit::{self, Limiter};
use crate::sdk::vehicle::error::LookupError;
use crate::sdk::vehicle::service::FuelEconomyProvider;
use crate::sdk::vehicle::types::MenuItem;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

// --- Remote Provider Implementation ---
pub struct FuelEconomyGovProvider {
    client: Client,
    base_url: String,
    limiter: Limiter,
}

impl FuelEconomyGovProvider {
    pub fn new(base_url: String, timeout: Duration, limiter: Limiter) -> Result<Self, LookupError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            limiter,
        })
    }

    /// Trim/engine variants of a model. Each value is a vehicle id.
    pub fn options(&self, year: &str, make: &str, model: &str) -> Result<Vec<MenuItem>, LookupError> {
        self.menu(
            "vehicle/menu/options",
            &[("year", year), ("make", make), ("model", model)],
        )
    }

    pub fn vehicle_mpg(&self, id: &str) -> Result<f64, LookupError> {
        let text = self.get_text(&format!("vehicle/{}", id), &[])?;
        let record: VehicleRecord = serde_json::from_str(&text).map_err(|e| {
            log::error!("Failed to parse vehicle {}. Error: {}. Body: {}", id, e, text);
            e
        })?;
        record
            .comb08
            .and_then(|v| v.as_f64())
            .ok_or_else(|| LookupError::MissingEfficiency { id: id.to_string() })
    }

    fn menu(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<MenuItem>, LookupError> {
        let text = self.get_text(path, query)?;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Vec::new());
        }
        let menu: MenuResponse = serde_json::from_str(trimmed).map_err(|e| {
            log::error!("Failed to parse menu from {}. Error: {}. Body: {}", path, e, text);
            e
        })?;
        Ok(menu.into_items())
    }

    fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, LookupError> {
        rate_limit::wait(&self.limiter);
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("[PROVIDER] GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            return Err(LookupError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

impl FuelEconomyProvider for FuelEconomyGovProvider {
    fn years(&self) -> Result<Vec<MenuItem>, LookupError> {
        self.menu("vehicle/menu/year", &[])
    }

    fn makes(&self, year: &str) -> Result<Vec<MenuItem>, LookupError> {
        self.menu("vehicle/menu/make", &[("year", year)])
    }

    fn models(&self, year: &str, make: &str) -> Result<Vec<MenuItem>, LookupError> {
        self.menu("vehicle/menu/model", &[("year", year), ("make", make)])
    }

    fn combined_mpg(&self, year: &str, make: &str, model: &str) -> Result<f64, LookupError> {
        let options = self.options(year, make, model)?;
        let first = options.first().ok_or_else(|| LookupError::NoOptions {
            year: year.to_string(),
            make: make.to_string(),
            model: model.to_string(),
        })?;
        log::debug!(
            "Using option \"{}\" (id {}) of {} for {} {}",
            first.text,
            first.value,
            options.len(),
            make,
            model
        );
        self.vehicle_mpg(&first.value)
    }
}
