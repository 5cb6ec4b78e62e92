use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_FUEL_ECONOMY_URL: &str = "https://www.fueleconomy.gov/ws/rest";
pub const DEFAULT_DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GOOGLE_MAPS_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct TripConfig {
    /// Directions key. Only the `estimate` flow needs it.
    pub google_maps_api_key: Option<String>,
    pub fuel_economy_base_url: String,
    pub directions_base_url: String,
    pub http_timeout: Duration,
}

impl TripConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let google_maps_api_key =
            get("GOOGLE_MAPS_API_KEY").or_else(|| get("REACT_APP_GOOGLE_MAPS_API_KEY"));

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "HTTP_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            google_maps_api_key,
            fuel_economy_base_url: get("FUEL_ECONOMY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_FUEL_ECONOMY_URL.to_string()),
            directions_base_url: get("DIRECTIONS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_DIRECTIONS_URL.to_string()),
            http_timeout,
        })
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.google_maps_api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey)
    }
}
