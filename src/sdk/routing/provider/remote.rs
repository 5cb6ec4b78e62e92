use super::types::DirectionsResponse;
use crate::sdk::routing::error::{DirectionsError, DirectionsStatus};
use crate::sdk::routing::route::{Route, RouteRequest, Waypoint};
use crate::sdk::routing::service::DirectionsProvider;
use crate::sdk::util::rate_limit::{self, Limiter};
use reqwest::blocking::Client;
use std::time::Duration;

// --- Remote Provider Implementation ---
pub struct GoogleDirectionsProvider {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Limiter,
}

impl GoogleDirectionsProvider {
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
        limiter: Limiter,
    ) -> Result<Self, DirectionsError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
            limiter,
        })
    }
}

/// `a|via:b|c`: non-stopover points get the `via:` prefix.
pub fn encode_waypoints(waypoints: &[Waypoint]) -> String {
    waypoints
        .iter()
        .map(|w| {
            if w.stopover {
                w.location.clone()
            } else {
                format!("via:{}", w.location)
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

impl DirectionsProvider for GoogleDirectionsProvider {
    fn directions(&self, request: &RouteRequest) -> Result<Vec<Route>, DirectionsError> {
        log::debug!(
            "[PROVIDER] Requesting directions {} -> {} via {} waypoint(s)",
            request.origin,
            request.destination,
            request.waypoints.len()
        );

        let mut query: Vec<(&str, String)> = vec![
            ("origin", request.origin.clone()),
            ("destination", request.destination.clone()),
            ("mode", request.mode.as_str().to_string()),
            ("alternatives", request.alternatives.to_string()),
        ];
        if !request.waypoints.is_empty() {
            query.push(("waypoints", encode_waypoints(&request.waypoints)));
        }
        query.push(("key", self.api_key.clone()));

        rate_limit::wait(&self.limiter);
        let response = match self.client.get(&self.base_url).query(&query).send() {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to reach directions service. URL: {}\nError: {}", self.base_url, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            log::error!("Directions service returned non-success status: {}. Body: {}", status, text);
            return Err(DirectionsError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: DirectionsResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!("Failed to parse DirectionsResponse. Error: {}. Body: {}", e, text);
            e
        })?;

        if parsed.status != DirectionsStatus::Ok {
            return Err(DirectionsError::Status {
                status: parsed.status,
                message: parsed.error_message,
            });
        }

        Ok(parsed.routes.into_iter().map(Route::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waypoints_are_pipe_separated_in_order() {
        let waypoints = vec![
            Waypoint::stopover("Santa Barbara, CA"),
            Waypoint {
                location: "Gilroy, CA".to_string(),
                stopover: false,
            },
            Waypoint::stopover("San Luis Obispo, CA"),
        ];
        assert_eq!(
            encode_waypoints(&waypoints),
            "Santa Barbara, CA|via:Gilroy, CA|San Luis Obispo, CA"
        );
    }
}
