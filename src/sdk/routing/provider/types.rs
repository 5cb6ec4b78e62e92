use serde::Deserialize;

use crate::sdk::routing::error::DirectionsStatus;
use crate::sdk::routing::route::{Route, RouteLeg};

// --- Data Structures for parsing directions responses ---

#[derive(Deserialize)]
pub struct DirectionsResponse {
    pub status: DirectionsStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteBody>,
}

#[derive(Deserialize)]
pub struct RouteBody {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<LegBody>,
}

#[derive(Deserialize)]
pub struct LegBody {
    #[serde(default)]
    pub distance: Option<TextValue>,
    #[serde(default)]
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub start_address: Option<String>,
    #[serde(default)]
    pub end_address: Option<String>,
}

#[derive(Deserialize, Clone, Copy)]
pub struct TextValue {
    pub value: f64,
}

impl From<RouteBody> for Route {
    fn from(body: RouteBody) -> Self {
        Route {
            summary: body.summary,
            legs: body.legs.into_iter().map(RouteLeg::from).collect(),
        }
    }
}

impl From<LegBody> for RouteLeg {
    fn from(body: LegBody) -> Self {
        RouteLeg {
            distance_meters: body.distance.map(|d| d.value),
            duration_seconds: body.duration.map(|d| d.value),
            start_address: body.start_address,
            end_address: body.end_address,
        }
    }
}
