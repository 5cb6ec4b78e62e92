use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
        }
    }
}

/// An intermediate point. A stopover splits the route into separate legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Waypoint {
    pub location: String,
    pub stopover: bool,
}

impl Waypoint {
    pub fn stopover(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            stopover: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub waypoints: Vec<Waypoint>,
    pub mode: TravelMode,
    pub alternatives: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteLeg {
    /// Missing when the provider omits the distance; counted as zero.
    pub distance_meters: Option<f64>,
    pub duration_seconds: Option<f64>,
    pub start_address: Option<String>,
    pub end_address: Option<String>,
}

impl RouteLeg {
    pub fn with_distance(meters: f64) -> Self {
        Self {
            distance_meters: Some(meters),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    pub summary: String,
    pub legs: Vec<RouteLeg>,
}

impl Route {
    pub fn total_duration_hours(&self) -> f64 {
        self.legs
            .iter()
            .map(|leg| leg.duration_seconds.unwrap_or(0.0))
            .sum::<f64>()
            / 3600.0
    }
}
