use serde::Deserialize;
use thiserror::Error;

pub const NO_ROUTE_MESSAGE: &str = "No route found. Please check your addresses and try again.";
pub const NOT_FOUND_MESSAGE: &str =
    "One or more addresses could not be found. Please check your input.";
pub const TOO_LONG_MESSAGE: &str = "Route is too long. Please try a shorter route.";
pub const GENERIC_MESSAGE: &str =
    "Unable to calculate route. Please check your input and try again.";

/// The `status` field of a directions response.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionsStatus {
    Ok,
    NotFound,
    ZeroResults,
    MaxWaypointsExceeded,
    MaxRouteLengthExceeded,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    #[serde(other)]
    Other,
}

#[derive(Error, Debug)]
pub enum DirectionsError {
    // The service answered but refused to route
    #[error("Directions service returned {status:?}: {}", .message.as_deref().unwrap_or("no details"))]
    Status {
        status: DirectionsStatus,
        message: Option<String>,
    },

    #[error("Directions service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl DirectionsError {
    pub fn status(&self) -> Option<DirectionsStatus> {
        match self {
            DirectionsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self.status() {
            Some(DirectionsStatus::ZeroResults) => NO_ROUTE_MESSAGE,
            Some(DirectionsStatus::NotFound) => NOT_FOUND_MESSAGE,
            Some(DirectionsStatus::MaxRouteLengthExceeded) => TOO_LONG_MESSAGE,
            _ => GENERIC_MESSAGE,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteInputError {
    #[error("An origin is required")]
    MissingOrigin,

    #[error("A destination is required")]
    MissingDestination,
}
