use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Vehicle service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("No vehicle options for {year} {make} {model}")]
    NoOptions {
        year: String,
        make: String,
        model: String,
    },

    #[error("Vehicle {id} has no combined fuel efficiency")]
    MissingEfficiency { id: String },

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}
