use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasPriceError {
    #[error("Please enter a valid gas price")]
    NotANumber,

    #[error("Gas price cannot be negative")]
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GasPriceState {
    /// Nothing entered. No error, but nothing to calculate with either.
    Empty,
    Invalid(GasPriceError),
    Valid(f64),
}

impl GasPriceState {
    pub fn of(raw: &str) -> Self {
        if raw.is_empty() {
            return GasPriceState::Empty;
        }
        match raw.trim().parse::<f64>() {
            Ok(price) if !price.is_finite() => GasPriceState::Invalid(GasPriceError::NotANumber),
            Ok(price) if price < 0.0 => GasPriceState::Invalid(GasPriceError::Negative),
            Ok(price) => GasPriceState::Valid(price),
            Err(_) => GasPriceState::Invalid(GasPriceError::NotANumber),
        }
    }
}

/// The gas price field. The raw text is kept exactly as typed.
#[derive(Debug, Clone)]
pub struct GasPrice {
    raw: String,
    state: GasPriceState,
}

impl Default for GasPrice {
    fn default() -> Self {
        Self {
            raw: String::new(),
            state: GasPriceState::Empty,
        }
    }
}

impl GasPrice {
    pub fn new(raw: impl Into<String>) -> Self {
        let mut price = Self::default();
        price.set(raw);
        price
    }

    pub fn set(&mut self, raw: impl Into<String>) -> GasPriceState {
        self.raw = raw.into();
        self.state = GasPriceState::of(&self.raw);
        self.state
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn state(&self) -> GasPriceState {
        self.state
    }

    pub fn value(&self) -> Option<f64> {
        match self.state {
            GasPriceState::Valid(price) => Some(price),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self.state {
            GasPriceState::Invalid(e) => Some(e.to_string()),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
