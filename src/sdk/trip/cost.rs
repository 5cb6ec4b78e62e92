use serde::Serialize;
use thiserror::Error;

use crate::sdk::routing::route::Route;

pub const MILES_PER_METER: f64 = 0.000621371;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CostError {
    #[error("Fuel efficiency must be a positive number of MPG, got {0}")]
    InvalidFuelEfficiency(f64),

    #[error("Gas price must be a non-negative amount, got {0}")]
    InvalidGasPrice(f64),
}

/// Sum of all leg distances, in miles. Legs without a distance count as zero.
pub fn total_distance_miles(route: &Route) -> f64 {
    route
        .legs
        .iter()
        .map(|leg| leg.distance_meters.unwrap_or(0.0) * MILES_PER_METER)
        .sum()
}

pub fn gallons_needed(distance_miles: f64, mpg: f64) -> Result<f64, CostError> {
    if !mpg.is_finite() || mpg <= 0.0 {
        return Err(CostError::InvalidFuelEfficiency(mpg));
    }
    Ok(distance_miles / mpg)
}

pub fn gas_cost(distance_miles: f64, mpg: f64, price_per_gallon: f64) -> Result<f64, CostError> {
    if !price_per_gallon.is_finite() || price_per_gallon < 0.0 {
        return Err(CostError::InvalidGasPrice(price_per_gallon));
    }
    Ok(gallons_needed(distance_miles, mpg)? * price_per_gallon)
}

/// Rounds to `places` decimals with ties going towards positive infinity.
/// For display only.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor + 0.5).floor() / factor
}

pub fn format_distance(miles: f64) -> String {
    format!("{:.1}", round_half_up(miles, 1))
}

pub fn format_money(dollars: f64) -> String {
    format!("{:.2}", round_half_up(dollars, 2))
}

/// Full-precision result of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripEstimate {
    pub distance_miles: f64,
    pub fuel_efficiency_mpg: f64,
    pub gas_price_per_gallon: f64,
    pub gallons: f64,
    pub cost: f64,
}

impl TripEstimate {
    pub fn for_route(route: &Route, mpg: f64, price_per_gallon: f64) -> Result<Self, CostError> {
        let distance_miles = total_distance_miles(route);
        let cost = gas_cost(distance_miles, mpg, price_per_gallon)?;
        Ok(Self {
            distance_miles,
            fuel_efficiency_mpg: mpg,
            gas_price_per_gallon: price_per_gallon,
            gallons: distance_miles / mpg,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::routing::route::RouteLeg;
    use rstest::rstest;

    fn route(legs: &[Option<f64>]) -> Route {
        Route {
            summary: "test".into(),
            legs: legs
                .iter()
                .map(|d| RouteLeg {
                    distance_meters: *d,
                    ..RouteLeg::default()
                })
                .collect(),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    #[case(&[], 0.0)]
    #[case(&[Some(100_000.0)], 62.1371)]
    #[case(&[Some(1000.0), Some(2500.0), Some(500.0)], 4000.0 * MILES_PER_METER)]
    #[case(&[Some(1000.0), None, Some(1000.0)], 2000.0 * MILES_PER_METER)]
    fn sums_leg_distances(#[case] legs: &[Option<f64>], #[case] expected: f64) {
        assert_close(total_distance_miles(&route(legs)), expected);
    }

    #[test]
    fn cost_is_gallons_times_price() {
        assert_close(gas_cost(62.1371, 30.0, 3.5).unwrap(), 62.1371 / 30.0 * 3.5);
        assert_close(gas_cost(100.0, 25.0, 0.0).unwrap(), 0.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-12.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_fuel_efficiency(#[case] mpg: f64) {
        assert!(matches!(
            gas_cost(100.0, mpg, 3.5),
            Err(CostError::InvalidFuelEfficiency(_))
        ));
    }

    #[test]
    fn rejects_negative_price() {
        assert_eq!(
            gas_cost(100.0, 30.0, -1.0),
            Err(CostError::InvalidGasPrice(-1.0))
        );
    }

    #[rstest]
    #[case(2.5, 0, 3.0)]
    #[case(-2.5, 0, -2.0)]
    #[case(-0.25, 1, -0.2)]
    #[case(-0.26, 1, -0.3)]
    #[case(1.005, 1, 1.0)]
    fn ties_round_up(#[case] value: f64, #[case] places: u32, #[case] expected: f64) {
        assert_eq!(round_half_up(value, places), expected);
    }

    #[rstest]
    #[case(62.1371, "62.1")]
    #[case(0.05, "0.1")]
    #[case(12.25, "12.3")]
    fn distance_display(#[case] miles: f64, #[case] expected: &str) {
        assert_eq!(format_distance(miles), expected);
    }

    #[rstest]
    #[case(7.24932833, "7.25")]
    #[case(0.125, "0.13")]
    #[case(3.0, "3.00")]
    fn money_display(#[case] dollars: f64, #[case] expected: &str) {
        assert_eq!(format_money(dollars), expected);
    }

    #[test]
    fn new_york_to_boston_estimate() {
        let estimate = TripEstimate::for_route(&route(&[Some(100_000.0)]), 30.0, 3.5).unwrap();
        assert_eq!(format_distance(estimate.distance_miles), "62.1");
        assert_eq!(format_money(estimate.cost), "7.25");
        assert_close(estimate.gallons, 62.1371 / 30.0);
    }
}
