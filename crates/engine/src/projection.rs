//! Compound growth projections.
//!
//! A projection starts from a base value and applies a constant growth rate
//! once per period. The FIRE forecast runs two independent projections with
//! the same horizon, one for yearly income and one for invested assets.

use serde::Serialize;

use crate::{EngineError, ResultEngine};

/// Label of the income series.
pub const INCOME_LABEL: &str = "income forecast";
/// Label of the invested assets series.
pub const ASSET_LABEL: &str = "asset forecast";

/// Growth rates are percentages in this closed range.
pub const RATE_RANGE: std::ops::RangeInclusive<f64> = -100.0..=100.0;
/// Horizons are whole years in this closed range.
pub const YEARS_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// Value series `base * (1 + rate_percent / 100) ^ t` for `t` in `0..=periods`.
///
/// The result always has `periods + 1` entries and `value[0] == base`.
pub fn project(base: f64, rate_percent: f64, periods: u32) -> Vec<f64> {
    let growth = 1.0 + rate_percent / 100.0;
    (0..=periods)
        .map(|t| base * growth.powf(f64::from(t)))
        .collect()
}

/// Starting point and growth rate of one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionInput {
    pub base: f64,
    pub rate_percent: f64,
}

/// Parameters of a full forecast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForecastRequest {
    pub income: ProjectionInput,
    pub assets: ProjectionInput,
    pub years: u32,
}

impl ForecastRequest {
    pub fn validate(&self) -> ResultEngine<()> {
        validate_input("income", self.income)?;
        validate_input("assets", self.assets)?;
        if !YEARS_RANGE.contains(&self.years) {
            return Err(EngineError::InvalidProjection(format!(
                "years must be between {} and {}, got {}",
                YEARS_RANGE.start(),
                YEARS_RANGE.end(),
                self.years
            )));
        }
        Ok(())
    }
}

fn validate_input(label: &str, input: ProjectionInput) -> ResultEngine<()> {
    if !input.base.is_finite() || input.base < 0.0 {
        return Err(EngineError::InvalidProjection(format!(
            "{label} base value must be a non-negative number"
        )));
    }
    if !RATE_RANGE.contains(&input.rate_percent) {
        return Err(EngineError::InvalidProjection(format!(
            "{label} rate must be between {}% and {}%",
            RATE_RANGE.start(),
            RATE_RANGE.end()
        )));
    }
    Ok(())
}

/// A labeled value series, one value per period.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub label: &'static str,
    pub values: Vec<f64>,
}

impl Series {
    /// Value at the end of the horizon.
    pub fn final_value(&self) -> f64 {
        self.values.last().copied().unwrap_or_default()
    }
}

/// Income and asset series over the same periods.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Forecast {
    pub periods: Vec<u32>,
    pub income: Series,
    pub assets: Series,
}

/// Validate `request` and compute both series.
pub fn forecast(request: &ForecastRequest) -> ResultEngine<Forecast> {
    request.validate()?;

    Ok(Forecast {
        periods: (0..=request.years).collect(),
        income: Series {
            label: INCOME_LABEL,
            values: project(
                request.income.base,
                request.income.rate_percent,
                request.years,
            ),
        },
        assets: Series {
            label: ASSET_LABEL,
            values: project(
                request.assets.base,
                request.assets.rate_percent,
                request.years,
            ),
        },
    })
}
