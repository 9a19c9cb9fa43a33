//! FIRE forecast endpoint.

use api_types::forecast::{ForecastParams, ForecastResponse, SeriesView};
use axum::Json;
use engine::{ForecastRequest, ProjectionInput, Series};

use crate::ServerError;

fn map_series(series: Series) -> SeriesView {
    SeriesView {
        label: series.label.to_string(),
        final_value: series.final_value(),
        values: series.values,
    }
}

pub async fn forecast(
    Json(payload): Json<ForecastParams>,
) -> Result<Json<ForecastResponse>, ServerError> {
    let request = ForecastRequest {
        income: ProjectionInput {
            base: payload.annual_income,
            rate_percent: payload.income_growth_rate,
        },
        assets: ProjectionInput {
            base: payload.current_assets,
            rate_percent: payload.assets_growth_rate,
        },
        years: payload.years,
    };
    let forecast = engine::forecast(&request)?;

    Ok(Json(ForecastResponse {
        periods: forecast.periods,
        series: vec![map_series(forecast.income), map_series(forecast.assets)],
    }))
}
