use crate::error::ApiError;
use crate::models::{
    FutureValueRequest, FutureValueResponse, RequiredRateRequest, RequiredRateResponse,
};
use crate::services::compound_interest::{calculate_future_value, calculate_required_rate};
use crate::utils::{format_float, format_whole, round_decimal};
use axum::{extract::rejection::JsonRejection, Json};

pub async fn future_value(
    payload: Result<Json<FutureValueRequest>, JsonRejection>,
) -> Result<Json<FutureValueResponse>, ApiError> {
    let Json(request) = payload?;

    let invalid = request.invalid_fields();
    if !invalid.is_empty() {
        return Err(ApiError::non_positive_fields(&invalid));
    }

    let future_value = calculate_future_value(
        request.principal,
        request.rate,
        request.periods_per_year,
        request.years,
    );
    ensure_finite(future_value)?;

    tracing::debug!(
        principal = request.principal,
        rate = request.rate,
        periods_per_year = request.periods_per_year,
        years = request.years,
        future_value,
        "Calculated future value"
    );

    Ok(Json(FutureValueResponse {
        message: future_value_message(&request, future_value),
    }))
}

pub async fn required_rate(
    payload: Result<Json<RequiredRateRequest>, JsonRejection>,
) -> Result<Json<RequiredRateResponse>, ApiError> {
    let Json(request) = payload?;

    let invalid = request.invalid_fields();
    if !invalid.is_empty() {
        return Err(ApiError::non_positive_fields(&invalid));
    }

    let rate = calculate_required_rate(
        request.future_value,
        request.principal,
        request.periods_per_year,
        request.years,
    )?;
    let percentage = round_decimal(rate * 100.0, 2);
    ensure_finite(percentage)?;

    tracing::debug!(
        future_value = request.future_value,
        principal = request.principal,
        periods_per_year = request.periods_per_year,
        years = request.years,
        rate,
        "Calculated required rate"
    );

    Ok(Json(RequiredRateResponse {
        message: required_rate_message(&request, percentage),
    }))
}

fn ensure_finite(value: f64) -> Result<(), ApiError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ApiError::BadRequest(
            "Invalid input: result is too large to represent".to_string(),
        ))
    }
}

pub fn future_value_message(request: &FutureValueRequest, future_value: f64) -> String {
    format!(
        "Future Value of {} when starting with {} compounded at {} interest rate, {} times per year over {} years",
        format_whole(future_value),
        format_whole(request.principal),
        format_float(request.rate),
        request.periods_per_year,
        request.years,
    )
}

/// `percentage` is the required rate times 100, already rounded to two places.
pub fn required_rate_message(request: &RequiredRateRequest, percentage: f64) -> String {
    format!(
        "{}% is the required interest rate to grow ${} to ${} if compounding {} times per year over {} years.",
        format_float(percentage),
        format_whole(request.principal),
        format_whole(request.future_value),
        request.periods_per_year,
        request.years,
    )
}
