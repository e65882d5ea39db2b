use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FutureValueRequest {
    /// Principal amount
    #[serde(rename = "P")]
    pub principal: f64,
    /// Annual interest rate as a decimal fraction
    #[serde(rename = "R")]
    pub rate: f64,
    /// Compounding periods per year
    #[serde(rename = "N", deserialize_with = "whole_number")]
    pub periods_per_year: i64,
    /// Total time in years
    #[serde(rename = "T", deserialize_with = "whole_number")]
    pub years: i64,
}

impl FutureValueRequest {
    /// Wire names of the fields that are not strictly positive.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        non_positive(&[
            ("P", self.principal > 0.0),
            ("R", self.rate > 0.0),
            ("N", self.periods_per_year > 0),
            ("T", self.years > 0),
        ])
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FutureValueResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequiredRateRequest {
    /// Target future value
    #[serde(rename = "FV")]
    pub future_value: f64,
    /// Principal amount
    #[serde(rename = "P")]
    pub principal: f64,
    /// Compounding periods per year
    #[serde(rename = "N", deserialize_with = "whole_number")]
    pub periods_per_year: i64,
    /// Total time in years
    #[serde(rename = "T", deserialize_with = "whole_number")]
    pub years: i64,
}

impl RequiredRateRequest {
    /// Wire names of the fields that are not strictly positive.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        non_positive(&[
            ("FV", self.future_value > 0.0),
            ("P", self.principal > 0.0),
            ("N", self.periods_per_year > 0),
            ("T", self.years > 0),
        ])
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequiredRateResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    pub environment: String,
}

/// Integer field that also takes whole-valued floats such as `4.0`.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Integer(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Integer(value) => Ok(value),
        Number::Float(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            Ok(value as i64)
        }
        Number::Float(value) => Err(de::Error::custom(format!(
            "expected a whole number, found {value}"
        ))),
    }
}

fn non_positive(checks: &[(&'static str, bool)]) -> Vec<&'static str> {
    checks
        .iter()
        .filter(|(_, positive)| !positive)
        .map(|(field, _)| *field)
        .collect()
}
