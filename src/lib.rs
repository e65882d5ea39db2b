//! HTTP API for compound interest calculations: the future value of an
//! investment and the rate required to reach a target value.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use services::compound_interest::{calculate_future_value, calculate_required_rate, InvalidArgument};
