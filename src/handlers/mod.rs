pub mod calculations;
pub mod service;
