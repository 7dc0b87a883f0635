//! Shared types, models and the weather analyzer for the GDASH dashboard
//!
//! This crate is used by the backend and, through WASM, by the browser
//! dashboard, so it performs no I/O.

pub mod analysis;
pub mod models;
pub mod types;
pub mod validation;

pub use analysis::WeatherAnalyzer;
pub use models::*;
pub use types::*;
pub use validation::*;
