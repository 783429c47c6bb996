//! Bike listing entity plus the tooling to load and export listings as JSON.

pub mod config;
pub mod export;
pub mod models;
pub mod sources;
pub mod telemetry;

pub use models::{Category, Condition, FuelType, Listing, Location, ParseLabelError};
