pub mod db;
pub mod domain;

pub use domain::{compute, CalculationInput, CalculationResult, SimulationRecord};
