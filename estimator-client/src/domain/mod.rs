pub mod calculation;
pub mod simulation;

pub use calculation::{compute, CalculationInput, CalculationResult};
pub use simulation::SimulationRecord;
