pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::driver::ScenarioDriver;
pub use control::scenario::{standard_scenarios, Scenario, ScenarioParameters};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::integrator::{GradeTreatment, TrapezoidalIntegrator};
pub use trajectory_system::model::VehicleModel;
pub use trajectory_system::trajectory::Trajectory;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::export::{save_to_csv, write_csv, CSV_HEADER};
pub use telemetry_system::tabulation::{print_table, write_table};
