// Physical Constants
pub const VEHICLE_MASS: f64 = 1475.0; // kg
pub const FRICTION_COEFFICIENT: f64 = 61.0; // N·s/m, velocity-proportional
pub const GRAVITY: f64 = 9.80665; // m/s²

// Simulation Parameters
pub const TIME_STEP: f64 = 0.10; // s
pub const SCENARIO_DURATION: f64 = 60.0; // s

// Drive Parameters
pub const CRUISE_FORCE: f64 = 575.0; // N
