use crate::constants::{FRICTION_COEFFICIENT, GRAVITY, VEHICLE_MASS};
use crate::errors::SimulationError;

/// Longitudinal force balance for a single vehicle: a constant drive force
/// working against velocity-proportional friction and, on a graded road, the
/// along-slope component of gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleModel {
    pub mass: f64,                 // kg
    pub friction_coefficient: f64, // N·s/m
    pub gravity: f64,              // m/s²
}

impl Default for VehicleModel {
    fn default() -> Self {
        VehicleModel {
            mass: VEHICLE_MASS,
            friction_coefficient: FRICTION_COEFFICIENT,
            gravity: GRAVITY,
        }
    }
}

impl VehicleModel {
    pub fn new(mass: f64, friction_coefficient: f64, gravity: f64) -> Self {
        VehicleModel {
            mass,
            friction_coefficient,
            gravity,
        }
    }

    /// Net longitudinal acceleration at the given state.
    pub fn acceleration(&self, applied_force: f64, velocity: f64, disturbance: f64) -> f64 {
        (applied_force - self.friction_coefficient * velocity - disturbance) / self.mass
    }

    /// Along-slope gravity force for a road grade given in degrees.
    /// Zero on a flat road, negative downhill.
    pub fn grade_disturbance(&self, grade_angle_degrees: f64) -> f64 {
        self.mass * self.gravity * grade_angle_degrees.to_radians().sin()
    }

    /// Flat-road terminal velocity, where friction balances the drive force.
    pub fn steady_state_velocity(&self, applied_force: f64) -> f64 {
        applied_force / self.friction_coefficient
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.mass == 0.0 {
            return Err(SimulationError::ModelError(
                "vehicle mass is zero, acceleration is undefined".to_string(),
            ));
        }
        if !self.mass.is_finite()
            || !self.friction_coefficient.is_finite()
            || !self.gravity.is_finite()
        {
            return Err(SimulationError::ModelError(format!(
                "non-finite model parameter: mass = {}, friction = {}, gravity = {}",
                self.mass, self.friction_coefficient, self.gravity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_acceleration_from_rest() {
        let model = VehicleModel::default();

        // At rest on a flat road the full drive force accelerates the vehicle
        let acceleration = model.acceleration(575.0, 0.0, 0.0);
        assert_relative_eq!(acceleration, 575.0 / 1475.0, epsilon = EPSILON);
    }

    #[test]
    fn test_friction_opposes_motion() {
        let model = VehicleModel::default();

        let at_rest = model.acceleration(575.0, 0.0, 0.0);
        let moving = model.acceleration(575.0, 5.0, 0.0);
        assert!(
            moving < at_rest,
            "Friction should reduce net acceleration as speed builds. At rest: {}, moving: {}",
            at_rest,
            moving
        );

        // Coasting with no drive force decelerates
        let coasting = model.acceleration(0.0, 15.0, 0.0);
        assert!(coasting < 0.0, "Coasting acceleration should be negative");
    }

    #[test]
    fn test_grade_disturbance_sign_and_range() {
        let model = VehicleModel::default();

        assert_relative_eq!(model.grade_disturbance(0.0), 0.0, epsilon = EPSILON);

        let uphill = model.grade_disturbance(4.5);
        assert!(uphill > 0.0, "Uphill grade should oppose the drive force");
        assert!(
            uphill < model.mass * model.gravity,
            "Along-slope component must stay below full weight"
        );

        let downhill = model.grade_disturbance(-4.5);
        assert_relative_eq!(downhill, -uphill, epsilon = EPSILON);

        // A vertical wall puts the whole weight on the slope axis
        assert_relative_eq!(
            model.grade_disturbance(90.0),
            model.mass * model.gravity,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_steady_state_velocity() {
        let model = VehicleModel::default();
        assert_relative_eq!(
            model.steady_state_velocity(575.0),
            575.0 / 61.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_validate_rejects_zero_mass() {
        let model = VehicleModel::new(0.0, 61.0, 9.80665);
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_parameters() {
        let model = VehicleModel::new(f64::NAN, 61.0, 9.80665);
        assert!(model.validate().is_err());

        let model = VehicleModel::new(1475.0, f64::INFINITY, 9.80665);
        assert!(model.validate().is_err());

        assert!(VehicleModel::default().validate().is_ok());
    }
}
