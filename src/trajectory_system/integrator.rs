use crate::constants::TIME_STEP;
use crate::control::scenario::ScenarioParameters;
use crate::errors::SimulationError;

use super::{model::VehicleModel, trajectory::Trajectory};

/// Where the grade disturbance enters the two acceleration evaluations of a
/// predictor-corrector step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradeTreatment {
    /// Subtract the grade force in both the predictor and the corrector.
    #[default]
    BothStages,
    /// Subtract the grade force in the predictor only; the corrector
    /// acceleration sees a flat road.
    PredictorOnly,
}

/// Fixed-step trapezoidal predictor-corrector for the longitudinal ODE.
///
/// Velocity advances through a full predict/correct pair: an explicit-Euler
/// velocity estimate, a second acceleration evaluation at that estimate, and
/// a trapezoidal average of the two accelerations. The position corrector
/// averages the previous and *predicted* velocities, so position trails the
/// corrected velocity by one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct TrapezoidalIntegrator {
    pub model: VehicleModel,
    pub time_step: f64, // s
    pub grade_treatment: GradeTreatment,
}

impl Default for TrapezoidalIntegrator {
    fn default() -> Self {
        TrapezoidalIntegrator {
            model: VehicleModel::default(),
            time_step: TIME_STEP,
            grade_treatment: GradeTreatment::default(),
        }
    }
}

impl TrapezoidalIntegrator {
    pub fn new(model: VehicleModel, time_step: f64) -> Self {
        TrapezoidalIntegrator {
            model,
            time_step,
            grade_treatment: GradeTreatment::default(),
        }
    }

    pub fn with_grade_treatment(mut self, grade_treatment: GradeTreatment) -> Self {
        self.grade_treatment = grade_treatment;
        self
    }

    /// Integrates one scenario over its full horizon and returns the sampled
    /// trajectory. Sample 0 is the initial state; the step count is
    /// `duration / time_step` truncated toward zero, so a duration shorter
    /// than one time step is rejected rather than producing an empty result.
    pub fn integrate(
        &self,
        parameters: &ScenarioParameters,
    ) -> Result<Trajectory, SimulationError> {
        self.model.validate()?;
        self.validate(parameters)?;

        let steps = (parameters.duration / self.time_step) as i64;
        if steps <= 0 {
            return Err(SimulationError::InvalidDuration {
                duration: parameters.duration,
                time_step: self.time_step,
            });
        }

        let dt = self.time_step;

        // The grade is constant over the whole run
        let disturbance = self.model.grade_disturbance(parameters.grade_angle);
        let corrector_disturbance = match self.grade_treatment {
            GradeTreatment::BothStages => disturbance,
            GradeTreatment::PredictorOnly => 0.0,
        };

        let mut trajectory = Trajectory::with_capacity(steps as usize);
        trajectory.push(0.0, parameters.initial_position, parameters.initial_velocity);

        let mut position = parameters.initial_position;
        let mut velocity = parameters.initial_velocity;

        for i in 1..steps {
            let a_prev = self
                .model
                .acceleration(parameters.applied_force, velocity, disturbance);
            let v_predict = velocity + a_prev * dt;

            // Acceleration depends on velocity alone, so the explicit-Euler
            // position predictor never feeds back into either corrector.
            let a_predict = self.model.acceleration(
                parameters.applied_force,
                v_predict,
                corrector_disturbance,
            );

            position += 0.5 * (velocity + v_predict) * dt;
            velocity += 0.5 * (a_prev + a_predict) * dt;

            trajectory.push(i as f64 * dt, position, velocity);
        }

        Ok(trajectory)
    }

    fn validate(&self, parameters: &ScenarioParameters) -> Result<(), SimulationError> {
        if !(self.time_step > 0.0) || !self.time_step.is_finite() {
            return Err(SimulationError::ModelError(format!(
                "time step must be positive and finite, got {}",
                self.time_step
            )));
        }

        let fields = [
            parameters.applied_force,
            parameters.initial_position,
            parameters.initial_velocity,
            parameters.grade_angle,
            parameters.duration,
        ];
        if fields.iter().any(|value| !value.is_finite()) {
            return Err(SimulationError::ModelError(format!(
                "non-finite scenario parameter in {:?}",
                parameters
            )));
        }

        Ok(())
    }
}
