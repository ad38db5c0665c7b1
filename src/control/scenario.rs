use crate::constants::{CRUISE_FORCE, SCENARIO_DURATION};

/// Inputs for one integration run. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioParameters {
    pub applied_force: f64,    // N
    pub initial_position: f64, // m
    pub initial_velocity: f64, // m/s
    pub grade_angle: f64,      // degrees, 0 = flat
    pub duration: f64,         // s
}

impl ScenarioParameters {
    pub fn new(
        applied_force: f64,
        initial_position: f64,
        initial_velocity: f64,
        grade_angle: f64,
        duration: f64,
    ) -> Self {
        ScenarioParameters {
            applied_force,
            initial_position,
            initial_velocity,
            grade_angle,
            duration,
        }
    }
}

/// A named what-if case: integration inputs plus where the results go.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub description: String,
    pub parameters: ScenarioParameters,
    pub output_file: String,
    pub print_table: bool,
}

impl Scenario {
    pub fn new(
        description: &str,
        parameters: ScenarioParameters,
        output_file: &str,
        print_table: bool,
    ) -> Self {
        Scenario {
            description: description.to_string(),
            parameters,
            output_file: output_file.to_string(),
            print_table,
        }
    }
}

/// The fixed what-if set: coasting from speed, the cruise force from rest,
/// and the cruise force against two road grades. The graded cases also get a
/// console table.
pub fn standard_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Case 1: F = 0, x(0) = 0, v(0) = 15 m/s",
            ScenarioParameters::new(0.0, 0.0, 15.0, 0.0, SCENARIO_DURATION),
            "case1.csv",
            false,
        ),
        Scenario::new(
            "Case 2: F = 575 N, x(0) = 0, v(0) = 0",
            ScenarioParameters::new(CRUISE_FORCE, 0.0, 0.0, 0.0, SCENARIO_DURATION),
            "case2.csv",
            false,
        ),
        Scenario::new(
            "Case 3: F = 575 N, x(0) = 0, v(0) = 0, theta = 4.5 degrees",
            ScenarioParameters::new(CRUISE_FORCE, 0.0, 0.0, 4.5, SCENARIO_DURATION),
            "case3.csv",
            true,
        ),
        Scenario::new(
            "Case 4: F = 575 N, x(0) = 0, v(0) = 0, theta = 9 degrees",
            ScenarioParameters::new(CRUISE_FORCE, 0.0, 0.0, 9.0, SCENARIO_DURATION),
            "case4.csv",
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_scenarios_cover_the_what_if_set() {
        let scenarios = standard_scenarios();
        assert_eq!(scenarios.len(), 4);

        // One coasting case with no drive force
        let coasting = &scenarios[0];
        assert_eq!(coasting.parameters.applied_force, 0.0);
        assert_eq!(coasting.parameters.initial_velocity, 15.0);
        assert_eq!(coasting.parameters.grade_angle, 0.0);

        // One force-only case from rest
        let force_only = &scenarios[1];
        assert_eq!(force_only.parameters.applied_force, CRUISE_FORCE);
        assert_eq!(force_only.parameters.initial_velocity, 0.0);
        assert_eq!(force_only.parameters.grade_angle, 0.0);

        // Graded cases at distinct angles, both printed
        let angles: Vec<f64> = scenarios[2..]
            .iter()
            .map(|scenario| scenario.parameters.grade_angle)
            .collect();
        assert_eq!(angles, vec![4.5, 9.0]);
        assert!(scenarios[2..].iter().all(|scenario| scenario.print_table));
    }

    #[test]
    fn test_standard_scenarios_have_distinct_outputs() {
        let scenarios = standard_scenarios();
        let files: HashSet<&str> = scenarios
            .iter()
            .map(|scenario| scenario.output_file.as_str())
            .collect();
        assert_eq!(files.len(), scenarios.len());
    }

    #[test]
    fn test_standard_scenarios_share_the_horizon() {
        for scenario in standard_scenarios() {
            assert_eq!(scenario.parameters.duration, SCENARIO_DURATION);
            assert_eq!(scenario.parameters.initial_position, 0.0);
        }
    }
}
