use std::path::{Path, PathBuf};

use crate::errors::SimulationError;
use crate::telemetry_system::{export::save_to_csv, tabulation::print_table};
use crate::trajectory_system::integrator::TrapezoidalIntegrator;

use super::scenario::Scenario;

/// Runs a batch of scenarios through one integrator, exporting every result
/// to the output directory and printing a table for the scenarios that ask
/// for one.
pub struct ScenarioDriver {
    integrator: TrapezoidalIntegrator,
    output_dir: PathBuf,
}

impl ScenarioDriver {
    pub fn new(integrator: TrapezoidalIntegrator, output_dir: PathBuf) -> Self {
        ScenarioDriver {
            integrator,
            output_dir,
        }
    }

    /// Runs every scenario in order. A failed scenario is reported and
    /// recorded; the remaining scenarios still run.
    pub fn run(&self, scenarios: &[Scenario]) -> Vec<(String, SimulationError)> {
        let mut failures = Vec::new();

        for scenario in scenarios {
            println!("Running {}", scenario.description);
            match self.run_scenario(scenario) {
                Ok(path) => println!("Results saved to {}", path.display()),
                Err(error) => {
                    eprintln!("{} failed: {}", scenario.description, error);
                    failures.push((scenario.description.clone(), error));
                }
            }
        }

        failures
    }

    fn run_scenario(&self, scenario: &Scenario) -> Result<PathBuf, SimulationError> {
        let trajectory = self.integrator.integrate(&scenario.parameters)?;

        if scenario.print_table {
            print_table(&trajectory, &scenario.description);
        }

        let path = self.output_dir.join(&scenario.output_file);
        save_to_csv(&trajectory, &path)?;
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
