use car_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = std::env::current_dir()?;
    println!("Writing scenario results to {}", output_dir.display());

    let integrator = TrapezoidalIntegrator::default();
    let driver = ScenarioDriver::new(integrator, output_dir);

    let scenarios = standard_scenarios();
    let failures = driver.run(&scenarios);
    if !failures.is_empty() {
        println!("{} of {} scenarios failed.", failures.len(), scenarios.len());
    }

    Ok(())
}
