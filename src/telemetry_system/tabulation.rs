use std::io::{self, Write};

use crate::trajectory_system::trajectory::Trajectory;

/// Writes the scenario description and a right-aligned table, one row per
/// sample: 10 characters for time, 15 each for position and velocity.
pub fn write_table<W: Write>(
    writer: &mut W,
    trajectory: &Trajectory,
    description: &str,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", description)?;
    writeln!(
        writer,
        "{:>10}{:>15}{:>15}",
        "Time(s)", "Position(m)", "Velocity(m/s)"
    )?;

    for i in 0..trajectory.len() {
        let (time, position, velocity) = trajectory.sample(i);
        writeln!(writer, "{:>10.1}{:>15.4}{:>15.4}", time, position, velocity)?;
    }

    Ok(())
}

/// Prints the table to stdout.
pub fn print_table(trajectory: &Trajectory, description: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write_table(&mut handle, trajectory, description);
}
