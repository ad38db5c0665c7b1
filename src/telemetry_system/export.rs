use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::errors::SimulationError;
use crate::trajectory_system::trajectory::Trajectory;

pub const CSV_HEADER: &str = "Time(s),Position(m),Velocity(m/s)";

/// Writes the header row and one `time,position,velocity` row per sample.
/// Values carry six decimal places so re-reading a file reproduces the run.
pub fn write_csv<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for i in 0..trajectory.len() {
        let (time, position, velocity) = trajectory.sample(i);
        writeln!(writer, "{:.6},{:.6},{:.6}", time, position, velocity)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the trajectory as CSV. An empty
/// trajectory still gets its header row.
pub fn save_to_csv(trajectory: &Trajectory, path: &Path) -> Result<(), SimulationError> {
    let export_error = |source: io::Error| SimulationError::ExportError {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(export_error)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, trajectory).map_err(export_error)?;
    writer.flush().map_err(export_error)?;
    Ok(())
}
