use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid duration: {duration} s with a {time_step} s time step yields no samples")]
    InvalidDuration { duration: f64, time_step: f64 },

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Export error for {path}: {source}")]
    ExportError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
