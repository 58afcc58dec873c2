pub mod config_error;
pub mod fetch_error;
pub mod prediction_error;

pub use config_error::ConfigError;
pub use fetch_error::FetchError;
pub use prediction_error::PredictionError;

/// Top-level error for the Estima workspace.
///
/// Domain errors stay typed so callers can scope their handling:
/// fetch failures are contained at the smallest affected scope,
/// prediction failures abort only the current weight-generation call,
/// and config failures abort construction before any computation.
#[derive(Debug, thiserror::Error)]
pub enum EstimaError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience result alias used across the workspace.
pub type EstimaResult<T> = Result<T, EstimaError>;
