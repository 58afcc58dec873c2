/// External predictor errors.
///
/// All-or-nothing for the estimation request that triggered the call:
/// a failed prediction is propagated to the caller, never masked as a
/// zero-filled weight vector.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("prediction transport error: {reason}")]
    Transport { reason: String },

    #[error("prediction authentication failed: {reason}")]
    Auth { reason: String },

    #[error("malformed prediction response: {reason}")]
    MalformedResponse { reason: String },

    #[error("prediction response contained no completion")]
    EmptyCompletion,
}
