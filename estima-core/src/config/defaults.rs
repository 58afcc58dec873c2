//! Default values for configuration structs.

/// OpenAI-compatible chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default prediction model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Whole-request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sampling temperature. 0.0 keeps identical inputs yielding identical
/// vectors.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
