/// Configuration errors raised at adapter construction, before any
/// computation begins.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing API key: set the {var} environment variable")]
    MissingApiKey { var: &'static str },

    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
