use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed into the expected type.
    ///
    /// Check the value of the named variable in the environment or `.env` file.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
