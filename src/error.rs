use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable is unset or holds an empty string.
    #[error("{name} is not set")]
    MissingConfiguration { name: &'static str },
}
