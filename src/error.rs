use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhostError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Failed to fetch remote resource: {0}")]
    RemoteFetchError(String),

    #[error("Invalid descriptor for '{name}': {message}")]
    DescriptorParseError { name: String, message: String },

    #[error("Package manager error: {0}")]
    PackageManagerError(String),

    #[error("Failed to install requirement '{requirement}': {reason}")]
    RequirementInstall { requirement: String, reason: String },

    #[error("Failed to run '{command}': {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GhostError>;
