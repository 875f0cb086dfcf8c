use thiserror::Error;

/// Error type for invalid construction or configuration.
///
/// Query paths never produce these: a missing id during a lookup yields a
/// zero/`None` result instead (see [`crate::aggregate`]). Errors are reserved
/// for the loading and construction paths where silently absorbing a problem
/// would leave the caller with a structurally broken product.
#[derive(Error, Debug)]
pub enum PLCAError {
    #[error("stage '{0}' already exists in the lifecycle forest")]
    DuplicateStage(String),
    #[error("stage '{0}' was not found in the lifecycle forest")]
    StageNotFound(String),
    #[error("stage id and name must be non-empty")]
    EmptyStageIdentity,
    #[error("lifecycle forest is malformed: {details}")]
    MalformedLifecycle { details: String },
    #[error("material '{0}' is already registered in the catalog")]
    DuplicateMaterial(String),
    #[error("eco-equivalent '{id}' has a non-positive conversion factor ({factor})")]
    InvalidConversionFactor { id: String, factor: f64 },
    #[error("failed to parse TOML configuration")]
    ConfigParse(#[from] toml::de::Error),
    #[error("failed to serialize TOML snapshot")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Convenience type for `Result<T, PLCAError>`.
pub type PLCAResult<T> = Result<T, PLCAError>;
