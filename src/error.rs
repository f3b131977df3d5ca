use thiserror::Error;

/// Failures at the advisory-provider seam. The scoring core itself never
/// errors: missing optional inputs degrade the output instead.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory provider unavailable: {0}")]
    Unavailable(String),

    #[error("advisory provider returned an empty response")]
    EmptyResponse,

    #[error("advisory provider failed: {0}")]
    Provider(String),
}
