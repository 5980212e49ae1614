use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// All core computations are deterministic and pure; an error here means a
/// programming or configuration fault, never a transient condition. The core
/// does no logging — reporting is the calling driver's responsibility.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter (non-finite component, non-positive
    /// interval, negative restitution, degenerate room bounds, ...).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A by-distance kinematic operation was asked to follow a
    /// zero-magnitude vector, so no direction is defined.
    #[error("undefined direction: {0}")]
    UndefinedDirection(&'static str),

    /// Numerical pathology (reserved for derivative-based computations).
    #[error("numerical error: {0}")]
    MathError(String),
}
