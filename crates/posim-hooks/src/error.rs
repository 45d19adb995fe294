use thiserror::Error;

/// Failure raised by a velocity, path, or noise hook.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HookError {
    /// The hook's parameters cannot produce a value (e.g. a zero radius).
    #[error("invalid hook parameters: {0}")]
    InvalidParams(String),

    /// Any other failure, typically raised by a user-supplied closure.
    #[error("{0}")]
    Failed(String),
}

pub type HookResult<T> = Result<T, HookError>;
