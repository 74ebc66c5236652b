use ru_pool::PoolError;
use thiserror::Error;

/// Why a dispatch did not run a handler.
///
/// None of these escape the session as faults: each one has already been
/// logged and answered with a no-op or a schedule request by the time the
/// caller sees it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no suitable event found")]
    NoSuitableEvent,

    #[error("no active session context to deliver into")]
    NoActiveSessionContext,

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    Pool(#[from] PoolError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
