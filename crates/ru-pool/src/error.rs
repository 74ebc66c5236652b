use ru_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("the available pool is empty")]
    PoolEmpty,

    #[error("agent {0} is not dispatched")]
    NotDispatched(AgentId),
}

pub type PoolResult<T> = Result<T, PoolError>;
