use thiserror::Error;

use crate::coords::BlockPos;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    #[error("{op}: precondition violated at {pos}: {detail}")]
    PreconditionViolation {
        op: &'static str,
        pos: BlockPos,
        detail: &'static str,
    },
    #[error("{op}: {detail}")]
    DomainError { op: &'static str, detail: String },
}

impl WorldError {
    pub(crate) fn precondition(op: &'static str, pos: BlockPos, detail: &'static str) -> Self {
        WorldError::PreconditionViolation { op, pos, detail }
    }
}

pub type Result<T> = std::result::Result<T, WorldError>;
