//! Typed errors for the few boundary operations that can fail (see
//! SPEC_FULL.md 10.2). Every purely algebraic operation stays infallible:
//! ill-formedness is a value (`ILL`), not an exception.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("context never allocated literal id {id}")]
    UnknownLiteral { id: i64 },

    #[error("operation mixed literals from two different contexts")]
    ForeignContext,

    #[error("expected a literal, got a constant or operator node")]
    NotALiteral,

    #[error("the `sat` feature is not enabled; no SatSolver is available")]
    SolverUnavailable,
}

pub type Result<T> = std::result::Result<T, Error>;
