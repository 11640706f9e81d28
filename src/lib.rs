//! A crate for working with boolean expressions: a shared immutable
//! expression DAG with simplification, negation normal form, CNF/DNF
//! conversion, Tseytin encoding, and a SAT bridge.

#![allow(clippy::many_single_char_names)]

#[macro_use] extern crate log;

/// The `Kind` tag shared by every node in the DAG.
pub mod kind;
/// Typed errors for the few boundary operations that can fail.
pub mod error;
/// Per-universe variable interning.
pub mod context;
/// The expression node model: an immutable, reference-counted DAG.
pub mod expr;
/// Argset reducers: the state machines behind `simplify`.
pub mod argset;
/// Raw and simplifying constructors for every operator kind.
pub mod constructors;
/// Structural simplification.
pub mod simplify;
/// Constant-time local inversion.
pub mod invert;
/// Negation push-down.
pub mod pushdown;
/// Positive-operator form.
pub mod posop;
/// Lattice-operator (OR/AND/NOT-only) form.
pub mod latop;
/// Binary-operator form.
pub mod binop;
/// Negation normal form.
pub mod nnf;
/// CNF/DNF flattening.
pub mod flatten;
/// Tseytin CNF encoding with auxiliary variables.
pub mod tseytin;
/// The SAT bridge: Tseytin encoding plus an external CDCL solver.
pub mod sat;
/// Variable substitution: composition and restriction.
pub mod compose;
/// Derived queries: support, depth, size, equivalence, cofactors, ...
pub mod query;
/// String rendering (positive-operator form).
pub mod fmt;

pub use constructors::*;
pub use context::Context;
pub use error::{Error, Result};
pub use expr::{ill, is_ill, is_log, is_one, is_zero, log, one, same, zero, BoolExpr, Node};
pub use invert::invert;
pub use kind::Kind;
pub use simplify::simplify;

pub use pushdown::push_down_not;
pub use posop::to_positive_operator;
pub use latop::to_lattice_operator;
pub use binop::to_binary_operator;
pub use nnf::to_nnf;
pub use flatten::{is_cnf, is_dnf, to_cnf, to_dnf};
pub use tseytin::tseytin;
pub use compose::{compose, restrict};
pub use query::{atom_count, cofactors, consensus, degree, depth, derivative, expand, op_count, size, smoothing, support};

#[cfg(feature = "sat")]
pub use query::equiv;
pub use sat::{sat, SatSolver, SolveResult};
#[cfg(feature = "sat")]
pub use sat::{SatIter, SplrSolver};
