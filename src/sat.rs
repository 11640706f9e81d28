//! SAT bridge (spec.md 4.8, 6, 9), grounded on `original_source/src/sat.cc`
//! for the atom base cases and the literal/solver-index mapping, and on
//! the spec's "Open question" resolution for the `splr`-backed solver
//! (DESIGN.md).
//!
//! The `SatSolver` trait is the collaborator interface §6 calls for
//! (`new_variables`/`add_clause`/`solve`/`model`); `SplrSolver` is the one
//! concrete implementation, feature-gated behind `sat` so the core
//! algebra stays usable without a SAT backend at all (in which case
//! `sat`/`equiv`/`SatIter::new` report `Error::SolverUnavailable`).
use std::collections::HashMap;

use log::warn;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::expr::{one, zero, BoolExpr, Node};
use crate::kind::Kind;
use crate::tseytin::tseytin;

/// A variable identity within a `Model`: the context it was allocated in
/// plus its positive literal id. Needed because two different `Context`s
/// can issue the same numeric id for unrelated variables (GLOSSARY:
/// Context).
pub type VarKey = (u64, i64);

/// `sat()`'s witness: every support variable (outside the private Tseytin
/// auxiliary context) mapped to the constant the solver assigned it.
pub type Model = HashMap<VarKey, BoolExpr>;

pub fn model_value<'m>(model: &'m Model, ctx: &Context, lit: &BoolExpr) -> Option<&'m BoolExpr> {
    let id = lit.lit_id()?;
    model.get(&(ctx.uid(), id | 1))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolveResult {
    Sat,
    Unsat,
    Unknown,
}

/// The external collaborator interface (spec.md 6): a fresh-variable
/// pool, clause ingestion, and a decision + model query. `lits`/`model`
/// use the DIMACS convention: a positive `i32` is variable `n` true, a
/// negative one is variable `|n|` false, 1-indexed.
pub trait SatSolver {
    fn new_variables(&mut self, n: usize);
    fn add_clause(&mut self, lits: &[i32]);
    fn solve(&mut self) -> SolveResult;
    /// Signed per-variable assignment for every decided variable.
    fn model(&self) -> Vec<i32>;
}

#[cfg(feature = "sat")]
pub struct SplrSolver {
    num_vars: usize,
    clauses: Vec<Vec<i32>>,
    model: Vec<i32>,
}

#[cfg(feature = "sat")]
impl SplrSolver {
    pub fn new() -> Self {
        SplrSolver { num_vars: 0, clauses: Vec::new(), model: Vec::new() }
    }
}

#[cfg(feature = "sat")]
impl Default for SplrSolver {
    fn default() -> Self { Self::new() }
}

#[cfg(feature = "sat")]
impl SatSolver for SplrSolver {
    fn new_variables(&mut self, n: usize) { self.num_vars += n; }

    fn add_clause(&mut self, lits: &[i32]) { self.clauses.push(lits.to_vec()); }

    fn solve(&mut self) -> SolveResult {
        if self.clauses.is_empty() {
            self.model = Vec::new();
            return SolveResult::Sat;
        }
        match splr::Certificate::try_from(self.clauses.clone()) {
            Ok(splr::Certificate::SAT(model)) => {
                self.model = model;
                SolveResult::Sat
            }
            Ok(splr::Certificate::UNSAT) => SolveResult::Unsat,
            Err(e) => {
                warn!("splr reported an indeterminate result ({e}); mapping to Unsat at the public boundary");
                SolveResult::Unknown
            }
        }
    }

    fn model(&self) -> Vec<i32> { self.model.clone() }
}

/// Tracks the (context, positive-literal-id) -> solver-variable-index
/// mapping while a CNF is drained into clauses, per spec.md 4.8 step 2.
struct VarRegistry {
    by_key: HashMap<VarKey, usize>,
    by_index: Vec<VarKey>,
}

impl VarRegistry {
    fn new() -> Self { VarRegistry { by_key: HashMap::new(), by_index: Vec::new() } }

    /// Signed 1-based solver literal for `lit` (a literal node), honoring
    /// its polarity.
    fn index_of(&mut self, lit: &BoolExpr) -> i32 {
        let ctx = lit.ctx().expect("clause member must be a literal").clone();
        let id = lit.lit_id().expect("clause member must be a literal");
        let key = (ctx.uid(), id | 1);
        let idx = *self.by_key.entry(key).or_insert_with(|| {
            self.by_index.push(key);
            self.by_index.len() - 1
        });
        let var = (idx + 1) as i32;
        if id & 1 == 1 { var } else { -var }
    }
}

fn clause_literals(clause: &BoolExpr, reg: &mut VarRegistry) -> Vec<i32> {
    if clause.is_lit() {
        vec![reg.index_of(clause)]
    } else {
        clause.args().iter().map(|l| reg.index_of(l)).collect()
    }
}

/// Drains a Tseytin CNF into DIMACS-style clauses. `None` signals the
/// CNF collapsed to the constant ZERO (trivially unsat, no clauses to
/// build).
fn cnf_to_clauses(cnf: &BoolExpr, reg: &mut VarRegistry) -> Option<Vec<Vec<i32>>> {
    match cnf.kind() {
        Kind::Zero => None,
        Kind::One => Some(Vec::new()),
        Kind::Var | Kind::Comp => Some(vec![vec![reg.index_of(cnf)]]),
        Kind::And => Some(cnf.args().iter().map(|c| clause_literals(c, reg)).collect()),
        Kind::Or => Some(vec![clause_literals(cnf, reg)]),
        k => unreachable!("{k:?} cannot appear in a Tseytin CNF"),
    }
}

fn decode_model(raw: &[i32], reg: &VarRegistry, aux_ctx_uid: u64) -> Model {
    let mut model = Model::new();
    for &signed in raw {
        let idx = (signed.unsigned_abs() as usize) - 1;
        let (ctx_uid, pos_id) = reg.by_index[idx];
        if ctx_uid == aux_ctx_uid {
            continue; // omit Tseytin auxiliary variables (spec.md 4.8 step 4)
        }
        let value = if signed > 0 { one() } else { zero() };
        model.insert((ctx_uid, pos_id), value);
    }
    model
}

/// `sat(expr)`: satisfiability plus (when satisfiable) a witnessing model
/// restricted to `expr`'s own support (spec.md 4.8).
pub fn sat(e: &BoolExpr) -> Result<(bool, Option<Model>)> {
    match &**e {
        Node::Zero | Node::Log | Node::Ill => Ok((false, None)),
        Node::One => Ok((true, Some(Model::new()))),
        Node::Lit { ctx, id } => {
            let value = if id & 1 == 1 { one() } else { zero() };
            let mut model = Model::new();
            model.insert((ctx.uid(), id | 1), value);
            Ok((true, Some(model)))
        }
        Node::Op { .. } => sat_operator(e),
    }
}

#[cfg(feature = "sat")]
fn sat_operator(e: &BoolExpr) -> Result<(bool, Option<Model>)> {
    let aux_ctx = Context::new();
    let cnf = tseytin(e, &aux_ctx, "tseytin");
    let mut reg = VarRegistry::new();
    let Some(clauses) = cnf_to_clauses(&cnf, &mut reg) else {
        return Ok((false, None));
    };

    let mut solver = SplrSolver::new();
    solver.new_variables(reg.by_index.len());
    for clause in &clauses {
        solver.add_clause(clause);
    }

    match solver.solve() {
        SolveResult::Sat => {
            let model = decode_model(&solver.model(), &reg, aux_ctx.uid());
            Ok((true, Some(model)))
        }
        SolveResult::Unsat | SolveResult::Unknown => Ok((false, None)),
    }
}

#[cfg(not(feature = "sat"))]
fn sat_operator(_e: &BoolExpr) -> Result<(bool, Option<Model>)> {
    Err(Error::SolverUnavailable)
}

/// Iterates satisfying models one at a time, blocking each witnessed
/// assignment before resuming (spec.md 4.8). Terminates (yields `None`)
/// once the (growing) blocked formula is unsatisfiable.
#[cfg(feature = "sat")]
pub struct SatIter {
    reg: VarRegistry,
    aux_ctx_uid: u64,
    base_clauses: Vec<Vec<i32>>,
    blocking: Vec<Vec<i32>>,
    exhausted: bool,
}

#[cfg(feature = "sat")]
impl SatIter {
    pub fn new(e: &BoolExpr) -> Result<Self> {
        let aux_ctx = Context::new();
        let cnf = tseytin(e, &aux_ctx, "tseytin");
        let mut reg = VarRegistry::new();
        let (base_clauses, exhausted) = match cnf_to_clauses(&cnf, &mut reg) {
            Some(c) => (c, false),
            None => (Vec::new(), true),
        };
        Ok(SatIter { reg, aux_ctx_uid: aux_ctx.uid(), base_clauses, blocking: Vec::new(), exhausted })
    }
}

#[cfg(feature = "sat")]
impl Iterator for SatIter {
    type Item = Model;

    fn next(&mut self) -> Option<Model> {
        if self.exhausted {
            return None;
        }
        let mut solver = SplrSolver::new();
        solver.new_variables(self.reg.by_index.len());
        for clause in self.base_clauses.iter().chain(self.blocking.iter()) {
            solver.add_clause(clause);
        }
        match solver.solve() {
            SolveResult::Sat => {
                let raw = solver.model();
                self.blocking.push(raw.iter().map(|&v| -v).collect());
                Some(decode_model(&raw, &self.reg, self.aux_ctx_uid))
            }
            SolveResult::Unsat | SolveResult::Unknown => {
                self.exhausted = true;
                None
            }
        }
    }
}
