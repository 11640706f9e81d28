//! CNF/DNF flattening (spec.md 4.6, 9), grounded on
//! `original_source/src/flatten.cc` and the `is_cnf`/`is_dnf` properties
//! in `original_source/src/boolexpr.cc`.
//!
//! Operates on an already-NNF tree (OR/AND/literals only). The recursion
//! alternates sense by *structural position*, not by which of `to_cnf`/
//! `to_dnf` is running at the root: under an OR node children are pulled
//! toward DNF shape, under an AND node toward CNF shape (spec.md 4.6 step
//! 1). Clauses are canonicalised as literal-id-sorted vectors so
//! absorption (subset elimination) and the distribution product are both
//! linear-merge operations (spec.md 4.6 step 3, 9 "CNF/DNF blow-up").
use crate::constructors::{and_s, or_s};
use crate::expr::BoolExpr;
use crate::kind::Kind;
use crate::nnf::to_nnf;

fn is_clause(e: &BoolExpr) -> bool {
    e.kind().is_op() && e.args().iter().all(|a| a.is_lit())
}

pub fn is_cnf(e: &BoolExpr) -> bool {
    match e.kind() {
        Kind::One => true,
        Kind::Var | Kind::Comp => true,
        Kind::Zero | Kind::Log | Kind::Ill => false,
        Kind::Or => e.args().iter().all(|a| a.is_lit()),
        Kind::And => e
            .args()
            .iter()
            .all(|a| a.is_lit() || (a.kind() == Kind::Or && is_clause(a))),
        _ => false,
    }
}

pub fn is_dnf(e: &BoolExpr) -> bool {
    match e.kind() {
        Kind::Zero => true,
        Kind::Var | Kind::Comp => true,
        Kind::One | Kind::Log | Kind::Ill => false,
        Kind::And => e.args().iter().all(|a| a.is_lit()),
        Kind::Or => e
            .args()
            .iter()
            .all(|a| a.is_lit() || (a.kind() == Kind::And && is_clause(a))),
        _ => false,
    }
}

fn lit_id(e: &BoolExpr) -> i64 {
    e.lit_id().expect("clause member must be a literal after to_nnf")
}

fn canon_clause(mut lits: Vec<BoolExpr>) -> Vec<BoolExpr> {
    lits.sort_by_key(lit_id);
    lits.dedup_by_key(|l| lit_id(l));
    lits
}

fn twolvl_to_clauses(e: &BoolExpr) -> Vec<Vec<BoolExpr>> {
    e.args()
        .iter()
        .map(|arg| {
            if arg.is_lit() {
                vec![arg.clone()]
            } else {
                canon_clause(arg.args().to_vec())
            }
        })
        .collect()
}

/// xs<=ys / ys<=xs by a single sorted-id merge pass (spec.md 4.6 step 3).
fn subset_flags(xs: &[BoolExpr], ys: &[BoolExpr]) -> (bool, bool) {
    let (mut xs_lte_ys, mut ys_lte_xs) = (true, true);
    let (mut i, mut j) = (0, 0);
    while i < xs.len() && j < ys.len() {
        let (xi, yj) = (lit_id(&xs[i]), lit_id(&ys[j]));
        if xi == yj {
            i += 1;
            j += 1;
        } else if xi < yj {
            xs_lte_ys = false;
            i += 1;
        } else {
            ys_lte_xs = false;
            j += 1;
        }
    }
    if i < xs.len() {
        xs_lte_ys = false;
    }
    if j < ys.len() {
        ys_lte_xs = false;
    }
    (xs_lte_ys, ys_lte_xs)
}

fn absorb(clauses: Vec<Vec<BoolExpr>>) -> Vec<Vec<BoolExpr>> {
    let n = clauses.len();
    if n < 2 {
        return clauses;
    }
    let mut keep = vec![true; n];
    for i in 0..n - 1 {
        if !keep[i] {
            continue;
        }
        for j in (i + 1)..n {
            let (xs_lte_ys, ys_lte_xs) = subset_flags(&clauses[i], &clauses[j]);
            if xs_lte_ys {
                keep[j] = false;
            } else if ys_lte_xs {
                keep[i] = false;
                break;
            }
        }
    }
    clauses.into_iter().zip(keep).filter_map(|(c, k)| k.then_some(c)).collect()
}

/// Cartesian product of clause sets, dropping any candidate containing a
/// literal and its negation (tautology elimination during the product,
/// spec.md 4.6 step 4), re-absorbing after every factor.
fn product(clauses: Vec<Vec<BoolExpr>>) -> Vec<Vec<BoolExpr>> {
    let mut acc: Vec<Vec<BoolExpr>> = vec![vec![]];
    for clause in clauses {
        let mut next = Vec::new();
        for factor in &acc {
            for x in &clause {
                let xn_id = lit_id(x) ^ 1;
                if !factor.iter().any(|f| lit_id(f) == xn_id) {
                    let mut nf = factor.clone();
                    nf.push(x.clone());
                    next.push(canon_clause(nf));
                }
            }
        }
        acc = absorb(next);
    }
    acc
}

fn flatten1(e: &BoolExpr, dnf_mode: bool) -> BoolExpr {
    if !e.kind().is_op() || is_clause(e) {
        return e.clone();
    }
    let child_is_dnf = e.kind() == Kind::Or;
    let mapped: Vec<BoolExpr> = e.args().iter().map(|a| flatten1(a, child_is_dnf)).collect();
    let merged = match e.kind() {
        Kind::Or => or_s(mapped),
        Kind::And => and_s(mapped),
        _ => unreachable!("NNF trees contain only OR/AND operators"),
    };
    flatten2(&merged, dnf_mode)
}

fn flatten2(e: &BoolExpr, dnf_mode: bool) -> BoolExpr {
    if !e.kind().is_op() || is_clause(e) {
        return e.clone();
    }
    let clauses = absorb(twolvl_to_clauses(e));
    let needs_product = if dnf_mode { e.kind() == Kind::And } else { e.kind() == Kind::Or };
    let clauses = if needs_product { product(clauses) } else { clauses };

    let build_inner: fn(Vec<BoolExpr>) -> BoolExpr = if dnf_mode { and_s } else { or_s };
    let build_outer: fn(Vec<BoolExpr>) -> BoolExpr = if dnf_mode { or_s } else { and_s };
    let args: Vec<BoolExpr> = clauses.into_iter().map(build_inner).collect();
    build_outer(args)
}

/// Conjunctive normal form: an AND of OR-clauses, equivalent to `e`.
/// Worst-case exponential (spec.md 4.6, "inherent to CNF/DNF").
pub fn to_cnf(e: &BoolExpr) -> BoolExpr {
    flatten1(&to_nnf(e), false)
}

/// Disjunctive normal form: an OR of AND-clauses, equivalent to `e`.
pub fn to_dnf(e: &BoolExpr) -> BoolExpr {
    flatten1(&to_nnf(e), true)
}
