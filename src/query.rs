//! Derived queries (spec.md 4.10, SPEC_FULL.md 10.6), grounded on
//! `original_source/src/count.cc` (size/depth/atom_count/op_count),
//! `original_source/src/boolexpr.cc`'s `support()`, and
//! `original_source/src/equivalent.cc`.
//!
//! `size`/`depth`/`atom_count`/`op_count`/`support` walk the tree exactly
//! as the source does: plain recursion, one call per child, no DAG-aware
//! memoization -- a node reachable through two different parents is
//! counted twice, matching `original_source/src/count.cc`.
use std::collections::HashSet;

use crate::compose::{restrict, VarMap};
use crate::constructors::{and_s, ite_s, or_s, xor_s};
use crate::error::Result;
use crate::expr::BoolExpr;

/// Every positive-polarity variable appearing anywhere in `e`, keyed by
/// `(ctx.uid(), id | 1)` -- the same pairing `sat.rs`'s `VarKey` uses --
/// so that two variables from different `Context`s never get conflated
/// even when their raw ids collide (every `Context` starts its own id
/// counter at 0; see GLOSSARY: Context).
pub fn support(e: &BoolExpr) -> HashSet<(u64, i64)> {
    let mut s = HashSet::new();
    collect_support(e, &mut s);
    s
}

fn collect_support(e: &BoolExpr, s: &mut HashSet<(u64, i64)>) {
    if let (Some(ctx), Some(id)) = (e.ctx(), e.lit_id()) {
        s.insert((ctx.uid(), id | 1));
    }
    for a in e.args() {
        collect_support(a, s);
    }
}

/// Number of distinct variables in `e`'s support.
pub fn degree(e: &BoolExpr) -> usize { support(e).len() }

/// Longest root-to-leaf path; atoms have depth 0.
pub fn depth(e: &BoolExpr) -> u32 {
    let args = e.args();
    if args.is_empty() { 0 } else { args.iter().map(depth).max().unwrap() + 1 }
}

/// Total node count, counting shared subexpressions once per occurrence.
pub fn size(e: &BoolExpr) -> u32 {
    1 + e.args().iter().map(size).sum::<u32>()
}

/// Count of atom (constant or literal) occurrences.
pub fn atom_count(e: &BoolExpr) -> u32 {
    if e.is_atom() { 1 } else { e.args().iter().map(atom_count).sum() }
}

/// Count of operator-node occurrences.
pub fn op_count(e: &BoolExpr) -> u32 {
    if e.is_atom() { 0 } else { 1 + e.args().iter().map(op_count).sum::<u32>() }
}

/// Two expressions are equivalent iff their XOR is unsatisfiable
/// (spec.md 4.10). Requires the `sat` feature.
#[cfg(feature = "sat")]
pub fn equiv(e: &BoolExpr, f: &BoolExpr) -> Result<bool> {
    let (is_sat, _) = crate::sat::sat(&xor_s(vec![e.clone(), f.clone()]))?;
    Ok(!is_sat)
}

fn single_point(var: &BoolExpr, value: BoolExpr) -> VarMap {
    let ctx = var.ctx().expect("cofactor variable must be a literal");
    let id = var.lit_id().expect("cofactor variable must be a literal");
    let mut point = VarMap::new();
    point.insert((ctx.uid(), id | 1), value);
    point
}

/// `restrict` against a point built from one of `e`'s own variables can
/// only fail if `e` contains a foreign-context literal colliding on that
/// variable's raw id -- a caller contract violation, not a reachable
/// outcome for well-formed callers of the queries below.
fn restrict_at(e: &BoolExpr, point: &VarMap) -> BoolExpr {
    restrict(e, point).expect("cofactor restriction hit a foreign-context literal collision")
}

/// The `2^|vars|` restrictions of `e` by every combination of `vars`
/// fixed to 0 or 1, in the order: all-of-`vars[0]`-at-0 first, then
/// `vars[0]`-at-1, recursively over the rest (spec.md 4.10).
pub fn cofactors(e: &BoolExpr, vars: &[BoolExpr]) -> Vec<BoolExpr> {
    let mut cfs = vec![e.clone()];
    for x in vars {
        let p0 = single_point(x, crate::expr::zero());
        let p1 = single_point(x, crate::expr::one());
        let mut next = Vec::with_capacity(cfs.len() * 2);
        next.extend(cfs.iter().map(|cf| restrict_at(cf, &p0)));
        next.extend(cfs.iter().map(|cf| restrict_at(cf, &p1)));
        cfs = next;
    }
    cfs
}

/// OR of all cofactors over `vars` -- true wherever *some* assignment to
/// `vars` would make `e` true.
pub fn smoothing(e: &BoolExpr, vars: &[BoolExpr]) -> BoolExpr { or_s(cofactors(e, vars)) }

/// AND of all cofactors over `vars` -- true only where *every*
/// assignment to `vars` makes `e` true.
pub fn consensus(e: &BoolExpr, vars: &[BoolExpr]) -> BoolExpr { and_s(cofactors(e, vars)) }

/// XOR of all cofactors over `vars` -- true where `e`'s value is
/// sensitive to at least one of `vars`' boundary conditions.
pub fn derivative(e: &BoolExpr, vars: &[BoolExpr]) -> BoolExpr { xor_s(cofactors(e, vars)) }

/// Shannon expansion: a nested ITE tree over `vars` whose leaves are the
/// cofactors of `e` by every combination of `vars` (spec.md 4.10).
pub fn expand(e: &BoolExpr, vars: &[BoolExpr]) -> BoolExpr {
    match vars.split_first() {
        None => e.clone(),
        Some((x, rest)) => {
            let p0 = single_point(x, crate::expr::zero());
            let p1 = single_point(x, crate::expr::one());
            let d0 = expand(&restrict_at(e, &p0), rest);
            let d1 = expand(&restrict_at(e, &p1), rest);
            ite_s(x.clone(), d1, d0)
        }
    }
}
