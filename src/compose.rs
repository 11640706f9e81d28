//! Composition and restriction (spec.md 4.9), grounded on
//! `original_source/src/compose.cc` and `restrict.cc`.
//!
//! Both are a single bottom-up rebuild keyed by a variable's *positive*
//! literal id (`id | 1`) paired with the `Context` it was allocated in --
//! the same `(ctx.uid(), id)` pairing `sat.rs`'s `VarKey`/`Model` already
//! use -- so a mapping entry applies regardless of which polarity of the
//! variable is encountered in the tree: a `Comp` node substitutes the
//! inverse of the mapped replacement. Pairing the key with a context uid
//! matters because every `Context` starts its own id counter at 0 (GLOSSARY:
//! Context): without it, two unrelated contexts' variables routinely
//! collide on the same raw id and a mapping built against one context
//! would silently apply to an unrelated variable from another.
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::expr::{op, BoolExpr, Node};
use crate::invert::invert;
use crate::simplify::simplify;

/// Keyed by `(ctx.uid(), id | 1)` -- a variable's positive literal id
/// within its `Context` -- mapped to a replacement expression.
pub type VarMap = HashMap<(u64, i64), BoolExpr>;

/// Substitutes every occurrence of each key variable with its mapped
/// expression. Unlike the `_s` constructors, this performs no
/// simplification of its own -- `compose` rebuilds structurally, exactly
/// mirroring `original_source/src/compose.cc`'s `transform`.
///
/// Returns `Error::ForeignContext` if `mapping` holds an entry for this
/// literal's raw id under a different `Context` than the one actually
/// encountered while traversing `e` -- the collision case described
/// above, rather than silently leaving the variable unsubstituted.
pub fn compose(e: &BoolExpr, mapping: &VarMap) -> Result<BoolExpr> {
    match &**e {
        Node::Lit { ctx, id } => match mapping.get(&(ctx.uid(), id | 1)) {
            Some(replacement) => {
                Ok(if id & 1 == 1 { replacement.clone() } else { invert(replacement) })
            }
            None => {
                if mapping.keys().any(|(_, mid)| *mid == (id | 1)) {
                    Err(Error::ForeignContext)
                } else {
                    Ok(e.clone())
                }
            }
        },
        Node::Op { kind, args, .. } => {
            let mapped: Vec<BoolExpr> = args.iter().map(|a| compose(a, mapping)).collect::<Result<_>>()?;
            Ok(op(*kind, false, mapped))
        }
        _ => Ok(e.clone()),
    }
}

/// Restriction: composition with a mapping whose values are all ZERO/ONE,
/// followed by simplification so the degeneracy rules collapse the
/// substituted-in constants (spec.md 4.9).
pub fn restrict(e: &BoolExpr, point: &VarMap) -> Result<BoolExpr> {
    Ok(simplify(&compose(e, point)?))
}

/// Builds a single-variable restriction point, looking up `var`'s
/// canonical (positive) id and owning `Context` via `var` itself.
pub fn point_of(var: &BoolExpr, value: BoolExpr) -> Result<VarMap> {
    let ctx = var.ctx().ok_or(Error::NotALiteral)?;
    let id = var.lit_id().ok_or(Error::NotALiteral)?;
    let mut point = VarMap::new();
    point.insert((ctx.uid(), id | 1), value);
    Ok(point)
}
