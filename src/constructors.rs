//! Raw and simplifying (`_s`) constructors for every operator kind
//! (spec.md 4, 6), plus the `onehot`/`onehot0` supplements (SPEC_FULL.md
//! 10.5). Grounded on `original_source/src/operators.cc`.
use crate::expr::{one, op, zero, BoolExpr};
use crate::invert::invert;
use crate::kind::Kind;

fn nary(kind: Kind, identity: BoolExpr, args: Vec<BoolExpr>) -> BoolExpr {
    match args.len() {
        0 => identity,
        1 => args.into_iter().next().unwrap(),
        _ => op(kind, false, args),
    }
}

pub fn or_(args: Vec<BoolExpr>) -> BoolExpr { nary(Kind::Or, zero(), args) }
pub fn and_(args: Vec<BoolExpr>) -> BoolExpr { nary(Kind::And, one(), args) }
pub fn xor_(args: Vec<BoolExpr>) -> BoolExpr { nary(Kind::Xor, zero(), args) }

pub fn nor(args: Vec<BoolExpr>) -> BoolExpr { invert(&or_(args)) }
pub fn nand(args: Vec<BoolExpr>) -> BoolExpr { invert(&and_(args)) }
pub fn xnor(args: Vec<BoolExpr>) -> BoolExpr { invert(&xor_(args)) }

pub fn eq(args: Vec<BoolExpr>) -> BoolExpr {
    if args.len() < 2 { one() } else { op(Kind::Eq, false, args) }
}
pub fn neq(args: Vec<BoolExpr>) -> BoolExpr { invert(&eq(args)) }

pub fn impl_(p: BoolExpr, q: BoolExpr) -> BoolExpr { op(Kind::Impl, false, vec![p, q]) }
pub fn nimpl(p: BoolExpr, q: BoolExpr) -> BoolExpr { op(Kind::Nimpl, false, vec![p, q]) }

pub fn ite(s: BoolExpr, d1: BoolExpr, d0: BoolExpr) -> BoolExpr { op(Kind::Ite, false, vec![s, d1, d0]) }
pub fn nite(s: BoolExpr, d1: BoolExpr, d0: BoolExpr) -> BoolExpr { op(Kind::Nite, false, vec![s, d1, d0]) }

pub fn or_s(args: Vec<BoolExpr>) -> BoolExpr { crate::simplify::simplify(&or_(args)) }
pub fn and_s(args: Vec<BoolExpr>) -> BoolExpr { crate::simplify::simplify(&and_(args)) }
pub fn xor_s(args: Vec<BoolExpr>) -> BoolExpr { crate::simplify::simplify(&xor_(args)) }
pub fn nor_s(args: Vec<BoolExpr>) -> BoolExpr { crate::simplify::simplify(&nor(args)) }
pub fn nand_s(args: Vec<BoolExpr>) -> BoolExpr { crate::simplify::simplify(&nand(args)) }
pub fn xnor_s(args: Vec<BoolExpr>) -> BoolExpr { crate::simplify::simplify(&xnor(args)) }
pub fn eq_s(args: Vec<BoolExpr>) -> BoolExpr { crate::simplify::simplify(&eq(args)) }
pub fn neq_s(args: Vec<BoolExpr>) -> BoolExpr { crate::simplify::simplify(&neq(args)) }
pub fn impl_s(p: BoolExpr, q: BoolExpr) -> BoolExpr { crate::simplify::simplify(&impl_(p, q)) }
pub fn nimpl_s(p: BoolExpr, q: BoolExpr) -> BoolExpr { crate::simplify::simplify(&nimpl(p, q)) }
pub fn ite_s(s: BoolExpr, d1: BoolExpr, d0: BoolExpr) -> BoolExpr { crate::simplify::simplify(&ite(s, d1, d0)) }
pub fn nite_s(s: BoolExpr, d1: BoolExpr, d0: BoolExpr) -> BoolExpr { crate::simplify::simplify(&nite(s, d1, d0)) }

/// At most one of `args` is true. `and_` of all pairwise `~a_i | ~a_j`.
/// Vacuously/trivially true for 0 or 1 arguments (SPEC_FULL.md 10.5).
pub fn onehot0(args: &[BoolExpr]) -> BoolExpr {
    let n = args.len();
    let mut terms = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            terms.push(or_(vec![invert(&args[i]), invert(&args[j])]));
        }
    }
    and_(terms)
}

/// Exactly one of `args` is true: `onehot0(args) & or_(args)`.
pub fn onehot(args: &[BoolExpr]) -> BoolExpr {
    if args.is_empty() { return zero(); }
    let mut terms = Vec::with_capacity(args.len() * args.len().saturating_sub(1) / 2 + 1);
    let n = args.len();
    for i in 0..n {
        for j in (i + 1)..n {
            terms.push(or_(vec![invert(&args[i]), invert(&args[j])]));
        }
    }
    terms.push(or_(args.to_vec()));
    and_(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::expr::same;

    #[test] fn test_degenerate_arities() {
        assert!(same(&or_(vec![]), &zero()));
        assert!(same(&and_(vec![]), &one()));
        assert!(same(&xor_(vec![]), &zero()));
        assert!(same(&eq(vec![]), &one()));
        assert!(same(&eq(vec![one()]), &one()));
    }

    #[test] fn test_single_arg_returns_arg() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        assert!(same(&or_(vec![x.clone()]), &x));
        assert!(same(&and_(vec![x.clone()]), &x));
        assert!(same(&xor_(vec![x.clone()]), &x));
    }

    #[test] fn test_onehot0_trivial() {
        assert!(same(&onehot0(&[]), &one()));
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        assert!(same(&onehot0(&[x]), &one()));
    }

    #[test] fn test_onehot_pair() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let y = ctx.get_variable("y");
        let oh = onehot(&[x, y]);
        // AND of (~x|~y) and (x|y): two clauses.
        assert_eq!(oh.kind(), Kind::And);
        assert_eq!(oh.args().len(), 2);
    }
}
