//! Top-down-to-bottom-up simplification dispatcher (spec.md 4.3), grounded
//! on `original_source/src/simplify.cc`.
//!
//! Atoms are already simple. Operators cache a `simple` flag once reduced,
//! so re-simplifying a simplified tree is a no-op check per node. The
//! "negative" operators (Nor/Nand/Xnor/Neq/Nimpl/Nite) simplify by
//! inverting, simplifying the dual, and inverting back -- there is no
//! separate reduction logic for them.
use log::debug;

use crate::argset::{EqArgSet, LatticeArgSet, XorArgSet};
use crate::expr::{ill, is_ill, is_log, is_one, is_zero, log, one, same, zero, BoolExpr, Node};
use crate::invert::invert;
use crate::kind::Kind;

pub fn simplify(e: &BoolExpr) -> BoolExpr {
    match &**e {
        Node::Zero | Node::One | Node::Log | Node::Ill | Node::Lit { .. } => e.clone(),
        Node::Op { kind, simple, args } => {
            if *simple {
                return e.clone();
            }
            debug!("simplify: {kind:?} with {} args", args.len());
            match kind {
                Kind::Nor | Kind::Nand | Kind::Xnor | Kind::Neq | Kind::Nimpl | Kind::Nite => {
                    invert(&simplify(&invert(e)))
                }
                Kind::Or => LatticeArgSet::new(Kind::Or, zero(), one(), args.clone()).reduce(),
                Kind::And => LatticeArgSet::new(Kind::And, one(), zero(), args.clone()).reduce(),
                Kind::Xor => XorArgSet::new(args.clone()).reduce(),
                Kind::Eq => EqArgSet::new(args.clone()).reduce(),
                Kind::Impl => simplify_impl(&args[0], &args[1]),
                Kind::Ite => simplify_ite(&args[0], &args[1], &args[2]),
                _ => unreachable!("{kind:?} is not a reducible operator kind"),
            }
        }
    }
}

/// `p => q`, per `Implies::_simplify`.
fn simplify_impl(p: &BoolExpr, q: &BoolExpr) -> BoolExpr {
    let p = simplify(p);
    let q = simplify(q);

    if is_ill(&p) || is_ill(&q) {
        return ill();
    }
    // 0=>q <=> p=>1 <=> 1
    if is_zero(&p) || is_one(&q) {
        return one();
    }
    // 1=>q <=> q
    if is_one(&p) {
        return q;
    }
    // p=>0 <=> ~p
    if is_zero(&q) {
        return invert(&p);
    }
    // X=>q <=> p=>X <=> X
    if is_log(&p) || is_log(&q) {
        return log();
    }
    // q=>q <=> 1
    if same(&p, &q) {
        return one();
    }
    // ~q=>q <=> q
    if p.is_lit() && q.is_lit() && same(&p, &invert(&q)) {
        return q;
    }
    crate::expr::op(Kind::Impl, true, vec![p, q])
}

/// `s ? d1 : d0`, per `IfThenElse::_simplify`.
fn simplify_ite(s: &BoolExpr, d1: &BoolExpr, d0: &BoolExpr) -> BoolExpr {
    let s = simplify(s);
    let d1 = simplify(d1);
    let d0 = simplify(d0);

    if is_ill(&s) || is_ill(&d1) || is_ill(&d0) {
        return ill();
    }
    // 0 ? d1 : d0 <=> d0
    if is_zero(&s) {
        return d0;
    }
    // 1 ? d1 : d0 <=> d1
    if is_one(&s) {
        return d1;
    }

    if is_zero(&d1) {
        // s ? 0 : 0 <=> 0
        if is_zero(&d0) {
            return zero();
        }
        // s ? 0 : 1 <=> ~s
        if is_one(&d0) {
            return invert(&s);
        }
        // s ? 0 : d0 <=> ~s & d0
        return crate::constructors::and_s(vec![invert(&s), d0]);
    }

    if is_one(&d1) {
        // s ? 1 : 0 <=> s
        if is_zero(&d0) {
            return s;
        }
        // s ? 1 : 1 <=> 1
        if is_one(&d0) {
            return one();
        }
        // s ? 1 : d0 <=> s | d0
        return crate::constructors::or_s(vec![s, d0]);
    }

    // s ? d1 : 0 <=> s & d1
    if is_zero(&d0) {
        return crate::constructors::and_s(vec![s, d1]);
    }
    // s ? d1 : 1 <=> ~s | d1
    if is_one(&d0) {
        return crate::constructors::or_s(vec![invert(&s), d1]);
    }

    // (s ? X : d0) <=> (s ? d1 : X) <=> X
    if is_log(&d1) || is_log(&d0) {
        return log();
    }
    // s ? d1 : d1 <=> d1
    if same(&d1, &d0) {
        return d1;
    }
    // X ? d1 : d0 <=> X
    // if you could prove d0 <=> d1 this should return d0, but that proof is
    // too expensive to gate this operation.
    if is_log(&s) {
        return log();
    }
    // s ? s : d0 <=> s | d0
    if same(&s, &d1) {
        return crate::constructors::or_s(vec![s, d0]);
    }
    // s ? d1 : s <=> s & d1
    if same(&s, &d0) {
        return crate::constructors::and_s(vec![s, d1]);
    }

    crate::expr::op(Kind::Ite, true, vec![s, d1, d0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructors::{and_, eq, ite, or_, xor_};
    use crate::context::Context;

    #[test]
    fn test_degenerate_lattice_simplify() {
        assert!(same(&simplify(&or_(vec![])), &zero()));
        assert!(same(&simplify(&and_(vec![])), &one()));
        assert!(same(&simplify(&xor_(vec![])), &zero()));
        assert!(same(&simplify(&eq(vec![])), &one()));
    }

    #[test]
    fn test_or_with_complementary_literals_is_one() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let nx = ctx.negate(&x).unwrap();
        assert!(same(&simplify(&or_(vec![x, nx])), &one()));
    }

    #[test]
    fn test_and_with_complementary_literals_is_zero() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let nx = ctx.negate(&x).unwrap();
        assert!(same(&simplify(&and_(vec![x, nx])), &zero()));
    }

    #[test]
    fn test_xor_self_is_zero_and_self_negation_is_one() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let nx = ctx.negate(&x).unwrap();
        assert!(same(&simplify(&xor_(vec![x.clone(), x.clone()])), &zero()));
        assert!(same(&simplify(&xor_(vec![x, nx])), &one()));
    }

    #[test]
    fn test_eq_with_zero_collapses_to_nor() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let y = ctx.get_variable("y");
        let lhs = simplify(&eq(vec![zero(), x.clone(), y.clone()]));
        let rhs = simplify(&crate::constructors::nor(vec![x, y]));
        assert_eq!(lhs.kind(), rhs.kind());
        assert_eq!(lhs.args().len(), rhs.args().len());
    }

    #[test]
    fn test_eq_with_one_collapses_to_and() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let y = ctx.get_variable("y");
        let lhs = simplify(&eq(vec![one(), x.clone(), y.clone()]));
        let rhs = simplify(&and_(vec![x, y]));
        assert_eq!(lhs.kind(), rhs.kind());
        assert_eq!(lhs.args().len(), rhs.args().len());
    }

    #[test]
    fn test_impl_truth_table_degenerates() {
        let ctx = Context::new();
        let q = ctx.get_variable("q");
        assert!(same(&simplify_impl(&zero(), &q), &one()));
        assert!(same(&simplify_impl(&one(), &q), &q));
        assert!(same(&simplify_impl(&q, &zero()), &invert(&q)));
        assert!(same(&simplify_impl(&q, &one()), &one()));
        assert!(same(&simplify_impl(&q, &q), &one()));
        let nq = invert(&q);
        assert!(same(&simplify_impl(&nq, &q), &q));
    }

    #[test]
    fn test_ite_truth_table_degenerates() {
        let ctx = Context::new();
        let s = ctx.get_variable("s");
        let d1 = ctx.get_variable("d1");
        let d0 = ctx.get_variable("d0");
        assert!(same(&simplify_ite(&zero(), &d1, &d0), &d0));
        assert!(same(&simplify_ite(&one(), &d1, &d0), &d1));
        assert!(same(&simplify_ite(&s, &zero(), &zero()), &zero()));
        assert!(same(&simplify_ite(&s, &one(), &one()), &one()));
        assert!(same(&simplify_ite(&s, &one(), &zero()), &s));
        assert!(same(&simplify_ite(&s, &zero(), &one()), &invert(&s)));
        let lhs = simplify_ite(&s, &s, &d0);
        let rhs = simplify(&or_(vec![s.clone(), d0.clone()]));
        assert!(same(&lhs, &rhs));
    }
}
