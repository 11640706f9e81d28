//! Positive-operator form (spec.md 4.5), grounded on
//! `original_source/src/posop.cc`.
//!
//! Rewrites so that only OR, AND, XOR, EQ, IMPL, ITE remain: every negated
//! operator is pushed one level via DeMorgan and recursion continues in
//! positive form. Unlike `push_down_not`, negation never survives above a
//! literal here -- the negated *operator kinds* themselves are eliminated,
//! not just negation as a standalone wrapper.
use crate::constructors::{and_, eq, ite, or_, xor_};
use crate::expr::BoolExpr;
use crate::invert::invert;
use crate::kind::Kind;

pub fn to_positive_operator(e: &BoolExpr) -> BoolExpr {
    let k = e.kind();
    if !k.is_op() {
        return e.clone();
    }
    let args = e.args();
    match k {
        Kind::Or => or_(args.iter().map(to_positive_operator).collect()),
        Kind::And => and_(args.iter().map(to_positive_operator).collect()),
        Kind::Xor => xor_(args.iter().map(to_positive_operator).collect()),
        Kind::Eq => eq(args.iter().map(to_positive_operator).collect()),
        Kind::Impl => crate::constructors::impl_(to_positive_operator(&args[0]), to_positive_operator(&args[1])),
        Kind::Ite => ite(
            to_positive_operator(&args[0]),
            to_positive_operator(&args[1]),
            to_positive_operator(&args[2]),
        ),

        // ~(x0 | x1 | ...) <=> ~x0 & ~x1 & ...
        Kind::Nor => and_(args.iter().map(|a| to_positive_operator(&invert(a))).collect()),
        // ~(x0 & x1 & ...) <=> ~x0 | ~x1 | ...
        Kind::Nand => or_(args.iter().map(|a| to_positive_operator(&invert(a))).collect()),
        // ~(x0 ^ x1 ^ ...) <=> ~x0 ^ x1 ^ ...
        Kind::Xnor => {
            let mut pushed = vec![to_positive_operator(&invert(&args[0]))];
            pushed.extend(args[1..].iter().map(to_positive_operator));
            xor_(pushed)
        }
        // ~eq(x0, x1, ...) <=> eq(~x0, x1, ...)
        Kind::Neq => {
            let mut pushed = vec![to_positive_operator(&invert(&args[0]))];
            pushed.extend(args[1..].iter().map(to_positive_operator));
            eq(pushed)
        }
        // ~(p => q) <=> p & ~q
        Kind::Nimpl => and_(vec![
            to_positive_operator(&args[0]),
            to_positive_operator(&invert(&args[1])),
        ]),
        // ~(s ? d1 : d0) <=> s ? ~d1 : ~d0
        Kind::Nite => ite(
            to_positive_operator(&args[0]),
            to_positive_operator(&invert(&args[1])),
            to_positive_operator(&invert(&args[2])),
        ),

        _ => unreachable!("{k:?} is not an operator kind"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::kind::Kind;

    #[test]
    fn test_negated_kinds_are_eliminated() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let y = ctx.get_variable("y");
        for raw in [
            crate::constructors::nor(vec![x.clone(), y.clone()]),
            crate::constructors::nand(vec![x.clone(), y.clone()]),
            crate::constructors::xnor(vec![x.clone(), y.clone()]),
            crate::constructors::neq(vec![x.clone(), y.clone()]),
            crate::constructors::nimpl(x.clone(), y.clone()),
        ] {
            let pos = to_positive_operator(&raw);
            assert!(!matches!(
                pos.kind(),
                Kind::Nor | Kind::Nand | Kind::Xnor | Kind::Neq | Kind::Nimpl | Kind::Nite
            ));
        }
    }

    #[test]
    fn test_impl_survives_as_impl() {
        let ctx = Context::new();
        let p = ctx.get_variable("p");
        let q = ctx.get_variable("q");
        let e = crate::constructors::impl_(p, q);
        assert_eq!(to_positive_operator(&e).kind(), Kind::Impl);
    }

    #[test]
    fn test_ite_survives_as_ite() {
        let ctx = Context::new();
        let s = ctx.get_variable("s");
        let d1 = ctx.get_variable("d1");
        let d0 = ctx.get_variable("d0");
        let e = crate::constructors::ite(s, d1, d0);
        assert_eq!(to_positive_operator(&e).kind(), Kind::Ite);
    }
}
