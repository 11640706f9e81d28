//! Constant-time local inversion (spec.md 4.2), grounded on
//! `original_source/src/invert.cc`.
use crate::expr::{ill, log, one, zero, BoolExpr, Node};

/// `invert(invert(e))` is pointer-equal to `e` for every atom, and
/// structurally equivalent (same kind/args, dual-of-dual) for operators.
pub fn invert(e: &BoolExpr) -> BoolExpr {
    match &**e {
        Node::Zero => one(),
        Node::One => zero(),
        Node::Log => log(),
        Node::Ill => ill(),
        Node::Lit { ctx, id } => ctx.literal_unchecked(id ^ 1),
        Node::Op { kind, simple, args } => crate::expr::op(kind.dual(), *simple, args.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructors::or_;
    use crate::context::Context;
    use crate::expr::same;

    #[test] fn test_invert_constants() {
        assert!(same(&invert(&zero()), &one()));
        assert!(same(&invert(&one()), &zero()));
        assert!(same(&invert(&log()), &log()));
        assert!(same(&invert(&ill()), &ill()));
    }

    #[test] fn test_invert_literal() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let nx = ctx.negate(&x).unwrap();
        assert!(same(&invert(&x), &nx));
        assert!(same(&invert(&invert(&x)), &x));
    }

    #[test] fn test_invert_operator_flips_kind_preserves_args() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let y = ctx.get_variable("y");
        let or_xy = or_(vec![x.clone(), y.clone()]);
        let nor_xy = invert(&or_xy);
        assert_eq!(nor_xy.kind(), crate::kind::Kind::Nor);
        assert_eq!(nor_xy.args().len(), 2);
        assert!(same(&invert(&nor_xy), &or_xy));
    }
}
