//! Negation push-down (spec.md 4.4), grounded on
//! `original_source/src/pushdown_not.cc`.
//!
//! Maps a node to the equivalent node whose only negated subexpressions
//! are literals, applying DeMorgan's laws one level at a time. IMPL keeps
//! its kind here rather than eagerly rewriting to `~p | q` (SPEC_FULL.md
//! 4.3/4.5; the lattice rewrite happens only in `to_latop`).
use crate::constructors::{and_, eq, ite, or_, xor_};
use crate::expr::BoolExpr;
use crate::invert::invert;
use crate::kind::Kind;

pub fn push_down_not(e: &BoolExpr) -> BoolExpr {
    let k = e.kind();
    if !k.is_op() {
        return e.clone();
    }
    let args = e.args();
    match k {
        Kind::Or => or_(args.iter().map(push_down_not).collect()),
        Kind::And => and_(args.iter().map(push_down_not).collect()),
        Kind::Xor => xor_(args.iter().map(push_down_not).collect()),
        Kind::Eq => eq(args.iter().map(push_down_not).collect()),
        Kind::Impl => crate::constructors::impl_(push_down_not(&args[0]), push_down_not(&args[1])),
        Kind::Ite => ite(push_down_not(&args[0]), push_down_not(&args[1]), push_down_not(&args[2])),

        // ~(x0 | x1 | ...) <=> ~x0 & ~x1 & ...
        Kind::Nor => and_(args.iter().map(|a| push_down_not(&invert(a))).collect()),
        // ~(x0 & x1 & ...) <=> ~x0 | ~x1 | ...
        Kind::Nand => or_(args.iter().map(|a| push_down_not(&invert(a))).collect()),
        // ~(x0 ^ x1 ^ ...) <=> ~x0 ^ x1 ^ ...
        Kind::Xnor => {
            let mut pushed = vec![push_down_not(&invert(&args[0]))];
            pushed.extend(args[1..].iter().map(push_down_not));
            xor_(pushed)
        }
        // ~eq(x0, x1, ...) <=> eq(~x0, x1, ...)
        Kind::Neq => {
            let mut pushed = vec![push_down_not(&invert(&args[0]))];
            pushed.extend(args[1..].iter().map(push_down_not));
            eq(pushed)
        }
        // ~(p => q) <=> p & ~q
        Kind::Nimpl => and_(vec![push_down_not(&args[0]), push_down_not(&invert(&args[1]))]),
        // ~(s ? d1 : d0) <=> s ? ~d1 : ~d0
        Kind::Nite => ite(
            push_down_not(&args[0]),
            push_down_not(&invert(&args[1])),
            push_down_not(&invert(&args[2])),
        ),

        _ => unreachable!("{k:?} is not an operator kind"),
    }
}
