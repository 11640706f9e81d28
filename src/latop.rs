//! Lattice-operator form (spec.md 4.5), grounded on
//! `original_source/src/latop.cc`.
//!
//! Rewrites XOR, EQ, IMPL, ITE away entirely, leaving only OR/AND/NOT
//! (realised here as literal negation) over literals. The negated n-ary
//! kinds and fixed-arity duals go through "invert, recurse, invert back",
//! exactly mirroring the source's `_nop_to_latop` helper.
use crate::constructors::{and_, or_, xor_};
use crate::expr::BoolExpr;
use crate::invert::invert;
use crate::kind::Kind;

pub fn to_lattice_operator(e: &BoolExpr) -> BoolExpr {
    let k = e.kind();
    if !k.is_op() {
        return e.clone();
    }
    match k {
        Kind::Or => or_(e.args().iter().map(to_lattice_operator).collect()),
        Kind::And => and_(e.args().iter().map(to_lattice_operator).collect()),

        Kind::Nor | Kind::Nand | Kind::Xnor | Kind::Neq | Kind::Nimpl | Kind::Nite => {
            invert(&to_lattice_operator(&invert(e)))
        }

        Kind::Xor => latop_xor(e.args()),
        Kind::Eq => latop_eq(e.args()),
        Kind::Impl => {
            let args = e.args();
            let p = to_lattice_operator(&args[0]);
            let q = to_lattice_operator(&args[1]);
            or_(vec![invert(&p), q])
        }
        Kind::Ite => {
            let args = e.args();
            let s = to_lattice_operator(&args[0]);
            let d1 = to_lattice_operator(&args[1]);
            let d0 = to_lattice_operator(&args[2]);
            or_(vec![and_(vec![s.clone(), d1]), and_(vec![invert(&s), d0])])
        }

        _ => unreachable!("{k:?} is not an operator kind"),
    }
}

/// `x0 ^ x1 <=> ~x0 & x1 | x0 & ~x1`; n>2 splits via a balanced pair of
/// recursive XORs (`(x0^x1) ^ (x2^x3)`), matching the source's `mid` split.
fn latop_xor(args: &[BoolExpr]) -> BoolExpr {
    match args.len() {
        0 => crate::expr::zero(),
        1 => to_lattice_operator(&args[0]),
        2 => {
            let x0 = to_lattice_operator(&args[0]);
            let x1 = to_lattice_operator(&args[1]);
            or_(vec![
                and_(vec![invert(&x0), x1.clone()]),
                and_(vec![x0, invert(&x1)]),
            ])
        }
        n => {
            let mid = n / 2;
            let lo = xor_(args[..mid].to_vec());
            let hi = xor_(args[mid..].to_vec());
            to_lattice_operator(&xor_(vec![lo, hi]))
        }
    }
}

/// `eq(x0, x1, x2, ...) <=> ~x0 & ~x1 & ~x2 & ... | x0 & x1 & x2 & ...`.
fn latop_eq(args: &[BoolExpr]) -> BoolExpr {
    let xs: Vec<BoolExpr> = args.iter().map(to_lattice_operator).collect();
    let xns: Vec<BoolExpr> = xs.iter().map(invert).collect();
    or_(vec![and_(xns), and_(xs)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::kind::Kind;

    fn only_or_and_lit(e: &BoolExpr) -> bool {
        if e.is_lit() || matches!(e.kind(), Kind::Zero | Kind::One | Kind::Log | Kind::Ill) {
            return true;
        }
        matches!(e.kind(), Kind::Or | Kind::And) && e.args().iter().all(only_or_and_lit)
    }

    #[test]
    fn test_latop_xor_eliminates_xor() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let y = ctx.get_variable("y");
        let e = crate::constructors::xor_(vec![x, y]);
        assert!(only_or_and_lit(&to_lattice_operator(&e)));
    }

    #[test]
    fn test_latop_nary_xor_splits_balanced() {
        let ctx = Context::new();
        let vars: Vec<BoolExpr> = (0..6).map(|i| ctx.get_variable(&format!("x{i}"))).collect();
        let e = crate::constructors::xor_(vars);
        assert!(only_or_and_lit(&to_lattice_operator(&e)));
    }

    #[test]
    fn test_latop_impl_becomes_or() {
        let ctx = Context::new();
        let p = ctx.get_variable("p");
        let q = ctx.get_variable("q");
        let e = crate::constructors::impl_(p, q);
        let latop = to_lattice_operator(&e);
        assert_eq!(latop.kind(), Kind::Or);
    }

    #[test]
    fn test_latop_ite_becomes_or_of_ands() {
        let ctx = Context::new();
        let s = ctx.get_variable("s");
        let d1 = ctx.get_variable("d1");
        let d0 = ctx.get_variable("d0");
        let e = crate::constructors::ite(s, d1, d0);
        let latop = to_lattice_operator(&e);
        assert_eq!(latop.kind(), Kind::Or);
        assert!(latop.args().iter().all(|a| a.kind() == Kind::And));
    }
}
