//! Binary-operator form (spec.md 4.5), grounded on
//! `original_source/src/binop.cc`.
//!
//! Rewrites n-ary OR/AND/XOR into binary trees via a balanced mid-split,
//! and n-ary EQ (k>2) into the AND of all pairwise equalities. Negated
//! n-ary/fixed-arity kinds go through invert-recurse-invert exactly like
//! `latop.rs`; IMPL/ITE just recurse into their (already fixed-arity)
//! operands.
use crate::constructors::{and_, eq, ite, or_, xor_};
use crate::expr::BoolExpr;
use crate::invert::invert;
use crate::kind::Kind;

pub fn to_binary_operator(e: &BoolExpr) -> BoolExpr {
    let k = e.kind();
    if !k.is_op() {
        return e.clone();
    }
    match k {
        Kind::Or => binop_split(e.args(), or_),
        Kind::And => binop_split(e.args(), and_),
        Kind::Xor => binop_split(e.args(), xor_),
        Kind::Eq => binop_eq(e.args()),

        Kind::Nor | Kind::Nand | Kind::Xnor | Kind::Neq | Kind::Nimpl | Kind::Nite => {
            invert(&to_binary_operator(&invert(e)))
        }

        Kind::Impl => {
            let args = e.args();
            crate::constructors::impl_(to_binary_operator(&args[0]), to_binary_operator(&args[1]))
        }
        Kind::Ite => {
            let args = e.args();
            ite(
                to_binary_operator(&args[0]),
                to_binary_operator(&args[1]),
                to_binary_operator(&args[2]),
            )
        }

        _ => unreachable!("{k:?} is not an operator kind"),
    }
}

/// Balanced mid-split: `x0|x1|x2|x3 <=> (x0|x1)|(x2|x3)`.
fn binop_split(args: &[BoolExpr], raw: fn(Vec<BoolExpr>) -> BoolExpr) -> BoolExpr {
    match args.len() {
        0 => raw(vec![]),
        1 => to_binary_operator(&args[0]),
        2 => raw(vec![to_binary_operator(&args[0]), to_binary_operator(&args[1])]),
        n => {
            let mid = n / 2;
            let lo = raw(args[..mid].to_vec());
            let hi = raw(args[mid..].to_vec());
            raw(vec![to_binary_operator(&lo), to_binary_operator(&hi)])
        }
    }
}

/// `eq(x0, x1, x2, ...)` for k>2 expands to the AND of all pairwise
/// equalities: `eq(x0,x1) & eq(x0,x2) & eq(x1,x2) & ...`.
fn binop_eq(args: &[BoolExpr]) -> BoolExpr {
    if args.len() < 2 {
        return crate::expr::one();
    }
    if args.len() == 2 {
        return eq(vec![to_binary_operator(&args[0]), to_binary_operator(&args[1])]);
    }
    let bargs: Vec<BoolExpr> = args.iter().map(to_binary_operator).collect();
    let mut pairs = Vec::with_capacity(bargs.len() * (bargs.len() - 1) / 2);
    for i in 0..bargs.len() - 1 {
        for j in (i + 1)..bargs.len() {
            pairs.push(eq(vec![bargs[i].clone(), bargs[j].clone()]));
        }
    }
    and_(pairs)
}
