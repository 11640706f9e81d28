//! Tseytin CNF encoding (spec.md 4.7), grounded on
//! `original_source/src/tseytin.cc`.
//!
//! Every operator subexpression is replaced, top-down, by a fresh
//! `{prefix}_{index}` variable allocated in `ctx`; the replaced operator
//! (with its own operands similarly substituted) is recorded as a
//! constraint and later expanded into its kind-specific clause bundle via
//! `eqvar`. The result is `AND(top_var, eqvar(a0, op0), eqvar(a1, op1), …)`
//! -- a CNF equisatisfiable with the input (spec.md 4.7).
use crate::constructors::or_;
use crate::context::Context;
use crate::expr::{op, BoolExpr};
use crate::invert::invert;
use crate::kind::Kind;

/// `(aux_var, operator-with-substituted-operands)` pairs recorded while
/// descending; `op` still carries the original operator `Kind` so `eqvar`
/// can dispatch on it, but its `args` are now either original literals or
/// aux variables standing in for deeper subexpressions.
type Constraint = (BoolExpr, BoolExpr);

pub fn tseytin(e: &BoolExpr, ctx: &Context, prefix: &str) -> BoolExpr {
    if !e.kind().is_op() {
        return e.clone();
    }
    let mut index = 0u64;
    let mut constraints: Vec<Constraint> = Vec::new();
    let top = to_con1(e, ctx, prefix, &mut index, &mut constraints);

    let mut cnfs = vec![top];
    for (aux, substituted) in &constraints {
        cnfs.push(eqvar(&substituted.kind(), substituted.args(), aux));
    }
    crate::constructors::and_s(cnfs)
}

fn to_con1(e: &BoolExpr, ctx: &Context, prefix: &str, index: &mut u64, constraints: &mut Vec<Constraint>) -> BoolExpr {
    let key = ctx.get_variable(&format!("{prefix}_{index}"));
    *index += 1;
    let val = to_con2(e, ctx, prefix, index, constraints);
    constraints.push((key.clone(), val));
    key
}

/// Rebuilds `e` with every operator-kind operand replaced by its own
/// fresh aux variable (leaves -- literals and constants -- pass through).
fn to_con2(e: &BoolExpr, ctx: &Context, prefix: &str, index: &mut u64, constraints: &mut Vec<Constraint>) -> BoolExpr {
    let args: Vec<BoolExpr> = e
        .args()
        .iter()
        .map(|a| {
            if a.kind().is_op() {
                to_con1(a, ctx, prefix, index, constraints)
            } else {
                a.clone()
            }
        })
        .collect();
    op(e.kind(), false, args)
}

fn eqvar(kind: &Kind, args: &[BoolExpr], x: &BoolExpr) -> BoolExpr {
    match kind {
        Kind::Nor => eqvar_nor(x, args),
        Kind::Or => eqvar_or(x, args),
        Kind::Nand => eqvar_nand(x, args),
        Kind::And => eqvar_and(x, args),
        Kind::Xnor => eqvar_xor_family(x, args, true),
        Kind::Xor => eqvar_xor_family(x, args, false),
        Kind::Neq => eqvar_eq_family(x, args, true),
        Kind::Eq => eqvar_eq_family(x, args, false),
        Kind::Nimpl => {
            let (p, q) = (&args[0], &args[1]);
            crate::constructors::and_s(vec![
                or_(vec![invert(x), p.clone()]),
                or_(vec![invert(x), invert(q)]),
                or_(vec![x.clone(), invert(p), q.clone()]),
            ])
        }
        Kind::Impl => {
            let (p, q) = (&args[0], &args[1]);
            crate::constructors::and_s(vec![
                or_(vec![x.clone(), p.clone()]),
                or_(vec![x.clone(), invert(q)]),
                or_(vec![invert(x), invert(p), q.clone()]),
            ])
        }
        Kind::Nite => {
            let (s, d1, d0) = (&args[0], &args[1], &args[2]);
            crate::constructors::and_s(vec![
                or_(vec![invert(x), invert(s), invert(d1)]),
                or_(vec![invert(x), s.clone(), invert(d0)]),
                or_(vec![x.clone(), invert(s), d1.clone()]),
                or_(vec![x.clone(), s.clone(), d0.clone()]),
                or_(vec![x.clone(), d1.clone(), d0.clone()]),
            ])
        }
        Kind::Ite => {
            let (s, d1, d0) = (&args[0], &args[1], &args[2]);
            crate::constructors::and_s(vec![
                or_(vec![x.clone(), invert(s), invert(d1)]),
                or_(vec![x.clone(), s.clone(), invert(d0)]),
                or_(vec![invert(x), invert(s), d1.clone()]),
                or_(vec![invert(x), s.clone(), d0.clone()]),
                or_(vec![invert(x), d1.clone(), d0.clone()]),
            ])
        }
        _ => unreachable!("{kind:?} cannot appear as a tseytin constraint operator"),
    }
}

/// `x = ~(a|b|...) <=> (~x|~a)&(~x|~b)&...&(x|a|b|...)`.
fn eqvar_nor(x: &BoolExpr, args: &[BoolExpr]) -> BoolExpr {
    let mut clauses: Vec<BoolExpr> = args.iter().map(|a| or_(vec![invert(x), invert(a)])).collect();
    let mut lits = vec![x.clone()];
    lits.extend(args.iter().cloned());
    clauses.push(or_(lits));
    crate::constructors::and_s(clauses)
}

/// `x = a|b|... <=> (x|~a)&(x|~b)&...&(~x|a|b|...)`.
fn eqvar_or(x: &BoolExpr, args: &[BoolExpr]) -> BoolExpr {
    let mut clauses: Vec<BoolExpr> = args.iter().map(|a| or_(vec![x.clone(), invert(a)])).collect();
    let mut lits = vec![invert(x)];
    lits.extend(args.iter().cloned());
    clauses.push(or_(lits));
    crate::constructors::and_s(clauses)
}

/// `x = ~(a&b&...) <=> (x|a)&(x|b)&...&(~x|~a|~b|...)`.
fn eqvar_nand(x: &BoolExpr, args: &[BoolExpr]) -> BoolExpr {
    let mut clauses: Vec<BoolExpr> = args.iter().map(|a| or_(vec![x.clone(), a.clone()])).collect();
    let mut lits = vec![invert(x)];
    lits.extend(args.iter().map(invert));
    clauses.push(or_(lits));
    crate::constructors::and_s(clauses)
}

/// `x = a&b&... <=> (~x|a)&(~x|b)&...&(x|~a|~b|...)`.
fn eqvar_and(x: &BoolExpr, args: &[BoolExpr]) -> BoolExpr {
    let mut clauses: Vec<BoolExpr> = args.iter().map(|a| or_(vec![invert(x), a.clone()])).collect();
    let mut lits = vec![x.clone()];
    lits.extend(args.iter().map(invert));
    clauses.push(or_(lits));
    crate::constructors::and_s(clauses)
}

/// Full parity clause set for `x = XOR(args)` / `x = XNOR(args)`, built by
/// the same incremental stack-doubling the source uses: one pass per
/// operand, each pass splitting every partial clause into a "this operand
/// positive" and "this operand negative" variant with the polarity of the
/// clause's first literal toggled in the negative variant.
fn eqvar_xor_family(x: &BoolExpr, args: &[BoolExpr], is_xnor: bool) -> BoolExpr {
    let seed = if is_xnor { x.clone() } else { invert(x) };
    let mut stack: Vec<Vec<BoolExpr>> = vec![vec![seed]];
    for arg in args {
        let mut next = Vec::with_capacity(stack.len() * 2);
        for lits in &stack {
            let mut fst = vec![lits[0].clone()];
            fst.extend(lits[1..].iter().cloned());
            fst.push(arg.clone());

            let mut snd = vec![invert(&lits[0])];
            snd.extend(lits[1..].iter().cloned());
            snd.push(invert(arg));

            next.push(fst);
            next.push(snd);
        }
        stack = next;
    }
    crate::constructors::and_s(stack.into_iter().map(or_).collect())
}

fn eqvar_eq_family(x: &BoolExpr, args: &[BoolExpr], is_neq: bool) -> BoolExpr {
    let xp = if is_neq { invert(x) } else { x.clone() };
    let xn = if is_neq { x.clone() } else { invert(x) };

    let mut lits1 = vec![xp.clone()];
    lits1.extend(args.iter().cloned());
    let mut lits2 = vec![xp];
    lits2.extend(args.iter().map(invert));

    let mut clauses = vec![or_(lits1), or_(lits2)];
    for i in 0..args.len() {
        for j in (i + 1)..args.len() {
            clauses.push(or_(vec![xn.clone(), invert(&args[i]), args[j].clone()]));
            clauses.push(or_(vec![xn.clone(), args[i].clone(), invert(&args[j])]));
        }
    }
    crate::constructors::and_s(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::flatten::is_cnf;

    #[test]
    fn test_tseytin_of_atom_is_itself() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        assert!(crate::expr::same(&tseytin(&x, &ctx, "a"), &x));
    }

    #[test]
    fn test_tseytin_result_is_cnf() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let y = ctx.get_variable("y");
        let z = ctx.get_variable("z");
        let e = crate::constructors::xor_s(vec![
            crate::constructors::and_(vec![x.clone(), y.clone()]),
            crate::constructors::impl_(y, z),
        ]);
        let cnf = tseytin(&e, &ctx, "aux");
        assert!(is_cnf(&cnf));
    }

    #[test]
    fn test_tseytin_introduces_aux_vars() {
        let ctx = Context::new();
        let x = ctx.get_variable("x");
        let y = ctx.get_variable("y");
        let e = crate::constructors::and_(vec![x, y]);
        let before = ctx.num_vars();
        let _ = tseytin(&e, &ctx, "aux");
        assert!(ctx.num_vars() > before);
    }
}
