//! Integration tests for the quantified properties in spec.md 8 /
//! SPEC_FULL.md 10.4, exercised over a small battery of generated
//! expressions rather than one assertion per property.

use boolexpr::*;
use boolexpr::{compose, sat};

fn battery(ctx: &Context) -> Vec<BoolExpr> {
    let x = ctx.get_variable("x");
    let y = ctx.get_variable("y");
    let z = ctx.get_variable("z");
    let nx = invert(&x);
    let ny = invert(&y);

    vec![
        zero(),
        one(),
        x.clone(),
        nx.clone(),
        or_(vec![x.clone(), y.clone()]),
        and_(vec![x.clone(), ny.clone(), z.clone()]),
        xor_(vec![x.clone(), y.clone(), z.clone()]),
        eq(vec![x.clone(), y.clone(), z.clone()]),
        nor(vec![x.clone(), y.clone()]),
        nand(vec![x.clone(), y.clone(), z.clone()]),
        impl_(x.clone(), y.clone()),
        nimpl(x.clone(), y.clone()),
        ite(x.clone(), y.clone(), z.clone()),
        nite(x.clone(), y.clone(), z.clone()),
        or_(vec![and_(vec![x.clone(), y.clone()]), and_(vec![nx.clone(), z.clone()])]),
        xnor(vec![x, y]),
    ]
}

#[test]
fn property_simplify_is_idempotent() {
    let ctx = Context::new();
    for e in battery(&ctx) {
        let once = simplify(&e);
        let twice = simplify(&once);
        assert!(same(&once, &twice), "simplify not idempotent on {once}");
    }
}

#[test]
fn property_invert_is_involutive() {
    let ctx = Context::new();
    for e in battery(&ctx) {
        assert!(equiv(&e, &invert(&invert(&e))).unwrap(), "invert(invert(e)) != e for {e}");
    }
}

#[test]
fn property_every_structural_pass_preserves_semantics() {
    let ctx = Context::new();
    for e in battery(&ctx) {
        assert!(equiv(&e, &simplify(&e)).unwrap(), "simplify changed meaning of {e}");
        assert!(equiv(&e, &to_nnf(&e)).unwrap(), "to_nnf changed meaning of {e}");
        assert!(equiv(&e, &to_cnf(&e)).unwrap(), "to_cnf changed meaning of {e}");
        assert!(equiv(&e, &to_dnf(&e)).unwrap(), "to_dnf changed meaning of {e}");
        assert!(equiv(&e, &to_binary_operator(&e)).unwrap(), "to_binop changed meaning of {e}");
        assert!(equiv(&e, &to_lattice_operator(&e)).unwrap(), "to_latop changed meaning of {e}");
        assert!(equiv(&e, &to_positive_operator(&e)).unwrap(), "to_posop changed meaning of {e}");
        assert!(equiv(&e, &push_down_not(&e)).unwrap(), "pushdown_not changed meaning of {e}");
    }
}

#[test]
fn property_cnf_dnf_shape() {
    let ctx = Context::new();
    // `is_cnf`/`is_dnf`'s degenerate-atom convention (flatten.rs: 1 is
    // trivially CNF, 0 is trivially DNF, and the other constant in each
    // pair is neither) means the raw constants ZERO/ONE -- which
    // `to_cnf`/`to_dnf` pass through unchanged, having no operator to
    // wrap -- are excluded here; every operator-tree member of the
    // battery is still fully exercised.
    for e in battery(&ctx) {
        if is_zero(&e) || is_one(&e) {
            continue;
        }
        assert!(is_cnf(&to_cnf(&e)), "to_cnf(e) is not in CNF shape for {e}");
        assert!(is_dnf(&to_dnf(&e)), "to_dnf(e) is not in DNF shape for {e}");
    }
}

#[test]
fn property_tseytin_is_cnf_and_models_project_onto_original() {
    let ctx = Context::new();
    for e in battery(&ctx) {
        let aux = Context::new();
        let cnf = tseytin(&e, &aux, "t");
        // tseytin only rewrites operator subtrees; a bare atom passes
        // through unchanged, and is_cnf's degenerate-atom convention
        // (0 is trivially DNF, 1 is trivially CNF, per flatten.rs) means
        // the CNF-shape check only applies once there's an operator to
        // encode.
        if e.kind().is_op() {
            assert!(is_cnf(&cnf), "tseytin(e) is not CNF for {e}");
        }

        let (e_sat, e_model) = sat(&e).unwrap();
        let (cnf_sat, _) = sat(&cnf).unwrap();
        assert_eq!(e_sat, cnf_sat, "tseytin changed satisfiability of {e}");
        if let Some(model) = e_model {
            for &(uid, id) in &support(&e) {
                assert_eq!(uid, ctx.uid());
                assert!(model.contains_key(&(uid, id)));
            }
        }
    }
}

#[test]
fn property_restrict_shrinks_support_and_drops_fixed_vars() {
    let ctx = Context::new();
    let x = ctx.get_variable("x");
    let y = ctx.get_variable("y");
    let e = and_(vec![x.clone(), y.clone()]);
    let point = boolexpr_point(&x, zero());
    let restricted = restrict(&e, &point).unwrap();
    assert!(support(&e).is_superset(&support(&restricted)));
    assert!(!support(&restricted).contains(&(ctx.uid(), x.lit_id().unwrap() | 1)));
}

fn boolexpr_point(var: &BoolExpr, value: BoolExpr) -> compose::VarMap {
    compose::point_of(var, value).unwrap()
}

// spec.md 8 property 7 (`sat(e).first ⇔ ¬sat(¬e).first`) only holds for
// formulas whose truth value doesn't depend on an assignment -- a plain
// literal like `x` is satisfiable and so is `~x`, so the property can't
// be checked against an arbitrary battery member. Checked instead on the
// constants it's stated against concretely in spec.md 8's scenarios
// (`sat(ZERO) = (false, none)`, `sat(ONE) = (true, {})`), plus every
// contradiction/tautology in the battery (anything `simplify` collapses
// to ZERO/ONE).
#[test]
fn property_sat_of_tautologies_and_contradictions_is_complementary() {
    let ctx = Context::new();
    for e in battery(&ctx) {
        let s = simplify(&e);
        if !(is_zero(&s) || is_one(&s)) {
            continue;
        }
        let (sat_e, _) = sat(&e).unwrap();
        let (sat_ne, _) = sat(&invert(&e)).unwrap();
        assert_ne!(sat_e, sat_ne, "sat(e) and sat(~e) agreed for {e}");
    }
}

#[test]
fn property_equiv_matches_unsat_of_xor() {
    let ctx = Context::new();
    let battery = battery(&ctx);
    for e in &battery {
        for f in &battery {
            let (sat_xor, _) = sat(&xor_s(vec![e.clone(), f.clone()])).unwrap();
            assert_eq!(equiv(e, f).unwrap(), !sat_xor);
        }
    }
}

#[test]
fn scenario_degenerate_constructors() {
    assert!(same(&simplify(&or_(vec![])), &zero()));
    assert!(same(&simplify(&and_(vec![])), &one()));
    assert!(same(&simplify(&xor_(vec![])), &zero()));
    assert!(same(&simplify(&eq(vec![])), &one()));
}

#[test]
fn scenario_xor6_cnf_dnf_have_32_clauses() {
    let ctx = Context::new();
    let vars: Vec<BoolExpr> = (0..6).map(|i| ctx.get_variable(&format!("x{i}"))).collect();
    let e = xor_(vars);
    assert_eq!(to_cnf(&e).args().len(), 32);
    assert_eq!(to_dnf(&e).args().len(), 32);
}

#[test]
fn scenario_sat_specific_assignment() {
    let ctx = Context::new();
    let x0 = ctx.get_variable("x0");
    let x1 = ctx.get_variable("x1");
    let x2 = ctx.get_variable("x2");
    let x3 = ctx.get_variable("x3");
    let clause_a = or_(vec![invert(&x0), x1.clone(), invert(&x2), x3.clone()]);
    let clause_b = and_(vec![invert(&x0), x1.clone(), invert(&x2), x3.clone()]);
    let e = and_(vec![clause_a, clause_b]);
    let (is_sat, model) = sat(&e).unwrap();
    assert!(is_sat);
    let model = model.unwrap();
    assert!(is_zero(sat::model_value(&model, &ctx, &x0).unwrap()));
    assert!(is_one(sat::model_value(&model, &ctx, &x1).unwrap()));
    assert!(is_zero(sat::model_value(&model, &ctx, &x2).unwrap()));
    assert!(is_one(sat::model_value(&model, &ctx, &x3).unwrap()));
}

#[test]
fn scenario_known_unsat_formula() {
    let ctx = Context::new();
    let x0 = ctx.get_variable("x0");
    let x1 = ctx.get_variable("x1");
    let nx0 = invert(&x0);
    let nx1 = invert(&x1);
    let e = and_(vec![
        or_(vec![nx0.clone(), nx1.clone()]),
        or_(vec![nx0, x1.clone()]),
        or_(vec![x0.clone(), nx1]),
        or_(vec![x0, x1]),
    ]);
    let (is_sat, _) = sat(&e).unwrap();
    assert!(!is_sat);
}
