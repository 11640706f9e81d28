//! Benchmarks for the passes whose cost is worst-case exponential in the
//! arity of the input (spec.md 4.6/4.7, SPEC_FULL.md 10.4): `to_cnf`,
//! `to_dnf`, and `tseytin`, which sidesteps that blowup by introducing
//! auxiliary variables instead of flattening.
use divan::Bencher;

use boolexpr::{eq, tseytin, to_cnf, to_dnf, xor_, BoolExpr, Context};

fn main() {
    divan::main();
}

const ARITIES: &[usize] = &[4, 6, 8, 10, 12];

fn xor_ladder(ctx: &Context, n: usize) -> BoolExpr {
    let vars = (0..n).map(|i| ctx.get_variable(&format!("x{i}"))).collect();
    xor_(vars)
}

fn eq_ladder(ctx: &Context, n: usize) -> BoolExpr {
    let vars = (0..n).map(|i| ctx.get_variable(&format!("x{i}"))).collect();
    eq(vars)
}

#[divan::bench(args = ARITIES)]
fn to_cnf_xor(bencher: Bencher, n: usize) {
    let ctx = Context::new();
    let e = xor_ladder(&ctx, n);
    bencher.bench(|| to_cnf(&e));
}

#[divan::bench(args = ARITIES)]
fn to_dnf_xor(bencher: Bencher, n: usize) {
    let ctx = Context::new();
    let e = xor_ladder(&ctx, n);
    bencher.bench(|| to_dnf(&e));
}

#[divan::bench(args = ARITIES)]
fn to_cnf_eq(bencher: Bencher, n: usize) {
    let ctx = Context::new();
    let e = eq_ladder(&ctx, n);
    bencher.bench(|| to_cnf(&e));
}

#[divan::bench(args = ARITIES)]
fn to_dnf_eq(bencher: Bencher, n: usize) {
    let ctx = Context::new();
    let e = eq_ladder(&ctx, n);
    bencher.bench(|| to_dnf(&e));
}

#[divan::bench(args = ARITIES)]
fn tseytin_xor(bencher: Bencher, n: usize) {
    let ctx = Context::new();
    let e = xor_ladder(&ctx, n);
    bencher.bench(|| {
        let aux = Context::new();
        tseytin(&e, &aux, "t")
    });
}
