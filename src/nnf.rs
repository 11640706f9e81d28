//! Negation normal form (spec.md 4.6).
//!
//! `to_nnf = to_lattice_operator . push_down_not . simplify`, applied in
//! that right-to-left order (simplify first, pushdown second, latop
//! last). This is the literal reading of spec.md 4.6's composition
//! notation; `original_source/src/nnf.cc` instead composes
//! `to_latop()->pushdown_not()->simplify()` (latop first, simplify last).
//! See DESIGN.md for why the spec's stated order is implemented here
//! rather than the source's.
use crate::expr::BoolExpr;
use crate::latop::to_lattice_operator;
use crate::pushdown::push_down_not;
use crate::simplify::simplify;

pub fn to_nnf(e: &BoolExpr) -> BoolExpr {
    let simplified = simplify(e);
    let pushed = push_down_not(&simplified);
    to_lattice_operator(&pushed)
}
