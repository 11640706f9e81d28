//! Argset reducers (spec.md 4.3, 9): explicit state machines that absorb
//! operands one at a time, flattening same-kind operands and detecting
//! short-circuits (dominator/tautology/contradiction) during insertion
//! rather than in a separate pass. Grounded on
//! `original_source/src/argset.cc` and `src/argset.h`.
//!
//! Membership here is pointer identity (`same`), matching the source's
//! `unordered_set<bx_t>` keyed by `shared_ptr` hash/equality: constants are
//! singletons and literals are interned per-`Context`, so two "equal"
//! operands are always the same `Rc` (see expr.rs module doc).
use log::trace;

use crate::expr::{ill, is_ill, is_log, is_one, is_zero, log, one, same, zero, BoolExpr};
use crate::invert::invert;
use crate::kind::Kind;

/// A small ordered set keyed by pointer identity. Operator arity is small
/// in practice, so a linear scan is simpler than hand-rolling a pointer
/// hash and just as fast at this scale.
#[derive(Default)]
struct ArgAccum { items: Vec<BoolExpr> }

impl ArgAccum {
    fn contains(&self, x: &BoolExpr) -> bool { self.items.iter().any(|i| same(i, x)) }
    fn insert(&mut self, x: BoolExpr) { if !self.contains(&x) { self.items.push(x) } }
    fn erase(&mut self, x: &BoolExpr) { self.items.retain(|i| !same(i, x)) }
    fn len(&self) -> usize { self.items.len() }
    fn into_vec(self) -> Vec<BoolExpr> { self.items }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum LatState { Infimum, Basic, IsLog, Supremum, IsIll }

pub struct LatticeArgSet {
    state: LatState,
    kind: Kind,
    identity: BoolExpr,
    dominator: BoolExpr,
    args: ArgAccum,
}

impl LatticeArgSet {
    /// `kind` is OR or AND; `identity`/`dominator` are ZERO/ONE in the
    /// appropriate order (identity ZERO, dominator ONE for OR; vice versa
    /// for AND).
    pub fn new(kind: Kind, identity: BoolExpr, dominator: BoolExpr, args: Vec<BoolExpr>) -> Self {
        let mut this = LatticeArgSet { state: LatState::Infimum, kind, identity, dominator, args: ArgAccum::default() };
        for a in args { this.insert(crate::simplify::simplify(&a)); }
        this
    }

    fn insert(&mut self, arg: BoolExpr) {
        use LatState::*;
        match self.state {
            IsIll => {}
            Supremum => {
                if is_ill(&arg) {
                    self.state = IsIll;
                } else if arg.kind() == self.kind {
                    for sub in arg.args().to_vec() { self.insert(sub); }
                }
            }
            Infimum | Basic | IsLog => {
                if is_ill(&arg) {
                    self.state = IsIll;
                } else if same(&arg, &self.dominator)
                    || (arg.is_lit() && self.args.contains(&invert(&arg)))
                {
                    self.state = Supremum;
                } else if is_log(&arg) {
                    self.state = IsLog;
                } else if arg.kind() == self.kind {
                    for sub in arg.args().to_vec() { self.insert(sub); }
                } else if !same(&arg, &self.identity) {
                    self.args.insert(arg);
                    if self.state == Infimum { self.state = Basic; }
                }
            }
        }
    }

    pub fn reduce(self) -> BoolExpr {
        trace!("LatticeArgSet({:?}) reduce: state reached, {} args collected", self.kind, self.args.len());
        match self.state {
            LatState::Infimum => self.identity,
            LatState::IsLog => log(),
            LatState::Supremum => self.dominator,
            LatState::IsIll => ill(),
            LatState::Basic => {
                let mut args = self.args.into_vec();
                if args.len() == 1 { args.pop().unwrap() } else { crate::expr::op(self.kind, true, args) }
            }
        }
    }
}

enum XorState { Basic, IsLog, IsIll }

pub struct XorArgSet {
    state: XorState,
    parity: bool,
    args: ArgAccum,
}

impl XorArgSet {
    pub fn new(args: Vec<BoolExpr>) -> Self {
        let mut this = XorArgSet { state: XorState::Basic, parity: true, args: ArgAccum::default() };
        for a in args { this.insert(crate::simplify::simplify(&a)); }
        this
    }

    fn insert(&mut self, arg: BoolExpr) {
        match self.state {
            XorState::IsIll => {}
            XorState::IsLog => { if is_ill(&arg) { self.state = XorState::IsIll; } }
            XorState::Basic => {
                if is_ill(&arg) {
                    self.state = XorState::IsIll;
                } else if is_log(&arg) {
                    self.state = XorState::IsLog;
                } else if is_zero(&arg) || is_one(&arg) {
                    self.parity ^= is_one(&arg);
                } else if self.args.contains(&arg) {
                    // x ^ x = 0
                    self.args.erase(&arg);
                } else if arg.is_lit() && self.args.contains(&invert(&arg)) {
                    // x ^ ~x = 1
                    let nx = invert(&arg);
                    self.args.erase(&nx);
                    self.parity ^= true;
                } else if arg.kind() == Kind::Xor {
                    for sub in arg.args().to_vec() { self.insert(sub); }
                } else if arg.kind() == Kind::Xnor {
                    for sub in arg.args().to_vec() { self.insert(sub); }
                    self.parity ^= true;
                } else {
                    self.args.insert(arg);
                }
            }
        }
    }

    pub fn reduce(self) -> BoolExpr {
        match self.state {
            XorState::IsLog => return log(),
            XorState::IsIll => return ill(),
            XorState::Basic => {}
        }
        let args = self.args.into_vec();
        let y = match args.len() {
            0 => zero(),
            1 => args.into_iter().next().unwrap(),
            _ => crate::expr::op(Kind::Xor, true, args),
        };
        if self.parity { y } else { invert(&y) }
    }
}

enum EqState { Basic, IsLog, IsIll }

pub struct EqArgSet {
    state: EqState,
    has_zero: bool,
    has_one: bool,
    args: ArgAccum,
}

impl EqArgSet {
    pub fn new(args: Vec<BoolExpr>) -> Self {
        let mut this = EqArgSet { state: EqState::Basic, has_zero: false, has_one: false, args: ArgAccum::default() };
        for a in args { this.insert(crate::simplify::simplify(&a)); }
        this
    }

    fn insert(&mut self, arg: BoolExpr) {
        match self.state {
            EqState::IsIll => {}
            EqState::IsLog => { if is_ill(&arg) { self.state = EqState::IsIll; } }
            EqState::Basic => {
                if is_ill(&arg) {
                    self.state = EqState::IsIll;
                } else if is_log(&arg) {
                    self.state = EqState::IsLog;
                } else if is_zero(&arg) {
                    self.has_zero = true;
                    if self.has_one { self.args = ArgAccum::default(); }
                } else if is_one(&arg) {
                    self.has_one = true;
                    if self.has_zero { self.args = ArgAccum::default(); }
                } else if arg.is_lit() && self.args.contains(&invert(&arg)) {
                    self.has_zero = true;
                    self.has_one = true;
                    self.args = ArgAccum::default();
                } else {
                    self.args.insert(arg);
                }
            }
        }
    }

    pub fn reduce(self) -> BoolExpr {
        match self.state {
            EqState::IsLog => return log(),
            EqState::IsIll => return ill(),
            EqState::Basic => {}
        }
        if self.has_zero && self.has_one { return zero(); }
        let surviving = self.has_zero as usize + self.has_one as usize + self.args.len();
        if surviving < 2 { return one(); }
        if self.has_zero { return crate::constructors::nor_s(self.args.into_vec()); }
        if self.has_one { return crate::constructors::and_s(self.args.into_vec()); }
        crate::expr::op(Kind::Eq, true, self.args.into_vec())
    }
}
