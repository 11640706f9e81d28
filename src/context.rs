//! Per-universe variable interning (spec.md 4.1).
//!
//! A `Context` owns the name<->id mapping and the id->literal-node cache.
//! Ids are allocated in consecutive pairs: negative form (even) first, then
//! positive form (odd), exactly mirroring `original_source/src/context.cc`.
//! Allocation is monotonic -- an id, once issued, is never reused or
//! reassigned to a different name.
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use fxhash::FxHashMap;
use log::trace;

use crate::error::{Error, Result};
use crate::expr::{BoolExpr, Node};
use crate::kind::Kind;

static NEXT_CTX_UID: AtomicU64 = AtomicU64::new(0);

struct ContextState {
    next_id: i64,
    /// name -> positive literal id
    vars: FxHashMap<String, i64>,
    /// variable slot (id >> 1) -> name
    names: FxHashMap<i64, String>,
    /// every id (both polarities) -> its interned literal node
    literals: FxHashMap<i64, BoolExpr>,
}

struct ContextInner {
    uid: u64,
    state: RefCell<ContextState>,
}

/// A variable-naming scope. Cheap to clone (an `Rc` to shared state);
/// clones refer to the same scope, so literals from two different
/// `Context::new()` calls are never equal even if the names match
/// (GLOSSARY: Context).
#[derive(Clone)]
pub struct Context(Rc<ContextInner>);

impl Context {
    pub fn new() -> Self {
        let uid = NEXT_CTX_UID.fetch_add(1, Ordering::Relaxed);
        Context(Rc::new(ContextInner {
            uid,
            state: RefCell::new(ContextState {
                next_id: 0,
                vars: FxHashMap::default(),
                names: FxHashMap::default(),
                literals: FxHashMap::default(),
            }),
        }))
    }

    pub fn uid(&self) -> u64 { self.0.uid }

    /// Return the positive literal for `name`, allocating a consecutive
    /// id pair (negative even, then positive odd) on first request.
    pub fn get_variable(&self, name: &str) -> BoolExpr {
        {
            let st = self.0.state.borrow();
            if let Some(&id) = st.vars.get(name) {
                return st.literals[&id].clone();
            }
        }
        let mut st = self.0.state.borrow_mut();
        // re-check: nothing else can have raced given single-thread use, but
        // borrow_mut above would have panicked on reentrancy anyway.
        let neg_id = st.next_id; st.next_id += 1;
        let pos_id = st.next_id; st.next_id += 1;
        debug_assert_eq!(neg_id ^ 1, pos_id);
        let neg = Rc::new(Node::Lit { ctx: self.clone(), id: neg_id });
        let pos = Rc::new(Node::Lit { ctx: self.clone(), id: pos_id });
        st.literals.insert(neg_id, neg);
        st.literals.insert(pos_id, pos.clone());
        st.vars.insert(name.to_string(), pos_id);
        st.names.insert(pos_id >> 1, name.to_string());
        trace!("context: allocated variable '{}' -> id {}", name, pos_id);
        pos
    }

    /// Reverse lookup used by printers, SAT decoding, and negation.
    pub fn get_literal(&self, id: i64) -> Result<BoolExpr> {
        self.0.state.borrow().literals.get(&id).cloned()
            .ok_or(Error::UnknownLiteral { id })
    }

    pub fn get_name(&self, id: i64) -> Result<String> {
        self.0.state.borrow().names.get(&(id >> 1)).cloned()
            .ok_or(Error::UnknownLiteral { id })
    }

    /// `negate(lit) = get_literal(id XOR 1)`.
    pub fn negate(&self, lit: &BoolExpr) -> Result<BoolExpr> {
        match &**lit {
            Node::Lit { id, .. } => self.get_literal(id ^ 1),
            _ => panic!("negate() called on a non-literal node"),
        }
    }

    /// Internal: look up a literal id known (by invariant) to already
    /// exist, such as the sibling of one already constructed. Panicking
    /// here signals a broken Context invariant, not a caller mistake.
    pub(crate) fn literal_unchecked(&self, id: i64) -> BoolExpr {
        self.0.state.borrow().literals.get(&id).cloned()
            .unwrap_or_else(|| panic!("context invariant violated: sibling literal {} missing", id))
    }

    pub fn num_vars(&self) -> usize { self.0.state.borrow().vars.len() }
}

impl Default for Context {
    fn default() -> Self { Context::new() }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool { self.0.uid == other.0.uid }
}
impl Eq for Context {}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Context(#{})", self.0.uid)
    }
}

/// Kind of a literal is derived from its id's polarity bit, per spec.md 3.
pub(crate) fn literal_kind(id: i64) -> Kind {
    if id & 1 == 1 { Kind::Var } else { Kind::Comp }
}

#[test] fn test_allocation_order() {
    let ctx = Context::new();
    let x = ctx.get_variable("x");
    match &*x {
        Node::Lit { id, .. } => assert_eq!(id & 1, 1),
        _ => panic!("expected literal"),
    }
    let y = ctx.get_variable("y");
    match (&*x, &*y) {
        (Node::Lit { id: xi, .. }, Node::Lit { id: yi, .. }) => assert!(yi > xi),
        _ => panic!("expected literals"),
    }
}

#[test] fn test_memoized_by_name() {
    let ctx = Context::new();
    let x1 = ctx.get_variable("x");
    let x2 = ctx.get_variable("x");
    assert!(Rc::ptr_eq(&x1, &x2));
}

#[test] fn test_negate_is_sibling() {
    let ctx = Context::new();
    let x = ctx.get_variable("x");
    let nx = ctx.negate(&x).unwrap();
    let nnx = ctx.negate(&nx).unwrap();
    assert!(Rc::ptr_eq(&x, &nnx));
}

#[test] fn test_unknown_literal_errors() {
    let ctx = Context::new();
    assert_eq!(ctx.get_literal(9999), Err(Error::UnknownLiteral { id: 9999 }));
}

#[test] fn test_distinct_contexts_not_equal() {
    let c1 = Context::new();
    let c2 = Context::new();
    assert_ne!(c1, c2);
}
