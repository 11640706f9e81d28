//! The expression node model (spec.md 3): an immutable, reference-counted
//! DAG. A single enum stands in for the source's class hierarchy -- every
//! pass below is a pattern match on `Node`, not a virtual call (spec.md 9,
//! "Shared immutable DAG").
//!
//! Equality in this crate is pointer identity (`Rc::ptr_eq`), exactly like
//! the source's `shared_ptr`-keyed `unordered_set<bx_t>` and `==`
//! comparisons: constants are process-wide singletons, and literals are
//! interned per-`Context`, so pointer identity already captures "same
//! constant" / "same literal". Structural sharing of *operator*
//! subexpressions is not attempted (spec.md 9: "not a contract").
use std::fmt;
use std::rc::Rc;
use std::sync::OnceLock;

use crate::context::{literal_kind, Context};
use crate::kind::Kind;

pub enum Node {
    Zero,
    One,
    Log,
    Ill,
    Lit { ctx: Context, id: i64 },
    Op { kind: Kind, simple: bool, args: Vec<BoolExpr> },
}

pub type BoolExpr = Rc<Node>;

impl Node {
    pub fn kind(&self) -> Kind {
        match self {
            Node::Zero => Kind::Zero,
            Node::One => Kind::One,
            Node::Log => Kind::Log,
            Node::Ill => Kind::Ill,
            Node::Lit { id, .. } => literal_kind(*id),
            Node::Op { kind, .. } => *kind,
        }
    }

    pub fn is_atom(&self) -> bool { self.kind().is_atom() }
    pub fn is_op(&self) -> bool { self.kind().is_op() }
    pub fn is_lit(&self) -> bool { self.kind().is_lit() }

    pub fn args(&self) -> &[BoolExpr] {
        match self {
            Node::Op { args, .. } => args,
            _ => &[],
        }
    }

    pub fn is_simple(&self) -> bool {
        match self {
            Node::Op { simple, .. } => *simple,
            _ => true,
        }
    }

    /// The literal's id, if this is a literal.
    pub fn lit_id(&self) -> Option<i64> {
        match self { Node::Lit { id, .. } => Some(*id), _ => None }
    }

    pub fn ctx(&self) -> Option<&Context> {
        match self { Node::Lit { ctx, .. } => Some(ctx), _ => None }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Zero => write!(f, "Zero"),
            Node::One => write!(f, "One"),
            Node::Log => write!(f, "Log"),
            Node::Ill => write!(f, "Ill"),
            Node::Lit { id, .. } => write!(f, "Lit({id})"),
            Node::Op { kind, args, .. } => {
                write!(f, "{kind:?}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{a:?}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Pointer-identity comparison: the notion of "same node" used throughout
/// simplification and argset reduction.
#[inline] pub fn same(a: &BoolExpr, b: &BoolExpr) -> bool { Rc::ptr_eq(a, b) }

static ZERO: OnceLock<BoolExpr> = OnceLock::new();
static ONE: OnceLock<BoolExpr> = OnceLock::new();
static LOG: OnceLock<BoolExpr> = OnceLock::new();
static ILL: OnceLock<BoolExpr> = OnceLock::new();

/// The process-wide ZERO singleton (spec.md 3, 9).
pub fn zero() -> BoolExpr { ZERO.get_or_init(|| Rc::new(Node::Zero)).clone() }
pub fn one() -> BoolExpr { ONE.get_or_init(|| Rc::new(Node::One)).clone() }
pub fn log() -> BoolExpr { LOG.get_or_init(|| Rc::new(Node::Log)).clone() }
pub fn ill() -> BoolExpr { ILL.get_or_init(|| Rc::new(Node::Ill)).clone() }

pub fn is_zero(e: &BoolExpr) -> bool { matches!(**e, Node::Zero) }
pub fn is_one(e: &BoolExpr) -> bool { matches!(**e, Node::One) }
pub fn is_log(e: &BoolExpr) -> bool { matches!(**e, Node::Log) }
pub fn is_ill(e: &BoolExpr) -> bool { matches!(**e, Node::Ill) }

/// Build a raw (unsimplified) operator node. Callers are expected to
/// already have applied constructor-level arity degeneracy rules
/// (constructors.rs); this just wraps the general case.
pub fn op(kind: Kind, simple: bool, args: Vec<BoolExpr>) -> BoolExpr {
    Rc::new(Node::Op { kind, simple, args })
}

#[test] fn test_singletons_are_pointer_stable() {
    assert!(same(&zero(), &zero()));
    assert!(same(&one(), &one()));
    assert!(!same(&zero(), &one()));
}

#[test] fn test_kind_of_lit_tracks_polarity() {
    let ctx = Context::new();
    let x = ctx.get_variable("x");
    assert_eq!(x.kind(), Kind::Var);
    let nx = ctx.negate(&x).unwrap();
    assert_eq!(nx.kind(), Kind::Comp);
}
