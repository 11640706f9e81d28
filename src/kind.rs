//! The `Kind` tag: a 5-bit discriminant shared by every node in the DAG.
//!
//! Bit layout (bit 4 is the high bit actually used; values never exceed 0x1B):
//!
//!   bit 4 : 0 = atom,      1 = operator
//!   bit 3 : atom:     0 = constant,        1 = literal
//!           operator: 0 = n-ary lattice-ish op, 1 = fixed-arity (impl/ite)
//!   bit 2 : atom-constant only: 0 = known (ZERO/ONE), 1 = unknown (LOG/ILL)
//!   bit 0 : polarity. 0 = negative/negated form, 1 = positive/base form.
//!
//! The exact hex values are a public contract (the SAT bridge and the test
//! suite depend on them), so they're pinned with explicit discriminants
//! rather than left to enum-ordinal assignment.
use std::fmt;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    Zero  = 0x00,
    One   = 0x01,
    Log   = 0x04,
    Ill   = 0x06,
    Comp  = 0x08,
    Var   = 0x09,
    Nor   = 0x10,
    Or    = 0x11,
    Nand  = 0x12,
    And   = 0x13,
    Xnor  = 0x14,
    Xor   = 0x15,
    Neq   = 0x16,
    Eq    = 0x17,
    Nimpl = 0x18,
    Impl  = 0x19,
    Nite  = 0x1A,
    Ite   = 0x1B,
}

const OP_BIT: u8 = 0x10;
const ATOM_LIT_BIT: u8 = 0x08;
const ATOM_UNKNOWN_BIT: u8 = 0x04;
const OP_FIXED_BIT: u8 = 0x08;
const POLARITY_BIT: u8 = 0x01;

impl Kind {
    #[inline(always)] pub fn tag(self) -> u8 { self as u8 }

    #[inline(always)] pub fn is_op(self) -> bool { self.tag() & OP_BIT != 0 }
    #[inline(always)] pub fn is_atom(self) -> bool { !self.is_op() }

    /// True for ZERO/ONE/LOG/ILL.
    #[inline(always)] pub fn is_const(self) -> bool { self.is_atom() && self.tag() & ATOM_LIT_BIT == 0 }
    /// True for COMP/VAR (a variable or its complement).
    #[inline(always)] pub fn is_lit(self) -> bool { self.is_atom() && self.tag() & ATOM_LIT_BIT != 0 }
    /// True for ZERO/ONE (as opposed to LOG/ILL, which are "unknown").
    #[inline(always)] pub fn is_known_const(self) -> bool { self.is_const() && self.tag() & ATOM_UNKNOWN_BIT == 0 }

    /// Within operators: n-ary commutative-associative (OR/AND/XOR/EQ family).
    #[inline(always)] pub fn is_nary(self) -> bool { self.is_op() && self.tag() & OP_FIXED_BIT == 0 }
    /// Within operators: fixed-arity (IMPL/ITE family).
    #[inline(always)] pub fn is_fixed_arity(self) -> bool { self.is_op() && self.tag() & OP_FIXED_BIT != 0 }

    /// Positive/base form (true for ONE, VAR, OR/AND/XOR/EQ/IMPL/ITE);
    /// false for the negated duals (ZERO, COMP, NOR/NAND/XNOR/NEQ/NIMPL/NITE).
    #[inline(always)] pub fn is_positive(self) -> bool { self.tag() & POLARITY_BIT != 0 }

    pub fn is_lattice(self) -> bool { matches!(self, Kind::Or | Kind::And | Kind::Nor | Kind::Nand) }
    pub fn is_xor_family(self) -> bool { matches!(self, Kind::Xor | Kind::Xnor) }
    pub fn is_eq_family(self) -> bool { matches!(self, Kind::Eq | Kind::Neq) }

    /// Dual kind: flips polarity while preserving arity/commutativity class.
    /// LOG and ILL are fixed points (per spec.md 4.2).
    pub fn dual(self) -> Kind {
        match self {
            Kind::Log | Kind::Ill => self,
            _ => Kind::from_tag(self.tag() ^ POLARITY_BIT)
                .expect("dual() of a well-formed Kind is always well-formed"),
        }
    }

    pub fn from_tag(tag: u8) -> Option<Kind> {
        Some(match tag {
            0x00 => Kind::Zero, 0x01 => Kind::One,
            0x04 => Kind::Log,  0x06 => Kind::Ill,
            0x08 => Kind::Comp, 0x09 => Kind::Var,
            0x10 => Kind::Nor,  0x11 => Kind::Or,
            0x12 => Kind::Nand, 0x13 => Kind::And,
            0x14 => Kind::Xnor, 0x15 => Kind::Xor,
            0x16 => Kind::Neq,  0x17 => Kind::Eq,
            0x18 => Kind::Nimpl,0x19 => Kind::Impl,
            0x1A => Kind::Nite, 0x1B => Kind::Ite,
            _ => return None,
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[test] fn test_dual_pairs() {
    assert_eq!(Kind::Or.dual(), Kind::Nor);
    assert_eq!(Kind::Nor.dual(), Kind::Or);
    assert_eq!(Kind::And.dual(), Kind::Nand);
    assert_eq!(Kind::Xor.dual(), Kind::Xnor);
    assert_eq!(Kind::Eq.dual(), Kind::Neq);
    assert_eq!(Kind::Impl.dual(), Kind::Nimpl);
    assert_eq!(Kind::Ite.dual(), Kind::Nite);
    assert_eq!(Kind::Zero.dual(), Kind::One);
    assert_eq!(Kind::Log.dual(), Kind::Log);
    assert_eq!(Kind::Ill.dual(), Kind::Ill);
}

#[test] fn test_tag_values_match_spec() {
    assert_eq!(Kind::Zero.tag(), 0x00);
    assert_eq!(Kind::One.tag(), 0x01);
    assert_eq!(Kind::Log.tag(), 0x04);
    assert_eq!(Kind::Ill.tag(), 0x06);
    assert_eq!(Kind::Comp.tag(), 0x08);
    assert_eq!(Kind::Var.tag(), 0x09);
    assert_eq!(Kind::Nor.tag(), 0x10);
    assert_eq!(Kind::Or.tag(), 0x11);
    assert_eq!(Kind::Nand.tag(), 0x12);
    assert_eq!(Kind::And.tag(), 0x13);
    assert_eq!(Kind::Xnor.tag(), 0x14);
    assert_eq!(Kind::Xor.tag(), 0x15);
    assert_eq!(Kind::Neq.tag(), 0x16);
    assert_eq!(Kind::Eq.tag(), 0x17);
    assert_eq!(Kind::Nimpl.tag(), 0x18);
    assert_eq!(Kind::Impl.tag(), 0x19);
    assert_eq!(Kind::Nite.tag(), 0x1A);
    assert_eq!(Kind::Ite.tag(), 0x1B);
}

#[test] fn test_category_predicates() {
    for k in [Kind::Zero, Kind::One, Kind::Log, Kind::Ill] { assert!(k.is_const()); assert!(!k.is_lit()); }
    for k in [Kind::Comp, Kind::Var] { assert!(k.is_lit()); assert!(!k.is_const()); }
    assert!(Kind::Zero.is_known_const());
    assert!(!Kind::Log.is_known_const());
    assert!(Kind::Impl.is_fixed_arity());
    assert!(Kind::Ite.is_fixed_arity());
    assert!(Kind::Or.is_nary());
    assert!(Kind::Eq.is_nary());
}
