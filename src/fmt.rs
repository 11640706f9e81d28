//! String rendering (spec.md 4, 8, SPEC_FULL.md 6), grounded on
//! `original_source/src/tostr.cc`'s `op_lsh`/`opname_camel`.
//!
//! Variables and their complements print via their `Context`-assigned
//! name (`~name` for the negated form); operators print as
//! `OpName(arg0, arg1, ...)` using the exact camel-case names spec.md 6
//! pins (`Equal`/`Implies`/`IfThenElse`/... rather than `Kind`'s own
//! `Eq`/`Impl`/`Ite` spelling, which is a separate, shorter vocabulary
//! used only for internal `Debug` output).
use std::fmt;

use crate::expr::Node;
use crate::kind::Kind;

fn opname(kind: Kind) -> &'static str {
    match kind {
        Kind::Or => "Or",
        Kind::Nor => "Nor",
        Kind::And => "And",
        Kind::Nand => "Nand",
        Kind::Xor => "Xor",
        Kind::Xnor => "Xnor",
        Kind::Eq => "Equal",
        Kind::Neq => "Unequal",
        Kind::Impl => "Implies",
        Kind::Nimpl => "NotImplies",
        Kind::Ite => "IfThenElse",
        Kind::Nite => "NotIfThenElse",
        _ => unreachable!("{kind:?} is not an operator kind"),
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Zero => write!(f, "0"),
            Node::One => write!(f, "1"),
            Node::Log => write!(f, "X"),
            Node::Ill => write!(f, "?"),
            Node::Lit { ctx, id } => {
                let name = ctx.get_name(*id | 1).unwrap_or_else(|_| "?".to_string());
                if id & 1 == 1 { write!(f, "{name}") } else { write!(f, "~{name}") }
            }
            Node::Op { kind, args, .. } => {
                write!(f, "{}(", opname(*kind))?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
        }
    }
}
