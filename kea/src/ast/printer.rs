//! The canonical text rendering of terms.
//!
//! The canonical text doubles as the identity of a term: the search engine
//! keys its visited, parent and depth maps by it, and `max_tree_size` is
//! measured against its length. Two terms are the same state iff their
//! canonical texts are equal.

use crate::ast::*;
use std::fmt;

fn write_s_expr<H, T>(f: &mut fmt::Formatter, head: H, tail: &[T]) -> fmt::Result
where
    H: fmt::Display,
    T: fmt::Display,
{
    write!(f, "({}", head)?;
    for e in tail {
        write!(f, " {}", e)?;
    }
    write!(f, ")")
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Const(c) => write!(f, "{}", c),
            Term::Var(name) | Term::Unresolved(name) => write!(f, "{}", name),
            Term::Op(op, args) => write_s_expr(f, op, args),
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Constant::Zero => write!(f, "0"),
            Constant::One => write!(f, "1"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operator::Not => write!(f, "~"),
            Operator::And => write!(f, "*"),
            Operator::Or => write!(f, "+"),
        }
    }
}
