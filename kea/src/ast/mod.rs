//! The abstract syntax tree for scripts and the terms they contain.

mod matching;
mod printer;
mod substitution;

pub use matching::{match_pattern, Bindings};
pub use substitution::Substitution;

use std::rc::Rc;

/// A term in the Boolean formula language.
///
/// Terms are immutable; rewriting builds new trees that may share unchanged
/// subtrees with their predecessors through the `Rc`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A constant term, `0` or `1`.
    Const(Constant),

    /// A free variable written in the script.
    Var(String),

    /// A placeholder variable introduced by the prover when a rewrite target
    /// mentions a variable its source pattern did not bind. Placeholder names
    /// come from a [`NameGenerator`] and never collide with script variables.
    Unresolved(String),

    /// An application of an operator to one (`~`) or two (`*`, `+`) terms.
    Op(Operator, Vec<Rc<Term>>),
}

/// A constant term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Zero,
    One,
}

/// An operator that can appear in a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Complement, written `~`.
    Not,

    /// Meet, written `*`.
    And,

    /// Join, written `+`.
    Or,
}

impl Operator {
    /// The number of children an application of this operator carries.
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or => 2,
        }
    }
}

/// A named, bidirectional rewrite rule between two term patterns. Every
/// identifier inside the patterns is a pattern variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Axiom {
    pub name: String,
    pub lhs: Rc<Term>,
    pub rhs: Rc<Term>,
}

/// A parsed script: the commands in source order.
#[derive(Debug, Clone)]
pub struct Script {
    pub commands: Vec<Command>,
}

/// A script command.
#[derive(Debug, Clone)]
pub enum Command {
    /// An `axiom` command, of the form `axiom <id> : <formula> = <formula> .`
    Axiom(Axiom),

    /// A `prove` command, of the form `prove <formula> = <formula> .`
    Prove { lhs: Rc<Term>, rhs: Rc<Term> },

    /// A `param` command, of the form `param <key> <value> .`
    Param(Param),
}

/// A runtime parameter update carried by a `param` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Param {
    MaxSearchDepth(usize),
    MaxTreeSize(usize),
    UseProofsAsAxioms(bool),
}

/// Generates the names for `Unresolved` placeholder terms.
///
/// Names carry the reserved `?` prefix, which the lexer never accepts in an
/// identifier, so placeholders cannot collide with script variables. One
/// generator lives for the duration of one proof obligation, which keeps
/// every placeholder minted during that search distinct.
#[derive(Debug, Default)]
pub struct NameGenerator {
    counter: u64,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a placeholder name that no earlier call has returned.
    pub fn fresh(&mut self) -> String {
        let name = format!("?{}", self.counter);
        self.counter += 1;
        name
    }
}
