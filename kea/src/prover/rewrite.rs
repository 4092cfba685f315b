//! Enumeration of the single-step rewrite successors of a term.

use crate::ast::{match_pattern, Axiom, NameGenerator, Substitution, Term};
use std::rc::Rc;

/// Applies the rule `from ⇒ to` at the root of `subject`, or fails if the
/// pattern does not match there.
pub fn rewrite_at_root(
    subject: &Rc<Term>,
    from: &Rc<Term>,
    to: &Rc<Term>,
    names: &mut NameGenerator,
) -> Option<Rc<Term>> {
    let bindings = match_pattern(from, subject)?;
    Some(Substitution::new(&bindings, names).apply(to))
}

/// All single-step rewrites of `subject` under `from ⇒ to`: the root attempt
/// first, then, for each child position in order, every child rewrite lifted
/// into a copy of `subject` with only that child replaced. The unchanged
/// children are shared, not copied.
fn rewrites_for_rule(
    subject: &Rc<Term>,
    from: &Rc<Term>,
    to: &Rc<Term>,
    names: &mut NameGenerator,
) -> Vec<Rc<Term>> {
    let mut result = Vec::new();
    if let Some(rewritten) = rewrite_at_root(subject, from, to, names) {
        result.push(rewritten);
    }
    if let Term::Op(op, args) = subject.as_ref() {
        for (i, child) in args.iter().enumerate() {
            for new_child in rewrites_for_rule(child, from, to, names) {
                let mut new_args = args.clone();
                new_args[i] = new_child;
                result.push(Rc::new(Term::Op(*op, new_args)));
            }
        }
    }
    result
}

/// All single-step successors of `subject`: for each axiom in declaration
/// order, first the lhs ⇒ rhs rewrites, then the rhs ⇒ lhs rewrites, each
/// tagged with the axiom's name.
///
/// The result may contain duplicate terms, when distinct axioms or positions
/// produce the same tree; the search engine deduplicates them by canonical
/// key, so the enumeration order here decides which axiom name a state is
/// recorded under.
pub fn successors<'a>(
    subject: &Rc<Term>,
    axioms: &'a [Axiom],
    names: &mut NameGenerator,
) -> Vec<(&'a str, Rc<Term>)> {
    let mut result = Vec::new();
    for axiom in axioms {
        for (from, to) in [(&axiom.lhs, &axiom.rhs), (&axiom.rhs, &axiom.lhs)] {
            for successor in rewrites_for_rule(subject, from, to, names) {
                result.push((axiom.name.as_str(), successor));
            }
        }
    }
    result
}
