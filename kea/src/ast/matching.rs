//! First-order pattern matching of axiom patterns against subject terms.

use super::Term;
use ahash::AHashMap;
use std::rc::Rc;

/// A mapping from pattern-variable names to the subterms they matched.
pub type Bindings = AHashMap<String, Rc<Term>>;

/// Matches `pattern` against `subject`, returning the variable bindings on
/// success.
///
/// Both `Var` and `Unresolved` nodes in the pattern act as pattern variables:
/// the first occurrence of a name binds it to the corresponding subterm, and
/// every later occurrence must find a structurally equal subterm. Operators
/// must agree in token and arity; constants must agree in literal. Matching
/// is strictly syntactic: `(+ a b)` does not match `(+ b a)`.
pub fn match_pattern(pattern: &Rc<Term>, subject: &Rc<Term>) -> Option<Bindings> {
    let mut bindings = Bindings::default();
    match_with_bindings(pattern, subject, &mut bindings).then_some(bindings)
}

fn match_with_bindings(pattern: &Rc<Term>, subject: &Rc<Term>, bindings: &mut Bindings) -> bool {
    match pattern.as_ref() {
        Term::Const(c) => matches!(subject.as_ref(), Term::Const(d) if c == d),
        Term::Var(name) | Term::Unresolved(name) => {
            if let Some(bound) = bindings.get(name) {
                bound == subject
            } else {
                bindings.insert(name.clone(), subject.clone());
                true
            }
        }
        Term::Op(op, args) => match subject.as_ref() {
            Term::Op(subject_op, subject_args) => {
                op == subject_op
                    && args.len() == subject_args.len()
                    && args
                        .iter()
                        .zip(subject_args)
                        .all(|(p, s)| match_with_bindings(p, s, bindings))
            }
            _ => false,
        },
    }
}
