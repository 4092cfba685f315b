//! Instantiation of axiom patterns under the bindings produced by a match.

use super::{Bindings, NameGenerator, Term};
use std::rc::Rc;

/// Instantiates a template pattern under a set of bindings.
///
/// Pattern variables the bindings cover are replaced by the bound subterm,
/// sharing it rather than copying it. Pattern variables the bindings do not
/// cover become fresh `Unresolved` placeholders, one per occurrence: results
/// are never cached, since a cache would merge placeholders that must stay
/// distinct.
pub struct Substitution<'a> {
    bindings: &'a Bindings,
    names: &'a mut NameGenerator,
}

impl<'a> Substitution<'a> {
    pub fn new(bindings: &'a Bindings, names: &'a mut NameGenerator) -> Self {
        Self { bindings, names }
    }

    /// Returns a new term built by a post-order copy of `template`.
    pub fn apply(&mut self, template: &Rc<Term>) -> Rc<Term> {
        match template.as_ref() {
            Term::Const(_) => template.clone(),
            Term::Var(name) | Term::Unresolved(name) => match self.bindings.get(name) {
                Some(bound) => bound.clone(),
                None => Rc::new(Term::Unresolved(self.names.fresh())),
            },
            Term::Op(op, args) => {
                let new_args = args.iter().map(|a| self.apply(a)).collect();
                Rc::new(Term::Op(*op, new_args))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::match_pattern;
    use crate::parser::tests::parse_term;

    fn run_test(template: &str, subject: &str, pattern: &str, expected: &str) {
        let bindings =
            match_pattern(&parse_term(pattern), &parse_term(subject)).expect("match failed");
        let mut names = NameGenerator::new();
        let got = Substitution::new(&bindings, &mut names).apply(&parse_term(template));
        assert_eq!(expected, got.to_string());
    }

    #[test]
    fn test_substitute_bound_variables() {
        run_test("(+ b a)", "(+ 0 1)", "(+ a b)", "(+ 1 0)");
        run_test("a", "(+ (* x 1) 0)", "(+ a 0)", "(* x 1)");
        run_test("(* a (~ a))", "(~ y)", "a", "(* (~ y) (~ (~ y)))");
    }

    #[test]
    fn test_unbound_variables_become_placeholders() {
        run_test("(* a b)", "x", "a", "(* x ?0)");
        // Each occurrence of an unbound variable mints its own placeholder.
        run_test("(+ b b)", "x", "a", "(+ ?0 ?1)");
    }

    #[test]
    fn test_substituting_the_matched_pattern_recovers_the_subject() {
        let cases = [
            ("(+ a b)", "(+ 0 (* x y))"),
            ("(+ a a)", "(+ (~ z) (~ z))"),
            ("(* a 1)", "(* (+ k 0) 1)"),
            ("a", "(~ (~ (~ w)))"),
        ];
        for (pattern, subject) in cases {
            let pattern = parse_term(pattern);
            let subject = parse_term(subject);
            let bindings = match_pattern(&pattern, &subject).expect("match failed");
            let mut names = NameGenerator::new();
            let rebuilt = Substitution::new(&bindings, &mut names).apply(&pattern);
            assert_eq!(subject.to_string(), rebuilt.to_string());
        }
    }
}
