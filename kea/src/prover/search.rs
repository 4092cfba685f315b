//! Breadth-first search for a shortest rewrite path between two terms.

use super::{rewrite::successors, Config};
use crate::ast::{Axiom, NameGenerator, Term};
use ahash::{AHashMap, AHashSet};
use std::{collections::VecDeque, rc::Rc};

/// One rewrite step in a discharged proof: the name of the axiom applied and
/// the term that resulted.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub axiom: String,
    pub term: Rc<Term>,
}

/// The outcome of a path search: the step-labeled path, if one was found,
/// and the number of states checked before the search ended.
#[derive(Debug)]
pub struct SearchResult {
    pub path: Option<Vec<Step>>,
    pub visited: usize,
}

/// Searches breadth-first for a shortest sequence of axiom applications that
/// rewrites `start` into `target`.
///
/// States are identified by their canonical text. A state whose depth has
/// reached `max_search_depth`, or whose canonical text is longer than
/// `max_tree_size`, is not expanded further but stays in the visited set.
/// The search is deterministic: the frontier is FIFO and successors are
/// enumerated in the fixed order of [`successors`], so among shortest paths
/// the one returned is always the same.
pub fn find_path(
    axioms: &[Axiom],
    start: &Rc<Term>,
    target: &Rc<Term>,
    config: &Config,
) -> SearchResult {
    let start_key = start.to_string();
    let target_key = target.to_string();

    let mut frontier = VecDeque::new();
    let mut visited = AHashSet::new();
    let mut parents: AHashMap<String, (String, Rc<Term>)> = AHashMap::new();
    let mut depths: AHashMap<String, usize> = AHashMap::new();
    let mut names = NameGenerator::new();
    let mut checked = 0;

    frontier.push_back(start.clone());
    visited.insert(start_key.clone());
    depths.insert(start_key.clone(), 0);

    while let Some(node) = frontier.pop_front() {
        checked += 1;
        let key = node.to_string();

        if key == target_key {
            let path = reconstruct_path(&parents, &start_key, node);
            return SearchResult {
                path: Some(path),
                visited: checked,
            };
        }

        let depth = depths[&key];
        if key.len() > config.max_tree_size || depth >= config.max_search_depth {
            continue;
        }

        for (axiom_name, successor) in successors(&node, axioms, &mut names) {
            let successor_key = successor.to_string();
            if visited.insert(successor_key.clone()) {
                depths.insert(successor_key.clone(), depth + 1);
                parents.insert(successor_key, (axiom_name.to_owned(), node.clone()));
                frontier.push_back(successor);
            }
        }
    }

    SearchResult {
        path: None,
        visited: checked,
    }
}

/// Walks the parent links back from the matched node to the start and
/// reverses, so that each step's term is the state after applying the step's
/// axiom.
fn reconstruct_path(
    parents: &AHashMap<String, (String, Rc<Term>)>,
    start_key: &str,
    end: Rc<Term>,
) -> Vec<Step> {
    let mut path = Vec::new();
    let mut current = end;
    let mut current_key = current.to_string();
    while current_key != start_key {
        let (axiom, predecessor) = &parents[&current_key];
        path.push(Step {
            axiom: axiom.clone(),
            term: current,
        });
        current = predecessor.clone();
        current_key = current.to_string();
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::parse_term;

    fn axiom(name: &str, lhs: &str, rhs: &str) -> Axiom {
        Axiom {
            name: name.to_owned(),
            lhs: parse_term(lhs),
            rhs: parse_term(rhs),
        }
    }

    fn boolean_axioms() -> Vec<Axiom> {
        vec![
            axiom("com_add", "(+ a b)", "(+ b a)"),
            axiom("ide_add", "(+ a 0)", "a"),
        ]
    }

    fn path_texts(result: &SearchResult) -> Vec<(String, String)> {
        result
            .path
            .as_ref()
            .expect("no path found")
            .iter()
            .map(|step| (step.axiom.clone(), step.term.to_string()))
            .collect()
    }

    #[test]
    fn test_equal_endpoints_need_no_steps() {
        let result = find_path(
            &boolean_axioms(),
            &parse_term("(+ 0 1)"),
            &parse_term("(+ 0 1)"),
            &Config::default(),
        );
        assert_eq!(result.path, Some(vec![]));
        assert_eq!(result.visited, 1);
    }

    #[test]
    fn test_single_step_path() {
        let result = find_path(
            &boolean_axioms(),
            &parse_term("(+ 1 0)"),
            &parse_term("1"),
            &Config::default(),
        );
        assert_eq!(
            path_texts(&result),
            [("ide_add".to_owned(), "1".to_owned())]
        );
    }

    #[test]
    fn test_two_step_path() {
        let result = find_path(
            &boolean_axioms(),
            &parse_term("(+ 0 1)"),
            &parse_term("1"),
            &Config::default(),
        );
        assert_eq!(
            path_texts(&result),
            [
                ("com_add".to_owned(), "(+ 1 0)".to_owned()),
                ("ide_add".to_owned(), "1".to_owned()),
            ]
        );
        assert_eq!(result.visited, 6);
    }

    #[test]
    fn test_no_path_when_frontier_empties() {
        // With only commutativity, `1` has no successors at all.
        let axioms = [axiom("com_add", "(+ a b)", "(+ b a)")];
        let result = find_path(
            &axioms,
            &parse_term("1"),
            &parse_term("(+ x (~ x))"),
            &Config::default(),
        );
        assert!(result.path.is_none());
        assert_eq!(result.visited, 1);
    }

    #[test]
    fn test_depth_bound_is_respected() {
        let axioms = [axiom("wrap", "a", "(~ a)")];
        let target = parse_term("(~ (~ (~ 0)))");

        let shallow = Config {
            max_search_depth: 2,
            ..Config::default()
        };
        let result = find_path(&axioms, &parse_term("0"), &target, &shallow);
        assert!(result.path.is_none());
        // `0`, `(~ 0)` and `(~ (~ 0))` are visited; nothing at depth 2 is
        // expanded.
        assert_eq!(result.visited, 3);

        let deep = Config {
            max_search_depth: 3,
            ..Config::default()
        };
        let result = find_path(&axioms, &parse_term("0"), &target, &deep);
        assert_eq!(result.path.expect("no path found").len(), 3);
    }

    #[test]
    fn test_size_bound_is_respected() {
        let axioms = [axiom("wrap", "a", "(~ a)")];
        let target = parse_term("(~ (~ (~ 0)))");

        // "(~ (~ 0))" is 9 characters long, over the bound, so it is never
        // expanded and the target is never reached.
        let tight = Config {
            max_tree_size: 6,
            ..Config::default()
        };
        let result = find_path(&axioms, &parse_term("0"), &target, &tight);
        assert!(result.path.is_none());

        let result = find_path(&axioms, &parse_term("0"), &target, &Config::default());
        assert!(result.path.is_some());
    }

    #[test]
    fn test_shortest_path_is_returned() {
        // Identity detours through `(+ (* x y) 0)` exist, but the one-step
        // commutativity rewrite must win.
        let axioms = [
            axiom("ide_add", "(+ a 0)", "a"),
            axiom("com_mul", "(* a b)", "(* b a)"),
        ];
        let result = find_path(
            &axioms,
            &parse_term("(* x y)"),
            &parse_term("(* y x)"),
            &Config::default(),
        );
        assert_eq!(result.path.expect("no path found").len(), 1);
    }

    #[test]
    fn test_first_enumerated_axiom_wins_ties() {
        // Both axioms rewrite `(+ 0 1)` to `(+ 1 0)`; the parent map must
        // record the one declared first.
        let axioms = [
            axiom("com_first", "(+ a b)", "(+ b a)"),
            axiom("com_second", "(+ a b)", "(+ b a)"),
        ];
        let result = find_path(
            &axioms,
            &parse_term("(+ 0 1)"),
            &parse_term("(+ 1 0)"),
            &Config::default(),
        );
        assert_eq!(
            path_texts(&result),
            [("com_first".to_owned(), "(+ 1 0)".to_owned())]
        );
    }
}
