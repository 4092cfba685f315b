//! The proof driver and its runtime configuration.

pub mod rewrite;
pub mod search;

use crate::{
    ast::{Axiom, Command, Param, Script, Term},
    KeaResult,
};
use search::{find_path, SearchResult};
use std::{io::Write, rc::Rc, time::Instant};

/// The runtime parameters that bound each proof search.
#[derive(Debug, Clone)]
pub struct Config {
    /// The maximum number of rewrite steps a path may take. States at this
    /// depth are still checked against the target but are not expanded.
    pub max_search_depth: usize,

    /// The maximum canonical-text length a term may have and still be
    /// expanded. Longer terms stay in the visited set but get no successors.
    pub max_tree_size: usize,

    /// If `true`, every discharged obligation is appended to the axiom list
    /// as a synthetic axiom, so later obligations can use it in one step.
    pub use_proofs_as_axioms: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_search_depth: 8,
            max_tree_size: 20,
            use_proofs_as_axioms: false,
        }
    }
}

/// Runs the commands of a parsed script in source order, writing the proof
/// transcripts to `out`.
pub struct Prover<W> {
    config: Config,
    axioms: Vec<Axiom>,
    out: W,
}

impl<W: Write> Prover<W> {
    pub fn new(config: Config, out: W) -> Self {
        Prover {
            config,
            axioms: Vec::new(),
            out,
        }
    }

    pub fn run(&mut self, script: &Script) -> KeaResult<()> {
        for command in &script.commands {
            match command {
                Command::Axiom(axiom) => self.add_axiom(axiom.clone()),
                Command::Param(param) => self.set_param(param),
                Command::Prove { lhs, rhs } => self.prove(lhs, rhs)?,
            }
        }
        Ok(())
    }

    fn add_axiom(&mut self, axiom: Axiom) {
        if self.axioms.iter().any(|a| a.name == axiom.name) {
            log::warn!("axiom name '{}' is declared more than once", axiom.name);
        }
        self.axioms.push(axiom);
    }

    /// Parameter updates take effect for subsequent commands only.
    fn set_param(&mut self, param: &Param) {
        match *param {
            Param::MaxSearchDepth(depth) => self.config.max_search_depth = depth,
            Param::MaxTreeSize(size) => self.config.max_tree_size = size,
            Param::UseProofsAsAxioms(enabled) => self.config.use_proofs_as_axioms = enabled,
        }
    }

    fn prove(&mut self, lhs: &Rc<Term>, rhs: &Rc<Term>) -> KeaResult<()> {
        writeln!(self.out, "Prove {} = {}...", lhs, rhs)?;

        let start_time = Instant::now();
        let SearchResult { path, visited } = find_path(&self.axioms, lhs, rhs, &self.config);
        let elapsed = start_time.elapsed().as_secs_f64();

        match path {
            Some(path) if path.is_empty() => {
                writeln!(self.out, "Statements are the same.")?;
                self.promote(lhs, rhs);
            }
            Some(path) => {
                writeln!(self.out, "{}", lhs)?;
                for step in &path {
                    writeln!(self.out, " = {}  w/ {}", step.term, step.axiom)?;
                }
                writeln!(
                    self.out,
                    "Done in {:.3} seconds after checking {} states.",
                    elapsed, visited
                )?;
                self.promote(lhs, rhs);
            }
            None => {
                writeln!(
                    self.out,
                    "No path found within {} steps after checking {} states in {:.3} seconds.",
                    self.config.max_search_depth, visited, elapsed
                )?;
            }
        }
        Ok(())
    }

    /// Appends a discharged obligation to the axiom list when
    /// `use_proofs_as_axioms` is set.
    fn promote(&mut self, lhs: &Rc<Term>, rhs: &Rc<Term>) {
        if !self.config.use_proofs_as_axioms {
            return;
        }
        let name = format!("proof of {} = {}", lhs, rhs);
        log::info!("installing discharged obligation as axiom '{}'", name);
        self.axioms.push(Axiom {
            name,
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        });
    }
}
