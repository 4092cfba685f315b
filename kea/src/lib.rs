#![warn(clippy::dbg_macro)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::if_not_else)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::manual_assert)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::str_to_string)]
#![warn(clippy::unnested_or_patterns)]

pub mod ast;
pub mod parser;
pub mod prover;

use parser::{ParserError, Position};
use std::io;
use thiserror::Error;

pub type KeaResult<T> = Result<T, Error>;

fn parser_error_message(e: &ParserError, pos: &Position) -> String {
    format!("parser error: {} (on line {}, column {})", e, pos.0, pos.1)
}

/// The error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{}", parser_error_message(.0, .1))]
    Parser(ParserError, Position),
}

/// Parses a script and runs its commands in order, writing the proof
/// transcripts to `out`.
///
/// `config` provides the initial runtime parameters; `param` commands in the
/// script update them for the commands that follow.
pub fn run_script<T, W>(input: T, config: prover::Config, out: W) -> KeaResult<()>
where
    T: io::BufRead,
    W: io::Write,
{
    let script = parser::parse_script(input)?;
    prover::Prover::new(config, out).run(&script)
}
