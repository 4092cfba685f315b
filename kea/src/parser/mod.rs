//! A parser for the script language: `axiom`, `prove` and `param` commands
//! over prefix-notation Boolean formulas.

pub mod error;
pub mod lexer;

use crate::{
    ast::{Axiom, Command, Constant, Param, Script, Term},
    Error, KeaResult,
};
use std::{io::BufRead, rc::Rc};

pub use error::ParserError;
pub use lexer::{Lexer, Position, Reserved, Token};

/// Parses a whole script from a `BufRead` source.
pub fn parse_script<T: BufRead>(input: T) -> KeaResult<Script> {
    Parser::new(input)?.parse_script()
}

/// A recursive-descent parser with one token of lookahead.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: Position,
}

impl Parser {
    /// Constructs a new `Parser` from a type that implements `BufRead`. This
    /// operation can fail if there is an IO or lexer error on the first token.
    pub fn new(input: impl BufRead) -> KeaResult<Self> {
        let mut lexer = Lexer::new(input)?;
        let (current_token, current_position) = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
            current_position,
        })
    }

    /// Advances the parser one token, and returns the previous `current_token`
    /// with its position.
    fn next_token(&mut self) -> KeaResult<(Token, Position)> {
        use std::mem::replace;

        let (new_token, new_position) = self.lexer.next_token()?;
        let old_token = replace(&mut self.current_token, new_token);
        let old_position = replace(&mut self.current_position, new_position);
        Ok((old_token, old_position))
    }

    fn expect_token(&mut self, expected: Token) -> KeaResult<()> {
        let (got, pos) = self.next_token()?;
        if got == expected {
            Ok(())
        } else {
            Err(Error::Parser(
                ParserError::ExpectedToken { expected, got },
                pos,
            ))
        }
    }

    fn expect_identifier(&mut self) -> KeaResult<String> {
        match self.next_token()? {
            (Token::Symbol(s), _) => Ok(s),
            (other, pos) => Err(Error::Parser(ParserError::ExpectedIdentifier(other), pos)),
        }
    }

    /// Parses a sequence of commands until the end of the input.
    pub fn parse_script(&mut self) -> KeaResult<Script> {
        let mut commands = Vec::new();
        while self.current_token != Token::Eof {
            commands.push(self.parse_command()?);
        }
        Ok(Script { commands })
    }

    fn parse_command(&mut self) -> KeaResult<Command> {
        let command = match self.next_token()? {
            (Token::ReservedWord(Reserved::Axiom), _) => {
                let name = self.expect_identifier()?;
                self.expect_token(Token::Colon)?;
                let lhs = self.parse_formula()?;
                self.expect_token(Token::Equals)?;
                let rhs = self.parse_formula()?;
                Command::Axiom(Axiom { name, lhs, rhs })
            }
            (Token::ReservedWord(Reserved::Prove), _) => {
                let lhs = self.parse_formula()?;
                self.expect_token(Token::Equals)?;
                let rhs = self.parse_formula()?;
                Command::Prove { lhs, rhs }
            }
            (Token::ReservedWord(Reserved::Param), _) => Command::Param(self.parse_param()?),
            (other, pos) => return Err(Error::Parser(ParserError::UnexpectedToken(other), pos)),
        };
        self.expect_token(Token::Dot)?;
        Ok(command)
    }

    fn parse_param(&mut self) -> KeaResult<Param> {
        let (token, pos) = self.next_token()?;
        let name = match token {
            Token::Symbol(s) => s,
            other => return Err(Error::Parser(ParserError::ExpectedIdentifier(other), pos)),
        };
        if name == "max_search_depth" {
            Ok(Param::MaxSearchDepth(self.expect_positive_integer()?))
        } else if name == "max_tree_size" {
            Ok(Param::MaxTreeSize(self.expect_positive_integer()?))
        } else if name == "use_proofs_as_axioms" {
            Ok(Param::UseProofsAsAxioms(self.expect_boolean()?))
        } else {
            Err(Error::Parser(ParserError::UnknownParameter(name), pos))
        }
    }

    fn expect_positive_integer(&mut self) -> KeaResult<usize> {
        match self.next_token()? {
            (Token::Numeral(n), _) if n > 0 => Ok(n as usize),
            (other, pos) => Err(Error::Parser(
                ParserError::ExpectedPositiveInteger(other),
                pos,
            )),
        }
    }

    fn expect_boolean(&mut self) -> KeaResult<bool> {
        match self.next_token()? {
            (Token::ReservedWord(Reserved::True), _) => Ok(true),
            (Token::ReservedWord(Reserved::False), _) => Ok(false),
            (other, pos) => Err(Error::Parser(ParserError::ExpectedBoolean(other), pos)),
        }
    }

    /// Parses a single formula in prefix notation.
    pub fn parse_formula(&mut self) -> KeaResult<Rc<Term>> {
        let (token, pos) = self.next_token()?;
        let term = match token {
            Token::Numeral(0) => Term::Const(Constant::Zero),
            Token::Numeral(1) => Term::Const(Constant::One),
            Token::Symbol(name) => Term::Var(name),
            Token::OpenParen => {
                let (op_token, op_pos) = self.next_token()?;
                let op = match op_token {
                    Token::Operator(op) => op,
                    other => {
                        return Err(Error::Parser(ParserError::ExpectedOperator(other), op_pos))
                    }
                };
                let mut args = vec![self.parse_formula()?];
                if op.arity() == 2 {
                    args.push(self.parse_formula()?);
                }
                self.expect_token(Token::CloseParen)?;
                Term::Op(op, args)
            }
            other => return Err(Error::Parser(ParserError::UnexpectedToken(other), pos)),
        };
        Ok(Rc::new(term))
    }
}
