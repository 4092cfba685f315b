//! The types for parser errors.

use super::Token;
use thiserror::Error;

/// The error type for the parser and lexer.
#[derive(Debug, Error, PartialEq)]
pub enum ParserError {
    /// The lexer encountered a character that cannot start a token.
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),

    /// The lexer encountered a numeral with a leading zero, e.g. `01`.
    #[error("leading zero in numeral '{0}'")]
    LeadingZero(String),

    /// The lexer encountered a numeral too large to represent.
    #[error("numeral '{0}' is too large")]
    NumeralTooLarge(String),

    /// The parser encountered a token it has no production for.
    #[error("unexpected token: '{0}'")]
    UnexpectedToken(Token),

    /// The parser expected one specific token and got another.
    #[error("expected '{expected}', got '{got}'")]
    ExpectedToken { expected: Token, got: Token },

    /// Something other than an operator followed an opening parenthesis.
    #[error("expected operator, got '{0}'")]
    ExpectedOperator(Token),

    /// The parser expected an identifier.
    #[error("expected identifier, got '{0}'")]
    ExpectedIdentifier(Token),

    /// A `param` command named a parameter that does not exist.
    #[error("unknown parameter: '{0}'")]
    UnknownParameter(String),

    /// A `param` command carried something other than a positive integer
    /// where one was required.
    #[error("expected positive integer, got '{0}'")]
    ExpectedPositiveInteger(Token),

    /// A `param` command carried something other than `true` or `false`
    /// where a boolean was required.
    #[error("expected 'true' or 'false', got '{0}'")]
    ExpectedBoolean(Token),
}
