//! Script-level diagnostics.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::harness::Outcome;

/// Errors raised while parsing a command script.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// A command line that fits none of the four forms.
    #[error("malformed command on line {line_no}")]
    #[diagnostic(
        code(umbra::script::malformed_command),
        help("a command is `{{`, `}}`, `<identifier>`, or `<identifier> <line>`")
    )]
    MalformedCommand {
        line_no: usize,
        #[source_code]
        src: String,
        #[label("cannot be parsed as a command")]
        span: SourceSpan,
    },

    /// A declaration whose second token is not an unsigned integer.
    #[error("invalid line number `{token}` on line {line_no}")]
    #[diagnostic(code(umbra::script::invalid_line_number))]
    InvalidLineNumber {
        token: String,
        line_no: usize,
        #[source_code]
        src: String,
        #[label("expected an unsigned integer after the identifier")]
        span: SourceSpan,
    },
}

/// The first command on which the table under test and the oracle disagreed.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
#[error("implementations diverged on line {line_no}: `{command}`")]
#[diagnostic(code(umbra::script::divergence))]
pub struct Divergence {
    /// 1-based script line of the offending command.
    pub line_no: usize,
    /// The command text as written in the script.
    pub command: String,
    /// What the table under test answered.
    pub actual: Outcome,
    /// What the oracle answered.
    pub expected: Outcome,
    #[source_code]
    pub src: String,
    #[label("table answered `{actual}`, oracle answered `{expected}`")]
    pub span: SourceSpan,
}
