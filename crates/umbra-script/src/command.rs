//! The parsed form of script commands.

use miette::SourceSpan;

/// What a script line asks the table to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// `{`
    Enter,
    /// `}`
    Exit,
    /// `<ident> <line>`
    Declare { ident: String, line: u32 },
    /// `<ident>`
    Find { ident: String },
}

/// One parsed command together with where it came from in the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCommand {
    pub kind: CommandKind,
    /// 1-based line number in the script.
    pub line_no: usize,
    /// Byte range of the command text within the script source.
    pub span: SourceSpan,
}
