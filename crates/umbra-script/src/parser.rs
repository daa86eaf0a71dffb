//! Line-oriented parsing of command scripts.

use miette::SourceSpan;

use crate::command::{CommandKind, ScriptCommand};
use crate::error::ScriptError;

/// Parse a whole script into commands.
///
/// Blank lines are skipped. Every other line must be one of the four command
/// forms: `{`, `}`, `<ident> <line>`, or `<ident>`. Leading and trailing
/// whitespace around a command is ignored; the reported span covers the
/// command text itself.
pub fn parse_script(src: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    let mut offset = 0usize;
    for (idx, raw) in src.split_inclusive('\n').enumerate() {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let text = line.trim();
        if !text.is_empty() {
            let indent = line.len() - line.trim_start().len();
            let span = SourceSpan::from((offset + indent, text.len()));
            commands.push(parse_line(src, text, idx + 1, span)?);
        }
        offset += raw.len();
    }
    log::debug!("parsed {} commands from {} script bytes", commands.len(), src.len());
    Ok(commands)
}

fn parse_line(
    src: &str,
    text: &str,
    line_no: usize,
    span: SourceSpan,
) -> Result<ScriptCommand, ScriptError> {
    let mut tokens = text.split_whitespace();
    let first = match tokens.next() {
        Some(token) => token,
        None => return Err(malformed(src, line_no, span)),
    };
    let second = tokens.next();
    if tokens.next().is_some() {
        return Err(malformed(src, line_no, span));
    }

    let kind = match (first, second) {
        ("{", None) => CommandKind::Enter,
        ("}", None) => CommandKind::Exit,
        // Braces take no operands and cannot serve as identifiers.
        ("{" | "}", Some(_)) => return Err(malformed(src, line_no, span)),
        (ident, None) => CommandKind::Find {
            ident: ident.to_string(),
        },
        (ident, Some(token)) => match token.parse::<u32>() {
            Ok(line) => CommandKind::Declare {
                ident: ident.to_string(),
                line,
            },
            Err(_) => {
                return Err(ScriptError::InvalidLineNumber {
                    token: token.to_string(),
                    line_no,
                    src: src.to_string(),
                    span,
                })
            }
        },
    };
    Ok(ScriptCommand { kind, line_no, span })
}

fn malformed(src: &str, line_no: usize, span: SourceSpan) -> ScriptError {
    ScriptError::MalformedCommand {
        line_no,
        src: src.to_string(),
        span,
    }
}

#[cfg(test)]
mod tests {
    use expect_test::{expect, Expect};

    use super::parse_script;

    fn check(src: &str, expect: Expect) {
        let rendered = match parse_script(src) {
            Ok(commands) => commands
                .iter()
                .map(|c| format!("{}: {:?} @{}+{}", c.line_no, c.kind, c.span.offset(), c.span.len()))
                .collect::<Vec<_>>()
                .join("\n"),
            Err(err) => format!("error: {err}"),
        };
        expect.assert_eq(&rendered);
    }

    #[test]
    fn parses_all_command_forms() {
        check(
            "x 1\n{\ny 2\ny\n}\nx\n",
            expect![[r#"
                1: Declare { ident: "x", line: 1 } @0+3
                2: Enter @4+1
                3: Declare { ident: "y", line: 2 } @6+3
                4: Find { ident: "y" } @10+1
                5: Exit @12+1
                6: Find { ident: "x" } @14+1"#]],
        );
    }

    #[test]
    fn skips_blank_lines_and_trims_whitespace() {
        check(
            "\n  alpha 10\n\n\talpha\n",
            expect![[r#"
                2: Declare { ident: "alpha", line: 10 } @3+8
                4: Find { ident: "alpha" } @14+5"#]],
        );
    }

    #[test]
    fn handles_carriage_returns_and_missing_final_newline() {
        check(
            "a 1\r\n}\r\nb",
            expect![[r#"
                1: Declare { ident: "a", line: 1 } @0+3
                2: Exit @5+1
                3: Find { ident: "b" } @8+1"#]],
        );
    }

    #[test]
    fn empty_script_yields_no_commands() {
        check("", expect![[""]]);
    }

    #[test]
    fn rejects_non_numeric_declaration_operand() {
        check(
            "x y\n",
            expect![["error: invalid line number `y` on line 1"]],
        );
    }

    #[test]
    fn rejects_braces_with_operands() {
        check(
            "{ 3\n",
            expect![["error: malformed command on line 1"]],
        );
        check(
            "} x\n",
            expect![["error: malformed command on line 1"]],
        );
    }

    #[test]
    fn rejects_extra_tokens() {
        check(
            "x 1 2\n",
            expect![["error: malformed command on line 1"]],
        );
    }

    #[test]
    fn error_points_at_the_offending_line() {
        let err = parse_script("ok 1\nbad one two\n").unwrap_err();
        match err {
            super::ScriptError::MalformedCommand { line_no, span, .. } => {
                assert_eq!(line_no, 2);
                assert_eq!(span.offset(), 5);
                assert_eq!(span.len(), 11);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
