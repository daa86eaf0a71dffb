//! Differential and timing harnesses over parsed scripts.

use std::fmt;
use std::time::{Duration, Instant};

use umbra_table::{NameTable, ScopedTable};

use crate::command::{CommandKind, ScriptCommand};
use crate::error::Divergence;
use crate::oracle::Oracle;

/// The observable result of applying one command to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `enter_scope` ran; it has no return value to compare.
    Entered,
    Exited(bool),
    Declared(bool),
    Found(Option<u32>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Entered => write!(f, "entered"),
            Outcome::Exited(ok) => write!(f, "exited -> {ok}"),
            Outcome::Declared(ok) => write!(f, "declared -> {ok}"),
            Outcome::Found(Some(line)) => write!(f, "found -> {line}"),
            Outcome::Found(None) => write!(f, "found -> undeclared"),
        }
    }
}

/// Apply one command to any table implementation, capturing what was
/// observable about it.
pub fn apply<T: ScopedTable>(table: &mut T, command: &CommandKind) -> Outcome {
    match command {
        CommandKind::Enter => {
            table.enter_scope();
            Outcome::Entered
        }
        CommandKind::Exit => Outcome::Exited(table.exit_scope()),
        CommandKind::Declare { ident, line } => Outcome::Declared(table.declare(ident, *line)),
        CommandKind::Find { ident } => Outcome::Found(table.find(ident)),
    }
}

/// Result of a differential run on which every command agreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of commands both implementations agreed on.
    pub commands: usize,
}

/// Run `commands` through the real table and the oracle in lockstep.
///
/// Stops at the first command whose outcomes differ. The original script
/// text is needed so the divergence diagnostic can point at the line.
pub fn check_script(src: &str, commands: &[ScriptCommand]) -> Result<CheckReport, Divergence> {
    let mut table = NameTable::new();
    let mut oracle = Oracle::new();
    for command in commands {
        let actual = apply(&mut table, &command.kind);
        let expected = apply(&mut oracle, &command.kind);
        if actual != expected {
            log::debug!(
                "divergence on script line {}: table {}, oracle {}",
                command.line_no,
                actual,
                expected
            );
            return Err(Divergence {
                line_no: command.line_no,
                command: command_text(src, command),
                actual,
                expected,
                src: src.to_string(),
                span: command.span,
            });
        }
    }
    Ok(CheckReport {
        commands: commands.len(),
    })
}

/// Wall-clock measurement of one full pass of `commands` over a fresh table.
#[derive(Debug, Clone, Copy)]
pub struct TimingReport {
    pub elapsed: Duration,
    /// Number of commands executed.
    pub commands: usize,
}

/// Time a single execution of `commands` against the real table.
pub fn time_script(commands: &[ScriptCommand]) -> TimingReport {
    let mut table = NameTable::new();
    let start = Instant::now();
    for command in commands {
        apply(&mut table, &command.kind);
    }
    TimingReport {
        elapsed: start.elapsed(),
        commands: commands.len(),
    }
}

fn command_text(src: &str, command: &ScriptCommand) -> String {
    let start = command.span.offset();
    let end = start + command.span.len();
    src.get(start..end).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_script;

    #[test]
    fn apply_reports_each_outcome() {
        let commands = parse_script("a 1\n{\na 2\na\n}\na\n}\n}\n").unwrap();
        let mut table = NameTable::new();
        let outcomes: Vec<Outcome> = commands
            .iter()
            .map(|c| apply(&mut table, &c.kind))
            .collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Declared(true),
                Outcome::Entered,
                Outcome::Declared(true),
                Outcome::Found(Some(2)),
                Outcome::Exited(true),
                Outcome::Found(Some(1)),
                Outcome::Exited(true),
                Outcome::Exited(false),
            ]
        );
    }

    #[test]
    fn outcome_display_is_stable() {
        assert_eq!(Outcome::Entered.to_string(), "entered");
        assert_eq!(Outcome::Exited(false).to_string(), "exited -> false");
        assert_eq!(Outcome::Declared(true).to_string(), "declared -> true");
        assert_eq!(Outcome::Found(Some(7)).to_string(), "found -> 7");
        assert_eq!(Outcome::Found(None).to_string(), "found -> undeclared");
    }

    #[test]
    fn timing_counts_every_command() {
        let commands = parse_script("a 1\n{\nb 2\n}\n").unwrap();
        let report = time_script(&commands);
        assert_eq!(report.commands, 4);
    }

    #[test]
    fn divergence_message_names_line_and_command() {
        let src = "a 1\n";
        let divergence = Divergence {
            line_no: 1,
            command: "a 1".to_string(),
            actual: Outcome::Declared(true),
            expected: Outcome::Declared(false),
            src: src.to_string(),
            span: miette::SourceSpan::from((0, 3)),
        };
        assert_eq!(
            divergence.to_string(),
            "implementations diverged on line 1: `a 1`"
        );
    }
}
