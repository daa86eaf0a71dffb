//! Command scripts for driving a scoped symbol table, plus the differential
//! and timing harnesses built on top of them.
//!
//! A script is line-oriented: `{` enters a scope, `}` exits one, an
//! identifier followed by an integer declares it, and a bare identifier
//! looks it up. [`parse_script`] turns the text into commands,
//! [`check_script`] runs them through the real table and the [`Oracle`] in
//! lockstep, and [`time_script`] measures a single pass.

pub mod command;
pub mod error;
pub mod harness;
pub mod oracle;
pub mod parser;

pub use command::{CommandKind, ScriptCommand};
pub use error::{Divergence, ScriptError};
pub use harness::{apply, check_script, time_script, CheckReport, Outcome, TimingReport};
pub use oracle::Oracle;
pub use parser::parse_script;
