use std::path::Path;

use umbra_script::{apply, CommandKind};
use umbra_table::NameTable;

use crate::error::CliError;
use crate::io::load_script;

pub fn handle_run(file: &Path) -> Result<(), CliError> {
    let (_, commands) = load_script(file)?;
    let mut table = NameTable::new();
    for command in &commands {
        let outcome = apply(&mut table, &command.kind);
        // Entering a scope has nothing observable to print.
        if !matches!(command.kind, CommandKind::Enter) {
            println!("{:>5}  {}", command.line_no, outcome);
        }
    }
    Ok(())
}
