use std::path::Path;

use umbra_script::check_script;

use crate::error::CliError;
use crate::io::load_script;

pub fn handle_check(file: &Path) -> Result<(), CliError> {
    let (src, commands) = load_script(file)?;
    let report = check_script(&src, &commands)?;
    println!(
        "{}: {} commands, table and oracle agree",
        file.display(),
        report.commands
    );
    Ok(())
}
