use std::path::Path;

use umbra_script::{parse_script, ScriptCommand};

use crate::error::CliError;

/// Read a script file and parse it into commands.
///
/// Returns the raw source alongside the commands because the differential
/// checker wants it for its diagnostics.
pub fn load_script(path: &Path) -> Result<(String, Vec<ScriptCommand>), CliError> {
    let src = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let commands = parse_script(&src)?;
    Ok((src, commands))
}
