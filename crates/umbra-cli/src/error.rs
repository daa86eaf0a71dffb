use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use umbra_script::{Divergence, ScriptError};

/// CLI-facing errors with rich diagnostics.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("failed to read script {path}")]
    #[diagnostic(code(umbra::cli::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Divergence(#[from] Divergence),
}
