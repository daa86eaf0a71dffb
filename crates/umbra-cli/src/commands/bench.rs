use std::path::Path;
use std::time::Duration;

use indicatif::ProgressBar;
use umbra_script::time_script;

use crate::error::CliError;
use crate::io::load_script;

pub fn handle_bench(file: &Path, iterations: u32) -> Result<(), CliError> {
    let (_, commands) = load_script(file)?;

    let bar = ProgressBar::new(u64::from(iterations));
    let mut elapsed = Duration::ZERO;
    let mut ops = 0u64;
    for _ in 0..iterations {
        let report = time_script(&commands);
        elapsed += report.elapsed;
        ops += report.commands as u64;
        bar.inc(1);
    }
    bar.finish_and_clear();

    if ops == 0 {
        println!("{}: empty script, nothing to time", file.display());
        return Ok(());
    }
    let per_op = elapsed.div_f64(ops as f64);
    println!(
        "{}: {} commands x {} iterations in {:.2?} ({:?} per command)",
        file.display(),
        commands.len(),
        iterations,
        elapsed,
        per_op
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn benches_a_script_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a 1\n{{\nb 2\nb\n}}\n").unwrap();
        handle_bench(file.path(), 2).unwrap();
    }
}
