use clap::Parser;
use std::path::PathBuf;

mod commands;
mod error;
mod io;

#[derive(Parser, Debug)]
#[command(name = "umbra")]
#[command(about = "Scoped symbol table toolkit and script driver", long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Cross-check the table against the reference oracle on a script
    Check {
        /// Command script to execute
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Execute a script and print each observable result
    Run {
        /// Command script to execute
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Time repeated executions of a script
    Bench {
        /// Command script to execute
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Number of repetitions
        #[arg(short = 'n', long, default_value_t = 10)]
        iterations: u32,
    },
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Check { file } => commands::check::handle_check(&file)?,
        Command::Run { file } => commands::run::handle_run(&file)?,
        Command::Bench { file, iterations } => commands::bench::handle_bench(&file, iterations)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let args = Args::try_parse_from(["umbra", "check", "script.txt"]).unwrap();
        assert!(matches!(args.command, Command::Check { .. }));

        let args = Args::try_parse_from(["umbra", "bench", "script.txt", "-n", "3"]).unwrap();
        match args.command {
            Command::Bench { iterations, .. } => assert_eq!(iterations, 3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn bench_iterations_default() {
        let args = Args::try_parse_from(["umbra", "bench", "script.txt"]).unwrap();
        match args.command {
            Command::Bench { iterations, .. } => assert_eq!(iterations, 10),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
