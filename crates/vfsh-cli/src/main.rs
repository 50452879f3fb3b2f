use std::io;
use std::process::ExitCode;

use clap::Parser;
use vfsh_cli::{Cli, CliError, build_session, init_tracing, resolve_settings, run_commands, run_repl};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vfsh: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = resolve_settings(cli)?;
    let mut session = build_session(&settings)?;
    let mut stdout = io::stdout().lock();

    if cli.commands.is_empty() {
        run_repl(&mut session, io::stdin().lock(), &mut stdout)?;
    } else {
        run_commands(&mut session, &cli.commands, &mut stdout)?;
    }
    Ok(())
}
