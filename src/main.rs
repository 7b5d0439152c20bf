use boggle_solver::cli::{Cli, CliInterface, display_report, parse_cli};
use boggle_solver::{DictionaryIndex, Result, logging, resolve_wordlist, session_loop, solve_grid};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let words = resolve_wordlist(cli.wordlist_path.as_deref())?;

    if let Some(grid) = cli.load_grid()? {
        let (report, _) = solve_grid(grid, DictionaryIndex::new(&words));
        return display_report(&report, cli.json);
    }

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock(), cli.json);
    session_loop(&words, &mut interface);
    Ok(())
}
