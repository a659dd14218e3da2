//! miRNA / gene interaction query console.

use std::io::{self, IsTerminal};

use clap::Parser;
use mirna_shell::logging::{init_logging, LogConfig};
use mirna_shell::{run_session, RunMode};

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_ansi(!cli.no_color && io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let files = cli.map_files();
    tracing::info!(
        "Using {} and {}",
        files.mirna.display(),
        files.gene.display()
    );

    let mode = if cli.dump {
        RunMode::Dump
    } else {
        RunMode::Interactive
    };

    let exit_code = run_session(&files, mode, io::stdin().lock(), io::stdout().lock(), io::stderr());
    std::process::exit(exit_code);
}
