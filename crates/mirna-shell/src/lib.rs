//! # mirna-shell
//!
//! Interactive console for miRNA / gene interaction queries.
//!
//! Loads both interaction tables through `mirna-loader`, then answers one
//! query per input line until `quit` or end of input.

#![warn(missing_docs)]

pub mod logging;
mod shell;

use std::io::{BufRead, Write};

use mirna_loader::{InteractionStore, MapFiles};

pub use shell::{Shell, ShellExit, ShellState};

/// What to do once the tables are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Answer queries until `quit` or end of input.
    #[default]
    Interactive,
    /// Print both tables and exit.
    Dump,
}

/// Loads the tables and runs one session, returning the process exit status.
///
/// Load failures are written to `errors` before any prompt is printed:
/// a missing table exits with `2`, other failures with `1`.
pub fn run_session<R, W, E>(
    files: &MapFiles,
    mode: RunMode,
    input: R,
    mut output: W,
    mut errors: E,
) -> i32
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let store = match InteractionStore::load_all(files) {
        Ok(store) => store,
        Err(e) => {
            let _ = writeln!(errors, "{e}");
            tracing::debug!("Load failed, exiting with status {}", e.exit_code());
            return e.exit_code();
        }
    };

    let result = match mode {
        RunMode::Interactive => Shell::new(&store)
            .run(input, &mut output)
            .map(ShellExit::exit_code),
        RunMode::Dump => write!(output, "{store}").and_then(|()| output.flush()).map(|()| 0),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(errors, "error: {e}");
            1
        }
    }
}
