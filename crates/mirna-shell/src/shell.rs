//! Interactive query loop.

use std::io::{self, BufRead, Write};

use mirna_loader::InteractionStore;
use mirna_types::{normalize, well_known};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// The user typed `quit` (any case).
    Quit,
    /// Input was exhausted.
    EndOfInput,
}

impl ShellExit {
    /// Process exit status for this ending. Both endings are normal.
    pub fn exit_code(self) -> i32 {
        0
    }
}

/// Shell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Waiting for the next query line.
    AwaitingInput,
    /// Session is over.
    Terminated(ShellExit),
}

/// Read-query-print loop over a loaded [`InteractionStore`].
///
/// Each iteration prints the prompt, reads one line, and either ends the
/// session or prints the tab-joined lookup result on its own line.
pub struct Shell<'a> {
    store: &'a InteractionStore,
    state: ShellState,
}

impl<'a> Shell<'a> {
    /// Creates a shell in the `AwaitingInput` state.
    pub fn new(store: &'a InteractionStore) -> Self {
        Self {
            store,
            state: ShellState::AwaitingInput,
        }
    }

    /// Current state.
    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Runs until `quit` or end of input.
    ///
    /// Calling this again after the session ended returns the same exit
    /// without reading or writing anything.
    ///
    /// # Errors
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<ShellExit> {
        let mut buf = Vec::new();

        loop {
            if let ShellState::Terminated(exit) = self.state {
                return Ok(exit);
            }

            writeln!(output, "{}", well_known::PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("End of input");
                self.state = ShellState::Terminated(ShellExit::EndOfInput);
                continue;
            }

            let query = normalize(&String::from_utf8_lossy(&buf));
            if query == well_known::QUIT {
                tracing::debug!("Quit requested");
                self.state = ShellState::Terminated(ShellExit::Quit);
                continue;
            }

            let result = self.store.find(&query);
            tracing::debug!(query = %query, table = ?result.kind(), "Answered query");
            writeln!(output, "{result}")?;
            output.flush()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirna_loader::InteractionMap;
    use std::io::Cursor;

    fn make_test_store() -> InteractionStore {
        let mirna = InteractionMap::from_reader("MIR1\tGENE1\n".as_bytes()).unwrap().0;
        let gene = InteractionMap::from_reader("GENE1\tMIR1\tMIR2\n".as_bytes()).unwrap().0;
        InteractionStore::new(mirna, gene)
    }

    fn run_shell(store: &InteractionStore, input: &str) -> (ShellExit, String) {
        let mut shell = Shell::new(store);
        let mut output = Vec::new();
        let exit = shell.run(Cursor::new(input), &mut output).unwrap();
        (exit, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let store = make_test_store();
        let shell = Shell::new(&store);
        assert_eq!(shell.state(), ShellState::AwaitingInput);
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let store = make_test_store();
        for input in ["quit\n", "QUIT\n", "  QuIt  \r\n"] {
            let (exit, output) = run_shell(&store, input);
            assert_eq!(exit, ShellExit::Quit);
            assert_eq!(output, format!("{}\n", well_known::PROMPT));
        }
    }

    #[test]
    fn test_end_of_input() {
        let store = make_test_store();
        let (exit, output) = run_shell(&store, "");
        assert_eq!(exit, ShellExit::EndOfInput);
        assert_eq!(exit.exit_code(), 0);
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_last_line_without_newline() {
        let store = make_test_store();
        let (exit, output) = run_shell(&store, "mir1");
        assert_eq!(exit, ShellExit::EndOfInput);
        assert!(output.contains("\nGENE1\n"));
    }

    #[test]
    fn test_run_after_terminated() {
        let store = make_test_store();
        let mut shell = Shell::new(&store);
        shell.run(Cursor::new("quit\n"), io::sink()).unwrap();

        let mut output = Vec::new();
        let exit = shell.run(Cursor::new("gene1\n"), &mut output).unwrap();
        assert_eq!(exit, ShellExit::Quit);
        assert!(output.is_empty());
        assert_eq!(shell.state(), ShellState::Terminated(ShellExit::Quit));
    }

    #[test]
    fn test_invalid_utf8_does_not_abort() {
        let store = make_test_store();
        let mut shell = Shell::new(&store);
        let mut output = Vec::new();
        let input: &[u8] = b"\xff\xfe\nquit\n";
        let exit = shell.run(input, &mut output).unwrap();
        assert_eq!(exit, ShellExit::Quit);
        assert!(String::from_utf8(output).unwrap().contains(well_known::NOT_FOUND));
    }
}
