use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// The capability the evaluator needs from its host: one blocking line of
/// input per `INPUT` statement, and one emitted line per `OUTPUT` statement.
///
/// The interpreter core never touches stdin or stdout directly; it goes
/// through this trait, which keeps runs testable and keeps console wiring at
/// the edge of the crate.
pub trait Console {
    /// Reads one line of external input, without its trailing newline.
    ///
    /// # Errors
    /// Returns an `io::Error` when no line can be obtained, including end of
    /// input.
    fn read_line(&mut self) -> io::Result<String>;

    /// Makes one textual value visible to the user.
    fn print_line(&mut self, text: &str);
}

/// A `Console` backed by the process's stdin and stdout.
///
/// Output is flushed eagerly after every line so that interleaved `INPUT`
/// prompt-style programs behave as expected.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<String> {
        let mut input = String::new();
        let bytes = io::stdin().lock().read_line(&mut input)?;
        if bytes == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }

        let input = input.trim_end_matches('\n').trim_end_matches('\r');
        Ok(input.to_string())
    }

    fn print_line(&mut self, text: &str) {
        println!("{text}");
        io::stdout().flush().ok();
    }
}

/// A `Console` with scripted input and captured output, for tests and
/// embedding.
///
/// Input lines are served in order; reading past the end of the script is an
/// error, mirroring end-of-input on a real console.
///
/// # Example
/// ```
/// use gotolang::interpreter::console::{Console, MemoryConsole};
///
/// let mut console = MemoryConsole::with_input(["7"]);
/// assert_eq!(console.read_line().unwrap(), "7");
///
/// console.print_line("done");
/// assert_eq!(console.output(), ["done"]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryConsole {
    input:  VecDeque<String>,
    output: Vec<String>,
}

impl MemoryConsole {
    /// Creates a console with no scripted input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console that will serve the given lines, in order, to
    /// `read_line`.
    pub fn with_input<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { input:  lines.into_iter().map(Into::into).collect(),
               output: Vec::new(), }
    }

    /// Everything printed so far, one entry per `print_line` call.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Consumes the console and returns the captured output.
    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        self.output
    }
}

impl Console for MemoryConsole {
    fn read_line(&mut self) -> io::Result<String> {
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left"))
    }

    fn print_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
