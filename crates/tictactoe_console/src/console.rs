//! Line-based console collaborators.
//!
//! [`ConsoleInput`] asks questions on a writer and reads answers from a
//! reader, repeating the question until the answer is well-formed.
//! [`ConsoleOutput`] writes whatever the session shows.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tictactoe_core::{ConsoleError, Coord, Input, Output, Symbol};
use tracing::{debug, instrument, warn};

/// Reads player answers line by line.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Reads from stdin and prompts on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates an input over any reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the input and returns the prompt writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes `prompt` without a newline and reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        // Undecodable bytes become U+FFFD so the answer is rejected and re-asked.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(ConsoleError::new("input closed before an answer was given"));
        }
        let answer = String::from_utf8_lossy(&line).trim().to_string();
        debug!(%answer, "Line read");
        Ok(answer)
    }

    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Input for ConsoleInput<R, W> {
    #[instrument(skip(self))]
    fn request_integer(&mut self, min: i64, max: i64) -> Result<i64, ConsoleError> {
        loop {
            let answer = self.ask(&format!("Please enter a number between {min} and {max}: "))?;
            match answer.parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(value) => {
                    warn!(value, "Number out of range");
                    self.say("The number entered is invalid.")?;
                }
                Err(_) => {
                    warn!(%answer, "Not a number");
                    self.say("That is not a number. Please enter a number.")?;
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn request_symbol_choice(&mut self) -> Result<Symbol, ConsoleError> {
        loop {
            let answer = self.ask("Choose the symbol of the first player (X or O): ")?;
            match answer.parse::<Symbol>() {
                Ok(symbol) => return Ok(symbol),
                Err(_) => self.say("Invalid choice. Please choose X or O.")?,
            }
        }
    }

    #[instrument(skip(self))]
    fn request_yes_no(&mut self) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.ask("Play again? (Y/N): ")?;
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter a valid choice.")?,
            }
        }
    }

    #[instrument(skip(self))]
    fn request_name(&mut self, label: &str) -> Result<String, ConsoleError> {
        self.ask(&format!("Enter the name of {label}: "))
    }

    #[instrument(skip(self))]
    fn request_coordinate(&mut self) -> Result<Coord, ConsoleError> {
        self.say("Row number:")?;
        let row = self.request_integer(0, 2)?;
        self.say("Column number:")?;
        let col = self.request_integer(0, 2)?;
        Ok(Coord::new(row as usize, col as usize))
    }
}

/// Writes session text, one block per call.
#[derive(Debug)]
pub struct ConsoleOutput<W> {
    writer: W,
}

impl ConsoleOutput<Stdout> {
    /// Writes to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// Creates an output over any writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the output and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for ConsoleOutput<W> {
    fn display(&mut self, text: &str) -> Result<(), ConsoleError> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }
}
