//! Read-validate-apply-render loop

use std::io::{BufRead, Write};

use crate::canvas::{Canvas, Grid};
use crate::command::{Command, Keyword};
use crate::config::Config;
use crate::errors::Result;
use crate::executor::{CommandExecutor, SyncExecutor};
use crate::writer::{ConsoleWriter, Writer};

/// What the loop should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive drawing session
///
/// Owns the canvas exclusively; commands are applied strictly one at a time.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    writer: ConsoleWriter<W>,
    canvas: Grid,
    executor: SyncExecutor,
    prompt: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            writer: ConsoleWriter::new(output, config.blank_lines),
            canvas: Grid::new(),
            executor: SyncExecutor::new(),
            prompt: config.prompt,
        }
    }

    /// Run until QUIT or end of input
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(self.writer.get_mut(), "{}", self.prompt)?;
            self.writer.get_mut().flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                writeln!(self.writer.get_mut())?;
                return Ok(());
            }

            if self.handle_line(&line)? == Flow::Quit {
                tracing::info!("session finished");
                return Ok(());
            }
        }
    }

    /// Handle one raw input line.
    ///
    /// Command errors are reported to the output and leave the canvas as it
    /// was; only I/O failures are returned.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let command = Command::parse(line);
        match command.keyword() {
            Keyword::Unknown => {
                writeln!(self.writer.get_mut(), "Unknown command, please repeat")?;
                return Ok(Flow::Continue);
            }
            Keyword::Quit => return Ok(Flow::Quit),
            _ => {}
        }

        match self.executor.execute(&mut self.canvas, &command) {
            Ok(_) => self.writer.write(&self.canvas.serialize())?,
            Err(e) if e.is_recoverable() => {
                tracing::debug!(keyword = %command.keyword(), error = %e, "command rejected");
                writeln!(self.writer.get_mut(), "{e}\n")?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    pub fn canvas(&self) -> &Grid {
        &self.canvas
    }

    /// Consume the session and return the output sink
    pub fn into_output(self) -> W {
        self.writer.into_inner()
    }
}
