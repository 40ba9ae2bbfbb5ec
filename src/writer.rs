//! Output sinks for rendered canvases

use std::io::{self, Write};

/// Destination for the serialized canvas
pub trait Writer {
    fn write(&mut self, data: &str) -> io::Result<()>;
}

/// Writes the canvas followed by a run of blank lines
#[derive(Debug)]
pub struct ConsoleWriter<W: Write> {
    out: W,
    blank_lines: usize,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W, blank_lines: usize) -> Self {
        Self { out, blank_lines }
    }

    /// Consume the writer and hand back the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Writer for ConsoleWriter<W> {
    fn write(&mut self, data: &str) -> io::Result<()> {
        writeln!(self.out, "{data}")?;
        for _ in 0..self.blank_lines {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}
