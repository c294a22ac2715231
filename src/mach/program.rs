use super::{Context, Interpreter, Printable};
use crate::lang::{Error, Line};
use tracing::{debug, info};

/// ## Program driver
///
/// Source text split into lines. Lines that are exactly empty are dropped;
/// the rest keep their position in the source as their line number.

#[derive(Debug)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn new(source: &str) -> Program {
        Program {
            lines: source
                .split('\n')
                .enumerate()
                .filter(|(_, s)| !s.is_empty())
                .map(|(index, s)| Line::with_number(index + 1, s))
                .collect(),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Runs every line against a fresh context.
    pub fn run(&self, printable: &mut Printable) -> Result<(), Error> {
        self.run_in(&mut Context::new(), printable)
    }

    /// Runs every line against `context`. Stops at the first failing line;
    /// everything done before it stays done.
    pub fn run_in(&self, context: &mut Context, printable: &mut Printable) -> Result<(), Error> {
        info!(lines = self.lines.len(), "run");
        for line in &self.lines {
            debug!(line = %line, "execute");
            if let Err(error) = Interpreter::new(line, context, printable).run() {
                return Err(error.in_line_number(line.number()));
            }
        }
        Ok(())
    }
}
