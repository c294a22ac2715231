use super::{Context, Printable, Program};
use crate::lang::ast::Radix;
use crate::lang::Error;
use tracing::warn;

/// ## Runtime
///
/// What a host talks to: run whole scripts, read back printed rows, clear
/// them. Output is kept between runs until `clear_output` is called.

#[derive(Debug, Default)]
pub struct Runtime {
    printable: Printable,
    radix: Option<Radix>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn with_printable(printable: Printable) -> Runtime {
        Runtime {
            printable,
            radix: None,
        }
    }

    /// Base in effect before a script's first `config`.
    pub fn set_default_radix(&mut self, radix: Option<Radix>) {
        self.radix = radix;
    }

    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        let program = Program::new(source);
        let mut context = Context::new();
        if let Some(radix) = self.radix {
            context.set_radix(radix);
        }
        let result = program.run_in(&mut context, &mut self.printable);
        if let Err(error) = &result {
            warn!(%error, "run aborted");
        }
        result
    }

    pub fn output_rows(&self) -> Vec<String> {
        self.printable.rows()
    }

    pub fn clear_output(&mut self) {
        self.printable.clear();
    }

    pub fn printable(&self) -> &Printable {
        &self.printable
    }

    pub fn into_printable(self) -> Printable {
        self.printable
    }
}
