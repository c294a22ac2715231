use super::{render, Context, Printable};
use crate::error;
use crate::lang::ast::{Expression, Statement};
use crate::lang::{Error, Line};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Line interpreter
///
/// Parses one line and executes its statement against the shared context.

pub struct Interpreter<'a> {
    line: &'a Line,
    context: &'a mut Context,
    printable: &'a mut Printable,
}

impl<'a> Interpreter<'a> {
    pub fn new(line: &'a Line, context: &'a mut Context, printable: &'a mut Printable) -> Self {
        Interpreter {
            line,
            context,
            printable,
        }
    }

    /// Returns the rendered value when the line was a `print`.
    pub fn run(mut self) -> Result<Option<String>> {
        if self.line.is_blank() {
            return Ok(None);
        }
        let statement = self.line.ast()?;
        self.execute(&statement)
    }

    fn execute(&mut self, statement: &Statement) -> Result<Option<String>> {
        match statement {
            Statement::Config(_, radix) => {
                self.context.set_radix(*radix);
                Ok(None)
            }
            Statement::Let(_, (_, var_name), expr) => {
                let value = self.evaluate(expr)?;
                self.context.store(var_name, value);
                Ok(None)
            }
            Statement::Print(col, expr) => {
                let value = self.evaluate(expr)?;
                let radix = match self.context.radix() {
                    Some(radix) => radix,
                    None => return Err(error!(UnconfiguredBase, ..col)),
                };
                let s = render(value, radix);
                debug!(output = %s, %radix, "print");
                self.printable.log(&[&s]);
                Ok(Some(s))
            }
            Statement::Empty => Ok(None),
        }
    }

    fn evaluate(&self, expr: &Expression) -> Result<f64> {
        use Expression::*;
        match expr {
            Integer(_, n) => Ok(*n),
            Var(col, var_name) => match self.context.fetch(var_name) {
                // zero and NaN read as undeclared
                Some(value) if value != 0.0 && !value.is_nan() => Ok(value),
                _ => Err(error!(UndeclaredVariable, ..col; var_name)),
            },
            Multiply(_, lhs, rhs) => Ok(self.evaluate(lhs)? * self.evaluate(rhs)?),
            Divide(_, lhs, rhs) => Ok(self.evaluate(lhs)? / self.evaluate(rhs)?),
            Add(_, lhs, rhs) => Ok(self.evaluate(lhs)? + self.evaluate(rhs)?),
            Subtract(_, lhs, rhs) => Ok(self.evaluate(lhs)? - self.evaluate(rhs)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ast::Radix;
    use crate::lang::ErrorCode;

    fn run_line(s: &str, context: &mut Context, printable: &mut Printable) -> Result<Option<String>> {
        let line = Line::new(s);
        Interpreter::new(&line, context, printable).run()
    }

    #[test]
    fn test_config_sets_radix() {
        let mut c = Context::new();
        let mut p = Printable::new();
        assert_eq!(run_line("config bin", &mut c, &mut p), Ok(None));
        assert_eq!(c.radix(), Some(Radix::Binary));
        assert!(p.is_empty());
    }

    #[test]
    fn test_print_exposes_output() {
        let mut c = Context::new();
        let mut p = Printable::new();
        c.set_radix(Radix::Hexadecimal);
        assert_eq!(
            run_line("print 16 * 16 - 1", &mut c, &mut p),
            Ok(Some("ff".to_string()))
        );
        assert_eq!(p.rows(), vec!["ff"]);
    }

    #[test]
    fn test_blank_line_is_a_no_op() {
        let mut c = Context::new();
        let mut p = Printable::new();
        assert_eq!(run_line(" \t ", &mut c, &mut p), Ok(None));
        assert_eq!(c.radix(), None);
        assert!(p.is_empty());
    }

    #[test]
    fn test_zero_reads_as_undeclared() {
        let mut c = Context::new();
        let mut p = Printable::new();
        c.set_radix(Radix::Decimal);
        run_line("z = 1 - 1", &mut c, &mut p).unwrap();
        assert_eq!(c.fetch("z"), Some(0.0));
        let e = run_line("print z", &mut c, &mut p).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndeclaredVariable);
        assert_eq!(e.column(), 6..7);
        assert!(p.is_empty());
    }

    #[test]
    fn test_failed_assignment_leaves_variable() {
        let mut c = Context::new();
        let mut p = Printable::new();
        run_line("x = 3", &mut c, &mut p).unwrap();
        assert!(run_line("x = x + nope", &mut c, &mut p).is_err());
        assert_eq!(c.fetch("x"), Some(3.0));
    }

    #[test]
    fn test_undeclared_before_unconfigured() {
        let mut c = Context::new();
        let mut p = Printable::new();
        let e = run_line("print y", &mut c, &mut p).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndeclaredVariable);
        let e = run_line("print 1", &mut c, &mut p).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnconfiguredBase);
        assert_eq!(e.column(), 0..5);
    }
}
