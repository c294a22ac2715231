use crate::lang::ast::Radix;
use std::collections::HashMap;

/// ## Execution context
///
/// State carried from one line to the next during a single run.

#[derive(Debug, Default)]
pub struct Context {
    radix: Option<Radix>,
    vars: HashMap<String, f64>,
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    pub fn set_radix(&mut self, radix: Radix) {
        self.radix = Some(radix);
    }

    pub fn radix(&self) -> Option<Radix> {
        self.radix
    }

    pub fn store(&mut self, var_name: &str, value: f64) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.to_string(), value);
            }
        };
    }

    pub fn fetch(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).copied()
    }
}
