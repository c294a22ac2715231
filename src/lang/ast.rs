use super::Column;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

#[derive(Debug, PartialEq)]
pub enum Statement {
    Config(Column, Radix),
    Let(Column, (Column, String), Expression),
    Print(Column, Expression),
    Empty,
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(Column, f64),
    Var(Column, String),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
}

/// Output base selected by `config`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Radix {
    Decimal,
    Hexadecimal,
    Binary,
}

impl Radix {
    pub fn from_keyword(s: &str) -> Option<Radix> {
        match s {
            "dec" => Some(Radix::Decimal),
            "hex" => Some(Radix::Hexadecimal),
            "bin" => Some(Radix::Binary),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Radix::Decimal => "dec",
            Radix::Hexadecimal => "hex",
            Radix::Binary => "bin",
        }
    }

    pub fn base(&self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
            Radix::Binary => 2,
        }
    }
}

impl TryFrom<&str> for Radix {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Radix::from_keyword(s) {
            Some(radix) => Ok(radix),
            None => Err(error!(UnsupportedBase; s)),
        }
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
