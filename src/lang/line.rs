use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::LineNumber;

#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        Line {
            number: None,
            tokens: lex(s),
        }
    }

    pub fn with_number(number: usize, s: &str) -> Line {
        Line {
            number: Some(number),
            tokens: lex(s),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    /// Tokens that take part in parsing, whitespace removed.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_whitespace())
    }

    pub fn is_blank(&self) -> bool {
        self.tokens().next().is_none()
    }

    pub fn ast(&self) -> Result<Statement, Error> {
        parse(&self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: String = self.tokens.iter().map(|s| s.to_string()).collect();
        match self.number {
            Some(number) => write!(f, "{} {}", number, s),
            None => write!(f, "{}", s),
        }
    }
}
