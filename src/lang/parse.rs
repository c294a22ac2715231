use super::{ast::*, token::*, Column, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

pub fn parse(tokens: &[Token]) -> Result<Statement> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    tokens: Vec<(Column, &'a Token)>,
    pos: usize,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut end = 0;
        let mut significant = vec![];
        for token in tokens {
            let start = end;
            end += token.to_string().chars().count();
            if !token.is_whitespace() {
                significant.push((start..end, token));
            }
        }
        let mut parse = Parser {
            tokens: significant,
            pos: 0,
            col: end..end,
        };
        parse.statement()
    }

    /// Column of the most recently consumed token.
    fn column(&self) -> Column {
        self.col.clone()
    }

    /// Column of the next token, or the end of the line when there is none.
    fn peek_column(&self) -> Column {
        match self.tokens.get(self.pos) {
            Some((col, _)) => col.clone(),
            None => {
                let end = self.tokens.last().map_or(self.col.end, |(col, _)| col.end);
                end..end
            }
        }
    }

    fn peek(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset).map(|(_, t)| *t)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let (col, token) = self.tokens.get(self.pos)?;
        self.col = col.clone();
        self.pos += 1;
        Some(*token)
    }

    fn consume(&mut self, expected: &Token) -> Result<()> {
        match self.peek(0) {
            None => Err(error!(SyntaxError, ..&self.peek_column(); "CONSUMED PAST LAST TOKEN")),
            Some(t) if t == expected => {
                self.next();
                Ok(())
            }
            Some(_) => {
                let msg = format!("EXPECTED {}", expected);
                Err(error!(SyntaxError, ..&self.peek_column(); &msg))
            }
        }
    }

    fn statement(&mut self) -> Result<Statement> {
        let assign = Token::Operator(Operator::Equal);
        match self.peek(0) {
            Some(Token::Word(Word::Config)) => self.r#config(),
            Some(t) if t.ident().is_some() && self.peek(1) == Some(&assign) => self.r#let(),
            Some(Token::Word(Word::Print)) => self.r#print(),
            _ => Ok(Statement::Empty),
        }
    }

    fn r#config(&mut self) -> Result<Statement> {
        self.consume(&Token::Word(Word::Config))?;
        let column = self.column();
        let radix = match self.peek(0).and_then(Token::ident).and_then(Radix::from_keyword) {
            Some(radix) => radix,
            None => {
                return Err(error!(InvalidConfig, ..&self.peek_column();
                    "EXPECTED dec, hex OR bin"))
            }
        };
        self.next();
        Ok(Statement::Config(column, radix))
    }

    fn r#let(&mut self) -> Result<Statement> {
        let name = match self.next().and_then(Token::ident) {
            Some(name) => name.to_string(),
            None => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED IDENTIFIER")),
        };
        let column = self.column();
        self.consume(&Token::Operator(Operator::Equal))?;
        let expr = self.expression()?;
        Ok(Statement::Let(column.clone(), (column, name), expr))
    }

    fn r#print(&mut self) -> Result<Statement> {
        self.consume(&Token::Word(Word::Print))?;
        let column = self.column();
        Ok(Statement::Print(column, self.expression()?))
    }

    fn expression(&mut self) -> Result<Expression> {
        self.sum()
    }

    fn sum(&mut self) -> Result<Expression> {
        let mut lhs = self.product()?;
        loop {
            let op = match self.peek(0) {
                Some(Token::Operator(op)) if *op == Operator::Plus || *op == Operator::Minus => *op,
                _ => break,
            };
            self.next();
            let column = self.column();
            let rhs = self.product()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn product(&mut self) -> Result<Expression> {
        let mut lhs = self.primary()?;
        loop {
            let op = match self.peek(0) {
                Some(Token::Operator(op)) if *op == Operator::Multiply || *op == Operator::Divide => {
                    *op
                }
                _ => break,
            };
            self.next();
            let column = self.column();
            let rhs = self.primary()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn primary(&mut self) -> Result<Expression> {
        match self.peek(0) {
            Some(Token::Integer(s)) => {
                self.next();
                match s.parse::<f64>() {
                    Ok(n) => Ok(Expression::Integer(self.column(), n)),
                    Err(_) => Err(error!(SyntaxError, ..&self.column(); "INVALID INTEGER")),
                }
            }
            Some(Token::LParen) => {
                self.next();
                let expr = self.expression()?;
                match self.peek(0) {
                    Some(Token::RParen) => {
                        self.next();
                        Ok(expr)
                    }
                    _ => Err(error!(SyntaxError, ..&self.peek_column();
                        "EXPECTED RIGHT PARENTHESIS")),
                }
            }
            Some(t) => match t.ident() {
                Some(name) => {
                    self.next();
                    Ok(Expression::Var(self.column(), name.to_string()))
                }
                None => Err(self.expected_primary()),
            },
            None => Err(self.expected_primary()),
        }
    }

    fn expected_primary(&self) -> Error {
        error!(SyntaxError, ..&self.peek_column(); "EXPECTED INTEGER OR LEFT PARENTHESIS")
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        match op {
            Plus => Expression::Add(col, Box::new(lhs), Box::new(rhs)),
            Minus => Expression::Subtract(col, Box::new(lhs), Box::new(rhs)),
            Multiply => Expression::Multiply(col, Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(col, Box::new(lhs), Box::new(rhs)),
            Equal => unreachable!("assignment is not an arithmetic operator"),
        }
    }
}
