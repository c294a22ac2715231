use super::token::*;

/// Splits a line into runs of whitespace and the tokens between them.
/// Whitespace is kept as a width so token columns can be recovered.
pub fn lex(s: &str) -> Vec<Token> {
    Lexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn whitespace(&mut self) -> Token {
        let mut len = 0;
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {
            len += 1;
        }
        Token::Whitespace(len)
    }

    fn fragment(&mut self) -> Token {
        let mut s = String::new();
        while let Some(ch) = self.chars.next_if(|c| !c.is_whitespace()) {
            s.push(ch);
        }
        Token::from_string(&s)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = self.chars.peek()?;
        if pk.is_whitespace() {
            return Some(self.whitespace());
        }
        Some(self.fragment())
    }
}
