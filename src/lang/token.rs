#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Integer(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
}

/// `-?[0-9]+`
pub fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// `[A-Za-z][A-Za-z0-9]*`
pub fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

impl Token {
    /// Classifies one whitespace-free fragment of source text.
    pub fn from_string(s: &str) -> Token {
        if let Some(word) = Word::from_string(s) {
            return Token::Word(word);
        }
        if let Some(op) = Operator::from_string(s) {
            return Token::Operator(op);
        }
        match s {
            "(" => Token::LParen,
            ")" => Token::RParen,
            _ if is_integer(s) => Token::Integer(s.to_string()),
            _ if is_ident(s) => Token::Ident(s.to_string()),
            _ => Token::Unknown(s.to_string()),
        }
    }

    /// Keywords are only reserved in the leading position of a statement.
    /// Everywhere else they name variables like any other identifier.
    pub fn ident(&self) -> Option<&str> {
        match self {
            Token::Ident(s) => Some(s.as_str()),
            Token::Word(w) => Some(w.as_str()),
            _ => None,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = *u),
            Integer(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Config,
    Print,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        match s {
            "config" => Some(Word::Config),
            "print" => Some(Word::Print),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Word::Config => "config",
            Word::Print => "print",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
}

impl Operator {
    pub fn from_string(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "+" => Some(Plus),
            "-" => Some(Minus),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "=" => Some(Equal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(Token::from_string("print"), Token::Word(Word::Print));
        assert_eq!(Token::from_string("PRINT"), Token::Ident("PRINT".to_string()));
        assert_eq!(Token::from_string("-"), Token::Operator(Operator::Minus));
        assert_eq!(Token::from_string("-12"), Token::Integer("-12".to_string()));
        assert_eq!(Token::from_string("x1"), Token::Ident("x1".to_string()));
        assert_eq!(Token::from_string("1x"), Token::Unknown("1x".to_string()));
        assert_eq!(Token::from_string("2+3"), Token::Unknown("2+3".to_string()));
        assert_eq!(Token::from_string("("), Token::LParen);
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("-007"));
        assert!(!is_integer("-"));
        assert!(!is_integer("--1"));
        assert!(!is_integer("+1"));
        assert!(!is_integer("1.5"));
    }

    #[test]
    fn test_is_ident() {
        assert!(is_ident("a"));
        assert!(is_ident("Total2"));
        assert!(!is_ident("2x"));
        assert!(!is_ident("my_var"));
        assert!(!is_ident(""));
    }

    #[test]
    fn test_words_are_idents() {
        assert_eq!(Token::from_string("config").ident(), Some("config"));
        assert_eq!(Token::from_string("hex").ident(), Some("hex"));
        assert_eq!(Token::from_string("=").ident(), None);
    }
}
