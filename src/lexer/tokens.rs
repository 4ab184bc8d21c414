use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        for keyword in Keyword::ALL {
            map.insert(keyword.as_str(), keyword);
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Class,
    Constructor,
    Function,
    Method,
    Field,
    Static,
    Var,
    Int,
    Char,
    Boolean,
    Void,
    True,
    False,
    Null,
    This,
    Let,
    Do,
    If,
    Else,
    While,
    Return,
}

impl Keyword {
    pub const ALL: [Keyword; 21] = [
        Keyword::Class,
        Keyword::Constructor,
        Keyword::Function,
        Keyword::Method,
        Keyword::Field,
        Keyword::Static,
        Keyword::Var,
        Keyword::Int,
        Keyword::Char,
        Keyword::Boolean,
        Keyword::Void,
        Keyword::True,
        Keyword::False,
        Keyword::Null,
        Keyword::This,
        Keyword::Let,
        Keyword::Do,
        Keyword::If,
        Keyword::Else,
        Keyword::While,
        Keyword::Return,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Class => "class",
            Keyword::Constructor => "constructor",
            Keyword::Function => "function",
            Keyword::Method => "method",
            Keyword::Field => "field",
            Keyword::Static => "static",
            Keyword::Var => "var",
            Keyword::Int => "int",
            Keyword::Char => "char",
            Keyword::Boolean => "boolean",
            Keyword::Void => "void",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::This => "this",
            Keyword::Let => "let",
            Keyword::Do => "do",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Return => "return",
        }
    }

    /// Exact, whole-word lookup. `classy` is not `class`.
    pub fn lookup(word: &str) -> Option<Keyword> {
        KEYWORD_LOOKUP.get(word).copied()
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Dot,
    Comma,
    Semicolon,
    Plus,
    Dash,
    Star,
    Slash,
    Ampersand,
    Pipe,
    Less,
    Greater,
    Assignment, // =
    Tilde,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Symbol> {
        let symbol = match c {
            '{' => Symbol::OpenCurly,
            '}' => Symbol::CloseCurly,
            '(' => Symbol::OpenParen,
            ')' => Symbol::CloseParen,
            '[' => Symbol::OpenBracket,
            ']' => Symbol::CloseBracket,
            '.' => Symbol::Dot,
            ',' => Symbol::Comma,
            ';' => Symbol::Semicolon,
            '+' => Symbol::Plus,
            '-' => Symbol::Dash,
            '*' => Symbol::Star,
            '/' => Symbol::Slash,
            '&' => Symbol::Ampersand,
            '|' => Symbol::Pipe,
            '<' => Symbol::Less,
            '>' => Symbol::Greater,
            '=' => Symbol::Assignment,
            '~' => Symbol::Tilde,
            _ => return None,
        };

        Some(symbol)
    }

    pub fn as_char(&self) -> char {
        match self {
            Symbol::OpenCurly => '{',
            Symbol::CloseCurly => '}',
            Symbol::OpenParen => '(',
            Symbol::CloseParen => ')',
            Symbol::OpenBracket => '[',
            Symbol::CloseBracket => ']',
            Symbol::Dot => '.',
            Symbol::Comma => ',',
            Symbol::Semicolon => ';',
            Symbol::Plus => '+',
            Symbol::Dash => '-',
            Symbol::Star => '*',
            Symbol::Slash => '/',
            Symbol::Ampersand => '&',
            Symbol::Pipe => '|',
            Symbol::Less => '<',
            Symbol::Greater => '>',
            Symbol::Assignment => '=',
            Symbol::Tilde => '~',
        }
    }

    pub fn is_symbol(c: char) -> bool {
        Symbol::from_char(c).is_some()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The kind of a token together with its payload. Each variant carries
/// exactly the value that kind needs.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Symbol(Symbol),
    IntegerConstant(u16),
    StringConstant(String),
    Identifier(String),
}

impl TokenKind {
    /// Markup tag used when the token is rendered.
    pub fn tag_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::IntegerConstant(_) => "integerConstant",
            TokenKind::StringConstant(_) => "stringConstant",
            TokenKind::Identifier(_) => "identifier",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(keyword) => write!(f, "Keyword({})", keyword),
            TokenKind::Symbol(symbol) => write!(f, "Symbol({})", symbol),
            TokenKind::IntegerConstant(value) => write!(f, "IntegerConstant({})", value),
            TokenKind::StringConstant(value) => write!(f, "StringConstant({})", value),
            TokenKind::Identifier(name) => write!(f, "Identifier({})", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Token {
    pub fn tag_name(&self) -> &'static str {
        self.kind.tag_name()
    }

    /// The raw payload as text, before any rendering escapes.
    pub fn value(&self) -> String {
        match &self.kind {
            TokenKind::Keyword(keyword) => keyword.as_str().to_string(),
            TokenKind::Symbol(symbol) => symbol.as_char().to_string(),
            TokenKind::IntegerConstant(value) => value.to_string(),
            TokenKind::StringConstant(value) | TokenKind::Identifier(value) => value.clone(),
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }
}
