use logos::Logos;

/// The type of a lexical token.
///
/// Keyword variants (`Function`, `Let`, `True`, `False`, `If`, `Else`,
/// `Return`) carry no pattern of their own: every letter run is matched as an
/// identifier and then classified once through [`TokenKind::lookup_ident`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r]+")]
pub enum TokenKind {
    /// A character that starts no known token.
    Illegal,
    /// End of input.
    Eof,
    /// Identifier tokens such as `x` or `add_two`.
    #[regex(r"[a-zA-Z_]+", |lex| TokenKind::lookup_ident(lex.slice()))]
    Identifier,
    /// Integer literal tokens such as `42`. The sign is a separate token.
    #[regex(r"[0-9]+")]
    Int,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{` or its substitute `[`
    #[token("{")]
    #[token("[")]
    LBrace,
    /// `}` or its substitute `]`
    #[token("}")]
    #[token("]")]
    RBrace,
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,

    /// Line breaks. Never emitted; only bumps the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

impl TokenKind {
    /// Classifies a run of letters as a keyword or an identifier.
    ///
    /// Matching is exact: `lettuce` is an identifier, `let` is a keyword.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::lookup_ident("fn"), TokenKind::Function);
    /// assert_eq!(TokenKind::lookup_ident("return"), TokenKind::Return);
    /// assert_eq!(TokenKind::lookup_ident("returned"), TokenKind::Identifier);
    /// ```
    #[must_use]
    pub fn lookup_ident(ident: &str) -> Self {
        match ident {
            "fn" => Self::Function,
            "let" => Self::Let,
            "true" => Self::True,
            "false" => Self::False,
            "if" => Self::If,
            "else" => Self::Else,
            "return" => Self::Return,
            _ => Self::Identifier,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Identifier => "IDENTIFIER",
            Self::Int => "INT",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NEQ",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Function => "FN",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::NewLine => "NEWLINE",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: its type, the exact source text it was built from, and
/// the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token type.
    pub kind:    TokenKind,
    /// The exact source substring, e.g. `==` or `foobar`. Empty for `Eof`.
    pub literal: String,
    /// The source line where the token starts.
    pub line:    usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }

    /// Creates a token from a word found on `line`, classifying it as keyword
    /// or identifier.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::token::{Token, TokenKind};
    ///
    /// assert_eq!(Token::from_literal("let", 1).kind, TokenKind::Let);
    ///
    /// let ident = Token::from_literal("x", 3);
    /// assert_eq!(ident.kind, TokenKind::Identifier);
    /// assert_eq!(ident.line, 3);
    /// ```
    #[must_use]
    pub fn from_literal(literal: &str, line: usize) -> Self {
        Self::new(TokenKind::lookup_ident(literal), literal, line)
    }

    /// The end-of-input token for the given line.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               literal: String::new(),
               line }
    }

    /// Returns `true` if this token has the given type.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
