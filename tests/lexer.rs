use monkey::interpreter::{
    lexer::Lexer,
    token::{Token, TokenKind},
};

fn kinds(src: &str) -> Vec<TokenKind> {
    Lexer::new(src).map(|t| t.kind).collect()
}

fn assert_tokens(src: &str, expected: &[(TokenKind, &str)]) {
    let mut lexer = Lexer::new(src);
    for (i, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "token {i} of {src:?}");
        assert_eq!(token.literal, *literal, "token {i} of {src:?}");
    }
    assert_eq!(lexer.next_token().kind, TokenKind::Eof, "trailing tokens in {src:?}");
}

#[test]
fn single_character_symbols() {
    let cases = [("=", TokenKind::Assign),
                 ("+", TokenKind::Plus),
                 ("-", TokenKind::Minus),
                 ("!", TokenKind::Bang),
                 ("*", TokenKind::Asterisk),
                 ("/", TokenKind::Slash),
                 ("<", TokenKind::Lt),
                 (">", TokenKind::Gt),
                 (",", TokenKind::Comma),
                 (";", TokenKind::Semicolon),
                 ("(", TokenKind::LParen),
                 (")", TokenKind::RParen),
                 ("{", TokenKind::LBrace),
                 ("}", TokenKind::RBrace),
                 ("[", TokenKind::LBrace),
                 ("]", TokenKind::RBrace)];

    for (src, kind) in cases {
        assert_tokens(src, &[(kind, src)]);
    }
}

#[test]
fn two_character_operators_are_merged() {
    assert_tokens("==", &[(TokenKind::Eq, "==")]);
    assert_tokens("!=", &[(TokenKind::NotEq, "!=")]);
    assert_tokens("=a", &[(TokenKind::Assign, "="), (TokenKind::Identifier, "a")]);
    assert_tokens("!a", &[(TokenKind::Bang, "!"), (TokenKind::Identifier, "a")]);
    assert_tokens("= =", &[(TokenKind::Assign, "="), (TokenKind::Assign, "=")]);
}

#[test]
fn keywords_and_identifiers() {
    let keywords = [("let", TokenKind::Let),
                    ("fn", TokenKind::Function),
                    ("true", TokenKind::True),
                    ("false", TokenKind::False),
                    ("if", TokenKind::If),
                    ("else", TokenKind::Else),
                    ("return", TokenKind::Return)];

    for (src, kind) in keywords {
        assert_tokens(src, &[(kind, src)]);
    }

    for ident in ["foobar", "x", "_private", "lets", "iff", "Let", "return_"] {
        assert_tokens(ident, &[(TokenKind::Identifier, ident)]);
    }
}

#[test]
fn integers_and_signs() {
    assert_tokens("12345", &[(TokenKind::Int, "12345")]);
    assert_tokens("-5", &[(TokenKind::Minus, "-"), (TokenKind::Int, "5")]);
    assert_tokens("abc5", &[(TokenKind::Identifier, "abc"), (TokenKind::Int, "5")]);
}

#[test]
fn illegal_characters_become_tokens() {
    assert_tokens("@", &[(TokenKind::Illegal, "@")]);
    assert_tokens("a # b",
                  &[(TokenKind::Identifier, "a"), (TokenKind::Illegal, "#"), (TokenKind::Identifier, "b")]);
}

#[test]
fn end_of_input_is_sticky() {
    let mut lexer = Lexer::new("");
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token, Token::eof(1));
        assert!(token.literal.is_empty());
    }
}

#[test]
fn full_program() {
    let src = "let five = 5;\nlet add = fn(x, y) {\n  x + y;\n};\nif (5 < 10) { return true; } else { return false; }\n10 == 10; 10 != 9;";

    assert_eq!(kinds(src),
               vec![TokenKind::Let,
                    TokenKind::Identifier,
                    TokenKind::Assign,
                    TokenKind::Int,
                    TokenKind::Semicolon,
                    TokenKind::Let,
                    TokenKind::Identifier,
                    TokenKind::Assign,
                    TokenKind::Function,
                    TokenKind::LParen,
                    TokenKind::Identifier,
                    TokenKind::Comma,
                    TokenKind::Identifier,
                    TokenKind::RParen,
                    TokenKind::LBrace,
                    TokenKind::Identifier,
                    TokenKind::Plus,
                    TokenKind::Identifier,
                    TokenKind::Semicolon,
                    TokenKind::RBrace,
                    TokenKind::Semicolon,
                    TokenKind::If,
                    TokenKind::LParen,
                    TokenKind::Int,
                    TokenKind::Lt,
                    TokenKind::Int,
                    TokenKind::RParen,
                    TokenKind::LBrace,
                    TokenKind::Return,
                    TokenKind::True,
                    TokenKind::Semicolon,
                    TokenKind::RBrace,
                    TokenKind::Else,
                    TokenKind::LBrace,
                    TokenKind::Return,
                    TokenKind::False,
                    TokenKind::Semicolon,
                    TokenKind::RBrace,
                    TokenKind::Int,
                    TokenKind::Eq,
                    TokenKind::Int,
                    TokenKind::Semicolon,
                    TokenKind::Int,
                    TokenKind::NotEq,
                    TokenKind::Int,
                    TokenKind::Semicolon]);
}

#[test]
fn tokens_carry_their_line() {
    let lines: Vec<usize> = Lexer::new("let\n\nx\r\n=\t5").map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 3, 4, 4]);
}

#[test]
fn type_names() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
    assert_eq!(TokenKind::Assign.to_string(), "ASSIGN");
    assert_eq!(TokenKind::NotEq.to_string(), "NEQ");
    assert_eq!(TokenKind::Function.to_string(), "FN");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn words_classified_on_their_line() {
    let mut lexer = Lexer::new("\n\nreturn value");
    assert_eq!(lexer.next_token(), Token::from_literal("return", 3));
    assert_eq!(lexer.next_token(), Token::from_literal("value", 3));

    let token = Token::from_literal("fn", 7);
    assert_eq!((token.kind, token.literal.as_str(), token.line), (TokenKind::Function, "fn", 7));
}
