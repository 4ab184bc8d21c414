//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string constants
//! - Symbols
//! - Line and block comments
//! - Source positions
//! - Error cases
//! - The token stream contract

use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::{
    lexer::{tokenize, Lexer},
    preprocessor::{build, strip_line_comment},
    stream::TokenStream,
    tokens::{Keyword, Symbol, TokenKind},
};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.jack".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn error_kind(source: &str) -> ErrorImpl {
    tokenize(source, Some("test.jack".to_string()))
        .unwrap_err()
        .get_kind()
        .clone()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

#[test]
fn test_tokenize_keywords() {
    let source = Keyword::ALL
        .iter()
        .map(|keyword| keyword.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let expected = Keyword::ALL
        .iter()
        .map(|keyword| TokenKind::Keyword(*keyword))
        .collect::<Vec<_>>();

    assert_eq!(kinds(&source), expected);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = kinds("foo bar baz_123 _underscore CamelCase classy");

    assert_eq!(
        tokens,
        vec![
            ident("foo"),
            ident("bar"),
            ident("baz_123"),
            ident("_underscore"),
            ident("CamelCase"),
            ident("classy"),
        ]
    );
}

#[test]
fn test_keywords_need_exact_match() {
    assert_eq!(
        kinds("iff whiles Class returnx"),
        vec![ident("iff"), ident("whiles"), ident("Class"), ident("returnx")]
    );
}

#[test]
fn test_tokenize_integers() {
    assert_eq!(kinds("12345"), vec![TokenKind::IntegerConstant(12345)]);
    assert_eq!(kinds("007"), vec![TokenKind::IntegerConstant(7)]);
    assert_eq!(
        kinds("0 32767"),
        vec![TokenKind::IntegerConstant(0), TokenKind::IntegerConstant(32767)]
    );
}

#[test]
fn test_integer_out_of_range() {
    assert_eq!(
        error_kind("let x = 32768;"),
        ErrorImpl::IntegerOutOfRange {
            literal: "32768".to_string()
        }
    );
    assert_eq!(
        error_kind("99999999999999999999"),
        ErrorImpl::IntegerOutOfRange {
            literal: "99999999999999999999".to_string()
        }
    );
}

#[test]
fn test_tokenize_strings() {
    assert_eq!(
        kinds(r#""hello world""#),
        vec![TokenKind::StringConstant("hello world".to_string())]
    );
    assert_eq!(kinds(r#""""#), vec![TokenKind::StringConstant(String::new())]);
}

#[test]
fn test_string_content_is_unchanged() {
    assert_eq!(
        kinds(r#""  a+b; // not a comment  ""#),
        vec![TokenKind::StringConstant("  a+b; // not a comment  ".to_string())]
    );
}

#[test]
fn test_tokenize_symbols() {
    let source = "{ } ( ) [ ] . , ; + - * / & | < > = ~";
    let expected = source
        .split(' ')
        .map(|s| TokenKind::Symbol(Symbol::from_char(s.chars().next().unwrap()).unwrap()))
        .collect::<Vec<_>>();

    assert_eq!(expected.len(), 19);
    assert_eq!(kinds(source), expected);
}

#[test]
fn test_symbols_split_words() {
    assert_eq!(
        kinds("a.b(c)"),
        vec![
            ident("a"),
            TokenKind::Symbol(Symbol::Dot),
            ident("b"),
            TokenKind::Symbol(Symbol::OpenParen),
            ident("c"),
            TokenKind::Symbol(Symbol::CloseParen),
        ]
    );
}

#[test]
fn test_token_count_matches_items() {
    let source = "a b c d class ; ( ) while ~";

    assert_eq!(kinds(source).len(), source.split(' ').count());
}

#[test]
fn test_line_comment() {
    assert_eq!(kinds("// comment\nclass"), vec![TokenKind::Keyword(Keyword::Class)]);
}

#[test]
fn test_trailing_line_comment() {
    assert_eq!(
        kinds("let x = 5; // set x\nlet y"),
        vec![
            TokenKind::Keyword(Keyword::Let),
            ident("x"),
            TokenKind::Symbol(Symbol::Assignment),
            TokenKind::IntegerConstant(5),
            TokenKind::Symbol(Symbol::Semicolon),
            TokenKind::Keyword(Keyword::Let),
            ident("y"),
        ]
    );
}

#[test]
fn test_block_comment() {
    assert_eq!(
        kinds("/** doc\nmore\n*/\nclass"),
        vec![TokenKind::Keyword(Keyword::Class)]
    );
}

#[test]
fn test_plain_block_comment() {
    assert_eq!(
        kinds("/* note */\n  /*\n   * x\n   */\nlet"),
        vec![TokenKind::Keyword(Keyword::Let)]
    );
}

#[test]
fn test_unterminated_comment() {
    let error = tokenize("class\n  /** never closed\nlet x", Some("test.jack".to_string()))
        .unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedComment);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_comment_marker_inside_string() {
    assert_eq!(
        kinds(r#"do print("http://x"); // trailing"#),
        vec![
            TokenKind::Keyword(Keyword::Do),
            ident("print"),
            TokenKind::Symbol(Symbol::OpenParen),
            TokenKind::StringConstant("http://x".to_string()),
            TokenKind::Symbol(Symbol::CloseParen),
            TokenKind::Symbol(Symbol::Semicolon),
        ]
    );
}

#[test]
fn test_lines_never_merge() {
    assert_eq!(kinds("x\ny"), vec![ident("x"), ident("y")]);
    assert_eq!(
        kinds("12\n34"),
        vec![TokenKind::IntegerConstant(12), TokenKind::IntegerConstant(34)]
    );
}

#[test]
fn test_whitespace_handling() {
    assert_eq!(
        kinds("  let\tx   =\r\n 42  \n\n"),
        vec![
            TokenKind::Keyword(Keyword::Let),
            ident("x"),
            TokenKind::Symbol(Symbol::Assignment),
            TokenKind::IntegerConstant(42),
        ]
    );
}

#[test]
fn test_word_stops_at_quote() {
    assert_eq!(
        kinds(r#"x"s""#),
        vec![ident("x"), TokenKind::StringConstant("s".to_string())]
    );
}

#[test]
fn test_number_then_word() {
    assert_eq!(
        kinds("12abc"),
        vec![TokenKind::IntegerConstant(12), ident("abc")]
    );
}

#[test]
fn test_invalid_identifier() {
    let error = tokenize("let x = @;", Some("test.jack".to_string())).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidIdentifier {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_unterminated_string() {
    assert_eq!(error_kind(r#""unterminated"#), ErrorImpl::UnterminatedString);
}

#[test]
fn test_string_cannot_span_lines() {
    let error = tokenize("let s = \"abc\ndef\";", Some("test.jack".to_string())).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_lexer_stops_after_error() {
    let mut lexer = Lexer::new("class \"oops", None).unwrap();

    assert_eq!(
        lexer.next().unwrap().unwrap().kind,
        TokenKind::Keyword(Keyword::Class)
    );
    assert!(lexer.next().unwrap().is_err());
    assert!(!lexer.has_next());
    assert!(lexer.next().is_none());
    assert!(lexer.at_eof());
}

#[test]
fn test_has_next_ignores_trailing_delimiters() {
    let mut lexer = Lexer::new("class   \n\n   ", None).unwrap();

    assert!(lexer.has_next());
    lexer.next_token().unwrap();
    assert!(!lexer.has_next());
}

#[test]
fn test_next_token_at_end() {
    let mut lexer = Lexer::new("", None).unwrap();

    assert!(!lexer.has_next());
    assert_eq!(
        lexer.next_token().unwrap_err().get_kind(),
        &ErrorImpl::UnexpectedEndOfInput
    );
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("  class Main\n{\n   let x = 42;", Some("test.jack".to_string())).unwrap();

    assert_eq!((tokens[0].span.start.line, tokens[0].span.start.column), (1, 3));
    assert_eq!((tokens[0].span.end.line, tokens[0].span.end.column), (1, 8));
    assert_eq!((tokens[1].span.start.line, tokens[1].span.start.column), (1, 9));
    assert_eq!((tokens[2].span.start.line, tokens[2].span.start.column), (2, 1));
    assert_eq!((tokens[6].span.start.line, tokens[6].span.start.column), (3, 12));
    assert_eq!(tokens[6].span.start.file.as_str(), "test.jack");
}

#[test]
fn test_positions_after_block_comment() {
    let error = tokenize("/**\n * doc\n */\nclass Main {\n   let x = 99999;", None).unwrap_err();

    assert_eq!(error.get_error_name(), "IntegerOutOfRange");
    assert_eq!(error.get_position().line, 5);
    assert_eq!(error.get_position().column, 12);
}

#[test]
fn test_end_to_end_program() {
    let source = "// comment\n\
                  class Main {\n   \
                  function void main() {\n      \
                  let x = \"hi\";\n      \
                  return;\n   \
                  }\n\
                  }\n";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Keyword(Keyword::Class),
            ident("Main"),
            TokenKind::Symbol(Symbol::OpenCurly),
            TokenKind::Keyword(Keyword::Function),
            TokenKind::Keyword(Keyword::Void),
            ident("main"),
            TokenKind::Symbol(Symbol::OpenParen),
            TokenKind::Symbol(Symbol::CloseParen),
            TokenKind::Symbol(Symbol::OpenCurly),
            TokenKind::Keyword(Keyword::Let),
            ident("x"),
            TokenKind::Symbol(Symbol::Assignment),
            TokenKind::StringConstant("hi".to_string()),
            TokenKind::Symbol(Symbol::Semicolon),
            TokenKind::Keyword(Keyword::Return),
            TokenKind::Symbol(Symbol::Semicolon),
            TokenKind::Symbol(Symbol::CloseCurly),
            TokenKind::Symbol(Symbol::CloseCurly),
        ]
    );
}

#[test]
fn test_strip_line_comment() {
    assert_eq!(strip_line_comment("let x = 1; // c"), "let x = 1; ");
    assert_eq!(strip_line_comment(r#"do f("a//b"); // c"#), r#"do f("a//b"); "#);
    assert_eq!(strip_line_comment("// whole line"), "");
    assert_eq!(strip_line_comment("a / b"), "a / b");
}

#[test]
fn test_preprocessor_inserts_delimiters() {
    let buffer = build("class\nMain", Rc::new("test.jack".to_string())).unwrap();

    assert_eq!(buffer.text(), "class Main ");
    assert!(buffer.is_line_break(5));
    assert!(!buffer.is_line_break(2));
}

#[test]
fn test_preprocessor_drops_block_comments() {
    let file = Rc::new("test.jack".to_string());

    assert_eq!(build("a\n/**\n * x\n */\nb", file.clone()).unwrap().text(), "a b ");
    assert_eq!(build("/** one */\nclass", file).unwrap().text(), "class ");
}

#[test]
fn test_preprocessor_positions() {
    let buffer = build("  class\n\n    Main", Rc::new("test.jack".to_string())).unwrap();

    let main = buffer.position_at(7);
    assert_eq!((main.line, main.column), (3, 5));

    let s = buffer.position_at(2);
    assert_eq!((s.line, s.column), (1, 5));
}

#[test]
fn test_stream_contract() {
    let mut stream = TokenStream::new("class Main {}", None).unwrap();

    assert!(stream.has_more());
    assert_eq!(stream.current().unwrap_err().get_kind(), &ErrorImpl::NoCurrentToken);

    assert!(stream.advance().unwrap().is_keyword(Keyword::Class));
    assert!(stream.current().unwrap().is_keyword(Keyword::Class));
    assert_eq!(stream.peek().unwrap().kind, ident("Main"));

    stream.advance().unwrap();
    stream.advance().unwrap();
    stream.advance().unwrap();

    assert!(!stream.has_more());
    assert!(stream.current().unwrap().is_symbol(Symbol::CloseCurly));

    let error = stream.advance().unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedEndOfInput);
    assert!(error.is_contract_violation());
    assert!(stream.current().unwrap().is_symbol(Symbol::CloseCurly));
}

#[test]
fn test_stream_random_access_and_reset() {
    let mut stream = TokenStream::new("let x = 1;", None).unwrap();

    assert_eq!(stream.len(), 5);
    assert_eq!(stream.get(1).unwrap().kind, ident("x"));
    assert!(stream.get(5).is_none());

    while stream.has_more() {
        stream.advance().unwrap();
    }

    stream.reset();
    assert!(stream.current().is_err());
    assert!(stream.advance().unwrap().is_keyword(Keyword::Let));

    let tokens = stream.into_tokens();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[4].kind, TokenKind::Symbol(Symbol::Semicolon));
}

#[test]
fn test_stream_surfaces_input_errors() {
    let error = TokenStream::new("\"unterminated", None).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_empty_stream() {
    let mut stream = TokenStream::from_tokens(vec![], Rc::new("Empty.jack".to_string()));

    assert!(stream.is_empty());
    assert!(!stream.has_more());

    let error = stream.advance().unwrap_err();
    assert_eq!(error.get_position().file.as_str(), "Empty.jack");
}
