use tracing::{debug, trace};
use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location, Stream};
use winnow::token::{any, one_of, rest, take_till, take_while};

use crate::diagnostics::Reporter;
use crate::error::ScanError;
use crate::scanner::token::{Literal, Span, Token, TokenKind, keyword_kind};

type Input<'a> = LocatingSlice<&'a str>;

/// What a token rule recognised; the lexeme and position are filled in by the scanner.
type Lexed = (TokenKind, Option<Literal>);

/// Skip whitespace and `//` comments, returning the number of newlines consumed.
fn trivia(input: &mut Input<'_>) -> ModalResult<usize> {
    let mut newlines = 0;
    loop {
        let blank: &str = take_while(0.., [' ', '\t', '\r', '\n']).parse_next(input)?;
        newlines += blank.matches('\n').count();

        if input.starts_with("//") {
            take_till(0.., '\n').void().parse_next(input)?;
        } else if blank.is_empty() {
            break;
        }
    }
    Ok(newlines)
}

fn string_literal(input: &mut Input<'_>) -> ModalResult<Lexed> {
    '"'.parse_next(input)?;
    let body: &str = take_till(0.., '"').parse_next(input)?;
    // Running out of input here is an unterminated string, not a mismatch.
    cut_err('"').parse_next(input)?;
    Ok((TokenKind::String, Some(Literal::Str(body.to_string()))))
}

fn number_literal(input: &mut Input<'_>) -> ModalResult<Lexed> {
    // A '.' is only part of the number when a digit follows it.
    let value = (digit1, opt(('.', digit1)))
        .take()
        .try_map(str::parse::<f64>)
        .parse_next(input)?;
    Ok((TokenKind::Number, Some(Literal::Number(value))))
}

fn identifier_or_keyword(input: &mut Input<'_>) -> ModalResult<Lexed> {
    let text: &str = (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)?;
    Ok(match keyword_kind(text) {
        Some(kind) => (kind, None),
        None => (TokenKind::Identifier, Some(Literal::Str(text.to_string()))),
    })
}

fn two_char_token(input: &mut Input<'_>) -> ModalResult<Lexed> {
    let kind = alt((
        "!=".value(TokenKind::BangEqual),
        "==".value(TokenKind::EqualEqual),
        ">=".value(TokenKind::GreaterEqual),
        "<=".value(TokenKind::LessEqual),
    ))
    .parse_next(input)?;
    Ok((kind, None))
}

fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '-' => TokenKind::Minus,
        '+' => TokenKind::Plus,
        ';' => TokenKind::Semicolon,
        '/' => TokenKind::Slash,
        '*' => TokenKind::Star,
        '!' => TokenKind::Bang,
        '=' => TokenKind::Equal,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        _ => return None,
    };
    Some(kind)
}

fn single_char_token(input: &mut Input<'_>) -> ModalResult<Lexed> {
    let kind = any.verify_map(single_char_kind).parse_next(input)?;
    Ok((kind, None))
}

fn lex_token(input: &mut Input<'_>) -> ModalResult<Lexed> {
    alt((
        string_literal,
        number_literal,
        identifier_or_keyword,
        two_char_token,
        single_char_token,
    ))
    .parse_next(input)
}

/// Single forward pass over one source text.
///
/// Tokens are produced lazily and errors go to the reporter as the scan
/// reaches them, so reports interleave with tokens in source order. The
/// last item is always one `Eof` token.
pub struct Scanner<'src, 'r, R: Reporter + ?Sized> {
    source: &'src str,
    input: Input<'src>,
    line: usize,
    reporter: &'r mut R,
    tokens: usize,
    errors: usize,
    finished: bool,
}

impl<'src, 'r, R: Reporter + ?Sized> Scanner<'src, 'r, R> {
    pub fn new(source: &'src str, reporter: &'r mut R) -> Self {
        debug!(bytes = source.len(), "scan started");
        Self {
            source,
            input: LocatingSlice::new(source),
            line: 1,
            reporter,
            tokens: 0,
            errors: 0,
            finished: false,
        }
    }

    /// Current 1-based line of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    fn report(&mut self, error: ScanError) {
        debug!(line = error.line(), %error, "scan error");
        self.errors += 1;
        self.reporter.scan_error(error);
    }

    fn skip_trivia(&mut self) {
        if let Ok(newlines) = trivia(&mut self.input) {
            self.line += newlines;
        }
    }

    /// Scan from the cursor. `None` means something was consumed and
    /// reported without producing a token.
    fn scan_token(&mut self) -> Option<Token> {
        let start = self.input.current_token_start();
        let checkpoint = self.input.checkpoint();

        match lex_token(&mut self.input) {
            Ok((kind, literal)) => {
                let end = self.input.current_token_start();
                let lexeme = &self.source[start..end];
                let span = Span::new(start, end - start);
                let token = Token::new(kind, lexeme, literal, self.line, span);
                // Only string literals can contain newlines.
                self.line += lexeme.matches('\n').count();
                self.tokens += 1;
                trace!(kind = ?token.kind, lexeme = %token.lexeme, line = token.line, "token");
                Some(token)
            }
            Err(ErrMode::Cut(_)) => {
                self.input.reset(&checkpoint);
                let _ = rest::<_, ContextError>.parse_next(&mut self.input);
                let unterminated = &self.source[start..];
                self.line += unterminated.matches('\n').count();
                let span = Span::new(start, unterminated.len());
                self.report(ScanError::unterminated_string(self.line, span));
                None
            }
            Err(_) => {
                self.input.reset(&checkpoint);
                if let Ok(ch) = any::<_, ContextError>.parse_next(&mut self.input) {
                    let span = Span::new(start, ch.len_utf8());
                    self.report(ScanError::unexpected_character(ch, self.line, span));
                }
                None
            }
        }
    }
}

impl<R: Reporter + ?Sized> Iterator for Scanner<'_, '_, R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        loop {
            self.skip_trivia();
            if self.input.is_empty() {
                self.finished = true;
                debug!(
                    tokens = self.tokens,
                    errors = self.errors,
                    lines = self.line,
                    "scan finished"
                );
                return Some(Token::eof(self.line, self.source.len()));
            }
            if let Some(token) = self.scan_token() {
                return Some(token);
            }
        }
    }
}

/// Scan all tokens from source, sending every error to `reporter`.
///
/// Never fails: the returned tokens cover everything that scanned cleanly
/// and always end with `Eof`.
pub fn scan_tokens<R: Reporter + ?Sized>(source: &str, reporter: &mut R) -> Vec<Token> {
    Scanner::new(source, reporter).collect()
}
