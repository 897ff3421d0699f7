use std::io::Write;

pub use token::{Literal, Token, TokenKind};

use crate::error::Reporter;

pub mod token;

pub struct Scanner<'source> {
    source: &'source str,
    tokens: Vec<Token<'source>>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source, reporting unexpected characters as it goes.
    ///
    /// Always ends with a single `Eof` token, whatever was reported.
    pub fn scan_tokens<W: Write>(mut self, reporter: &mut Reporter<W>) -> Vec<Token<'source>> {
        while !self.is_at_end() {
            self.start = self.current;
            #[cfg(feature = "debug_trace")]
            tracing::trace!(start = self.start, line = self.line, "scanning lexeme");
            self.scan_token(reporter);
        }
        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn scan_token<W: Write>(&mut self, reporter: &mut Reporter<W>) {
        let c = self.advance();
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
            '*' => TokenKind::Star,
            '!' => match self.is_match('=') {
                true => TokenKind::BangEqual,
                false => TokenKind::Bang,
            },
            '=' => match self.is_match('=') {
                true => TokenKind::EqualEqual,
                false => TokenKind::Equal,
            },
            '<' => match self.is_match('=') {
                true => TokenKind::LessEqual,
                false => TokenKind::Less,
            },
            '>' => match self.is_match('=') {
                true => TokenKind::GreaterEqual,
                false => TokenKind::Greater,
            },
            // already consumed by advance, so the scan still makes progress
            _ => {
                reporter.error(self.line, "Unexpected character.");
                return;
            }
        };
        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.peek().unwrap_or('\0');
        self.current += c.len_utf8();
        c
    }

    fn is_match(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(c) if c == expected => {
                self.current += c.len_utf8();
                true
            }
            Some(_) | None => false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn lexeme(&self) -> &'source str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.lexeme(), literal, self.line);
        self.tokens.push(token);
    }
}
