use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{syntax::grammar::DELIMITER, Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::Token;

lazy_static! {
    static ref DEFAULT_DELIMITER: Regex = delimiter_pattern(DELIMITER);
}

fn delimiter_pattern(delimiter: char) -> Regex {
    // An escaped literal always compiles
    Regex::new(&regex::escape(delimiter.encode_utf8(&mut [0; 4]))).unwrap()
}

#[derive(Clone)]
pub struct Lexer<'a> {
    pattern: Regex,
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, delimiter: char) -> Lexer<'a> {
        let pattern = if delimiter == DELIMITER {
            DEFAULT_DELIMITER.clone()
        } else {
            delimiter_pattern(delimiter)
        };

        Lexer {
            pattern,
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_to(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Byte range of the next delimiter, relative to the whole source.
    fn next_delimiter(&self) -> Option<(usize, usize)> {
        self.pattern
            .find(self.remainder())
            .map(|found| (self.pos + found.start(), self.pos + found.end()))
    }

    fn push_until(&mut self, end: usize) {
        let value = String::from(&self.source[self.pos..end]);
        let token = MK_TOKEN!(value, MK_SPAN!(self.pos, end));
        self.push(token);
    }
}

/// Splits `source` on every occurrence of `delimiter`, keeping empty tokens.
///
/// Tokenizing never fails: an input without the delimiter yields itself as the
/// only token, so the empty string yields a single empty token.
pub fn tokenize(source: &str, delimiter: char) -> Vec<Token> {
    let mut lex = Lexer::new(source, delimiter);

    while let Some((start, end)) = lex.next_delimiter() {
        lex.push_until(start);
        lex.advance_to(end);
    }

    lex.push_until(source.len());

    trace!("Tokenized {:?} into {} token(s)", source, lex.tokens.len());
    lex.tokens
}

/// Same as [`tokenize`], without spans.
pub fn split(source: &str, delimiter: char) -> Vec<String> {
    tokenize(source, delimiter)
        .into_iter()
        .map(Token::into_value)
        .collect()
}
