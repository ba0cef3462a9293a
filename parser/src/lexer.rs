//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. It handles
//! whitespace skipping, number scanning, and the four single-character
//! operators. Characters outside that alphabet go through a configurable
//! policy: dropped (the default) or rejected.
//!
//! SUPPORTED INPUT:
//! - Digits and at most one decimal point per literal: 42, 3.5, .5
//! - Operators: + - * /
//! - Whitespace between tokens

use crate::token::{Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;
use tracing::debug;

/// Lexer errors. Only produced under [`UnknownCharPolicy::Reject`]; the
/// default policy makes the lexer total over any input string.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum LexError {
    #[error("unrecognized character: {0:?}")]
    UnrecognizedCharacter(char),
}

/// What the lexer does with a character it does not recognize.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum UnknownCharPolicy {
    /// Drop the character and keep scanning.
    Skip,
    /// Stop and report the first offending character.
    Reject,
}

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    policy: UnknownCharPolicy,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default policy of dropping unknown characters.
    pub fn new(input: &'a str) -> Self {
        Lexer::with_policy(input, UnknownCharPolicy::Skip)
    }

    pub fn with_policy(input: &'a str, policy: UnknownCharPolicy) -> Self {
        Lexer {
            input: input.chars().peekable(),
            policy,
        }
    }

    /// Advances the lexer and returns the next token, or `None` once the
    /// input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            self.skip_whitespace();

            let Some(ch) = self.input.next() else {
                return Ok(None);
            };

            match ch {
                '+' => return Ok(Some(Token::new(TokenKind::Addition, "+"))),
                '-' => return Ok(Some(Token::new(TokenKind::Subtraction, "-"))),
                '*' => return Ok(Some(Token::new(TokenKind::Multiplication, "*"))),
                '/' => return Ok(Some(Token::new(TokenKind::Division, "/"))),

                // Numbers (start with a digit or a dot)
                ch if ch.is_ascii_digit() || ch == '.' => {
                    if let Some(token) = self.read_number(ch) {
                        return Ok(Some(token));
                    }
                    // A lone '.' scans to a literal with no digits; route it
                    // through the unknown-character policy.
                    match self.policy {
                        UnknownCharPolicy::Skip => {
                            debug!(character = ?ch, "dropping unrecognized character");
                        }
                        UnknownCharPolicy::Reject => {
                            return Err(LexError::UnrecognizedCharacter(ch));
                        }
                    }
                }

                other => match self.policy {
                    UnknownCharPolicy::Skip => {
                        debug!(character = ?other, "dropping unrecognized character");
                    }
                    UnknownCharPolicy::Reject => {
                        return Err(LexError::UnrecognizedCharacter(other));
                    }
                },
            }
        }
    }

    /// Consumes the lexer and collects every remaining token in order.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Scans a numeric literal starting at `first_char`. A second decimal
    /// point terminates the literal. Returns `None` when the scan produced
    /// no digits at all (a lone decimal point).
    fn read_number(&mut self, first_char: char) -> Option<Token> {
        let mut lexeme = String::from(first_char);
        let mut has_dot = first_char == '.';
        let mut has_digit = first_char.is_ascii_digit();

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() {
                has_digit = true;
                lexeme.push(ch);
                self.input.next();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                lexeme.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        if !has_digit {
            return None;
        }

        let kind = if has_dot {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Some(Token::new(kind, lexeme))
    }
}
