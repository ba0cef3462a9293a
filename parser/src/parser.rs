//! FILENAME: parser/src/parser.rs
//! PURPOSE: Precedence-climbing parser that converts a stream of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes the
//! token sequence from the Lexer and folds it into a binary expression tree.
//!
//! GRAMMAR:
//!   program    --> expression
//!   expression --> primary ( operator primary )*   (precedence climbing)
//!   primary    --> INT | FLOAT
//!
//! Each operator carries a binding strength; the climb loop folds operators
//! of equal strength left to right and lets tighter-binding runs claim the
//! right-hand side first, so "2+3*4" nests the multiplication on the right
//! while "2*3+4" folds the multiplication on the left.

use crate::ast::{BinaryOperator, Expression, Program};
use crate::lexer::{LexError, Lexer};
use crate::token::{Token, TokenKind};
use thiserror::Error;
use tracing::trace;

/// Parser errors. Every variant is fatal: the parse aborts with no partial
/// tree.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    /// The lexer rejected the raw input before parsing began. Only reachable
    /// when lexing with [`crate::lexer::UnknownCharPolicy::Reject`].
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The parser needed a numeric literal and found something else.
    #[error("expected a numeric literal, found '{0}'")]
    ExpectedNumber(Token),

    /// The parser needed a numeric literal and the token stream ended.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A numeric lexeme failed its conversion. Cannot happen for tokens the
    /// lexer produced; kept so hand-built token sequences fail cleanly.
    #[error("invalid numeric literal: {0}")]
    InvalidNumber(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength for each token kind. Higher binds tighter.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Precedence {
    /// Non-operator tokens and end of stream.
    Lowest,
    /// + and -
    Additive,
    /// * and /
    Multiplicative,
    /// Reserved for prefix operators.
    Prefix,
}

impl Precedence {
    /// Total mapping from token kind to binding strength.
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Addition | TokenKind::Subtraction => Precedence::Additive,
            TokenKind::Multiplication | TokenKind::Division => Precedence::Multiplicative,
            TokenKind::Int | TokenKind::Float => Precedence::Lowest,
        }
    }
}

/// The Parser owns the token sequence and a cursor over it. The cursor only
/// advances; there is no pushback.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    /// Parses the token sequence and returns the AST root.
    pub fn parse(&mut self) -> ParseResult<Program> {
        let first = self.parse_primary()?;
        let expression = self.parse_expression(first, Precedence::Lowest)?;

        Ok(Program {
            body: vec![expression],
        })
    }

    /// Returns the lookahead token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the lookahead token.
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position)?.clone();
        self.position += 1;
        Some(token)
    }

    /// Binding strength of the lookahead; `Lowest` at end of stream.
    fn peek_precedence(&self) -> Precedence {
        self.peek()
            .map_or(Precedence::Lowest, |token| Precedence::of(token.kind))
    }

    /// Parses a numeric literal, the only primary expression. Consumes
    /// exactly one token and fails on anything that is not Int or Float.
    ///
    /// The conversion is chosen once, from the token kind: Int lexemes go
    /// through integer parsing and are widened, Float lexemes go through
    /// float parsing. The token stream is not consulted again.
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let token = self.advance().ok_or(ParseError::UnexpectedEnd)?;

        match token.kind {
            TokenKind::Int => {
                let value = token
                    .lexeme
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidNumber(token.lexeme.clone()))?;
                Ok(Expression::NumberLiteral {
                    value: value as f64,
                })
            }
            TokenKind::Float => {
                let value = token
                    .lexeme
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber(token.lexeme.clone()))?;
                Ok(Expression::NumberLiteral { value })
            }
            _ => Err(ParseError::ExpectedNumber(token)),
        }
    }

    /// Folds operators into `lhs` while their binding strength stays at or
    /// above `minimum`. After consuming an operator and its primary, any run
    /// of strictly tighter-binding operators is absorbed into the right-hand
    /// side by recursing with the tighter strength as the new floor.
    fn parse_expression(
        &mut self,
        mut lhs: Expression,
        minimum: Precedence,
    ) -> ParseResult<Expression> {
        loop {
            let precedence = self.peek_precedence();
            if precedence == Precedence::Lowest || precedence < minimum {
                break;
            }

            // Only operator tokens carry a strength above Lowest, so the
            // lookahead maps directly to a binary operator.
            let operator = match self.peek().map(|token| token.kind) {
                Some(TokenKind::Addition) => BinaryOperator::Add,
                Some(TokenKind::Subtraction) => BinaryOperator::Subtract,
                Some(TokenKind::Multiplication) => BinaryOperator::Multiply,
                Some(TokenKind::Division) => BinaryOperator::Divide,
                _ => break,
            };
            self.advance();

            let mut rhs = self.parse_primary()?;

            while self.peek_precedence() > precedence {
                rhs = self.parse_expression(rhs, self.peek_precedence())?;
            }

            lhs = Expression::BinaryExpression {
                left: Box::new(lhs),
                right: Box::new(rhs),
                operator,
            };
        }

        Ok(lhs)
    }
}

/// Convenience function: lexes and parses an expression string in one call.
/// Uses the lexer's default policy of dropping unrecognized characters.
pub fn parse(input: &str) -> ParseResult<Program> {
    trace!(input, "parsing expression");

    let tokens = Lexer::new(input).tokenize()?;
    let mut parser = Parser::new(tokens);
    parser.parse()
}
