//! FILENAME: parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for arithmetic expressions.
//! CONTEXT: After the Lexer tokenizes an expression string, the Parser converts
//! those tokens into this tree structure. A downstream evaluator or compiler
//! traverses the tree; this crate only builds it.
//!
//! SUPPORTED EXPRESSIONS:
//! - Number literals: 42, 3.5
//! - Binary operations: +, -, *, /

use serde::{Deserialize, Serialize};

/// A parsed expression node.
///
/// Each node exclusively owns its children; the parser builds the tree
/// bottom-up and never shares or cycles subtrees.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Expression {
    /// A numeric literal. Integer and decimal source literals both land here;
    /// the parser picks the conversion from the token kind.
    NumberLiteral { value: f64 },

    /// A binary operation: left op right (e.g., 2 + 3).
    BinaryExpression {
        left: Box<Expression>,
        right: Box<Expression>,
        operator: BinaryOperator,
    },

    /// Reserved for prefix operators. No parse path constructs this today;
    /// the shape mirrors `BinaryExpression` so a future prefix tier can fill
    /// it in without reshaping the tree.
    UnaryExpression {
        left: Box<Expression>,
        right: Box<Expression>,
        operator: UnaryOperator,
    },
}

/// The root node. `body` holds exactly one expression per parse, though the
/// shape permits more.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Expression>,
}

/// Binary operators, one per operator token.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
}

/// Unary operators. Reserved alongside `Expression::UnaryExpression`.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum UnaryOperator {
    Negate, // -
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
        }
    }
}
