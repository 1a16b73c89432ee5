use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use thiserror::Error;

/// Reasons an expression could not be turned into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty expression, can not parse")]
    EmptyInput,
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Stack underflow: '{operator}' needs two operands but only {available} were available")]
    StackUnderflow {
        operator: BinaryOperator,
        available: usize,
    },
    #[error("Malformed expression: expected exactly one tree root but found {0}")]
    MalformedResult(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("extra operator '{0}'")]
    DanglingOperator(Token),
    #[error("parenthesis '{0}' can not appear at that position")]
    MisplacedParenthesis(Token),
    #[error("not an integer: '{0}'")]
    InvalidFactor(Token),
    #[error("mismatched parenthesis")]
    UnmatchedParenthesis,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(Token),
    #[error("empty parentheses")]
    EmptyParentheses,
}

/// Failures while computing the value of a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i32 },
    #[error("Integer overflow: {left} {operator} {right}")]
    Overflow {
        operator: BinaryOperator,
        left: i32,
        right: i32,
    },
    #[error("Can not simplify to a negative height ({0})")]
    NegativeHeight(i32),
}
