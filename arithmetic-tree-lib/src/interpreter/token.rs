use crate::interpreter::operator::BinaryOperator;
use std::convert::Infallible;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    LiteralInteger(i32),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    LeftParentheses,
    RightParentheses,
    /// Any atom that is not a valid part of an expression. Kept around so that
    /// the parsers can report exactly which token they choked on.
    Unrecognized(String),
}

impl Token {
    pub fn is_operator(&self) -> bool {
        self.as_operator().is_some()
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Token::LeftParentheses | Token::RightParentheses)
    }

    pub fn as_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::LiteralInteger(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
            Token::Unrecognized(text) => write!(f, "{}", text),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let token = match input {
            "+" => Token::Plus,
            "-" => Token::Dash,
            "*" => Token::Asterisk,
            "/" => Token::ForwardSlash,
            "(" => Token::LeftParentheses,
            ")" => Token::RightParentheses,
            input => parse_literal(input),
        };
        Ok(token)
    }
}

fn parse_literal(text: &str) -> Token {
    match text.parse::<i32>() {
        Ok(value) => Token::LiteralInteger(value),
        Err(_) => Token::Unrecognized(text.to_string()),
    }
}
