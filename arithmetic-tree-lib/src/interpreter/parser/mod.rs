mod infix_converter;
mod recursive_descent;

use crate::interpreter::error::{ParseError, SyntaxError};
use crate::interpreter::syntax::expression_tree;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use log::debug;

pub use infix_converter::infix_to_postfix;

/// The algorithm used to turn infix tokens into an expression tree.
///
/// Both strategies accept and reject the same inputs and build identically shaped trees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ParsingStrategy {
    /// Walks the `Expression -> Term -> Factor` grammar directly over the tokens.
    #[default]
    RecursiveDescent,
    /// Converts to postfix with the shunting-yard algorithm, then builds the tree
    /// from the postfix tokens with a stack.
    ShuntingYard,
}

impl ParsingStrategy {
    /// Parses the given tokens into an equivalent expression tree.
    ///
    /// # Arguments
    ///
    /// * `infix_tokens`: The tokens to parse, in infix format.
    ///
    /// returns: The root of the equivalent expression tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use arithmetic_tree::interpreter::parser::ParsingStrategy;
    /// use arithmetic_tree::interpreter::token::Token;
    ///
    /// let infix_tokens = vec![
    ///     Token::LiteralInteger(3),
    ///     Token::Plus,
    ///     Token::LiteralInteger(4),
    /// ];
    /// let root = ParsingStrategy::ShuntingYard.parse(&infix_tokens).unwrap();
    /// assert_eq!(root.evaluate(), Ok(7));
    /// ```
    pub fn parse(&self, infix_tokens: &[Token]) -> Result<Node, ParseError> {
        if infix_tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let root = match self {
            // Checks the boundaries of every nesting level itself.
            ParsingStrategy::RecursiveDescent => recursive_descent::parse(infix_tokens)?,
            ParsingStrategy::ShuntingYard => {
                check_boundaries(infix_tokens)?;
                let postfix_tokens = infix_to_postfix(infix_tokens)?;
                debug!("postfix tokens: {:?}", postfix_tokens);
                expression_tree::new_tree(postfix_tokens)?
            }
        };
        debug!("{:?} built tree {:?}", self, root);
        Ok(root)
    }
}

/// Rejects expressions that start or end with an operator, start with a
/// closing parenthesis or end with an opening one.
pub(crate) fn check_boundaries(tokens: &[Token]) -> Result<(), ParseError> {
    let (first, last) = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ParseError::Syntax(SyntaxError::EmptyParentheses)),
    };

    if first.is_operator() {
        return Err(ParseError::Syntax(SyntaxError::DanglingOperator(first.clone())));
    }
    if last.is_operator() {
        return Err(ParseError::Syntax(SyntaxError::DanglingOperator(last.clone())));
    }
    if *first == Token::RightParentheses {
        return Err(ParseError::Syntax(SyntaxError::MisplacedParenthesis(first.clone())));
    }
    if *last == Token::LeftParentheses {
        return Err(ParseError::Syntax(SyntaxError::MisplacedParenthesis(last.clone())));
    }
    Ok(())
}

/// The error for a token showing up where the grammar does not allow it.
pub(crate) fn unexpected_token(token: &Token) -> SyntaxError {
    match token {
        Token::Unrecognized(_) => SyntaxError::InvalidFactor(token.clone()),
        _ => SyntaxError::UnexpectedToken(token.clone()),
    }
}
