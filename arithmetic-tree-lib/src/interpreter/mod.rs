pub mod error;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::parser::ParsingStrategy;
use crate::interpreter::syntax::expression_tree::ExpressionTree;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use itertools::Itertools;

/// Converts the given input string into an equivalent expression tree,
/// which is easier to manipulate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
/// * `strategy`: Which parser to build the tree with.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use arithmetic_tree::interpreter::convert;
/// use arithmetic_tree::interpreter::parser::ParsingStrategy;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert("( 3 + 4 ) * 2", ParsingStrategy::ShuntingYard)?;
/// assert_eq!(tree.prefix(), "* + 3 4 2");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str, strategy: ParsingStrategy) -> Result<ExpressionTree> {
    let mut tree = ExpressionTree::with_strategy(strategy);
    tree.parse(expression)
        .with_context(|| format!("could not parse expression {:?}", expression))?;
    Ok(tree)
}

/// Calculates the integer value of the given infix expression.
///
/// # Examples
///
/// ```
/// use arithmetic_tree::interpreter::evaluate;
/// use arithmetic_tree::interpreter::parser::ParsingStrategy;
///
/// let value = evaluate("3 + 4 * 2", ParsingStrategy::RecursiveDescent).unwrap();
/// assert_eq!(value, 11);
/// ```
pub fn evaluate(expression: &str, strategy: ParsingStrategy) -> Result<i32> {
    let tree = convert(expression, strategy)?;
    tree.evaluate()
        .with_context(|| format!("could not evaluate expression {:?}", expression))
}

/// Simplifies the given infix expression to the given tree height.
///
/// returns: The simplified tree, in postfix notation.
///
/// # Examples
///
/// ```
/// use arithmetic_tree::interpreter::simplify;
/// use arithmetic_tree::interpreter::parser::ParsingStrategy;
///
/// let simplified = simplify("1 + 2 * 3", 1, ParsingStrategy::RecursiveDescent).unwrap();
/// assert_eq!(simplified, "1 6 +");
/// ```
pub fn simplify(expression: &str, height: i32, strategy: ParsingStrategy) -> Result<String> {
    let mut tree = convert(expression, strategy)?;
    tree.simplify(height)
        .with_context(|| format!("could not simplify expression {:?}", expression))?;
    Ok(tree.postfix())
}

/// Joins tokens with single spaces, without leading or trailing whitespace.
///
/// # Examples
///
/// ```
/// use arithmetic_tree::interpreter::tokens_to_string;
/// use arithmetic_tree::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::LiteralInteger(3),
///     Token::LiteralInteger(4),
///     Token::Plus,
/// ];
/// assert_eq!(tokens_to_string(&tokens), "3 4 +");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
