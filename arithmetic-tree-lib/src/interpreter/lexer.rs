use crate::interpreter::error::ParseError;
use crate::interpreter::token::Token;
use log::trace;

/// Splits an expression into tokens on runs of whitespace.
///
/// No validation of the individual tokens is done here; anything that is not
/// an integer, operator or parenthesis becomes [`Token::Unrecognized`] and is
/// rejected by the parser.
///
/// # Arguments
///
/// * `expression`: The text-representation of the expression, e.g. `"( 1 + 2 ) * 3"`.
///
/// returns: The tokens, in the order they appear in the expression.
///
/// # Examples
///
/// ```
/// use arithmetic_tree::interpreter::lexer::tokenize;
/// use arithmetic_tree::interpreter::token::Token;
///
/// let tokens = tokenize("3 + 4").unwrap();
/// assert_eq!(tokens, vec![Token::LiteralInteger(3), Token::Plus, Token::LiteralInteger(4)]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParseError> {
    let tokens: Vec<Token> = expression
        .split_whitespace()
        .map(|atom| match atom.parse::<Token>() {
            Ok(token) => token,
            Err(infallible) => match infallible {},
        })
        .collect();

    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    trace!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}
