use crate::interpreter::error::{ParseError, SyntaxError};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::parser::unexpected_token;
use crate::interpreter::token::Token;
use log::trace;
use std::collections::VecDeque;

/// Reorders infix tokens into postfix (reverse Polish) order using the shunting-yard algorithm.
///
/// Operators of equal precedence are popped before the incoming one is pushed, which
/// makes all four operators left-associative. Parentheses never appear in the output.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to convert, in infix format.
///
/// returns: The same operands and operators in postfix order.
///
/// # Examples
///
/// ```
/// use arithmetic_tree::interpreter::lexer::tokenize;
/// use arithmetic_tree::interpreter::parser::infix_to_postfix;
/// use arithmetic_tree::interpreter::tokens_to_string;
///
/// let infix_tokens = tokenize("3 + 4 * 2").unwrap();
/// let postfix_tokens = infix_to_postfix(&infix_tokens).unwrap();
/// assert_eq!(tokens_to_string(&postfix_tokens), "3 4 2 * +");
/// ```
pub fn infix_to_postfix(infix_tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    // Front of the deque is the top of the stack.
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());
    let mut expect_operand = true;

    for token in infix_tokens {
        match token {
            Token::LiteralInteger(_) if expect_operand => {
                output.push(token.clone());
                expect_operand = false;
            }
            Token::LeftParentheses if expect_operand => operators.push_front(token.clone()),
            Token::RightParentheses if !expect_operand => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            Token::RightParentheses if operators.front() == Some(&Token::LeftParentheses) => {
                return Err(SyntaxError::EmptyParentheses.into())
            }
            _ if !expect_operand => match token.as_operator() {
                Some(operator) => {
                    parse_operator_token(&mut operators, &mut output, token, &operator);
                    expect_operand = true;
                }
                None => return Err(unexpected_token(token).into()),
            },
            _ => return Err(unexpected_token(token).into()),
        };
    }

    if expect_operand {
        return Err(match infix_tokens.last() {
            None => ParseError::EmptyInput,
            Some(last) if last.is_operator() => SyntaxError::DanglingOperator(last.clone()).into(),
            Some(_) => SyntaxError::UnmatchedParenthesis.into(),
        });
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    if output.iter().any(Token::is_parenthesis) {
        return Err(SyntaxError::UnmatchedParenthesis.into());
    }

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ParseError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(SyntaxError::UnmatchedParenthesis.into());
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ParseError> {
    loop {
        match operators.pop_front() {
            None => return Err(SyntaxError::UnmatchedParenthesis.into()),
            // Found the matching parenthesis, discard it.
            Some(Token::LeftParentheses) => return Ok(()),
            Some(operator) => {
                trace!("')' moves {} to output", operator);
                output.push(operator);
            }
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    token: &Token,
    operator: &BinaryOperator,
) {
    while let Some(other_operator_token) = operators.pop_front() {
        match other_operator_token.as_operator() {
            Some(other_operator) if other_operator.precedence_ge(operator) => {
                trace!("'{}' moves {} to output", operator, other_operator_token);
                output.push(other_operator_token);
            }
            _ => {
                // Parenthesis or weaker operator stays on the stack.
                operators.push_front(other_operator_token);
                break;
            }
        }
    }

    operators.push_front(token.clone());
}
