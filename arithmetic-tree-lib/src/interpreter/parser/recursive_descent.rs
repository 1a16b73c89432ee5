use crate::interpreter::error::{ParseError, SyntaxError};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::parser::{check_boundaries, unexpected_token};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use log::trace;

/// Builds an expression tree by walking the grammar
///
/// ```text
/// E -> T (('+' | '-') T)*
/// T -> F (('*' | '/') F)*
/// F -> integer | '(' E ')'
/// ```
///
/// directly over the tokens. Same-precedence operators associate to the left.
pub(super) fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    expression(tokens)
}

/// Parses a complete expression. A parenthesised sub-expression is isolated
/// into its own slice and parsed through here as well, so every nesting level
/// gets the same boundary checks and must be consumed completely.
fn expression(tokens: &[Token]) -> Result<Node, ParseError> {
    check_boundaries(tokens)?;

    let mut parser = DescentParser {
        tokens,
        position: 0,
    };
    let root = parser.expression()?;

    match parser.peek() {
        None => Ok(root),
        Some(Token::RightParentheses) => Err(SyntaxError::UnmatchedParenthesis.into()),
        Some(token) => Err(unexpected_token(token).into()),
    }
}

/// Cursor over the tokens of one nesting level.
struct DescentParser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> DescentParser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// The operator at the cursor, if it belongs to the requested precedence level.
    fn peek_operator(&self, additive: bool) -> Option<BinaryOperator> {
        self.peek()
            .and_then(Token::as_operator)
            .filter(|operator| operator.is_additive() == additive)
    }

    fn expression(&mut self) -> Result<Node, ParseError> {
        let mut left = self.term()?;

        while let Some(operator) = self.peek_operator(true) {
            self.position += 1;
            let right = self.term()?;
            trace!("E: {:?} {} {:?}", left, operator, right);
            left = Node::new_binary_operation(operator, left, right);
        }

        Ok(left)
    }

    /// Stops at the first additive operator, which belongs to the enclosing expression.
    fn term(&mut self) -> Result<Node, ParseError> {
        let mut left = self.factor()?;

        while let Some(operator) = self.peek_operator(false) {
            self.position += 1;
            let right = self.factor()?;
            trace!("T: {:?} {} {:?}", left, operator, right);
            left = Node::new_binary_operation(operator, left, right);
        }

        Ok(left)
    }

    fn factor(&mut self) -> Result<Node, ParseError> {
        let start = self.position;
        match self.next() {
            Some(Token::LiteralInteger(value)) => Ok(Node::new_literal_integer(*value)),
            Some(Token::LeftParentheses) => {
                let end = find_matching_parenthesis(self.tokens, start)
                    .ok_or(SyntaxError::UnmatchedParenthesis)?;
                trace!("F: parenthesised tokens {}..={}", start, end);
                let inner = expression(&self.tokens[start + 1..end])?;
                self.position = end + 1;
                Ok(inner)
            }
            Some(token) => Err(unexpected_token(token).into()),
            None => Err(self.missing_operand()),
        }
    }

    fn missing_operand(&self) -> ParseError {
        match self.position.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(previous) if previous.is_operator() => {
                SyntaxError::DanglingOperator(previous.clone()).into()
            }
            _ => SyntaxError::EmptyParentheses.into(),
        }
    }
}

/// Finds the closing parenthesis matching the opening one at `open`, skipping
/// over any nested pairs.
///
/// returns: The index of the matching `)`, or `None` if the parentheses are unbalanced.
fn find_matching_parenthesis(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::LeftParentheses => depth += 1,
            Token::RightParentheses => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn parse_expression(expression: &str) -> Result<Node, ParseError> {
        parse(&tokenize(expression)?)
    }

    fn literal(value: i32) -> Node {
        Node::new_literal_integer(value)
    }

    #[test]
    fn outermost_boundaries_are_checked_by_descent_itself() {
        assert_eq!(
            parse_expression("+ 3 4").unwrap_err(),
            ParseError::Syntax(SyntaxError::DanglingOperator(Token::Plus))
        );
        assert_eq!(
            parse_expression("1 + 2 (").unwrap_err(),
            ParseError::Syntax(SyntaxError::MisplacedParenthesis(Token::LeftParentheses))
        );
    }

    #[test]
    fn single_literal_returns_leaf() {
        assert_eq!(parse_expression("42").unwrap(), literal(42));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        // 3 + (4 * 2)
        let expected = Node::new_binary_operation(
            BinaryOperator::Add,
            literal(3),
            Node::new_binary_operation(BinaryOperator::Multiply, literal(4), literal(2)),
        );

        assert_eq!(parse_expression("3 + 4 * 2").unwrap(), expected);
    }

    #[test]
    fn same_precedence_operators_associate_left() {
        // (1 - 2) - 3
        let expected = Node::new_binary_operation(
            BinaryOperator::Subtract,
            Node::new_binary_operation(BinaryOperator::Subtract, literal(1), literal(2)),
            literal(3),
        );

        assert_eq!(parse_expression("1 - 2 - 3").unwrap(), expected);
    }

    #[test]
    fn parentheses_override_precedence() {
        // (3 + 4) * 2
        let expected = Node::new_binary_operation(
            BinaryOperator::Multiply,
            Node::new_binary_operation(BinaryOperator::Add, literal(3), literal(4)),
            literal(2),
        );

        assert_eq!(parse_expression("( 3 + 4 ) * 2").unwrap(), expected);
    }

    #[test]
    fn term_after_parenthesised_factor_continues_the_expression() {
        // ((1 + 2) * 3) + 4
        let expected = Node::new_binary_operation(
            BinaryOperator::Add,
            Node::new_binary_operation(
                BinaryOperator::Multiply,
                Node::new_binary_operation(BinaryOperator::Add, literal(1), literal(2)),
                literal(3),
            ),
            literal(4),
        );

        assert_eq!(parse_expression("( 1 + 2 ) * 3 + 4").unwrap(), expected);
    }

    #[test]
    fn operator_inside_parentheses_is_dangling() {
        let error = parse_expression("( 1 + ) * 2").unwrap_err();
        assert_eq!(error, ParseError::Syntax(SyntaxError::DanglingOperator(Token::Plus)));
    }

    #[test]
    fn empty_parentheses_are_rejected() {
        let error = parse_expression("1 + ( )").unwrap_err();
        assert_eq!(error, ParseError::Syntax(SyntaxError::EmptyParentheses));
    }

    #[test]
    fn stray_closing_parenthesis_is_unmatched() {
        let error = parse_expression("1 + 2 ) * 3").unwrap_err();
        assert_eq!(error, ParseError::Syntax(SyntaxError::UnmatchedParenthesis));
    }

    #[test]
    fn consecutive_operators_are_unexpected() {
        let error = parse_expression("1 + * 2").unwrap_err();
        assert_eq!(error, ParseError::Syntax(SyntaxError::UnexpectedToken(Token::Asterisk)));
    }

    #[test]
    fn matching_parenthesis_skips_nested_pairs() {
        let tokens = tokenize("( 1 * ( 2 + 3 ) ) + 4").unwrap();
        assert_eq!(find_matching_parenthesis(&tokens, 0), Some(8));
        assert_eq!(find_matching_parenthesis(&tokens, 3), Some(7));
    }

    #[test]
    fn unbalanced_parenthesis_has_no_match() {
        let tokens = tokenize("( ( 1 )").unwrap();
        assert_eq!(find_matching_parenthesis(&tokens, 0), None);
    }
}
