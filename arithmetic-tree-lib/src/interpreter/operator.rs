use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Dash,
            BinaryOperator::Multiply => Token::Asterisk,
            BinaryOperator::Divide => Token::ForwardSlash,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Whether this operator belongs to the additive grammar level (`+`, `-`).
    pub(crate) fn is_additive(&self) -> bool {
        self.precedence() == 0
    }

    /// Applies the operator using integer arithmetic. Division truncates toward zero.
    pub fn evaluate(&self, a: i32, b: i32) -> Result<i32, EvaluationError> {
        let result = match self {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Subtract => a.checked_sub(b),
            BinaryOperator::Multiply => a.checked_mul(b),
            BinaryOperator::Divide => {
                if b == 0 {
                    return Err(EvaluationError::DivisionByZero { dividend: a });
                }
                a.checked_div(b)
            }
        };
        result.ok_or(EvaluationError::Overflow {
            operator: *self,
            left: a,
            right: b,
        })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_precedence_matches_table() {
        assert_eq!(BinaryOperator::Add.precedence(), 0);
        assert_eq!(BinaryOperator::Subtract.precedence(), 0);
        assert_eq!(BinaryOperator::Multiply.precedence(), 1);
        assert_eq!(BinaryOperator::Divide.precedence(), 1);
    }

    #[test]
    fn operator_ge_correspond_with_precedence() {
        let equal1 = BinaryOperator::Add;
        let equal2 = BinaryOperator::Subtract;
        assert!(equal1.precedence_ge(&equal2));
        assert!(!equal1.precedence_ge(&BinaryOperator::Divide));
    }

    #[parameterized(
        operator = {
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
            BinaryOperator::Divide
        },
        a = { 7, 7, 7, 7, -7 },
        b = { 2, 2, 2, 2, 2 },
        expected = { 9, 5, 14, 3, -3 }
    )]
    fn operator_evaluates_with_integer_arithmetic(
        operator: BinaryOperator,
        a: i32,
        b: i32,
        expected: i32,
    ) {
        assert_eq!(operator.evaluate(a, b).unwrap(), expected);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let result = BinaryOperator::Divide.evaluate(5, 0);
        assert_eq!(result, Err(EvaluationError::DivisionByZero { dividend: 5 }));
    }

    #[test]
    fn overflowing_multiplication_is_an_error() {
        let result = BinaryOperator::Multiply.evaluate(i32::MAX, 2);
        assert!(matches!(result, Err(EvaluationError::Overflow { .. })));
    }

    #[test]
    fn dividing_minimum_by_minus_one_overflows() {
        let result = BinaryOperator::Divide.evaluate(i32::MIN, -1);
        assert!(matches!(result, Err(EvaluationError::Overflow { .. })));
    }

    #[test]
    fn operator_displays_as_its_symbol() {
        assert_eq!(BinaryOperator::Subtract.to_string(), "-");
    }
}
