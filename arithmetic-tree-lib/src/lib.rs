//! Parses whitespace-separated integer arithmetic into binary expression trees,
//! then evaluates, height-bounds and serializes them.

pub mod interpreter;

pub use interpreter::error::{EvaluationError, ParseError, SyntaxError};
pub use interpreter::parser::ParsingStrategy;
pub use interpreter::syntax::expression_tree::{ExpressionTree, Node};
