use crate::interpreter::error::{EvaluationError, ParseError, SyntaxError};
use crate::interpreter::lexer;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::parser::ParsingStrategy;
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, PostfixVisitor, PrefixVisitor, SyntaxVisitor,
};
use crate::interpreter::token::Token;
use crate::interpreter::tokens_to_string;
use log::debug;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    LiteralInteger(i32),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal_integer(value: i32) -> Node {
        Node::LiteralInteger(value)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    /// Computes the value of the subtree rooted at this node, children first.
    pub fn evaluate(&self) -> Result<i32, EvaluationError> {
        match self {
            Node::LiteralInteger(value) => Ok(*value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                let left = left_operand.evaluate()?;
                let right = right_operand.evaluate()?;
                operator.evaluate(left, right)
            }
        }
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn height(&self) -> usize {
        match self {
            Node::LiteralInteger(_) => 0,
            Node::BinaryOperation {
                left_operand,
                right_operand,
                ..
            } => 1 + left_operand.height().max(right_operand.height()),
        }
    }

    /// Replaces every subtree rooted `height` levels below this node with a leaf
    /// holding its value. The children of a replaced node are dropped.
    pub fn simplify(&mut self, height: usize) -> Result<(), EvaluationError> {
        if height == 0 {
            let value = self.evaluate()?;
            *self = Node::LiteralInteger(value);
            return Ok(());
        }

        if let Node::BinaryOperation {
            left_operand,
            right_operand,
            ..
        } = self
        {
            left_operand.simplify(height - 1)?;
            right_operand.simplify(height - 1)?;
        }
        Ok(())
    }

    pub fn to_prefix(&self) -> Vec<Token> {
        let mut visitor = PrefixVisitor::default();
        self.accept(&mut visitor);
        visitor.tokens
    }

    pub fn to_postfix(&self) -> Vec<Token> {
        let mut visitor = PostfixVisitor::default();
        self.accept(&mut visitor);
        visitor.tokens
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::LiteralInteger(value) => visitor.visit_literal_integer(*value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::LiteralInteger(value) => write!(f, "{}", value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => write!(f, "({} {:?} {:?})", operator, left_operand, right_operand),
        }
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal_integer(&mut self, value: i32) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
}

/// Generates an expression tree based off of the given tokens.
///
/// Operands are pushed onto a stack; each operator pops its right operand and
/// then its left operand and pushes the combined node back.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn new_tree(mut tokens: Vec<Token>) -> Result<Node, ParseError> {
    tokens.reverse();
    let mut operands: Vec<Node> = Vec::new();

    while let Some(token) = tokens.pop() {
        let operator = match token {
            Token::LiteralInteger(value) => {
                operands.push(Node::new_literal_integer(value));
                continue;
            }
            Token::LeftParentheses | Token::RightParentheses => {
                // There should not be any parenthesis present in postfix input.
                return Err(SyntaxError::MisplacedParenthesis(token).into());
            }
            Token::Unrecognized(_) => return Err(SyntaxError::InvalidFactor(token).into()),
            Token::Plus => BinaryOperator::Add,
            Token::Dash => BinaryOperator::Subtract,
            Token::Asterisk => BinaryOperator::Multiply,
            Token::ForwardSlash => BinaryOperator::Divide,
        };

        let available = operands.len();
        let node = match (operands.pop(), operands.pop()) {
            (Some(operand_two), Some(operand_one)) => {
                Node::new_binary_operation(operator, operand_one, operand_two)
            }
            _ => {
                return Err(ParseError::StackUnderflow {
                    operator,
                    available,
                })
            }
        };
        operands.push(node);
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(root), true) => Ok(root),
        (None, _) => Err(ParseError::MalformedResult(0)),
        (Some(_), false) => Err(ParseError::MalformedResult(operands.len() + 1)),
    }
}

/// A binary expression tree over integers, built from a whitespace-separated expression.
///
/// An empty tree (before the first successful [`parse`](ExpressionTree::parse)) evaluates
/// to `0` and serializes to empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpressionTree {
    root: Option<Node>,
    strategy: ParsingStrategy,
}

impl ExpressionTree {
    pub fn new() -> ExpressionTree {
        ExpressionTree::default()
    }

    pub fn with_strategy(strategy: ParsingStrategy) -> ExpressionTree {
        ExpressionTree {
            root: None,
            strategy,
        }
    }

    /// Builds a tree directly from a postfix (reverse Polish) expression, e.g. `"3 4 +"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arithmetic_tree::interpreter::syntax::expression_tree::ExpressionTree;
    ///
    /// let tree = ExpressionTree::from_postfix("3 4 +").unwrap();
    /// assert_eq!(tree.evaluate(), Ok(7));
    /// assert_eq!(tree.prefix(), "+ 3 4");
    /// ```
    pub fn from_postfix(line: &str) -> Result<ExpressionTree, ParseError> {
        let tokens = lexer::tokenize(line)?;
        let root = new_tree(tokens)?;
        debug!("built tree {:?} from postfix {:?}", root, line);
        Ok(ExpressionTree {
            root: Some(root),
            strategy: ParsingStrategy::default(),
        })
    }

    pub fn strategy(&self) -> ParsingStrategy {
        self.strategy
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Builds a new tree from an infix expression, replacing the current one.
    ///
    /// On failure the current tree is left as it was.
    ///
    /// # Arguments
    ///
    /// * `line`: The expression, with every token separated by whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use arithmetic_tree::interpreter::syntax::expression_tree::ExpressionTree;
    ///
    /// let mut tree = ExpressionTree::new();
    /// tree.parse("3 + 4 * 2").unwrap();
    /// assert_eq!(tree.evaluate(), Ok(11));
    /// assert_eq!(tree.postfix(), "3 4 2 * +");
    /// ```
    pub fn parse(&mut self, line: &str) -> Result<(), ParseError> {
        let tokens = lexer::tokenize(line)?;
        let root = self.strategy.parse(&tokens)?;
        self.root = Some(root);
        Ok(())
    }

    pub fn evaluate(&self) -> Result<i32, EvaluationError> {
        match &self.root {
            None => Ok(0),
            Some(root) => root.evaluate(),
        }
    }

    /// Collapses every subtree rooted at depth `height` into a leaf holding its value,
    /// leaving a tree of at most that height. Irreversible.
    ///
    /// Fails without modifying the tree if `height` is negative or if one of the
    /// collapsed subtrees can not be evaluated.
    pub fn simplify(&mut self, height: i32) -> Result<(), EvaluationError> {
        let depth =
            usize::try_from(height).map_err(|_| EvaluationError::NegativeHeight(height))?;

        if let Some(root) = &mut self.root {
            let mut simplified = root.clone();
            simplified.simplify(depth)?;
            debug!("simplified {:?} to height {} as {:?}", root, depth, simplified);
            *root = simplified;
        }
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    /// Pre-order tokens separated by single spaces, e.g. `"+ 3 * 4 2"`.
    pub fn prefix(&self) -> String {
        self.root
            .as_ref()
            .map(|root| tokens_to_string(&root.to_prefix()))
            .unwrap_or_default()
    }

    /// Post-order tokens separated by single spaces, e.g. `"3 4 2 * +"`.
    pub fn postfix(&self) -> String {
        self.root
            .as_ref()
            .map(|root| tokens_to_string(&root.to_postfix()))
            .unwrap_or_default()
    }
}

impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.root {
            None => Ok(()),
            Some(root) => Display::fmt(root, f),
        }
    }
}
