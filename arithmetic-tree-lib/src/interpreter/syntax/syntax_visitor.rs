use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// If a method is not implemented, the default implementation will continue in a
/// left-then-right traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_literal_integer(&mut self, _value: i32) {}
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand)
    }
}

pub(crate) fn walk_binary_operation(
    visitor: &mut impl SyntaxVisitor,
    left_operand: &Node,
    right_operand: &Node,
) {
    left_operand.accept(visitor);
    right_operand.accept(visitor);
}

/// Collects the tokens of a tree in pre-order (node, left, right).
#[derive(Default)]
pub(crate) struct PrefixVisitor {
    pub(crate) tokens: Vec<Token>,
}

impl SyntaxVisitor for PrefixVisitor {
    fn visit_literal_integer(&mut self, value: i32) {
        self.tokens.push(Token::LiteralInteger(value));
    }

    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.tokens.push(operator.token());
        walk_binary_operation(self, left_operand, right_operand);
    }
}

/// Collects the tokens of a tree in post-order (left, right, node).
#[derive(Default)]
pub(crate) struct PostfixVisitor {
    pub(crate) tokens: Vec<Token>,
}

impl SyntaxVisitor for PostfixVisitor {
    fn visit_literal_integer(&mut self, value: i32) {
        self.tokens.push(Token::LiteralInteger(value));
    }

    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand);
        self.tokens.push(operator.token());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_complex_tree() -> Node {
        // 1 + ((2 + 3) * 4)
        let one = Node::new_literal_integer(1);
        let two = Node::new_literal_integer(2);
        let three = Node::new_literal_integer(3);
        let four = Node::new_literal_integer(4);
        let second_plus = Node::new_binary_operation(BinaryOperator::Add, two, three);
        let star = Node::new_binary_operation(BinaryOperator::Multiply, second_plus, four);
        Node::new_binary_operation(BinaryOperator::Add, one, star)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_literal_integer(&mut self, value: i32) {
            self.prints.push(format!("{}", value))
        }
        fn visit_binary_operation(
            &mut self,
            operator: &BinaryOperator,
            left_operand: &Node,
            right_operand: &Node,
        ) {
            self.prints.push(format!("{:?}", operator));
            walk_binary_operation(self, left_operand, right_operand);
            self.prints.push(format!("exit {:?}", operator));
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            [
                "Add",
                "1",
                "Multiply",
                "Add",
                "2",
                "3",
                "exit Add",
                "4",
                "exit Multiply",
                "exit Add",
            ]
        )
    }

    #[test]
    fn prefix_visitor_collects_node_before_children() {
        let mut visitor = PrefixVisitor::default();
        create_complex_tree().accept(&mut visitor);
        assert_eq!(
            visitor.tokens,
            vec![
                Token::Plus,
                Token::LiteralInteger(1),
                Token::Asterisk,
                Token::Plus,
                Token::LiteralInteger(2),
                Token::LiteralInteger(3),
                Token::LiteralInteger(4),
            ]
        );
    }

    #[test]
    fn postfix_visitor_collects_children_before_node() {
        let mut visitor = PostfixVisitor::default();
        create_complex_tree().accept(&mut visitor);
        assert_eq!(
            visitor.tokens,
            vec![
                Token::LiteralInteger(1),
                Token::LiteralInteger(2),
                Token::LiteralInteger(3),
                Token::Plus,
                Token::LiteralInteger(4),
                Token::Asterisk,
                Token::Plus,
            ]
        );
    }
}
