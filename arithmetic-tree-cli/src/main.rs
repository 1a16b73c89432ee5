use anyhow::{Context, Result};
use arithmetic_tree::interpreter::parser::ParsingStrategy;
use arithmetic_tree::interpreter::syntax::expression_tree::ExpressionTree;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use log::info;

/// Parses, simplifies and evaluates integer arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression, with every token separated by a space, e.g. "( 3 + 4 ) * 2"
    expression: String,

    /// Which parser to build the expression tree with
    #[clap(short, long, value_enum, default_value = "descent")]
    parser: Strategy,

    /// Read the expression as postfix (reverse Polish) tokens, e.g. "3 4 +"
    #[clap(long, conflicts_with = "parser")]
    postfix_input: bool,

    /// Collapse every subtree below this height into its value before printing
    #[clap(short, long, allow_hyphen_values = true)]
    simplify: Option<i32>,

    /// Print the structure of the expression tree
    #[clap(short, long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Strategy {
    Descent,
    ShuntingYard,
}

impl From<Strategy> for ParsingStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Descent => ParsingStrategy::RecursiveDescent,
            Strategy::ShuntingYard => ParsingStrategy::ShuntingYard,
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut tree = build_tree(&args)?;
    info!("parsed expression of height {}", tree.height());

    if let Some(height) = args.simplify {
        tree.simplify(height)
            .with_context(|| format!("could not simplify to height {}", height))?;
        info!("simplified expression to height {}", tree.height());
    }

    if args.tree {
        print!("{}", tree);
    }
    println!("prefix:  {}", tree.prefix());
    println!("postfix: {}", tree.postfix());
    let value = tree.evaluate().context("could not evaluate expression")?;
    println!("value:   {}", value);

    Ok(())
}

fn build_tree(args: &Arguments) -> Result<ExpressionTree> {
    if args.postfix_input {
        return ExpressionTree::from_postfix(&args.expression)
            .with_context(|| format!("could not build tree from postfix {:?}", args.expression));
    }

    let mut tree = ExpressionTree::with_strategy(args.parser.into());
    tree.parse(&args.expression)
        .with_context(|| format!("could not parse expression {:?}", args.expression))?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_are_well_formed() {
        use clap::CommandFactory;
        Arguments::command().debug_assert();
    }

    #[test]
    fn shunting_yard_flag_selects_shunting_yard_parser() {
        let args =
            Arguments::try_parse_from(["arithmetic-tree", "-p", "shunting-yard", "1 + 2"]).unwrap();

        assert_eq!(ParsingStrategy::from(args.parser), ParsingStrategy::ShuntingYard);
    }

    #[test]
    fn negative_simplify_height_reaches_the_library() {
        let args =
            Arguments::try_parse_from(["arithmetic-tree", "--simplify", "-1", "1 + 2"]).unwrap();

        assert_eq!(args.simplify, Some(-1));
        let mut tree = build_tree(&args).unwrap();
        assert!(tree.simplify(-1).is_err());
    }

    #[test]
    fn postfix_input_builds_from_postfix() {
        let args =
            Arguments::try_parse_from(["arithmetic-tree", "--postfix-input", "3 4 +"]).unwrap();

        let tree = build_tree(&args).unwrap();

        assert_eq!(tree.prefix(), "+ 3 4");
    }

    #[test]
    fn postfix_input_cannot_be_combined_with_parser() {
        let result = Arguments::try_parse_from([
            "arithmetic-tree",
            "--postfix-input",
            "-p",
            "shunting-yard",
            "3 4 +",
        ]);

        assert!(result.is_err());
    }
}
