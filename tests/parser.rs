use intexpr::{
    BinaryOperator, Expr, ParseError, UnaryOperator,
    error::Remaining,
    parse,
};
use pretty_assertions::assert_eq;

/// Parses `source`, checks its rendering, then checks the rendering parses
/// back to the same tree.
fn assert_renders(source: &str, expected: &str) {
    let expr = parse(source).unwrap_or_else(|e| panic!("parsing {source:?}: {e}"));
    let rendered = expr.to_string();
    assert_eq!(rendered, expected, "rendering {source:?}");

    let reparsed =
        parse(&rendered).unwrap_or_else(|e| panic!("reparsing {rendered:?} from {source:?}: {e}"));
    assert_eq!(reparsed.to_string(), expected, "round trip of {source:?}");
    assert_eq!(reparsed, expr, "round trip tree of {source:?}");
}

fn assert_parse_error(source: &str, expected: &str) {
    match parse(source) {
        Ok(expr) => panic!("parsing {source:?} succeeded with {expr}"),
        Err(e) => assert_eq!(e.to_string(), expected, "error for {source:?}"),
    }
}

#[test]
fn singletons() {
    assert_renders("3", "3");
    assert_renders("x", "x");
    assert_renders("x_9", "x_9");
    assert_renders("_tmp", "_tmp");
    assert_renders("  42\t\n", "42");
}

#[test]
fn unary_operators() {
    assert_renders("-3", "(-3)");
    assert_renders("+3", "(+3)");
    assert_renders("!1", "(!1)");
    assert_renders("^1", "(^1)");
    assert_renders("--x", "(-(-x))");
    assert_renders("!-^+x", "(!(-(^(+x))))");
}

#[test]
fn binary_operators() {
    for op in ["*", "/", "%", "<<", ">>", "&", "&^", "+", "-", "|", "^", "==", "!=", "<",
               "<=", ">", ">=", "&&", "||"]
    {
        assert_renders(&format!("x {op} y"), &format!("(x {op} y)"));
        assert_renders(&format!("x{op}y"), &format!("(x {op} y)"));
    }
}

#[test]
fn logical_operators_fold_left() {
    assert_renders("x || y || z", "((x || y) || z)");
    assert_renders("x && y && z", "((x && y) && z)");
    assert_renders("x && y || z", "((x && y) || z)");
    assert_renders("x || y && z", "(x || (y && z))");
}

#[test]
fn comparisons_fold_left() {
    assert_renders("x == y == z", "((x == y) == z)");
    assert_renders("x != y != z", "((x != y) != z)");
    assert_renders("x > y > z", "((x > y) > z)");
    assert_renders("x >= y >= z", "((x >= y) >= z)");
    assert_renders("x < y < z", "((x < y) < z)");
    assert_renders("x <= y <= z", "((x <= y) <= z)");
}

#[test]
fn unary_binds_tighter_than_binary() {
    assert_renders("+x + y", "((+x) + y)");
    assert_renders("x + +y", "(x + (+y))");
    assert_renders("-x - y", "((-x) - y)");
    assert_renders("x - -y", "(x - (-y))");
    assert_renders("^x + y", "((^x) + y)");
    assert_renders("x + ^y", "(x + (^y))");
    assert_renders("!x + y", "((!x) + y)");
    assert_renders("x + !y", "(x + (!y))");
    assert_renders("+x * y", "((+x) * y)");
    assert_renders("x * +y", "(x * (+y))");
    assert_renders("^x * y", "((^x) * y)");
    assert_renders("x * ^y", "(x * (^y))");
    assert_renders("!x * y", "((!x) * y)");
    assert_renders("x * !y", "(x * (!y))");
}

#[test]
fn multiplicative_level_folds_left() {
    assert_renders("x * y * z", "((x * y) * z)");
    assert_renders("x * y / z", "((x * y) / z)");
    assert_renders("x / y * z", "((x / y) * z)");
    assert_renders("x % y / z", "((x % y) / z)");
    assert_renders("x / y % z", "((x / y) % z)");
    assert_renders("x >> y / z", "((x >> y) / z)");
    assert_renders("x / y >> z", "((x / y) >> z)");
    assert_renders("x << y / z", "((x << y) / z)");
    assert_renders("x / y << z", "((x / y) << z)");
    assert_renders("x & y / z", "((x & y) / z)");
    assert_renders("x / y & z", "((x / y) & z)");
    assert_renders("x &^ y / z", "((x &^ y) / z)");
    assert_renders("x / y &^ z", "((x / y) &^ z)");
}

#[test]
fn additive_level_folds_left() {
    assert_renders("x + y + z", "((x + y) + z)");
    assert_renders("x + y - z", "((x + y) - z)");
    assert_renders("x - y + z", "((x - y) + z)");
    assert_renders("x - y - z", "((x - y) - z)");
    assert_renders("x + y | z", "((x + y) | z)");
    assert_renders("x | y + z", "((x | y) + z)");
    assert_renders("x + y ^ z", "((x + y) ^ z)");
}

#[test]
fn precedence_between_levels() {
    assert_renders("x * y + z", "((x * y) + z)");
    assert_renders("x + y * z", "(x + (y * z))");
    assert_renders("x + y << z", "(x + (y << z))");
    assert_renders("x | y & z", "(x | (y & z))");
    assert_renders("(x < y && z < 3)", "((x < y) && (z < 3))");
    assert_renders("(x < y && z || 1)", "(((x < y) && z) || 1)");
    assert_renders("(u == v && x == y || w == z)",
                   "(((u == v) && (x == y)) || (w == z))");
    assert_renders("(u == v*3 && x == y-2 || w == !z)",
                   "(((u == (v * 3)) && (x == (y - 2))) || (w == (!z)))");
}

#[test]
fn parentheses_override_precedence() {
    assert_renders("(x + y) * z", "((x + y) * z)");
    assert_renders("x - (y - z)", "(x - (y - z))");
    assert_renders("((((x))))", "x");
    assert_renders("-(x + 1)", "(-(x + 1))");
}

#[test]
fn two_character_operators_win_over_prefixes() {
    assert_renders("x&^y", "(x &^ y)");
    assert_renders("x & ^y", "(x & (^y))");
    assert_renders("x&&y", "(x && y)");
    assert_renders("x<<y", "(x << y)");
    assert_renders("x<-1", "(x < (-1))");
    assert_renders("x!=!y", "(x != (!y))");
}

#[test]
fn tree_shape() {
    let expr = parse("a - b * -c").unwrap();
    let expected =
        Expr::binary(BinaryOperator::Sub,
                     Expr::Identifier("a".into()),
                     Expr::binary(BinaryOperator::Mul,
                                  Expr::Identifier("b".into()),
                                  Expr::unary(UnaryOperator::Negate, Expr::Identifier("c".into()))));
    assert_eq!(expr, expected);
    assert_eq!(expr.depth(), 4);
}

#[test]
fn large_literals() {
    assert_renders("18446744073709551615", "18446744073709551615");
    assert_eq!(parse("9223372036854775808").unwrap(),
               Expr::Number(9_223_372_036_854_775_808));
    assert_parse_error("18446744073709551616",
                       r#"literal too large at "18446744073709551616""#);
}

#[test]
fn from_str_matches_parse() {
    let expr: Expr = "x + 1".parse().unwrap();
    assert_eq!(expr, parse("x + 1").unwrap());
    assert!("x +".parse::<Expr>().is_err());
}

#[test]
fn malformed_input_is_rejected() {
    assert_parse_error("x x", r#"syntax error at "x""#);
    assert_parse_error("(x + ", "unexpected eof");
    assert_parse_error("(x + 1", "unclosed paren at eof");
    assert_parse_error("(x + 1))", r#"syntax error at ")""#);
    assert_parse_error("x + >4", r#"bad expression at ">4""#);
    assert_parse_error("x @ 4", r#"syntax error at "@ 4""#);
}

#[test]
fn more_malformed_input() {
    assert_parse_error("", "unexpected eof");
    assert_parse_error("   ", "unexpected eof");
    assert_parse_error("x = 1", r#"syntax error at "= 1""#);
    assert_parse_error("3x", r#"syntax error at "x""#);
    assert_parse_error("x ! y", r#"syntax error at "! y""#);
    assert_parse_error(")", r#"bad expression at ")""#);
    assert_parse_error("()", r#"bad expression at ")""#);
    assert_parse_error("(x y)", r#"unclosed paren at "y)""#);
    assert_parse_error("x * (y", "unclosed paren at eof");
    assert_parse_error("x +\t@", r#"bad expression at "@""#);
    assert_parse_error("x y\n", r#"syntax error at "y\n""#);
}

#[test]
fn errors_carry_offsets() {
    let err = parse("x + >4").unwrap_err();
    assert_eq!(err,
               ParseError::BadExpression { at: Remaining::Input { offset: 4,
                                                                  text:   ">4".into(), }, });
    assert_eq!(err.offset(), Some(4));

    let err = parse("(x + 1").unwrap_err();
    assert_eq!(err, ParseError::UnclosedParen { at: Remaining::Eof });
    assert_eq!(err.offset(), None);

    assert_eq!(parse("1 2 3").unwrap_err().offset(), Some(2));
    assert_eq!(ParseError::UnexpectedEndOfInput.offset(), None);
}
