//! Expression parser tests

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("a + b * c", "(+ a (* b c))" ; "multiplication binds tighter")]
#[test_case("(a + b) * c", "(* (+ a b) c)" ; "parentheses group")]
#[test_case("a * b + c * d", "(+ (* a b) (* c d))" ; "two products")]
#[test_case("a < b == c > d", "(> (== (< a b) c) d)" ; "comparisons share one level")]
#[test_case("a + 1 <= b - 1", "(<= (+ a 1) (- b 1))" ; "arithmetic inside comparison")]
#[test_case("x = a + b", "(= x (+ a b))" ; "assignment binds loosest")]
fn test_precedence(source: &str, expected: &str) {
    assert_eq!(sexpr(&parse_expr(source)), expected);
}

#[test_case("a - b - c", "(- (- a b) c)" ; "subtraction")]
#[test_case("a / b / c", "(/ (/ a b) c)" ; "division")]
#[test_case("a != b != c", "(!= (!= a b) c)" ; "inequality")]
#[test_case("a = b = c", "(= a (= b c))" ; "assignment is right associative")]
#[test_case("a += b -= 1", "(+= a (-= b 1))" ; "compound assignments")]
fn test_associativity(source: &str, expected: &str) {
    assert_eq!(sexpr(&parse_expr(source)), expected);
}

#[test]
fn test_unary_operators() {
    assert_eq!(sexpr(&parse_expr("-x")), "(- x)");
    assert_eq!(sexpr(&parse_expr("--x")), "(- (- x))");
    assert_eq!(sexpr(&parse_expr("!a == b")), "(== (! a) b)");
    assert_eq!(sexpr(&parse_expr("-(a + b) * 2")), "(* (- (+ a b)) 2)");
}

#[test]
fn test_member_access_and_calls() {
    assert_eq!(sexpr(&parse_expr("a.b.c")), "(. (. a b) c)");
    assert_eq!(sexpr(&parse_expr("print(x, 1 + 2)")), "(call print x (+ 1 2))");
    assert_eq!(sexpr(&parse_expr("obj.get().value")), "(. (call (. obj get)) value)");
    assert_eq!(sexpr(&parse_expr("f(g(h()))")), "(call f (call g (call h)))");
}

#[test]
fn test_literal_types() {
    let cases = [
        ("7", LiteralType::Integer),
        ("7.5", LiteralType::Float),
        ("\"seven\"", LiteralType::String),
        ("false", LiteralType::Bool),
    ];
    for (source, expected) in cases {
        match parse_expr(source) {
            Expression::Literal(l) => assert_eq!(l.literal_type, expected, "{}", source),
            other => panic!("expected literal for {}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_named_arguments_are_assignments() {
    match parse_expr("Counter(initial = 5, step = 1)") {
        Expression::FunctionCall(call) => {
            assert_eq!(call.arguments.len(), 2);
            assert_eq!(sexpr(&call.arguments[0]), "(= initial 5)");
            assert_eq!(sexpr(&call.arguments[1]), "(= step 1)");
        }
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn test_binary_location_is_left_operand() {
    let expr = parse_expr("count + 1");
    let location = expr.location().expect("binary op has a location");
    assert_eq!((location.line, location.column, location.length), (1, 1, 5));
}

#[test]
fn test_missing_operand() {
    let mut parser = Parser::new("a + ;", "test.sd").unwrap();
    let err = parser.parse_expression(0).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected token SEMICOLON at line 1, column 5");
}

#[test]
fn test_unclosed_parenthesis() {
    let mut parser = Parser::new("(a + b", "test.sd").unwrap();
    let err = parser.parse_expression(0).unwrap_err();
    assert_eq!(err.to_string(), "Expected RPAREN, got EOF at line 1, column 7");
}
