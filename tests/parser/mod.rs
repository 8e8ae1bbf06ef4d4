//! Shared helpers for the parser tests

use shard::ast::*;
use shard::{parse_source, ParseOutput, Parser};

/// Parses `source` and requires a diagnostic-free result
pub fn assert_parse_success(source: &str) -> Program {
    let output = parse(source);
    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics for {:?}: {:?}",
        source,
        output.diagnostics
    );
    output.program
}

/// Parses `source`, which must at least lex
pub fn parse(source: &str) -> ParseOutput {
    parse_source(source, "test.sd").expect("source should lex")
}

/// Diagnostic messages produced for `source`
pub fn diagnostics(source: &str) -> Vec<String> {
    parse(source)
        .diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect()
}

pub fn parse_expr(source: &str) -> Expression {
    let mut parser = Parser::new(source, "test.sd").expect("source should lex");
    parser.parse_expression(0).expect("expression should parse")
}

pub fn parse_block(source: &str) -> Vec<Statement> {
    let mut parser = Parser::new(source, "test.sd").expect("source should lex");
    parser.parse_block().expect("block should parse")
}

/// Compact prefix rendering of an expression tree: `(+ a (* b c))`
pub fn sexpr(expr: &Expression) -> String {
    match expr {
        Expression::Literal(l) => match &l.value {
            LiteralValue::Integer(n) => n.to_string(),
            LiteralValue::Float(n) => format!("{:?}", n),
            LiteralValue::String(s) => format!("{:?}", s),
            LiteralValue::Bool(b) => b.to_string(),
        },
        Expression::Identifier(i) => i.name.clone(),
        Expression::MemberAccess(m) => format!("(. {} {})", sexpr(&m.object), m.member.name),
        Expression::FunctionCall(c) => {
            let mut parts = vec![sexpr(&c.function)];
            parts.extend(c.arguments.iter().map(sexpr));
            format!("(call {})", parts.join(" "))
        }
        Expression::BinaryOp(b) => format!("({} {} {})", b.operator, sexpr(&b.left), sexpr(&b.right)),
        Expression::UnaryOp(u) => format!("({} {})", u.operator, sexpr(&u.operand)),
        Expression::Assignment(a) => {
            format!("({} {} {})", a.operator, sexpr(&a.target), sexpr(&a.value))
        }
    }
}

/// The expression carried by an expression statement
pub fn expr_of(statement: &Statement) -> &Expression {
    match statement {
        Statement::Expression(s) => &s.expr,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[cfg(test)]
mod declaration_test;
#[cfg(test)]
mod expression_test;
#[cfg(test)]
mod recovery_test;
#[cfg(test)]
mod statement_test;
