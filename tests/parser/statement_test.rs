//! Statement and block parser tests

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_expression_statements() {
    let items = parse_block("{ count = count + 1; log(count); a.b.c(); f() + 1; x; }");
    assert_eq!(items.len(), 5);
    assert_eq!(sexpr(expr_of(&items[0])), "(= count (+ count 1))");
    assert_eq!(sexpr(expr_of(&items[1])), "(call log count)");
    assert_eq!(sexpr(expr_of(&items[2])), "(call (. (. a b) c))");
    assert_eq!(sexpr(expr_of(&items[3])), "(+ (call f) 1)");
    assert_eq!(sexpr(expr_of(&items[4])), "x");
}

#[test]
fn test_return_with_and_without_value() {
    let items = parse_block("{ return; return a * 2; }");
    match (&items[0], &items[1]) {
        (Statement::Return(bare), Statement::Return(valued)) => {
            assert!(bare.value.is_none());
            assert_eq!(sexpr(valued.value.as_ref().unwrap()), "(* a 2)");
        }
        other => panic!("expected two returns, got {:?}", other),
    }
}

#[test]
fn test_if_without_else() {
    let items = parse_block("{ if (x > 0) { x -= 1; } }");
    match &items[0] {
        Statement::If(s) => {
            assert_eq!(sexpr(&s.condition), "(> x 0)");
            assert_eq!(s.then_block.len(), 1);
            assert!(s.else_block.is_none());
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn test_nested_control_flow() {
    let items = parse_block(
        "{ while (running) { if (done) { return; } else { step(); tick(); } } }",
    );
    let Statement::While(w) = &items[0] else {
        panic!("expected while, got {:?}", items[0]);
    };
    assert_eq!(sexpr(&w.condition), "running");
    let Statement::If(s) = &w.body[0] else {
        panic!("expected if, got {:?}", w.body[0]);
    };
    assert_eq!(s.else_block.as_ref().map(Vec::len), Some(2));
}

#[test]
fn test_string_statement() {
    let items = parse_block("{ \"docs\"; }");
    assert_eq!(sexpr(expr_of(&items[0])), "\"docs\"");
}

#[test]
fn test_inline_declarations() {
    let items = parse_block(
        "{ total: int = 0; const limit = 10; add(n: int) { total += n; } get() -> int { return total; } }",
    );
    assert_eq!(items.len(), 4);

    let Statement::Variable(total) = &items[0] else {
        panic!("expected variable, got {:?}", items[0]);
    };
    assert_eq!(total.modifiers, vec![Modifier::Priv]);
    assert_eq!(total.type_name.as_deref(), Some("int"));

    let Statement::Variable(limit) = &items[1] else {
        panic!("expected variable, got {:?}", items[1]);
    };
    assert_eq!(limit.modifiers, vec![Modifier::Const, Modifier::Priv]);

    let Statement::Function(add) = &items[2] else {
        panic!("expected function, got {:?}", items[2]);
    };
    assert_eq!(add.params[0].name, "n");
    assert_eq!(add.modifiers, vec![Modifier::Priv]);

    let Statement::Function(get) = &items[3] else {
        panic!("expected function, got {:?}", items[3]);
    };
    assert!(get.params.is_empty());
    assert_eq!(get.return_type.as_deref(), Some("int"));
}

#[test]
fn test_call_statement_is_not_a_method() {
    let items = parse_block("{ init(); init(a, b); }");
    assert!(items.iter().all(|s| matches!(s, Statement::Expression(_))));
}

#[test]
fn test_component_instantiation_in_block() {
    let items = parse_block("{ Counter(initial = 5) as myCounter; }");
    let Statement::Component(c) = &items[0] else {
        panic!("expected component, got {:?}", items[0]);
    };
    assert_eq!(c.component_type, "Counter");
    assert_eq!(c.instance_name.as_deref(), Some("myCounter"));
    assert_eq!(sexpr(&c.args[0]), "(= initial 5)");
}

#[test]
fn test_member_call_cannot_be_bound() {
    let mut parser = Parser::new("a.make() as b;", "test.sd").unwrap();
    let err = parser.parse_statement().unwrap_err();
    assert!(err.to_string().starts_with("Expected semicolon at end of statement, got AS"));

    let mut parser = Parser::new("make()() as b;", "test.sd").unwrap();
    let err = parser.parse_statement().unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Only a call of a named component can be bound with 'as'"));
}

#[test]
fn test_missing_semicolon() {
    let mut parser = Parser::new("{ x = 1 }", "test.sd").unwrap();
    let err = parser.parse_block().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected semicolon at end of statement, got RBRACE at line 1, column 9"
    );
}

#[test]
fn test_reserved_keywords() {
    for keyword in ["elif", "switch", "case"] {
        let source = format!("{{ {} (x) {{ }} }}", keyword);
        let mut parser = Parser::new(&source, "test.sd").unwrap();
        let err = parser.parse_block().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("reserved keyword '{}' is not supported at line 1, column 3", keyword)
        );
    }
}
