//! Declaration parser tests

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn single(source: &str) -> Declaration {
    let mut program = assert_parse_success(source);
    assert_eq!(program.declarations.len(), 1, "in {:?}", source);
    program.declarations.remove(0)
}

fn variable(member: &Member) -> &VariableDef {
    match member {
        Member::Variable(v) => v,
        other => panic!("expected field, got {:?}", other),
    }
}

fn function(member: &Member) -> &FunctionDef {
    match member {
        Member::Function(f) => f,
        other => panic!("expected method, got {:?}", other),
    }
}

#[test]
fn test_point_type() {
    let Declaration::Type(point) = single("type Point { x: float; y: float; }") else {
        panic!("expected type");
    };
    assert_eq!(point.name, "Point");
    assert_eq!(point.modifiers, vec![Modifier::Priv]);
    assert!(point.parents.is_none());

    let members = point.members.as_ref().unwrap();
    assert_eq!(members.len(), 2);
    for (member, name) in members.iter().zip(["x", "y"]) {
        let field = variable(member);
        assert_eq!(field.name, name);
        assert_eq!(field.modifiers, vec![Modifier::Priv]);
        assert_eq!(field.type_name.as_deref(), Some("float"));
        assert!(field.value.is_none());
    }
}

#[test]
fn test_counter_shard() {
    let source = "shard Counter { pub count: int = 0; increment() { count = count + 1; } }";
    let Declaration::Shard(counter) = single(source) else {
        panic!("expected shard");
    };
    assert_eq!(counter.name, "Counter");
    let members = counter.members.as_ref().unwrap();
    assert_eq!(members.len(), 2);

    let count = variable(&members[0]);
    assert_eq!(count.name, "count");
    assert_eq!(count.modifiers, vec![Modifier::Pub]);
    assert_eq!(count.type_name.as_deref(), Some("int"));
    assert_eq!(sexpr(count.value.as_ref().unwrap()), "0");

    let increment = function(&members[1]);
    assert_eq!(increment.name, "increment");
    assert!(increment.params.is_empty());
    let body = increment.body.as_ref().unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(sexpr(expr_of(&body[0])), "(= count (+ count 1))");
}

#[test]
fn test_top_level_component() {
    let Declaration::Component(c) = single("Counter(initial = 5) as myCounter;") else {
        panic!("expected component");
    };
    assert_eq!(c.component_type, "Counter");
    assert_eq!(c.instance_name.as_deref(), Some("myCounter"));
    assert_eq!(c.args.len(), 1);
    let Expression::Assignment(arg) = &c.args[0] else {
        panic!("expected assignment argument, got {:?}", c.args[0]);
    };
    assert_eq!(arg.operator, AssignOperator::Assign);
    assert_eq!(sexpr(&arg.target), "initial");
    assert_eq!(sexpr(&arg.value), "5");
}

#[test]
fn test_parents_and_forward_declaration() {
    let Declaration::Shard(s) = single("pub shard Robot from Machine, Named;") else {
        panic!("expected shard");
    };
    assert_eq!(s.modifiers, vec![Modifier::Pub]);
    assert_eq!(s.parents, Some(vec!["Machine".to_string(), "Named".to_string()]));
    assert!(s.members.is_none());
}

#[test]
fn test_empty_body_differs_from_forward_declaration() {
    let Declaration::Type(t) = single("type Unit { }") else {
        panic!("expected type");
    };
    assert_eq!(t.members, Some(Vec::new()));
}

#[test]
fn test_string_names() {
    let Declaration::Type(t) = single("type \"while\" { }") else {
        panic!("expected type");
    };
    assert_eq!(t.name, "while");

    let Declaration::Function(f) = single("pure \"+\"(a: Vec, b: Vec) -> Vec;") else {
        panic!("expected function");
    };
    assert_eq!(f.name, "+");
    assert_eq!(f.modifiers, vec![Modifier::Pure, Modifier::Priv]);
    assert!(f.body.is_none());

    let Declaration::Variable(v) = single("\"max speed\": float = 1.5;") else {
        panic!("expected variable");
    };
    assert_eq!(v.name, "max speed");
}

#[test]
fn test_impl_forms() {
    let program = assert_parse_success(
        "impl Counter { reset() { count = 0; } }
         impl Counter for Printable { show() -> string; }
         pub impl { boot() { } }",
    );
    let impls: Vec<&ImplDef> = program
        .declarations
        .iter()
        .map(|d| match d {
            Declaration::Impl(i) => i,
            other => panic!("expected impl, got {:?}", other),
        })
        .collect();

    assert_eq!(impls[0].target_type.as_deref(), Some("Counter"));
    assert_eq!(impls[0].for_type, None);
    assert_eq!(impls[1].for_type.as_deref(), Some("Printable"));
    assert!(function(&impls[1].members[0]).body.is_none());
    assert_eq!(impls[2].target_type, None);
    assert_eq!(impls[2].modifiers, vec![Modifier::Pub]);
}

#[test]
fn test_impl_requires_body() {
    assert_eq!(
        diagnostics("impl Counter;"),
        vec!["Expected LBRACE, got SEMICOLON at line 1, column 13".to_string()]
    );
}

#[test]
fn test_top_level_function_and_variable() {
    let program = assert_parse_success(
        "main() -> int { return 0; }
         pub const answer: int = 42;
         on tick(meta dt: float = 0.5) { }",
    );
    let Declaration::Function(main) = &program.declarations[0] else {
        panic!("expected function");
    };
    assert_eq!(main.return_type.as_deref(), Some("int"));

    let Declaration::Variable(answer) = &program.declarations[1] else {
        panic!("expected variable");
    };
    assert_eq!(answer.modifiers, vec![Modifier::Pub, Modifier::Const]);

    let Declaration::Function(tick) = &program.declarations[2] else {
        panic!("expected function");
    };
    assert_eq!(tick.modifiers, vec![Modifier::On, Modifier::Priv]);
    let dt = &tick.params[0];
    assert_eq!(dt.modifiers, vec![Modifier::Meta, Modifier::Priv]);
    assert_eq!(dt.param_type.as_deref(), Some("float"));
    assert_eq!(sexpr(dt.default_value.as_ref().unwrap()), "0.5");
}

#[test_case("pub x;", &[Modifier::Pub] ; "explicit pub")]
#[test_case("x;", &[Modifier::Priv] ; "implicit priv")]
#[test_case("pub priv x;", &[Modifier::Priv] ; "last visibility wins")]
#[test_case("mut internal mut x;", &[Modifier::Mut, Modifier::Internal] ; "duplicates collapse")]
#[test_case("open bus x;", &[Modifier::Open, Modifier::Bus, Modifier::Priv] ; "open is not a visibility")]
fn test_modifier_normalization(source: &str, expected: &[Modifier]) {
    let Declaration::Variable(v) = single(source) else {
        panic!("expected variable");
    };
    assert_eq!(v.modifiers, expected);
    assert!(visibility(&v.modifiers).is_some());
}

#[test]
fn test_type_body_rejects_statements() {
    assert_eq!(
        diagnostics("type A {\n    return 1;\n}"),
        vec!["Only fields and methods are allowed in a type body at line 2, column 5".to_string()]
    );
}

#[test]
fn test_string_parameter_name_rejected() {
    let messages = diagnostics("f(\"a\": int) { }");
    assert!(messages[0].starts_with("String literals cannot be used as parameter names"));
}

#[test]
fn test_locations() {
    let program = assert_parse_success("\n  pub type Point;");
    let location = program.declarations[0].location().unwrap();
    assert_eq!((location.line, location.column), (2, 7));
    assert_eq!(location.length, 4);
    assert_eq!(location.file, "test.sd");
}

#[test]
fn test_bare_field_in_body() {
    let program = assert_parse_success("type A { x; const y; }");
    let Declaration::Type(t) = &program.declarations[0] else {
        panic!("expected type");
    };
    let members = t.members.as_ref().unwrap();
    assert_eq!(members.len(), 2);
    let Member::Variable(x) = &members[0] else {
        panic!("expected field");
    };
    assert_eq!(x.name, "x");
    assert_eq!(x.modifiers, vec![Modifier::Priv]);
    assert!(x.type_name.is_none() && x.value.is_none());
    assert_eq!(members[1].name(), "y");
}

#[test]
fn test_component_with_modifiers_rejected() {
    let output = parse("pub Counter() as c;");
    assert_eq!(
        output
            .diagnostics
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>(),
        vec!["Modifiers are not allowed on a component instantiation at line 1, column 1"]
    );
    // the instantiation itself is recovered without the modifiers
    assert!(matches!(
        &output.program.declarations[..],
        [Declaration::Component(c)] if c.component_type == "Counter"
    ));
}
