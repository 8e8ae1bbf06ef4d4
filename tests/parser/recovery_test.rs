//! Error recovery tests

use super::*;
use pretty_assertions::assert_eq;
use shard::ParserError;

fn declaration_names(program: &Program) -> Vec<String> {
    program
        .declarations
        .iter()
        .map(|d| match d {
            Declaration::Type(t) => t.name.clone(),
            Declaration::Shard(s) => s.name.clone(),
            Declaration::Impl(i) => format!("impl {}", i.target_type.as_deref().unwrap_or("")),
            Declaration::Function(f) => format!("{}()", f.name),
            Declaration::Variable(v) => v.name.clone(),
            Declaration::Component(c) => format!("{} as", c.component_type),
        })
        .collect()
}

#[test]
fn test_stray_closing_brace() {
    let output = parse("} type Point { x: float; }");
    assert_eq!(declaration_names(&output.program), vec!["Point"]);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(
        output.diagnostics[0].to_string(),
        "Unexpected token RBRACE at top level at line 1, column 1"
    );
}

#[test]
fn test_broken_declaration_is_skipped() {
    let source = "
type A { x: int; }
shard B { y = ; }
type C;
";
    let output = parse(source);
    assert_eq!(declaration_names(&output.program), vec!["A", "C"]);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(
        output.diagnostics[0].to_string(),
        "Unexpected token SEMICOLON at line 3, column 15"
    );
}

#[test]
fn test_multiple_errors_are_all_reported() {
    let output = parse(") type A; ( type B; ; type C;");
    assert_eq!(declaration_names(&output.program), vec!["A", "B", "C"]);
    assert_eq!(output.diagnostics.len(), 3);
    let columns: Vec<_> = output
        .diagnostics
        .iter()
        .map(|d| d.position().column)
        .collect();
    assert_eq!(columns, vec![1, 11, 21]);
}

#[test]
fn test_error_at_recovery_token_still_progresses() {
    // `type` is itself a recovery token: the driver must not loop on it
    let output = parse("type type A;");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(declaration_names(&output.program), vec!["A"]);
}

#[test]
fn test_truncated_input() {
    let output = parse("shard Counter { inc() { count = count + 1;");
    assert!(output.program.declarations.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.diagnostics[0]
        .to_string()
        .starts_with("Unexpected end of file inside block"));
}

#[test]
fn test_lexical_error_aborts() {
    let err = parse_source("type A; x = \"oops", "test.sd").unwrap_err();
    assert!(err.is_lexical());
    assert!(matches!(err, ParserError::Lexer(_)));
    assert_eq!(err.position().column, 13);
}

#[test]
fn test_diagnostics_keep_byte_spans() {
    let output = parse("type A;\n}");
    let span = output.diagnostics[0].span();
    assert_eq!((span.start, span.end), (8, 9));
}

#[test]
fn test_error_inside_body_skips_remaining_members() {
    let output = parse("type A { x: int = ; y: int; } type B;");
    assert_eq!(declaration_names(&output.program), vec!["B"]);
    assert_eq!(
        output
            .diagnostics
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>(),
        vec!["Unexpected token SEMICOLON at line 1, column 19"]
    );
}

#[test]
fn test_error_in_nested_method_body() {
    let source = "
shard S {
    run() { if (a) { x = ; } y = 2; }
    z: int;
}
type T;
";
    let output = parse(source);
    assert_eq!(declaration_names(&output.program), vec!["T"]);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].position().line, 3);
}
