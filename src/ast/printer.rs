//! Alt projection: re-renders a [`Program`] in source-like syntax
//!
//! ```text
//! Program:
//!     pub shard Counter {
//!         pub count: int = 0;
//!         priv increment() {
//!             count = count + 1;
//!         }
//!     }
//! ```
//!
//! Parentheses are inserted only where the tree shape needs them, and names
//! that would not lex back as a single identifier are written as string
//! literals, so the output parses back to the same tree.

use super::*;
use crate::lexer::{tokenize, TokenKind};

const INDENT: &str = "    ";

/// Binding power of the tightest-binding forms (literals, names, calls)
const ATOM: u8 = 6;
const UNARY: u8 = 5;
const ASSIGNMENT: u8 = 1;

/// Printer for the alt projection
pub struct AltPrinter {
    indent_level: usize,
    output: String,
}

impl Default for AltPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl AltPrinter {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            output: String::new(),
        }
    }

    pub fn print(&mut self, program: &Program) -> String {
        self.output.clear();
        self.indent_level = 0;
        self.writeln("Program:");
        self.indent();
        for declaration in &program.declarations {
            self.print_declaration(declaration);
        }
        self.dedent();
        std::mem::take(&mut self.output)
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn writeln(&mut self, line: &str) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn print_declaration(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Type(def) => self.print_object(
                &def.modifiers,
                "type",
                &def.name,
                def.parents.as_deref(),
                def.members.as_deref(),
            ),
            Declaration::Shard(def) => self.print_object(
                &def.modifiers,
                "shard",
                &def.name,
                def.parents.as_deref(),
                def.members.as_deref(),
            ),
            Declaration::Impl(def) => self.print_impl(def),
            Declaration::Function(def) => self.print_function(def),
            Declaration::Variable(def) => self.print_variable(def),
            Declaration::Component(def) => self.print_component(def),
        }
    }

    fn print_object(
        &mut self,
        modifiers: &[Modifier],
        keyword: &str,
        name: &str,
        parents: Option<&[String]>,
        members: Option<&[Member]>,
    ) {
        let mut head = format!("{}{} {}", modifier_prefix(modifiers), keyword, name_text(name));
        if let Some(parents) = parents {
            let parents: Vec<String> = parents.iter().map(|p| name_text(p)).collect();
            head.push_str(&format!(" from {}", parents.join(", ")));
        }

        match members {
            Some(members) => {
                head.push_str(" {");
                self.writeln(&head);
                self.print_members(members);
                self.writeln("}");
            }
            None => {
                head.push(';');
                self.writeln(&head);
            }
        }
    }

    fn print_impl(&mut self, def: &ImplDef) {
        let mut head = format!("{}impl", modifier_prefix(&def.modifiers));
        if let Some(target) = &def.target_type {
            head.push_str(&format!(" {}", name_text(target)));
        }
        if let Some(trait_name) = &def.for_type {
            head.push_str(&format!(" for {}", name_text(trait_name)));
        }
        head.push_str(" {");
        self.writeln(&head);
        self.print_members(&def.members);
        self.writeln("}");
    }

    fn print_members(&mut self, members: &[Member]) {
        self.indent();
        for member in members {
            match member {
                Member::Function(def) => self.print_function(def),
                Member::Variable(def) => self.print_variable(def),
            }
        }
        self.dedent();
    }

    fn print_function(&mut self, def: &FunctionDef) {
        let params: Vec<String> = def.params.iter().map(parameter_text).collect();
        let mut head = format!(
            "{}{}({})",
            modifier_prefix(&def.modifiers),
            name_text(&def.name),
            params.join(", ")
        );
        if let Some(return_type) = &def.return_type {
            head.push_str(&format!(" -> {}", name_text(return_type)));
        }

        match &def.body {
            Some(body) => {
                head.push_str(" {");
                self.writeln(&head);
                self.print_block(body);
                self.writeln("}");
            }
            None => {
                head.push(';');
                self.writeln(&head);
            }
        }
    }

    fn print_variable(&mut self, def: &VariableDef) {
        let mut line = format!("{}{}", modifier_prefix(&def.modifiers), name_text(&def.name));
        if let Some(type_name) = &def.type_name {
            line.push_str(&format!(": {}", name_text(type_name)));
        }
        if let Some(value) = &def.value {
            line.push_str(&format!(" = {}", expression_text(value, 0)));
        }
        line.push(';');
        self.writeln(&line);
    }

    fn print_component(&mut self, def: &ComponentInstantiation) {
        let mut line = format!("{}({})", def.component_type, arguments_text(&def.args));
        if let Some(instance) = &def.instance_name {
            line.push_str(&format!(" as {}", instance));
        }
        line.push(';');
        self.writeln(&line);
    }

    fn print_block(&mut self, statements: &[Statement]) {
        self.indent();
        for statement in statements {
            self.print_statement(statement);
        }
        self.dedent();
    }

    fn print_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Expression(s) => {
                self.writeln(&format!("{};", expression_text(&s.expr, 0)));
            }
            Statement::Return(s) => match &s.value {
                Some(value) => self.writeln(&format!("return {};", expression_text(value, 0))),
                None => self.writeln("return;"),
            },
            Statement::If(s) => {
                self.writeln(&format!("if ({}) {{", expression_text(&s.condition, 0)));
                self.print_block(&s.then_block);
                match &s.else_block {
                    Some(else_block) => {
                        self.writeln("} else {");
                        self.print_block(else_block);
                        self.writeln("}");
                    }
                    None => self.writeln("}"),
                }
            }
            Statement::While(s) => {
                self.writeln(&format!("while ({}) {{", expression_text(&s.condition, 0)));
                self.print_block(&s.body);
                self.writeln("}");
            }
            Statement::Component(def) => self.print_component(def),
            Statement::Function(def) => self.print_function(def),
            Statement::Variable(def) => self.print_variable(def),
        }
    }
}

/// Renders `program` in the alt projection
pub fn to_alt(program: &Program) -> String {
    AltPrinter::new().print(program)
}

fn modifier_prefix(modifiers: &[Modifier]) -> String {
    modifiers.iter().map(|m| format!("{} ", m.keyword())).collect()
}

fn parameter_text(param: &Parameter) -> String {
    let mut text = format!("{}{}", modifier_prefix(&param.modifiers), param.name);
    if let Some(param_type) = &param.param_type {
        text.push_str(&format!(": {}", name_text(param_type)));
    }
    if let Some(default) = &param.default_value {
        text.push_str(&format!(" = {}", expression_text(default, 0)));
    }
    text
}

fn arguments_text(args: &[Expression]) -> String {
    args.iter()
        .map(|arg| expression_text(arg, 0))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `name` as written when it lexes as one identifier, a string literal
/// otherwise
fn name_text(name: &str) -> String {
    let is_identifier = matches!(
        tokenize(name).as_deref(),
        Ok([token, eof]) if token.kind == TokenKind::Identifier && eof.kind == TokenKind::Eof
            && token.span.len() == name.len()
    );
    if is_identifier {
        name.to_string()
    } else {
        quote(name)
    }
}

fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for ch in s.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\0' => quoted.push_str("\\0"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn binary_precedence(operator: BinaryOperator) -> u8 {
    match operator {
        BinaryOperator::Eq
        | BinaryOperator::Ne
        | BinaryOperator::Lt
        | BinaryOperator::Gt
        | BinaryOperator::Le
        | BinaryOperator::Ge => 2,
        BinaryOperator::Plus | BinaryOperator::Minus => 3,
        BinaryOperator::Times | BinaryOperator::Divide => 4,
    }
}

fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Assignment(_) => ASSIGNMENT,
        Expression::BinaryOp(b) => binary_precedence(b.operator),
        Expression::UnaryOp(_) => UNARY,
        Expression::Literal(_)
        | Expression::Identifier(_)
        | Expression::MemberAccess(_)
        | Expression::FunctionCall(_) => ATOM,
    }
}

/// Renders `expr`, parenthesized when it binds looser than `min`
fn expression_text(expr: &Expression, min: u8) -> String {
    let text = match expr {
        Expression::Literal(literal) => literal_text(&literal.value),
        Expression::Identifier(ident) => ident.name.clone(),
        Expression::MemberAccess(access) => format!(
            "{}.{}",
            expression_text(&access.object, ATOM),
            access.member.name
        ),
        Expression::FunctionCall(call) => format!(
            "{}({})",
            expression_text(&call.function, ATOM),
            arguments_text(&call.arguments)
        ),
        Expression::BinaryOp(binary) => {
            let p = binary_precedence(binary.operator);
            format!(
                "{} {} {}",
                expression_text(&binary.left, p),
                binary.operator,
                expression_text(&binary.right, p + 1)
            )
        }
        Expression::UnaryOp(unary) => {
            format!("{}{}", unary.operator, expression_text(&unary.operand, UNARY))
        }
        Expression::Assignment(assign) => format!(
            "{} {} {}",
            expression_text(&assign.target, ASSIGNMENT + 1),
            assign.operator,
            expression_text(&assign.value, ASSIGNMENT)
        ),
    };

    if precedence(expr) < min {
        format!("({})", text)
    } else {
        text
    }
}

fn literal_text(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Integer(n) => n.to_string(),
        LiteralValue::Float(n) => format!("{:?}", n),
        LiteralValue::String(s) => quote(s),
        LiteralValue::Bool(b) => b.to_string(),
    }
}
