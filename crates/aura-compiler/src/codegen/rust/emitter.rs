use aura_core::Primitive;

use crate::analyze::SymbolTable;
use crate::codegen::Config;
use crate::codegen::escape::{escape_string, format_float};
use crate::codegen::writer::Writer;
use crate::ir::{Identifier, Literal, Program, Scope, Statement, StaticBind, Value};

/// Rust emitter for one validated program.
pub struct Emitter<'a> {
    program: &'a Program,
    symbols: &'a SymbolTable,
    w: Writer<'a>,
}

impl<'a> Emitter<'a> {
    pub fn new(program: &'a Program, symbols: &'a SymbolTable, config: &'a Config) -> Self {
        Self {
            program,
            symbols,
            w: Writer::new(config),
        }
    }

    pub fn emit(mut self) -> String {
        let program = self.program;
        let symbols = self.symbols;
        self.w
            .line(&format!("#![allow({})]", super::ALLOWED_LINTS));
        self.w.blank();

        if self.w.config().emit_prelude {
            self.w.line("mod prelude {");
            self.w.indent();
            super::write_prelude(&mut self.w);
            self.w.dedent();
            self.w.line("}");
            self.w.blank();
            self.w.line("use prelude::*;");
        } else {
            self.w.line("use aura_core::prelude::*;");
        }

        if !program.includes.is_empty() {
            log::debug!(
                "skipping {} C includes for the rust target",
                program.includes.len()
            );
        }

        self.w.section("atoms");
        for (atom, value) in symbols.atoms() {
            self.w
                .line(&format!("pub const {}: Atom = {value};", atom.mangled()));
        }

        self.w.section("statics");
        for (i, function) in program.statics.iter().enumerate() {
            if i > 0 {
                self.w.blank();
            }
            self.w.line(&format!("{} {{", signature(function)));
            self.emit_body(function.body(), false);
            self.w.line("}");
        }

        self.w.section("main");
        self.w
            .line(&format!("fn {}() -> Int {{", super::ENTRY));
        self.emit_body(program.main.body(), true);
        self.w.line("}");
        self.w.blank();
        self.w.line("fn main() {");
        self.w.indent();
        self.w
            .line(&format!("std::process::exit({}());", super::ENTRY));
        self.w.dedent();
        self.w.line("}");

        self.w.finish()
    }

    /// The entry point returns 0 when its body falls off the end.
    fn emit_body(&mut self, scope: &Scope, is_entry: bool) {
        self.w.indent();
        for statement in scope.statements() {
            self.emit_statement(statement);
        }
        if is_entry && !matches!(scope.statements().last(), Some(Statement::Return(_))) {
            self.w.line("return 0;");
        }
        self.w.dedent();
    }

    fn emit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Expr(expr) => match &expr.value {
                Value::Scope(scope) => {
                    self.w.line("{");
                    self.emit_body(scope, false);
                    self.w.line("}");
                }
                value => self.w.line(&format!("{};", value_to_rust(value))),
            },
            Statement::Bind { ident, expr } => {
                let value = value_to_rust(&expr.value);
                self.w
                    .line(&format!("let {ident}: {} = {value};", expr.type_));
            }
            Statement::Return(value) => {
                self.w.line(&format!("return {};", value_to_rust(value)));
            }
        }
    }
}

fn is_text(ty: &Identifier) -> bool {
    Primitive::from_name(ty.as_str()).is_some_and(Primitive::is_borrowed)
}

/// `fn name(params) -> Output`.
///
/// A returned `String` borrows from the `String` parameters when there are
/// any, all under one lifetime `'a`, and is `'static` otherwise.
fn signature(function: &StaticBind) -> String {
    let header = function.header();
    let returns_text = is_text(&header.output);
    let borrows = returns_text && header.args.iter().any(|p| is_text(&p.type_));

    let params = header
        .args
        .iter()
        .map(|p| {
            if borrows && is_text(&p.type_) {
                format!("{}: {}<'a>", p.ident, p.type_)
            } else {
                format!("{}: {}", p.ident, p.type_)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let generics = if borrows { "<'a>" } else { "" };
    let output = if header.output.as_str() == Primitive::Void.name() {
        String::new()
    } else if returns_text {
        let lifetime = if borrows { "'a" } else { "'static" };
        format!(" -> {}<{lifetime}>", header.output)
    } else {
        format!(" -> {}", header.output)
    };

    format!("fn {}{generics}({params}){output}", header.ident)
}

fn value_to_rust(value: &Value) -> String {
    match value {
        Value::Literal(literal) => literal_to_rust(literal),
        Value::Call(call) => {
            let args = call
                .args
                .iter()
                .map(value_to_rust)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({args})", call.symbol)
        }
        Value::Atom(atom) => atom.mangled(),
        Value::Identifier(ident) => ident.to_string(),
        // Rejected by validation outside statement position.
        Value::Scope(_) => String::new(),
    }
}

fn literal_to_rust(literal: &Literal) -> String {
    match literal {
        Literal::Int(v) => v.to_string(),
        Literal::Float(v) => format_float(*v),
        Literal::String(s) => format!("\"{}\"", escape_string(s, false)),
        Literal::Bool(b) => b.to_string(),
    }
}
