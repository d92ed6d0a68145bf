use crate::analyze::SymbolTable;
use crate::codegen::Config;
use crate::codegen::escape::{escape_string, format_float};
use crate::codegen::writer::Writer;
use crate::ir::{Literal, Program, Scope, Statement, StaticBind, Value};

/// C emitter for one validated program.
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
        if self.w.config().emit_prelude {
            super::write_prelude(&mut self.w);
        } else {
            self.w.line(&format!("#include \"{}\"", super::HEADER));
        }

        self.w.section("includes");
        for path in &program.includes {
            self.w.line(&format!("#include \"{path}\""));
        }

        self.w.section("atoms");
        for (atom, value) in symbols.atoms() {
            self.w.line(&format!("#define {} {value}", atom.mangled()));
        }

        self.w.section("prototypes");
        for function in &program.statics {
            let signature = signature(function);
            self.w.line(&format!("{signature};"));
        }

        self.w.section("statics");
        for (i, function) in program.statics.iter().enumerate() {
            if i > 0 {
                self.w.blank();
            }
            self.emit_function(function);
        }

        self.w.section("main");
        self.emit_function(&program.main);

        self.w.finish()
    }

    fn emit_function(&mut self, function: &StaticBind) {
        self.w.line(&format!("{} {{", signature(function)));
        self.emit_body(function.body());
        self.w.line("}");
    }

    fn emit_body(&mut self, scope: &Scope) {
        self.w.indent();
        for statement in scope.statements() {
            self.emit_statement(statement);
        }
        self.w.dedent();
    }

    fn emit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Expr(expr) => match &expr.value {
                Value::Scope(scope) => {
                    self.w.line("{");
                    self.emit_body(scope);
                    self.w.line("}");
                }
                value => self.w.line(&format!("{};", value_to_c(value))),
            },
            Statement::Bind { ident, expr } => {
                let value = value_to_c(&expr.value);
                self.w.line(&format!("{} {ident} = {value};", expr.type_));
            }
            Statement::Return(value) => {
                self.w.line(&format!("return {};", value_to_c(value)));
            }
        }
    }
}

/// `Int add(Int a, Int b)`. An empty parameter list is spelled `(void)`.
fn signature(function: &StaticBind) -> String {
    let header = function.header();
    let params = if header.args.is_empty() {
        "void".to_owned()
    } else {
        header
            .args
            .iter()
            .map(|p| format!("{} {}", p.type_, p.ident))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{} {}({params})", header.output, header.ident)
}

fn value_to_c(value: &Value) -> String {
    match value {
        Value::Literal(literal) => literal_to_c(literal),
        Value::Call(call) => {
            let args = call
                .args
                .iter()
                .map(value_to_c)
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

fn literal_to_c(literal: &Literal) -> String {
    match literal {
        // The magnitude of i64::MIN is not a valid C integer constant.
        Literal::Int(i64::MIN) => format!("({} - 1)", i64::MIN + 1),
        Literal::Int(v) => v.to_string(),
        Literal::Float(v) => format_float(*v),
        Literal::String(s) => format!("\"{}\"", escape_string(s, true)),
        Literal::Bool(b) => b.to_string(),
    }
}
