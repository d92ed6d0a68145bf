//! Function body checks: scoping, calls, and types.
//!
//! Runs after the symbol table is built. Every function body is walked with
//! a stack of binding scopes; the function's parameters form the outermost
//! scope and share it with the body's top-level bindings.

use std::collections::HashMap;

use aura_core::{Primitive, PrimitiveKind};

use super::ValidationError;
use super::names::{check_identifier, compatible, resolve_type};
use super::symbol_table::SymbolTable;
use crate::ir::{Call, Identifier, Literal, Program, Scope, Statement, StaticBind, Value};

pub fn check_bodies(
    program: &Program,
    symbols: &SymbolTable,
    errors: &mut Vec<ValidationError>,
) {
    for function in &program.statics {
        check_function(function, false, symbols, errors);
    }
    check_function(&program.main, true, symbols, errors);
}

fn check_function(
    function: &StaticBind,
    is_entry: bool,
    symbols: &SymbolTable,
    errors: &mut Vec<ValidationError>,
) {
    let mut checker = BodyChecker {
        symbols,
        errors,
        scopes: Vec::new(),
        function: function.name(),
        output: Primitive::from_name(function.header().output.as_str()),
        is_entry,
    };
    checker.check_function(function);
}

/// Bindings visible in one scope. `None` marks an unresolved type.
type Bindings<'p> = HashMap<&'p str, Option<Primitive>>;

struct BodyChecker<'p, 'e> {
    symbols: &'p SymbolTable,
    errors: &'e mut Vec<ValidationError>,
    scopes: Vec<Bindings<'p>>,
    function: &'p str,
    output: Option<Primitive>,
    /// `main` falls back to returning 0, as in C.
    is_entry: bool,
}

impl<'p> BodyChecker<'p, '_> {
    fn check_function(&mut self, function: &'p StaticBind) {
        // Parameter names and types were reported while building the symbol table.
        let params = function
            .header()
            .args
            .iter()
            .map(|p| (p.ident.as_str(), Primitive::from_name(p.type_.as_str())))
            .collect();
        self.scopes.push(params);
        self.check_statements(function.body().statements());
        self.scopes.pop();

        let needs_return = !self.is_entry
            && self.output.is_some_and(|ty| ty != Primitive::Void)
            && !matches!(
                function.body().statements().last(),
                Some(Statement::Return(_))
            );
        if needs_return {
            self.errors.push(ValidationError::MissingReturn {
                function: self.function.to_owned(),
            });
        }
    }

    fn check_block(&mut self, scope: &'p Scope) {
        self.scopes.push(Bindings::new());
        self.check_statements(scope.statements());
        self.scopes.pop();
    }

    fn check_statements(&mut self, statements: &'p [Statement]) {
        for statement in statements {
            self.check_statement(statement);
        }
    }

    fn check_statement(&mut self, statement: &'p Statement) {
        match statement {
            Statement::Expr(expr) => {
                let declared = resolve_type(expr.type_.as_str(), self.errors);
                match &expr.value {
                    Value::Scope(scope) => {
                        self.expect(declared, Primitive::Void);
                        self.check_block(scope);
                    }
                    value => self.check_value(value, declared),
                }
            }
            Statement::Bind { ident, expr } => {
                let name = ident.as_str();
                check_identifier(name, self.errors);
                let declared = resolve_type(expr.type_.as_str(), self.errors);
                if declared == Some(Primitive::Void) {
                    self.errors.push(ValidationError::VoidBinding {
                        name: name.to_owned(),
                    });
                }
                // C scopes a name from its own declarator, Rust from the end of
                // the `let`. Any mention of it in the initializer is ambiguous.
                if mentions(&expr.value, name) {
                    self.errors.push(ValidationError::SelfReferentialBinding {
                        name: name.to_owned(),
                    });
                }
                self.check_value(&expr.value, declared);
                self.bind(name, declared);
            }
            Statement::Return(value) => {
                if self.output == Some(Primitive::Void) {
                    self.errors.push(ValidationError::ReturnInVoidFunction {
                        function: self.function.to_owned(),
                    });
                    self.check_value(value, None);
                } else {
                    self.check_value(value, self.output);
                }
            }
        }
    }

    fn bind(&mut self, name: &'p str, ty: Option<Primitive>) {
        let Some(scope) = self.scopes.last_mut() else {
            return;
        };
        if scope.contains_key(name) {
            self.errors.push(ValidationError::DuplicateBinding {
                name: name.to_owned(),
            });
            return;
        }
        scope.insert(name, ty);
    }

    fn lookup(&self, ident: &Identifier) -> Option<Option<Primitive>> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(ident.as_str()).copied())
    }

    /// Check `value`, which must have type `expected` when that is known.
    fn check_value(&mut self, value: &'p Value, expected: Option<Primitive>) {
        match value {
            Value::Literal(literal) => self.check_literal(literal, expected),
            Value::Atom(atom) => {
                if self.symbols.atom_value(atom).is_none() {
                    self.errors.push(ValidationError::UndeclaredAtom {
                        name: atom.name().to_owned(),
                    });
                }
                self.expect(expected, Primitive::Atom);
            }
            Value::Identifier(ident) => match self.lookup(ident) {
                None => self.errors.push(ValidationError::UnboundIdentifier {
                    name: ident.as_str().to_owned(),
                }),
                Some(Some(found)) => self.expect(expected, found),
                Some(None) => {}
            },
            Value::Call(call) => self.check_call(call, expected),
            Value::Scope(_) => self.errors.push(ValidationError::ScopeAsValue),
        }
    }

    fn check_call(&mut self, call: &'p Call, expected: Option<Primitive>) {
        let name = call.symbol.as_str();
        // A local shadows the function of the same name on both targets.
        if self.lookup(&call.symbol).is_some() {
            self.errors.push(ValidationError::NotCallable {
                name: name.to_owned(),
            });
            for arg in &call.args {
                self.check_value(arg, None);
            }
            return;
        }

        let symbols = self.symbols;
        let Some(signature) = symbols.function(name) else {
            self.errors.push(ValidationError::UnknownFunction {
                name: name.to_owned(),
            });
            for arg in &call.args {
                self.check_value(arg, None);
            }
            return;
        };

        if signature.params.len() != call.args.len() {
            self.errors.push(ValidationError::ArityMismatch {
                name: name.to_owned(),
                expected: signature.params.len(),
                found: call.args.len(),
            });
            for arg in &call.args {
                self.check_value(arg, None);
            }
        } else {
            for (arg, &param) in call.args.iter().zip(&signature.params) {
                self.check_value(arg, param);
            }
        }

        if let Some(output) = signature.output {
            self.expect(expected, output);
        }
    }

    fn check_literal(&mut self, literal: &Literal, expected: Option<Primitive>) {
        if let Literal::Float(v) = literal
            && !v.is_finite()
        {
            self.errors.push(ValidationError::NonFiniteFloat);
        }

        let Some(expected) = expected else {
            return;
        };

        let (accepted, found) = match literal {
            Literal::Int(_) => (
                expected.is_integer() && expected != Primitive::Atom,
                "integer literal",
            ),
            Literal::Float(_) => (expected.kind() == PrimitiveKind::Float, "float literal"),
            Literal::String(_) => (expected == Primitive::String, "string literal"),
            Literal::Bool(_) => (expected == Primitive::Bool, "boolean literal"),
        };
        if !accepted {
            self.errors.push(ValidationError::TypeMismatch {
                expected: expected.name(),
                found,
            });
            return;
        }

        match *literal {
            Literal::Int(v) if !fits(v, expected) => {
                self.errors.push(ValidationError::LiteralOutOfRange {
                    value: v,
                    type_name: expected.name(),
                });
            }
            Literal::Float(v)
                if v.is_finite() && expected.bits() == Some(32) && !fits_f32(v) =>
            {
                self.errors.push(ValidationError::FloatOutOfRange {
                    type_name: expected.name(),
                });
            }
            _ => {}
        }
    }

    fn expect(&mut self, expected: Option<Primitive>, found: Primitive) {
        let Some(expected) = expected else {
            return;
        };
        if !compatible(expected, found) {
            self.errors.push(ValidationError::TypeMismatch {
                expected: expected.name(),
                found: found.name(),
            });
        }
    }
}

/// Whether `value` refers to `name`, as a variable or as a callee.
fn mentions(value: &Value, name: &str) -> bool {
    match value {
        Value::Identifier(ident) => ident.as_str() == name,
        Value::Call(call) => {
            call.symbol.as_str() == name || call.args.iter().any(|arg| mentions(arg, name))
        }
        Value::Literal(_) | Value::Atom(_) | Value::Scope(_) => false,
    }
}

/// Whether integer literal `v` is representable in integer type `ty`.
fn fits(v: i64, ty: Primitive) -> bool {
    let Some(bits) = ty.bits() else {
        return false;
    };
    let v = i128::from(v);
    let (min, max) = if ty.is_signed() {
        (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1)
    } else {
        (0, (1i128 << bits) - 1)
    };
    (min..=max).contains(&v)
}

/// Whether finite `v` stays finite when narrowed to 32 bits.
fn fits_f32(v: f64) -> bool {
    (v as f32).is_finite()
}
