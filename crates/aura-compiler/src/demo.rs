//! The canonical hello-world program.

use crate::ir::{Expr, FunctionHeader, Program, Scope, Statement, StaticBind, Value};

/// `hello_world()` binds a message and prints it; `main` calls it and
/// returns 0.
pub fn hello_world() -> Program {
    let hello = StaticBind::Function {
        header: FunctionHeader {
            ident: "hello_world".into(),
            args: vec![],
            output: "Void".into(),
        },
        body: Scope(vec![
            Statement::Bind {
                ident: "message".into(),
                expr: Expr::new(Value::string("Hello, world!\n"), "String"),
            },
            Statement::Expr(Expr::new(
                Value::call("print", vec![Value::ident("message")]),
                "Void",
            )),
        ]),
    };

    let main = StaticBind::Function {
        header: FunctionHeader {
            ident: "main".into(),
            args: vec![],
            output: "Int".into(),
        },
        body: Scope(vec![
            Statement::Expr(Expr::new(Value::call("hello_world", vec![]), "Void")),
            Statement::Return(Value::int(0)),
        ]),
    };

    Program {
        includes: vec![],
        atoms: vec![],
        statics: vec![hello],
        main,
    }
}
