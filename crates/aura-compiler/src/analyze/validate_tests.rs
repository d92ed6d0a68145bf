use crate::analyze::{ValidationError, validate};
use crate::demo::hello_world;
use crate::ir::{
    Atom, Expr, FunctionHeader, Literal, Param, Program, Scope, Statement, StaticBind, Value,
};

fn function(name: &str, args: Vec<Param>, output: &str, body: Vec<Statement>) -> StaticBind {
    StaticBind::Function {
        header: FunctionHeader {
            ident: name.into(),
            args,
            output: output.into(),
        },
        body: Scope(body),
    }
}

fn program(statics: Vec<StaticBind>, main_body: Vec<Statement>) -> Program {
    Program {
        includes: vec![],
        atoms: vec![],
        statics,
        main: function("main", vec![], "Int", main_body),
    }
}

fn bind(name: &str, ty: &str, value: Value) -> Statement {
    Statement::Bind {
        ident: name.into(),
        expr: Expr::new(value, ty),
    }
}

fn expr(value: Value, ty: &str) -> Statement {
    Statement::Expr(Expr::new(value, ty))
}

fn block(body: Vec<Statement>) -> Statement {
    expr(Value::Scope(Scope(body)), "Void")
}

fn errors(program: &Program) -> Vec<ValidationError> {
    validate(program).unwrap_err().validation_errors().to_vec()
}

fn mismatch(expected: &'static str, found: &'static str) -> ValidationError {
    ValidationError::TypeMismatch { expected, found }
}

#[test]
fn hello_world_is_valid() {
    let symbols = validate(&hello_world()).unwrap();
    let hello = symbols.function("hello_world").unwrap();
    assert!(hello.params.is_empty());
    assert!(!hello.builtin);
    assert!(symbols.function("print").unwrap().builtin);
}

#[test]
fn atoms_numbered_in_declaration_order() {
    let mut p = program(vec![], vec![Statement::Return(Value::int(0))]);
    p.atoms = vec![Atom::from("ok"), Atom::from("not-found"), Atom::from("eof")];

    let symbols = validate(&p).unwrap();
    let atoms: Vec<_> = symbols.atoms().collect();
    assert_eq!(
        atoms,
        [
            (Atom::from("ok"), 0),
            (Atom::from("not-found"), 1),
            (Atom::from("eof"), 2),
        ]
    );
    assert_eq!(symbols.atom_value(&Atom::from("eof")), Some(2));
    assert_eq!(symbols.atom_value(&Atom::from("missing")), None);
}

#[test]
fn duplicate_and_malformed_atoms() {
    let mut p = program(vec![], vec![]);
    p.atoms = vec![Atom::from("ok"), Atom::from("Bad_Name"), Atom::from("ok")];

    assert_eq!(
        errors(&p),
        [
            ValidationError::InvalidAtomName {
                name: "Bad_Name".into()
            },
            ValidationError::DuplicateAtom { name: "ok".into() },
        ]
    );
}

#[test]
fn undeclared_atom() {
    let p = program(vec![], vec![bind("status", "Atom", Value::atom("ok"))]);
    assert_eq!(
        errors(&p),
        [ValidationError::UndeclaredAtom { name: "ok".into() }]
    );
}

#[test]
fn atom_is_not_an_integer() {
    let mut p = program(
        vec![],
        vec![
            bind("status", "Atom", Value::atom("ok")),
            bind("raw", "UInt64", Value::ident("status")),
            bind("forged", "Atom", Value::int(0)),
        ],
    );
    p.atoms = vec![Atom::from("ok")];

    assert_eq!(
        errors(&p),
        [
            mismatch("UInt64", "Atom"),
            mismatch("Atom", "integer literal"),
        ]
    );
}

#[test]
fn unknown_type() {
    let p = program(vec![], vec![bind("x", "Integer", Value::int(1))]);
    assert_eq!(
        errors(&p),
        [ValidationError::UnknownType {
            name: "Integer".into()
        }]
    );
}

#[test]
fn void_binding() {
    let p = program(
        vec![],
        vec![bind("nothing", "Void", Value::call("print", vec![Value::string("")]))],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::VoidBinding {
            name: "nothing".into()
        }]
    );
}

#[test]
fn invalid_and_reserved_identifiers() {
    let p = program(
        vec![],
        vec![
            bind("my-var", "Int", Value::int(1)),
            bind("let", "Int", Value::int(2)),
            bind("Int8", "Int", Value::int(3)),
            bind("__Atom_X", "Int", Value::int(4)),
        ],
    );
    assert_eq!(
        errors(&p),
        [
            ValidationError::InvalidIdentifier {
                name: "my-var".into()
            },
            ValidationError::ReservedIdentifier { name: "let".into() },
            ValidationError::ReservedIdentifier {
                name: "Int8".into()
            },
            ValidationError::ReservedIdentifier {
                name: "__Atom_X".into()
            },
        ]
    );
}

#[test]
fn unbound_identifier() {
    let p = program(
        vec![],
        vec![expr(Value::call("print", vec![Value::ident("message")]), "Void")],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::UnboundIdentifier {
            name: "message".into()
        }]
    );
}

#[test]
fn names_from_generated_headers_are_reserved() {
    let p = program(
        vec![function("puts", vec![], "Void", vec![])],
        vec![
            bind("EOF", "Int", Value::int(1)),
            bind("int32_t", "Int", Value::int(2)),
            bind("stdout", "Int", Value::int(3)),
            bind("None", "Int", Value::int(4)),
            bind("_Private", "Int", Value::int(5)),
            bind("__x", "Int", Value::int(6)),
            bind("_lower", "Int", Value::int(7)),
        ],
    );
    let reserved: Vec<_> = errors(&p)
        .into_iter()
        .map(|e| match e {
            ValidationError::ReservedIdentifier { name } => name,
            other => panic!("unexpected error: {other}"),
        })
        .collect();
    assert_eq!(
        reserved,
        ["puts", "EOF", "int32_t", "stdout", "None", "_Private", "__x"]
    );
}

#[test]
fn initializer_cannot_see_its_own_name() {
    let p = program(vec![], vec![bind("x", "Int", Value::ident("x"))]);
    assert_eq!(
        errors(&p),
        [
            ValidationError::SelfReferentialBinding { name: "x".into() },
            ValidationError::UnboundIdentifier { name: "x".into() },
        ]
    );
}

#[test]
fn initializer_cannot_mention_a_shadowed_name() {
    let p = program(
        vec![],
        vec![
            bind("x", "Int", Value::int(7)),
            block(vec![
                bind("x", "Int", Value::ident("x")),
                expr(Value::call("print", vec![Value::string("")]), "Void"),
            ]),
        ],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::SelfReferentialBinding { name: "x".into() }]
    );
}

#[test]
fn initializer_cannot_call_a_function_it_shadows() {
    let p = program(
        vec![function("f", vec![], "Int", vec![Statement::Return(Value::int(0))])],
        vec![bind("f", "Int", Value::call("f", vec![]))],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::SelfReferentialBinding { name: "f".into() }]
    );
}

#[test]
fn local_shadowing_a_function_is_not_callable() {
    let p = program(
        vec![function("helper", vec![], "Void", vec![])],
        vec![
            bind("helper", "Int", Value::int(1)),
            expr(Value::call("helper", vec![]), "Void"),
            Statement::Return(Value::int(0)),
        ],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::NotCallable {
            name: "helper".into()
        }]
    );

    let p = program(
        vec![],
        vec![
            bind("print", "String", Value::string("x")),
            expr(Value::call("print", vec![Value::ident("print")]), "Void"),
        ],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::NotCallable {
            name: "print".into()
        }]
    );
}

#[test]
fn block_bindings_end_with_the_block() {
    let p = program(
        vec![],
        vec![
            block(vec![bind("inner", "Int", Value::int(1))]),
            Statement::Return(Value::ident("inner")),
        ],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::UnboundIdentifier {
            name: "inner".into()
        }]
    );
}

#[test]
fn blocks_see_outer_bindings_and_may_shadow() {
    let p = program(
        vec![],
        vec![
            bind("x", "Int", Value::int(1)),
            block(vec![
                bind("y", "Int", Value::ident("x")),
                bind("x", "String", Value::string("shadow")),
                expr(Value::call("print", vec![Value::ident("x")]), "Void"),
            ]),
            Statement::Return(Value::ident("x")),
        ],
    );
    assert!(validate(&p).is_ok());
}

#[test]
fn duplicate_binding_in_one_scope() {
    let p = program(
        vec![],
        vec![
            bind("x", "Int", Value::int(1)),
            bind("x", "Int", Value::int(2)),
        ],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::DuplicateBinding { name: "x".into() }]
    );
}

#[test]
fn binding_may_not_redeclare_a_parameter() {
    let add_one = function(
        "add_one",
        vec![Param::new("n", "Int")],
        "Int",
        vec![
            bind("n", "Int", Value::int(1)),
            Statement::Return(Value::ident("n")),
        ],
    );
    let p = program(vec![add_one], vec![]);
    assert_eq!(
        errors(&p),
        [ValidationError::DuplicateBinding { name: "n".into() }]
    );
}

#[test]
fn duplicate_parameter() {
    let f = function(
        "f",
        vec![Param::new("a", "Int"), Param::new("a", "Int")],
        "Void",
        vec![],
    );
    let p = program(vec![f], vec![]);
    assert_eq!(
        errors(&p),
        [ValidationError::DuplicateBinding { name: "a".into() }]
    );
}

#[test]
fn void_parameter() {
    let f = function("f", vec![Param::new("a", "Void")], "Void", vec![]);
    let p = program(vec![f], vec![]);
    assert_eq!(
        errors(&p),
        [ValidationError::VoidBinding { name: "a".into() }]
    );
}

#[test]
fn unknown_function() {
    let p = program(
        vec![],
        vec![expr(Value::call("println", vec![Value::string("hi")]), "Void")],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::UnknownFunction {
            name: "println".into()
        }]
    );
}

#[test]
fn print_takes_one_string() {
    let p = program(
        vec![],
        vec![
            expr(Value::call("print", vec![]), "Void"),
            expr(Value::call("print", vec![Value::int(42)]), "Void"),
        ],
    );
    assert_eq!(
        errors(&p),
        [
            ValidationError::ArityMismatch {
                name: "print".into(),
                expected: 1,
                found: 0,
            },
            mismatch("String", "integer literal"),
        ]
    );
}

#[test]
fn print_returns_void() {
    let p = program(
        vec![],
        vec![bind("n", "Int", Value::call("print", vec![Value::string("x")]))],
    );
    assert_eq!(errors(&p), [mismatch("Int", "Void")]);
}

#[test]
fn statics_may_call_each_other_in_any_order() {
    let first = function(
        "first",
        vec![],
        "Int",
        vec![Statement::Return(Value::call("second", vec![Value::int(2)]))],
    );
    let second = function(
        "second",
        vec![Param::new("n", "Int")],
        "Int",
        vec![Statement::Return(Value::ident("n"))],
    );
    let p = program(
        vec![first, second],
        vec![Statement::Return(Value::call("first", vec![]))],
    );
    assert!(validate(&p).is_ok());
}

#[test]
fn argument_types_follow_parameters() {
    let greet = function(
        "greet",
        vec![Param::new("name", "String"), Param::new("times", "UInt8")],
        "Void",
        vec![expr(Value::call("print", vec![Value::ident("name")]), "Void")],
    );
    let p = program(
        vec![greet],
        vec![expr(
            Value::call(
                "greet",
                vec![Value::Literal(Literal::Bool(true)), Value::int(300)],
            ),
            "Void",
        )],
    );
    assert_eq!(
        errors(&p),
        [
            mismatch("String", "boolean literal"),
            ValidationError::LiteralOutOfRange {
                value: 300,
                type_name: "UInt8"
            },
        ]
    );
}

#[test]
fn integer_literal_ranges() {
    let p = program(
        vec![],
        vec![
            bind("a", "UInt8", Value::int(255)),
            bind("b", "UInt8", Value::int(256)),
            bind("c", "UInt8", Value::int(-1)),
            bind("d", "Int8", Value::int(-128)),
            bind("e", "Int8", Value::int(128)),
            bind("f", "Int64", Value::int(i64::MIN)),
            bind("g", "UInt64", Value::int(i64::MAX)),
        ],
    );
    assert_eq!(
        errors(&p),
        [
            ValidationError::LiteralOutOfRange {
                value: 256,
                type_name: "UInt8"
            },
            ValidationError::LiteralOutOfRange {
                value: -1,
                type_name: "UInt8"
            },
            ValidationError::LiteralOutOfRange {
                value: 128,
                type_name: "Int8"
            },
        ]
    );
}

#[test]
fn literal_kinds_must_match() {
    let p = program(
        vec![],
        vec![
            bind("a", "Float", Value::int(1)),
            bind("b", "Int", Value::Literal(Literal::Float(1.5))),
            bind("c", "Bool", Value::string("true")),
            bind("d", "Float64", Value::Literal(Literal::Float(1.5))),
        ],
    );
    assert_eq!(
        errors(&p),
        [
            mismatch("Float", "integer literal"),
            mismatch("Int", "float literal"),
            mismatch("Bool", "string literal"),
        ]
    );
}

#[test]
fn non_finite_float() {
    let p = program(
        vec![],
        vec![bind("x", "Float64", Value::Literal(Literal::Float(f64::NAN)))],
    );
    assert_eq!(errors(&p), [ValidationError::NonFiniteFloat]);
}

#[test]
fn float_literal_must_fit_32_bits() {
    let p = program(
        vec![],
        vec![
            bind("a", "Float", Value::Literal(Literal::Float(1e300))),
            bind("b", "Float64", Value::Literal(Literal::Float(1e300))),
            bind("c", "Float32", Value::Literal(Literal::Float(3.0e38))),
        ],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::FloatOutOfRange { type_name: "Float" }]
    );
}

#[test]
fn aliases_of_one_host_type_are_compatible() {
    let p = program(
        vec![],
        vec![
            bind("a", "Int32", Value::int(7)),
            bind("b", "Int", Value::ident("a")),
            bind("c", "Float32", Value::Literal(Literal::Float(0.5))),
            bind("d", "Float", Value::ident("c")),
            Statement::Return(Value::ident("a")),
        ],
    );
    assert!(validate(&p).is_ok());
}

#[test]
fn return_type_must_match() {
    let p = program(vec![], vec![Statement::Return(Value::string("done"))]);
    assert_eq!(errors(&p), [mismatch("Int", "string literal")]);
}

#[test]
fn return_in_void_function() {
    let f = function("f", vec![], "Void", vec![Statement::Return(Value::int(1))]);
    let p = program(vec![f], vec![]);
    assert_eq!(
        errors(&p),
        [ValidationError::ReturnInVoidFunction {
            function: "f".into()
        }]
    );
}

#[test]
fn scope_is_not_a_value() {
    let p = program(
        vec![],
        vec![bind("x", "Int", Value::Scope(Scope(vec![])))],
    );
    assert_eq!(errors(&p), [ValidationError::ScopeAsValue]);
}

#[test]
fn block_statement_is_void() {
    let p = program(vec![], vec![expr(Value::Scope(Scope(vec![])), "Int")]);
    assert_eq!(errors(&p), [mismatch("Int", "Void")]);
}

#[test]
fn main_signature() {
    let mut p = program(vec![], vec![]);
    p.main = function("start", vec![], "Int", vec![]);
    assert_eq!(errors(&p), [ValidationError::InvalidMain]);

    p.main = function("main", vec![], "Void", vec![]);
    assert_eq!(errors(&p), [ValidationError::InvalidMain]);

    p.main = function("main", vec![Param::new("argc", "Int")], "Int", vec![]);
    assert_eq!(errors(&p), [ValidationError::InvalidMain]);
}

#[test]
fn builtins_cannot_be_redefined() {
    let print = function("print", vec![Param::new("s", "String")], "Void", vec![]);
    let main = function("main", vec![], "Int", vec![Statement::Return(Value::int(0))]);
    let p = program(vec![print, main], vec![]);
    assert_eq!(
        errors(&p),
        [
            ValidationError::BuiltinRedefined {
                name: "print".into()
            },
            ValidationError::BuiltinRedefined {
                name: "main".into()
            },
        ]
    );
}

#[test]
fn duplicate_function() {
    let a = function("helper", vec![], "Void", vec![]);
    let b = function("helper", vec![], "Void", vec![]);
    let p = program(vec![a, b], vec![]);
    assert_eq!(
        errors(&p),
        [ValidationError::DuplicateFunction {
            name: "helper".into()
        }]
    );
}

#[test]
fn main_is_not_callable() {
    let p = program(
        vec![],
        vec![Statement::Return(Value::call("main", vec![]))],
    );
    assert_eq!(
        errors(&p),
        [ValidationError::UnknownFunction {
            name: "main".into()
        }]
    );
}

#[test]
fn invalid_includes() {
    let mut p = program(vec![], vec![]);
    p.includes = vec![
        "math.h".into(),
        String::new(),
        "evil\".h".into(),
        "line\n.h".into(),
    ];
    assert_eq!(
        errors(&p),
        [
            ValidationError::InvalidInclude {
                path: String::new()
            },
            ValidationError::InvalidInclude {
                path: "evil\".h".into()
            },
            ValidationError::InvalidInclude {
                path: "line\n.h".into()
            },
        ]
    );
}

#[test]
fn reports_every_problem() {
    let mut p = program(
        vec![],
        vec![
            bind("a", "Nope", Value::int(1)),
            expr(Value::call("missing", vec![]), "Void"),
        ],
    );
    p.atoms = vec![Atom::from("x"), Atom::from("x")];

    let err = validate(&p).unwrap_err();
    assert_eq!(err.to_string(), "program validation failed with 3 errors");
    assert_eq!(
        err.validation_errors(),
        [
            ValidationError::DuplicateAtom { name: "x".into() },
            ValidationError::UnknownType {
                name: "Nope".into()
            },
            ValidationError::UnknownFunction {
                name: "missing".into()
            },
        ]
    );
}

#[test]
fn error_messages() {
    let cases = [
        (
            ValidationError::ArityMismatch {
                name: "print".into(),
                expected: 1,
                found: 2,
            },
            "`print` takes 1 arguments but 2 were given",
        ),
        (
            mismatch("String", "integer literal"),
            "expected String, found integer literal",
        ),
        (
            ValidationError::LiteralOutOfRange {
                value: 256,
                type_name: "UInt8",
            },
            "literal 256 does not fit in UInt8",
        ),
        (
            ValidationError::InvalidMain,
            "entry point must be declared as `Int main()`",
        ),
    ];
    for (error, message) in cases {
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn non_void_static_must_end_with_return() {
    let f = function(
        "answer",
        vec![],
        "Int",
        vec![bind("x", "Int", Value::int(42))],
    );
    let p = program(vec![f], vec![]);
    assert_eq!(
        errors(&p),
        [ValidationError::MissingReturn {
            function: "answer".into()
        }]
    );
}

#[test]
fn main_may_omit_return() {
    let p = program(vec![], vec![expr(Value::call("print", vec![Value::string("hi")]), "Void")]);
    assert!(validate(&p).is_ok());
}
