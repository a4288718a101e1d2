//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Variable declarations and return statements
//! - Operator precedence and associativity
//! - Named, closure and wrapped types
//! - Closure expressions
//! - Error cases

use crate::{
    ast::{
        ast::{Expr, Program, Stmt, TypeDecl},
        expressions::{
            BinaryOperatorNode, BoolLiteral, Identifier, IntLiteral, OperatorToken, RealLiteral,
            StringLiteral, UnaryOperatorNode,
        },
        statements::LetDeclaration,
        types::{ClosureType, TypeList},
    },
    errors::errors::{Error, ErrorKind},
    lexer::{
        lexer::Lexer,
        tokens::{Operator, TokenKind},
    },
};

use super::{lookups::BindingPower, parser::parse, parser::Parser, types::parse_type};

fn parse_ok(source: &str) -> Program {
    parse(source.to_string(), Some("test.toy".to_string())).unwrap()
}

fn parse_err(source: &str) -> Error {
    parse(source.to_string(), Some("test.toy".to_string())).unwrap_err()
}

fn returned(source: &str) -> Expr {
    match parse_ok(source).body.remove(0) {
        Stmt::Return(stmt) => stmt.value,
        other => panic!("expected a return statement, got {:?}", other),
    }
}

fn type_of(source: &str) -> TypeDecl {
    let mut parser = Parser::new(Lexer::new(source.to_string(), None)).unwrap();
    let type_decl = parse_type(&mut parser).unwrap();
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
    type_decl
}

fn int(value: i64) -> Expr {
    Expr::Int(IntLiteral::new(value.to_string(), value))
}

fn ident(name: &str) -> Expr {
    Expr::Ident(Identifier::new(name))
}

fn bin(op: Operator, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary(BinaryOperatorNode::new(OperatorToken::new(op), lhs, rhs))
}

fn un(op: Operator, operand: Expr) -> Expr {
    Expr::Unary(UnaryOperatorNode::new(OperatorToken::new(op), operand))
}

fn named(name: &str) -> TypeDecl {
    TypeDecl::Named(Identifier::new(name))
}

#[test]
fn test_parse_let_with_int() {
    let program = parse_ok("let x : int := 5;");

    assert_eq!(
        program.body,
        vec![Stmt::Let(LetDeclaration::new(
            Identifier::new("x"),
            named("int"),
            Some(int(5)),
        ))]
    );
}

#[test]
fn test_parse_let_with_real() {
    let program = parse_ok("let x : real := 5.0;");

    match &program.body[0] {
        Stmt::Let(stmt) => {
            assert_eq!(stmt.init, Some(Expr::Real(RealLiteral::new("5.0", 5.0))));
        }
        other => panic!("expected a let declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_let_without_initializer() {
    let program = parse_ok("let flag : bool;");

    assert_eq!(
        program.body,
        vec![Stmt::Let(LetDeclaration::new(
            Identifier::new("flag"),
            named("bool"),
            None,
        ))]
    );
}

#[test]
fn test_parse_other_literals() {
    assert_eq!(
        returned("return true;"),
        Expr::Bool(BoolLiteral::new("true", true))
    );
    assert_eq!(
        returned("return false;"),
        Expr::Bool(BoolLiteral::new("false", false))
    );
    assert_eq!(
        returned(r#"return "hi";"#),
        Expr::Str(StringLiteral::new(r#""hi""#))
    );
    assert_eq!(returned("return truex;"), ident("truex"));
    assert_eq!(returned("return -4;"), int(-4));
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_ok("let x : int := 10;\nlet y : int := 20;\nreturn x + y;");

    assert_eq!(program.len(), 3);
    assert!(matches!(program.body[0], Stmt::Let(_)));
    assert!(matches!(program.body[1], Stmt::Let(_)));
    assert!(matches!(program.body[2], Stmt::Return(_)));
}

#[test]
fn test_parse_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        returned("return 1 + 2 * 3;"),
        bin(Operator::Plus, int(1), bin(Operator::Times, int(2), int(3)))
    );
}

#[test]
fn test_parse_exponent_is_right_associative() {
    assert_eq!(
        returned("return 2 ** 3 ** 2;"),
        bin(Operator::Exp, int(2), bin(Operator::Exp, int(3), int(2)))
    );
}

#[test]
fn test_parse_subtraction_is_left_associative() {
    assert_eq!(
        returned("return 1 - 2 - 3;"),
        bin(Operator::Minus, bin(Operator::Minus, int(1), int(2)), int(3))
    );
}

#[test]
fn test_parse_exponent_against_multiplication() {
    assert_eq!(
        returned("return 2 ** 3 * 4;"),
        bin(Operator::Times, bin(Operator::Exp, int(2), int(3)), int(4))
    );
    assert_eq!(
        returned("return 2 * 3 ** 2;"),
        bin(Operator::Times, int(2), bin(Operator::Exp, int(3), int(2)))
    );
}

#[test]
fn test_parse_relational_binds_tighter_than_arithmetic() {
    assert_eq!(
        returned("return 1 + 2 == 3;"),
        bin(Operator::Plus, int(1), bin(Operator::Eq, int(2), int(3)))
    );
    assert_eq!(
        returned("return 2 ** 3 >= 4;"),
        bin(Operator::Exp, int(2), bin(Operator::GreaterEq, int(3), int(4)))
    );
}

#[test]
fn test_parse_logical_binds_tighter_than_relational() {
    assert_eq!(
        returned("return 1 < 2 and 3 < 4;"),
        bin(
            Operator::Less,
            bin(Operator::Less, int(1), bin(Operator::And, int(2), int(3))),
            int(4)
        )
    );
    assert_eq!(
        returned("return a or b and c;"),
        bin(Operator::And, bin(Operator::Or, ident("a"), ident("b")), ident("c"))
    );
}

#[test]
fn test_parse_prefix_operators_bind_tightest() {
    assert_eq!(
        returned("return - a * b;"),
        bin(Operator::Times, un(Operator::Minus, ident("a")), ident("b"))
    );
    assert_eq!(
        returned("return not a and b;"),
        bin(Operator::And, un(Operator::Not, ident("a")), ident("b"))
    );
    assert_eq!(
        returned("return - - 1;"),
        un(Operator::Minus, un(Operator::Minus, int(1)))
    );
    assert_eq!(
        returned("return a ** - b ** c;"),
        bin(
            Operator::Exp,
            ident("a"),
            bin(Operator::Exp, un(Operator::Minus, ident("b")), ident("c"))
        )
    );
}

#[test]
fn test_parse_parenthesized_expression() {
    assert_eq!(
        returned("return (1 + 2) * 3;"),
        bin(Operator::Times, bin(Operator::Plus, int(1), int(2)), int(3))
    );
    assert_eq!(returned("return ((x));"), ident("x"));
    assert_eq!(
        returned("return (x) % (- y);"),
        bin(Operator::Mod, ident("x"), un(Operator::Minus, ident("y")))
    );
}

#[test]
fn test_parse_named_type() {
    assert_eq!(type_of("int"), named("int"));
}

#[test]
fn test_parse_single_wrapped_type() {
    assert_eq!(
        type_of("(int,)"),
        TypeDecl::Wrapped(TypeList::new(vec![named("int")]))
    );
}

#[test]
fn test_parse_wrapped_type_list() {
    assert_eq!(
        type_of("(int, real, bool)"),
        TypeDecl::Wrapped(TypeList::new(vec![
            named("int"),
            named("real"),
            named("bool")
        ]))
    );
}

#[test]
fn test_parse_closure_type() {
    assert_eq!(
        type_of("(int, real -> bool)"),
        TypeDecl::Closure(ClosureType::new(
            TypeList::new(vec![named("int"), named("real")]),
            named("bool"),
        ))
    );
}

#[test]
fn test_parse_nested_types() {
    assert_eq!(
        type_of("((int,) -> (int -> (real, bool)))"),
        TypeDecl::Closure(ClosureType::new(
            TypeList::new(vec![TypeDecl::Wrapped(TypeList::new(vec![named("int")]))]),
            TypeDecl::Closure(ClosureType::new(
                TypeList::new(vec![named("int")]),
                TypeDecl::Wrapped(TypeList::new(vec![named("real"), named("bool")])),
            )),
        ))
    );
}

#[test]
fn test_parse_type_errors() {
    for source in ["(int)", "(int, real,)", "(-> int)", "(int ->)", "(int, -> int)", "()"] {
        let mut parser = Parser::new(Lexer::new(source.to_string(), None)).unwrap();
        let error = parse_type(&mut parser).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Syntax, "source: {}", source);
    }
}

#[test]
fn test_parse_closure_expression() {
    let program = parse_ok("let inc : (int -> int) := (int -> int) { let y : int := 1; return y; };");

    let Stmt::Let(stmt) = &program.body[0] else {
        panic!("expected a let declaration");
    };
    let Some(Expr::Closure(closure)) = &stmt.init else {
        panic!("expected a closure initializer");
    };

    assert_eq!(
        closure.closure_type,
        ClosureType::new(TypeList::new(vec![named("int")]), named("int"))
    );
    assert_eq!(closure.body.len(), 2);
    assert_eq!(stmt.type_decl, TypeDecl::Closure(closure.closure_type.clone()));
}

#[test]
fn test_parse_closure_with_wrapped_input() {
    let expr = returned("return ((int,), real -> bool) { return true; };");

    let Expr::Closure(closure) = expr else {
        panic!("expected a closure");
    };
    assert_eq!(
        closure.closure_type.in_types,
        TypeList::new(vec![
            TypeDecl::Wrapped(TypeList::new(vec![named("int")])),
            named("real")
        ])
    );
}

#[test]
fn test_parse_closure_in_parentheses_and_operators() {
    let expr = returned("return ((int -> int) { return 1; }) + (a -> b) { return 2; } * 3;");

    let Expr::Binary(sum) = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(sum.op.op, Operator::Plus);
    assert!(matches!(*sum.lhs, Expr::Closure(_)));

    let Expr::Binary(product) = *sum.rhs else {
        panic!("expected a product");
    };
    assert_eq!(product.op.op, Operator::Times);
    assert!(matches!(*product.lhs, Expr::Closure(_)));
    assert_eq!(*product.rhs, int(3));
}

#[test]
fn test_parse_nested_closures() {
    let expr = returned("return (int -> (int -> int)) { return (int -> int) { return 0; }; };");

    let Expr::Closure(outer) = expr else {
        panic!("expected a closure");
    };
    let Stmt::Return(inner) = &outer.body.body[0] else {
        panic!("expected a return statement");
    };
    assert!(matches!(inner.value, Expr::Closure(_)));
}

#[test]
fn test_parse_empty_input() {
    let error = parse_err("");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), "EOF");
}

#[test]
fn test_parse_whitespace_only_input() {
    let error = parse_err("  \n\t\n");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_position().line, 3);
}

#[test]
fn test_parse_missing_semicolon() {
    let error = parse_err("let x : int := 5");
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), "EOF");

    let error = parse_err("return 1\nreturn 2;");
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), "return");
    assert_eq!(error.get_position().line, 2);
}

#[test]
fn test_parse_illegal_character() {
    let error = parse_err("let x : int := 5 $ 2;");

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_token(), "$");
}

#[test]
fn test_parse_real_without_fraction_digits() {
    let error = parse_err("let x : real := 5.;");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), ".");
}

#[test]
fn test_parse_adjacent_negative_literal() {
    let error = parse_err("return 1 -2;");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), "-2");
}

#[test]
fn test_parse_missing_colon() {
    let error = parse_err("let x int;");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), "int");
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_empty_closure_body() {
    let error = parse_err("return (int -> int) { };");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), "}");
}

#[test]
fn test_parse_unterminated_closure_body() {
    let error = parse_err("return (int -> int) { return 1;");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), "EOF");
}

#[test]
fn test_parse_wrapped_type_in_expression() {
    let error = parse_err("return (int,);");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), ")");
}

#[test]
fn test_parse_closure_type_without_body() {
    let error = parse_err("return (int -> int);");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), ";");
}

#[test]
fn test_parse_expression_statement_rejected() {
    let error = parse_err("x;");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), "x");
}

#[test]
fn test_parse_dangling_operator() {
    let error = parse_err("return 1 +;");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_token(), ";");
}

#[test]
fn test_parses_do_not_share_line_numbers() {
    let _ = parse_ok("let a : int;\n\n\n\nlet b : int;\n");
    let error = parse_err("return ;");

    assert_eq!(error.get_position().line, 1);
}

#[test]
fn test_binding_power_order() {
    assert!(BindingPower::Additive < BindingPower::Multiplicative);
    assert!(BindingPower::Multiplicative < BindingPower::Exponent);
    assert!(BindingPower::Exponent < BindingPower::Relational);
    assert!(BindingPower::Relational < BindingPower::Logical);
    assert!(BindingPower::Logical < BindingPower::Unary);
    assert_eq!(BindingPower::Exponent.lower(), BindingPower::Multiplicative);
}
