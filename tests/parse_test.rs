use keycalc::compile;
use keycalc::lang::ast::*;
use keycalc::lang::token::*;
use keycalc::lang::{ErrorCode, Num, Stage};

fn num(s: &str) -> Num {
    s.parse().unwrap()
}

#[test]
fn test_add_program() {
    let program = compile("2 3 +").unwrap();
    assert_eq!(
        program.statements(),
        &[
            Statement::Push(0..1, num("2")),
            Statement::Push(2..3, num("3")),
            Statement::Arithmetic(4..5, Operator::Plus),
        ]
    );
}

#[test]
fn test_literal_digits() {
    let program = compile("3.14").unwrap();
    match &program.statements()[0] {
        Statement::Push(_, n) => {
            assert_eq!(n.integer_digits(), &[3]);
            assert_eq!(n.fractional_digits(), &[1, 4]);
        }
        s => panic!("{:?}", s),
    }
}

#[test]
fn test_labels_interleaved() {
    let program = compile("1 lbl a 2 rtn 3 lbl b xeq a rtn").unwrap();
    assert_eq!(program.len(), 4);
    let labels: Vec<&str> = program.labels().map(|(name, _)| name).collect();
    assert_eq!(labels, vec!["a", "b"]);
    let (_, body) = program.labels().nth(1).unwrap();
    assert_eq!(body, &[Statement::Execute(22..25, "a".to_string())]);
}

#[test]
fn test_nested_label_not_allowed() {
    let e = compile("lbl a lbl b rtn rtn").unwrap_err();
    assert_eq!(e.code(), ErrorCode::NestedLabel);
    assert_eq!(e.stage(), Stage::Parse);
}

#[test]
fn test_missing_return() {
    let e = compile("lbl a sto x").unwrap_err();
    assert_eq!(e.code(), ErrorCode::MissingReturn);
    assert_eq!(e.text(), "a");
    assert_eq!(e.column(), 0..3);
}

#[test]
fn test_stray_return() {
    let e = compile("lbl a rtn rtn").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnexpectedToken);
    assert_eq!(e.column(), 10..13);
}

#[test]
fn test_keyword_is_not_identifier() {
    let e = compile("sto sto").unwrap_err();
    assert_eq!(e.code(), ErrorCode::ExpectedIdentifier);
    assert_eq!(e.column(), 4..7);
}

#[test]
fn test_missing_identifier_at_end() {
    let e = compile("1 xeq").unwrap_err();
    assert_eq!(e.code(), ErrorCode::ExpectedIdentifier);
    assert_eq!(e.column(), 5..5);
}

#[test]
fn test_listing_recompiles() {
    let s = "lbl sq rcl x rcl x * rtn 6 sto x xeq sq 2 >=";
    let program = compile(s).unwrap();
    assert_eq!(program.to_string(), s);
    assert_eq!(compile(&program.to_string()).unwrap(), program);
}

#[test]
fn test_deterministic() {
    let s = "lbl f 1 2 / rtn xeq f 0.5 <";
    assert_eq!(compile(s).unwrap(), compile(s).unwrap());
}
