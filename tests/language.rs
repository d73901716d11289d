use qlisp::{eval_source, ParseError, RuntimeError, Value};

fn eval_str(source: &str) -> Value {
    eval_source(source).unwrap_or_else(|e| panic!("Parsing failed for {source:?}: {e}"))
}

fn assert_renders(source: &str, expected: &str) {
    assert_eq!(eval_str(source).to_string(), expected, "source: {source}");
}

fn error_of(source: &str) -> RuntimeError {
    match eval_str(source) {
        Value::Error(e) => e,
        other => panic!("Expected an error value for {source:?}, got {other}"),
    }
}

#[test]
fn integer_literals_round_trip() {
    assert_renders("5", "5");
    assert_renders("0", "0");
    assert_renders("-17", "-17");
    assert_renders("9223372036854775807", "9223372036854775807");
}

#[test]
fn real_literals_render_fixed_point() {
    assert_renders("2.5", "2.500000");
    assert_renders("-0.25", "-0.250000");
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval_str("(+ 1 2)"), Value::Integer(3));
    assert_eq!(eval_str("(* 2 3 4)"), Value::Integer(24));
    assert_eq!(eval_str("(- 10 2 3)"), Value::Integer(5));
    assert_eq!(eval_str("(/ 7 2)"), Value::Integer(3));
    assert_eq!(eval_str("(% 7 3)"), Value::Integer(1));
    assert_eq!(eval_str("(+ 1 (* 2 3) (- 10 5))"), Value::Integer(12));
}

#[test]
fn top_level_sequence_forms_one_expression() {
    assert_eq!(eval_str("+ 1 2"), Value::Integer(3));
}

#[test]
fn mixed_arithmetic_promotes_per_step() {
    assert_eq!(eval_str("(+ 1 2.5)"), Value::Real(3.5));
    assert_eq!(eval_str("(+ 1 2)"), Value::Integer(3));
    assert_eq!(eval_str("(* 2 0.5)"), Value::Real(1.0));
    assert_eq!(eval_str("(min 1 2.5)"), Value::Real(1.0));

    // Promotion is local to the arithmetic step; other operands keep their
    // type.
    assert_renders("(list 1 2.5)", "{1 2.500000}");
}

#[test]
fn unary_minus_negates() {
    assert_eq!(eval_str("(- 5)"), Value::Integer(-5));
    assert_eq!(eval_str("(- 2.5)"), Value::Real(-2.5));

    // Other single-operand applications return the operand unchanged.
    assert_eq!(eval_str("(+ 5)"), Value::Integer(5));
    assert_eq!(eval_str("(min 5)"), Value::Integer(5));
}

#[test]
fn caret_is_bitwise_xor() {
    assert_eq!(eval_str("(^ 6 3)"), Value::Integer(5));
    assert_eq!(eval_str("(^ 5 5)"), Value::Integer(0));
    assert_eq!(eval_str("(^ 2 3)"), Value::Integer(1));
}

#[test]
fn min_and_max_fold() {
    assert_eq!(eval_str("(min 3 1 2)"), Value::Integer(1));
    assert_eq!(eval_str("(max 3 1 2)"), Value::Integer(3));
    assert_eq!(eval_str("(max 1 2.5)"), Value::Real(2.5));
}

#[test]
fn integer_arithmetic_wraps() {
    assert_eq!(eval_str("(+ 9223372036854775807 1)"),
               Value::Integer(i64::MIN));
    assert_eq!(eval_str("(- -9223372036854775808 1)"),
               Value::Integer(i64::MAX));
}

#[test]
fn division_by_zero_is_an_error_value() {
    assert_eq!(error_of("(/ 5 0)"), RuntimeError::DivideByZero);
    assert_eq!(error_of("(/ 5.0 0)"), RuntimeError::DivideByZero);
    assert_eq!(error_of("(/ 5 0.0)"), RuntimeError::DivideByZero);
    assert_eq!(error_of("(% 5 0)"), RuntimeError::DivideByZero);
}

#[test]
fn integer_only_operators_reject_reals() {
    assert_eq!(error_of("(% 7.0 3)"),
               RuntimeError::TypeMismatch { op:       "%",
                                            expected: "integer operands",
                                            found:    "real", });
    assert_eq!(error_of("(^ 1.0 2)"),
               RuntimeError::TypeMismatch { op:       "^",
                                            expected: "integer operands",
                                            found:    "real", });
}

#[test]
fn empty_sexpr_is_inert() {
    assert_renders("()", "()");
    assert_renders("(eval {})", "()");
}

#[test]
fn single_element_unwraps() {
    assert_renders("(5)", "5");
    assert_renders("((+ 1 2))", "3");
    assert_renders("(head)", "head");
}

#[test]
fn qexprs_are_inert_data() {
    assert_renders("{1 2 (+ 1 2)}", "{1 2 (+ 1 2)}");
    assert_renders("{head tail}", "{head tail}");
    assert_renders("{}", "{}");
}

#[test]
fn head_tail_init_len() {
    assert_renders("(head {1 2 3})", "{1}");
    assert_renders("(tail {1 2 3})", "{2 3}");
    assert_renders("(init {1 2 3})", "{1 2}");
    assert_eq!(eval_str("(len {1 2 3})"), Value::Integer(3));
    assert_eq!(eval_str("(len {})"), Value::Integer(0));
}

#[test]
fn join_concatenates() {
    assert_renders("(join {1 2} {3} {})", "{1 2 3}");
}

#[test]
fn head_and_tail_partition_a_list() {
    assert_renders("(join (head {1 2 3}) (tail {1 2 3}))", "{1 2 3}");
    assert_eq!(eval_str("(len (join (head {1 2 3}) (tail {1 2 3})))"),
               Value::Integer(3));
}

#[test]
fn len_is_additive_over_join() {
    assert_eq!(eval_str("(len (join {1 2} {3 4 5}))"),
               eval_str("(+ (len {1 2}) (len {3 4 5}))"));
}

#[test]
fn cons_prepends_and_tail_restores() {
    assert_renders("(cons 1 {2 3})", "{1 2 3}");
    assert_renders("(cons (+ 1 1) {3})", "{2 3}");
    assert_renders("(tail (cons 0 {7 8}))", "{7 8}");
    assert_renders("(cons {1} {2 3})", "{{1} 2 3}");
}

#[test]
fn list_collects_evaluated_arguments() {
    assert_renders("(list 1 2 (+ 1 2))", "{1 2 3}");
    assert_renders("(list)", "list");
}

#[test]
fn eval_reduces_quoted_lists() {
    assert_eq!(eval_str("(eval {+ 1 2})"), Value::Integer(3));
    assert_eq!(eval_str("(eval (head {(+ 1 2) (+ 10 20)}))"), Value::Integer(3));
}

#[test]
fn first_error_wins() {
    assert_eq!(error_of("(+ 1 (head {}) (/ 1 0))"),
               RuntimeError::EmptyContainer { op: "head" });
}

#[test]
fn an_error_displaces_its_container() {
    assert_eq!(error_of("(list (/ 1 0))"), RuntimeError::DivideByZero);
    assert_eq!(error_of("(+ 1 (+ 2 (/ 3 0)))"), RuntimeError::DivideByZero);
}

#[test]
fn unknown_function_is_an_error_value() {
    assert_eq!(error_of("(foo 1 2)"),
               RuntimeError::UnknownFunction { name: "foo".to_string() });
}

#[test]
fn non_symbol_head_is_an_error() {
    assert_eq!(error_of("(1 2 3)"),
               RuntimeError::NotASymbol { found: "integer" });
    assert_eq!(error_of("({1} 2 3)"),
               RuntimeError::NotASymbol { found: "q-expression" });
}

#[test]
fn arithmetic_rejects_non_numbers() {
    assert_eq!(error_of("(+ 1 {2})"),
               RuntimeError::NonNumericOperand { op:    "+",
                                                 found: "q-expression", });
}

#[test]
fn builtins_check_argument_shape() {
    assert_eq!(error_of("(head 5)"),
               RuntimeError::TypeMismatch { op:       "head",
                                            expected: "a q-expression",
                                            found:    "integer", });
    assert_eq!(error_of("(head {1} {2})"),
               RuntimeError::ArityMismatch { op:       "head",
                                             expected: 1,
                                             found:    2, });
    assert_eq!(error_of("(eval 5)"),
               RuntimeError::TypeMismatch { op:       "eval",
                                            expected: "a q-expression",
                                            found:    "integer", });
    assert_eq!(error_of("(join {1} 5)"),
               RuntimeError::TypeMismatch { op:       "join",
                                            expected: "a q-expression",
                                            found:    "integer", });
    assert_eq!(error_of("(cons 1 2)"),
               RuntimeError::TypeMismatch { op:       "cons",
                                            expected: "a q-expression",
                                            found:    "integer", });
}

#[test]
fn empty_container_operations_are_errors() {
    assert_eq!(error_of("(head {})"), RuntimeError::EmptyContainer { op: "head" });
    assert_eq!(error_of("(tail {})"), RuntimeError::EmptyContainer { op: "tail" });
    assert_eq!(error_of("(init {})"), RuntimeError::EmptyContainer { op: "init" });
}

#[test]
fn oversized_integer_literals_read_as_errors() {
    assert_eq!(error_of("(+ 1 99999999999999999999)"),
               RuntimeError::BadNumber { literal: "99999999999999999999".to_string() });

    // Inside quoted data the error value is inert and just renders.
    assert_renders("{99999999999999999999}",
                   "{error: invalid number literal '99999999999999999999'}");
}

#[test]
fn parse_errors_carry_line_numbers() {
    assert!(matches!(eval_source("(+ 1"),
                     Err(ParseError::ExpectedClosingParen { line: 1 })));
    assert!(matches!(eval_source("{1 2"),
                     Err(ParseError::ExpectedClosingBrace { line: 1 })));
    assert!(matches!(eval_source("(+ 1\n2"),
                     Err(ParseError::ExpectedClosingParen { line: 1 })));
    assert!(matches!(eval_source(")"),
                     Err(ParseError::UnexpectedToken { line: 1, .. })));
    assert!(matches!(eval_source(""),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(eval_source("(+ 1 @)"),
                     Err(ParseError::UnexpectedToken { line: 1, .. })));
}
