use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, value::Value},
};

/// Applies an arithmetic operator to its argument list.
///
/// All arguments must be numeric; the first offender aborts the operation
/// before anything is computed. The arguments are then reduced by a
/// left-to-right binary fold starting from the first one. A single-argument
/// `-` negates its operand instead of folding; every other single-argument
/// application returns the operand unchanged.
///
/// Each fold step involving a real operand promotes both sides to real for
/// that step only; integer pairs stay integral.
///
/// # Example
/// ```
/// use qlisp::{interpreter::ops::apply, Value};
///
/// let result = apply("+", vec![Value::Integer(1), Value::Real(2.5)]).unwrap();
/// assert_eq!(result, Value::Real(3.5));
/// ```
pub fn apply(op: &'static str, mut args: Vec<Value>) -> EvalResult<Value> {
    if let Some(bad) = args.iter().find(|arg| !arg.is_number()) {
        return Err(RuntimeError::NonNumericOperand { op,
                                                     found: bad.type_name() });
    }

    let first = args.remove(0);

    if op == "-" && args.is_empty() {
        return Ok(negated(first));
    }

    let mut acc = first;
    for right in args {
        acc = apply_binary(op, acc, right)?;
    }

    Ok(acc)
}

fn negated(value: Value) -> Value {
    match value {
        Value::Integer(n) => Value::Integer(n.wrapping_neg()),
        Value::Real(r) => Value::Real(-r),
        _ => unreachable!("operands are checked numeric before folding"),
    }
}

/// One fold step. Integer pairs use the integer table; any real operand
/// promotes the step to the real table.
fn apply_binary(op: &str, left: Value, right: Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => integer_op(op, a, b),
        (left, right) => real_op(op, real_operand(&left), real_operand(&right)),
    }
}

#[allow(clippy::cast_precision_loss)]
fn real_operand(value: &Value) -> f64 {
    match value {
        Value::Integer(n) => *n as f64,
        Value::Real(r) => *r,
        _ => unreachable!("operands are checked numeric before folding"),
    }
}

/// Integer arithmetic wraps on overflow; the wrapping division and remainder
/// also absorb `i64::MIN / -1`.
fn integer_op(op: &str, a: i64, b: i64) -> EvalResult<Value> {
    let result = match op {
        "+" => a.wrapping_add(b),
        "-" => a.wrapping_sub(b),
        "*" => a.wrapping_mul(b),
        "/" => {
            if b == 0 {
                return Err(RuntimeError::DivideByZero);
            }
            a.wrapping_div(b)
        },
        "%" => {
            if b == 0 {
                return Err(RuntimeError::DivideByZero);
            }
            a.wrapping_rem(b)
        },
        // bitwise exclusive or, not exponentiation
        "^" => a ^ b,
        "min" => a.min(b),
        "max" => a.max(b),
        _ => unreachable!("dispatch only routes known operators"),
    };

    Ok(Value::Integer(result))
}

fn real_op(op: &str, a: f64, b: f64) -> EvalResult<Value> {
    let result = match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => {
            if b == 0.0 {
                return Err(RuntimeError::DivideByZero);
            }
            a / b
        },
        "%" => {
            return Err(RuntimeError::TypeMismatch { op:       "%",
                                                    expected: "integer operands",
                                                    found:    "real", })
        },
        "^" => {
            return Err(RuntimeError::TypeMismatch { op:       "^",
                                                    expected: "integer operands",
                                                    found:    "real", })
        },
        "min" => a.min(b),
        "max" => a.max(b),
        _ => unreachable!("dispatch only routes known operators"),
    };

    Ok(Value::Real(result))
}
