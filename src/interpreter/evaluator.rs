use crate::{
    error::RuntimeError,
    interpreter::{builtins, value::Value},
};

/// Result type used inside the evaluator and the builtins.
///
/// Builtins return either a value or a `RuntimeError` describing the
/// failure. At the dispatch boundary an `Err` is folded back into an error
/// value, so callers of [`eval`] only ever see a `Value`.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a value to its terminal form.
///
/// Everything except an s-expression already is terminal: numbers, symbols,
/// errors and q-expressions evaluate to themselves. An s-expression is
/// reduced by [`eval_sexpr`].
///
/// The value is consumed; the result is a freshly owned value.
///
/// # Example
/// ```
/// use qlisp::{eval, Value};
///
/// let expr = Value::Sexpr(vec![Value::Symbol("+".to_string()),
///                              Value::Integer(1),
///                              Value::Integer(2)]);
/// assert_eq!(eval(expr), Value::Integer(3));
/// ```
#[must_use]
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(items) => eval_sexpr(items),
        terminal => terminal,
    }
}

/// Reduces an s-expression to a single value.
///
/// The steps, in order:
/// 1. Every child is evaluated left-to-right, each result replacing the
///    original child.
/// 2. If any evaluated child is an error, that error is the result; the
///    first one found wins and the remaining children are dropped.
/// 3. An empty list is terminal and returned unchanged.
/// 4. A single-element list unwraps to its element.
/// 5. Otherwise the first element must be a symbol naming a builtin, which
///    receives the remaining elements as arguments.
fn eval_sexpr(items: Vec<Value>) -> Value {
    let mut items: Vec<Value> = items.into_iter().map(eval).collect();

    if let Some(index) = items.iter().position(Value::is_error) {
        return items.swap_remove(index);
    }

    if items.is_empty() {
        return Value::Sexpr(items);
    }

    if items.len() == 1 {
        return items.remove(0);
    }

    match items.remove(0) {
        Value::Symbol(name) => builtins::call(&name, items).unwrap_or_else(Value::Error),
        other => Value::Error(RuntimeError::NotASymbol { found: other.type_name() }),
    }
}
