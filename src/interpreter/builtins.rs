use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{self, EvalResult},
        ops,
        value::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin consumes the vector of already-evaluated argument values and
/// returns exactly one value or the error that stopped it.
type BuiltinFn = fn(Vec<Value>) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "list" => { arity: Arity::AtLeast(0), func: list },
    "head" => { arity: Arity::Exact(1), func: head },
    "tail" => { arity: Arity::Exact(1), func: tail },
    "join" => { arity: Arity::AtLeast(1), func: join },
    "eval" => { arity: Arity::Exact(1), func: eval_quoted },
    "cons" => { arity: Arity::Exact(2), func: cons },
    "init" => { arity: Arity::Exact(1), func: init },
    "len"  => { arity: Arity::Exact(1), func: len },
    "+"    => { arity: Arity::AtLeast(1), func: |args| ops::apply("+", args) },
    "-"    => { arity: Arity::AtLeast(1), func: |args| ops::apply("-", args) },
    "*"    => { arity: Arity::AtLeast(1), func: |args| ops::apply("*", args) },
    "/"    => { arity: Arity::AtLeast(1), func: |args| ops::apply("/", args) },
    "%"    => { arity: Arity::AtLeast(1), func: |args| ops::apply("%", args) },
    "^"    => { arity: Arity::AtLeast(1), func: |args| ops::apply("^", args) },
    "min"  => { arity: Arity::AtLeast(1), func: |args| ops::apply("min", args) },
    "max"  => { arity: Arity::AtLeast(1), func: |args| ops::apply("max", args) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
        }
    }

    const fn expected(&self) -> usize {
        match self {
            Self::Exact(m) | Self::AtLeast(m) => *m,
        }
    }
}

/// Dispatches a symbol name to its builtin.
///
/// The argument vector is consumed either way: on a precondition failure it
/// is dropped and the error describes what was violated.
///
/// # Errors
/// - `UnknownFunction` if the name matches no table entry.
/// - `ArityMismatch` if the argument count is not allowed.
/// - Whatever the builtin itself reports.
pub(crate) fn call(name: &str, args: Vec<Value>) -> EvalResult<Value> {
    let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
        return Err(RuntimeError::UnknownFunction { name: name.to_string() });
    };

    if !builtin.arity.check(args.len()) {
        return Err(RuntimeError::ArityMismatch { op:       builtin.name,
                                                 expected: builtin.arity.expected(),
                                                 found:    args.len(), });
    }

    (builtin.func)(args)
}

/// Unwraps a q-expression argument, or reports what was found instead.
fn expect_qexpr(op: &'static str, value: Value) -> EvalResult<Vec<Value>> {
    match value {
        Value::Qexpr(items) => Ok(items),
        other => Err(RuntimeError::TypeMismatch { op,
                                                  expected: "a q-expression",
                                                  found: other.type_name() }),
    }
}

fn expect_nonempty(op: &'static str, items: Vec<Value>) -> EvalResult<Vec<Value>> {
    if items.is_empty() {
        return Err(RuntimeError::EmptyContainer { op });
    }

    Ok(items)
}

/// Retags the argument sequence itself as a q-expression. No copy is made.
fn list(args: Vec<Value>) -> EvalResult<Value> {
    Ok(Value::Qexpr(args))
}

/// Keeps only the first element of a non-empty q-expression.
fn head(mut args: Vec<Value>) -> EvalResult<Value> {
    let mut items = expect_nonempty("head", expect_qexpr("head", args.remove(0))?)?;
    items.truncate(1);

    Ok(Value::Qexpr(items))
}

/// Drops the first element of a non-empty q-expression.
fn tail(mut args: Vec<Value>) -> EvalResult<Value> {
    let mut items = expect_nonempty("tail", expect_qexpr("tail", args.remove(0))?)?;
    items.remove(0);

    Ok(Value::Qexpr(items))
}

/// Concatenates q-expressions left-to-right, consuming all of them.
fn join(args: Vec<Value>) -> EvalResult<Value> {
    let mut joined = Vec::new();

    for arg in args {
        joined.extend(expect_qexpr("join", arg)?);
    }

    Ok(Value::Qexpr(joined))
}

/// Retags a q-expression as an s-expression and evaluates it.
fn eval_quoted(mut args: Vec<Value>) -> EvalResult<Value> {
    let items = expect_qexpr("eval", args.remove(0))?;

    Ok(evaluator::eval(Value::Sexpr(items)))
}

/// Prepends the first argument to the q-expression in the second.
fn cons(mut args: Vec<Value>) -> EvalResult<Value> {
    let first = args.remove(0);
    let mut items = expect_qexpr("cons", args.remove(0))?;
    items.insert(0, first);

    Ok(Value::Qexpr(items))
}

/// Drops the last element of a non-empty q-expression.
fn init(mut args: Vec<Value>) -> EvalResult<Value> {
    let mut items = expect_nonempty("init", expect_qexpr("init", args.remove(0))?)?;
    items.pop();

    Ok(Value::Qexpr(items))
}

/// Counts the elements of a q-expression.
#[allow(clippy::cast_possible_wrap)]
fn len(mut args: Vec<Value>) -> EvalResult<Value> {
    let items = expect_qexpr("len", args.remove(0))?;

    Ok(Value::Integer(items.len() as i64))
}
