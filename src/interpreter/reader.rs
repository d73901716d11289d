use crate::{
    error::RuntimeError,
    interpreter::{parser::SyntaxTree, value::Value},
};

/// Converts a labeled syntax tree into a value tree.
///
/// Classification goes by tag substring: `real` and `integer` nodes parse
/// their literal text (an unparseable or out-of-range literal becomes an
/// error *value*, not a failure of the read itself), `symbol` nodes copy
/// their text verbatim, and interior nodes collect their children into an
/// s-expression (`root`, `sexpr`) or a q-expression (`qexpr`). Grouping
/// delimiters and other lexical-only children are skipped.
///
/// The returned value is fully owned by the caller.
///
/// # Example
/// ```
/// use qlisp::{interpreter::parser::SyntaxTree, read, Value};
///
/// let leaf = SyntaxTree { tag:      "expr|integer".to_string(),
///                         contents: "42".to_string(),
///                         children: Vec::new(), };
/// assert_eq!(read(&leaf), Value::Integer(42));
/// ```
#[must_use]
pub fn read(tree: &SyntaxTree) -> Value {
    if tree.tag.contains("real") {
        return read_real(&tree.contents);
    }
    if tree.tag.contains("integer") {
        return read_integer(&tree.contents);
    }
    if tree.tag.contains("symbol") {
        return Value::Symbol(tree.contents.clone());
    }

    let mut items = Vec::new();

    for child in &tree.children {
        if matches!(child.contents.as_str(), "(" | ")" | "{" | "}") {
            continue;
        }
        if child.tag == "bracket" {
            continue;
        }

        items.push(read(child));
    }

    if tree.tag.contains("qexpr") {
        Value::Qexpr(items)
    } else {
        Value::Sexpr(items)
    }
}

fn read_integer(literal: &str) -> Value {
    literal.parse::<i64>()
           .map_or_else(|_| {
                            Value::Error(RuntimeError::BadNumber { literal: literal.to_string() })
                        },
                        Value::Integer)
}

fn read_real(literal: &str) -> Value {
    literal.parse::<f64>()
           .map_or_else(|_| {
                            Value::Error(RuntimeError::BadNumber { literal: literal.to_string() })
                        },
                        Value::Real)
}
