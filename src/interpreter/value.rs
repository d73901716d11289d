use crate::error::RuntimeError;

/// Represents a runtime value in the interpreter.
///
/// This enum models every datum an expression can read to or evaluate to.
/// Each instance has exactly one active representation, and containers own
/// their elements outright: dropping a list drops everything inside it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit signed).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// An operator or builtin name. Symbols are never looked up in an
    /// environment; one is only meaningful at the head of an evaluated list,
    /// or as inert data inside a quoted list.
    Symbol(String),
    /// A terminal failure. Once produced it displaces the expression that
    /// contains it and is never transformed further.
    Error(RuntimeError),
    /// An s-expression: an ordered sequence pending evaluation.
    Sexpr(Vec<Self>),
    /// A q-expression: an ordered sequence treated as inert data, never
    /// evaluated on its own.
    Qexpr(Vec<Self>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl Value {
    /// Returns the name of this value's type, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Symbol(_) => "symbol",
            Self::Error(_) => "error",
            Self::Sexpr(_) => "s-expression",
            Self::Qexpr(_) => "q-expression",
        }
    }

    /// Returns `true` if the value is [`Integer`] or [`Real`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Real`]: Value::Real
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Returns `true` if the value is [`Error`].
    ///
    /// [`Error`]: Value::Error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl std::fmt::Display for Value {
    /// Renders the value back to text.
    ///
    /// Integers print in plain decimal, reals in fixed-point with six
    /// fractional digits, symbols as their literal text, and errors as
    /// `error: <message>`. Lists print their elements space-separated inside
    /// `( )` for s-expressions and `{ }` for q-expressions.
    ///
    /// # Example
    /// ```
    /// use qlisp::Value;
    ///
    /// let v = Value::Qexpr(vec![Value::Integer(1), Value::Real(2.5)]);
    /// assert_eq!(v.to_string(), "{1 2.500000}");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:.6}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::Error(e) => write!(f, "error: {e}"),
            Self::Sexpr(items) => write_listing(f, items, '(', ')'),
            Self::Qexpr(items) => write_listing(f, items, '{', '}'),
        }
    }
}

fn write_listing(f: &mut std::fmt::Formatter<'_>,
                 items: &[Value],
                 open: char,
                 close: char)
                 -> std::fmt::Result {
    write!(f, "{open}")?;

    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }

        write!(f, "{item}")?;
    }

    write!(f, "{close}")
}
