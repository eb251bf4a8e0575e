use std::fmt;

/// An inferred value. `Noob` doubles as the unset type of a fresh
/// declaration and as the propagation placeholder once a sub-expression
/// already failed, so evaluation always runs to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Noob,
}

impl Value {
    /// LOLCODE name of the value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "NUMBR",
            Value::Float(_) => "NUMBAR",
            Value::String(_) => "YARN",
            Value::Boolean(_) => "TROOF",
            Value::Noob => "NOOB",
        }
    }

    /// Zero, the empty string, FAIL and NOOB are false; everything else
    /// is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
            Value::Noob => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            // Debug formatting keeps the decimal point on whole floats,
            // so a NUMBAR never reads back as a NUMBR.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Boolean(true) => write!(f, "WIN"),
            Value::Boolean(false) => write!(f, "FAIL"),
            Value::Noob => write!(f, "NOOB"),
        }
    }
}
