//! Runtime values.

use std::fmt;

/// A runtime value.
///
/// Closed set: the language has no user-defined types.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Nil,
    Number(f64),
    Str(String),
}

impl Value {
    /// `nil` and `false` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Nil => "nil",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
        }
    }
}

/// Canonical text form, as written by `print`.
///
/// Strings print raw, without quotes. Numbers follow [`write_number`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::Number(n) => write_number(f, *n),
            Value::Str(s) => f.write_str(s),
        }
    }
}

/// Decimal exponents outside `MIN_PLAIN_EXP..MAX_PLAIN_EXP` switch to
/// exponent notation.
const MIN_PLAIN_EXP: i32 = -4;
const MAX_PLAIN_EXP: i32 = 6;

/// Shortest round-trip digits, `%g` style.
///
/// Plain decimal when the decimal exponent is in `-4..6` (`3`, `0.0001`,
/// `123456`), otherwise a mantissa with a signed two-digit-minimum exponent
/// (`1e+06`, `1.5e-07`, `1e+21`). Infinities print as `+Inf` / `-Inf`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "+Inf" } else { "-Inf" });
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. `1.5e-7`.
    let scientific = format!("{n:e}");
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return write!(f, "{n}");
    };
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;

    if (MIN_PLAIN_EXP..MAX_PLAIN_EXP).contains(&exp) {
        write!(f, "{n}")
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
