//! Shape-polymorphic values for the emission dispatcher.
//!
//! Every higher-level emitter that accepts caller-supplied values (call
//! arguments, return expressions, variable initializers) routes them through
//! [`Builder::push_value`](super::Builder::push_value), so this enum is the
//! single place the supported shapes are enumerated.

use std::fmt;

use crate::error::Error;

use super::Builder;

/// A value that can be dispatched into the output buffer.
///
/// Each variant is one supported shape. Conversions from plain Rust types
/// happen at the call boundary via `From` impls and the constructor
/// functions; dynamic data enters through `TryFrom<serde_json::Value>`.
pub enum Value {
    /// Raw text or expression, written verbatim (not quoted).
    Raw(String),
    /// String literal, written quoted.
    Str(String),
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Unsigned integer value.
    UInt(u64),
    /// Floating point value.
    Float(f64),
    /// Reference to a previously declared variable; only its name is written.
    Var(VarRef),
    /// Nested emission callback, invoked exactly once with the current builder.
    Callback(Box<dyn FnOnce(&mut Builder)>),
}

impl Value {
    /// Create a raw expression value (written verbatim).
    pub fn raw(v: impl Into<String>) -> Self {
        Self::Raw(v.into())
    }

    /// Create a string literal value (will be quoted).
    pub fn string(v: impl Into<String>) -> Self {
        Self::Str(v.into())
    }

    /// Create a boolean value.
    pub fn bool(v: bool) -> Self {
        Self::Bool(v)
    }

    /// Create an integer value.
    pub fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Create an unsigned integer value.
    pub fn uint(v: u64) -> Self {
        Self::UInt(v)
    }

    /// Create a float value.
    pub fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a nested emission callback.
    ///
    /// The callback receives the same builder instance the enclosing emitter
    /// is writing into, so its writes interleave in call order.
    pub fn callback(f: impl FnOnce(&mut Builder) + 'static) -> Self {
        Self::Callback(Box::new(f))
    }

    /// The shape name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Raw(_) => "raw",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Var(_) => "var",
            Self::Callback(_) => "callback",
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Raw(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Raw(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<VarRef> for Value {
    fn from(v: VarRef) -> Self {
        Self::Var(v)
    }
}

impl From<&VarRef> for Value {
    fn from(v: &VarRef) -> Self {
        Self::Var(v.clone())
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    /// Convert dynamic JSON data at the dispatch boundary.
    ///
    /// Scalars map to the matching variant; `null`, arrays, and objects have
    /// no text form and are rejected before anything reaches the buffer.
    fn try_from(value: serde_json::Value) -> Result<Self, Error> {
        match value {
            serde_json::Value::Bool(v) => Ok(Self::Bool(v)),
            serde_json::Value::String(v) => Ok(Self::Str(v)),
            serde_json::Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(Self::Int(v))
                } else if let Some(v) = n.as_u64() {
                    Ok(Self::UInt(v))
                } else if let Some(v) = n.as_f64() {
                    Ok(Self::Float(v))
                } else {
                    Err(Error::UnsupportedValue { kind: "number" })
                }
            }
            serde_json::Value::Null => Err(Error::UnsupportedValue { kind: "null" }),
            serde_json::Value::Array(_) => Err(Error::UnsupportedValue { kind: "array" }),
            serde_json::Value::Object(_) => Err(Error::UnsupportedValue { kind: "object" }),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(v) => f.debug_tuple("Raw").field(v).finish(),
            Self::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Var(v) => f.debug_tuple("Var").field(v).finish(),
            Self::Callback(_) => f.write_str("Callback(<callback>)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(v) => write!(f, "{}", v),
            Self::Str(v) => write!(f, "\"{}\"", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Var(v) => write!(f, "{}", v.name()),
            Self::Callback(_) => write!(f, "<callback>"),
        }
    }
}

/// An immutable reference to a previously declared variable.
///
/// Returned by the declaration emitters. Carries no live connection back to
/// the builder that produced it; when passed as a [`Value`], only the name is
/// written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarRef {
    type_name: String,
    name: String,
}

impl VarRef {
    /// Create a reference to a variable by type and name.
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    /// The declared type token.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The variable name, which is what gets emitted.
    pub fn name(&self) -> &str {
        &self.name
    }
}
