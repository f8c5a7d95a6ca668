// value.rs - Tagged element type for heterogeneous containers

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// A single element of a heterogeneous container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    /// Absent value marker
    None,
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Dynamically dispatched addition.
    /// Mixed int/float promotes to float, text concatenates.
    pub fn checked_add(&self, other: &Value) -> Option<Value> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.checked_add(*b).map(Value::Int),
            (Value::Int(a), Value::Float(b)) => Some(Value::Float(*a as f64 + b)),
            (Value::Float(a), Value::Int(b)) => Some(Value::Float(a + *b as f64)),
            (Value::Float(a), Value::Float(b)) => Some(Value::Float(a + b)),
            (Value::Text(a), Value::Text(b)) => Some(Value::Text(format!("{}{}", a, b))),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            // Bit equality keeps Eq and Hash consistent (NaN == NaN, 0.0 != -0.0)
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::None, Value::None) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Int(val) => val.hash(state),
            Value::Float(val) => val.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::None => {}
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(val) => write!(f, "{}", val),
            Value::Float(val) if val.is_finite() && val.fract() == 0.0 => write!(f, "{:.1}", val),
            Value::Float(val) => write!(f, "{}", val),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::None => write!(f, "None"),
        }
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Int(val)
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::Int(val as i64)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Float(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Text(val.to_string())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::Text(val)
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(val: Option<T>) -> Self {
        val.map(Into::into).unwrap_or(Value::None)
    }
}

/// Build a `Vec<Value>` from mixed literals: `values![1, 2, "apple"]`
#[macro_export]
macro_rules! values {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::containers::Value::from($item)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from("apple").to_string(), "'apple'");
        assert_eq!(Value::from(2.0).to_string(), "2.0");
        assert_eq!(Value::from(88.5).to_string(), "88.5");
        assert_eq!(Value::from(true).to_string(), "True");
        assert_eq!(Value::from(None::<i64>).to_string(), "None");
    }

    #[test]
    fn test_value_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Value::Float(f64::NAN));
        set.insert(Value::Float(f64::NAN));
        set.insert(Value::Int(1));
        set.insert(Value::Float(1.0));

        // Int(1) and Float(1.0) are distinct variants
        assert_eq!(set.len(), 3);
        assert_ne!(Value::Int(1), Value::Text("1".to_string()));
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(Value::Int(2).checked_add(&Value::Int(3)), Some(Value::Int(5)));
        assert_eq!(
            Value::Int(2).checked_add(&Value::Float(0.5)),
            Some(Value::Float(2.5))
        );
        assert_eq!(
            Value::from("ab").checked_add(&Value::from("cd")),
            Some(Value::from("abcd"))
        );
        assert_eq!(Value::Int(1).checked_add(&Value::from("x")), None);
        assert_eq!(Value::Int(i64::MAX).checked_add(&Value::Int(1)), None);
    }

    #[test]
    fn test_values_macro() {
        let items = crate::values![1, "apple", 2.5, true];
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].as_int(), Some(1));
        assert_eq!(items[1].as_text(), Some("apple"));
        assert_eq!(items[2], Value::Float(2.5));
        assert_eq!(items[3], Value::Bool(true));
    }
}
