//! Hash keys for the `Hash` runtime value.

use super::Value;

/// Derived, comparable key for hash entries.
///
/// Only integers, booleans and strings are hashable; the type tag is part
/// of the key, so `1`, `true` and `"1"` never collide, while two equal
/// values of the same type always do.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum HashKey {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl HashKey {
    /// Derive a key from a value, or `None` for unhashable types.
    ///
    /// Rejection happens at the call sites (hash literal construction and
    /// index lookup), which turn `None` into the `unusable as hash key`
    /// error.
    pub fn try_from_value(value: &Value) -> Option<HashKey> {
        match value {
            Value::Int(n) => Some(HashKey::Int(*n)),
            Value::Bool(b) => Some(HashKey::Bool(*b)),
            Value::Str(s) => Some(HashKey::Str((**s).clone())),
            _ => None,
        }
    }
}

/// A hash entry: the original key value (kept for display) plus the
/// mapped value.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_produce_equal_keys() {
        let a = Value::string("hello");
        let b = Value::string(String::from("hello"));
        assert_eq!(
            HashKey::try_from_value(&a),
            HashKey::try_from_value(&b)
        );
    }

    #[test]
    fn type_tag_separates_keys() {
        assert_ne!(
            HashKey::try_from_value(&Value::int(1)),
            HashKey::try_from_value(&Value::Bool(true))
        );
        assert_ne!(
            HashKey::try_from_value(&Value::int(1)),
            HashKey::try_from_value(&Value::string("1"))
        );
    }

    #[test]
    fn composite_values_are_not_hashable() {
        assert_eq!(HashKey::try_from_value(&Value::array(vec![])), None);
        assert_eq!(HashKey::try_from_value(&Value::Null), None);
        assert_eq!(HashKey::try_from_value(&Value::float(1.0)), None);
    }
}
