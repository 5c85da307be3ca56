//! Attribute values and instances.
//!
//! An instance is one row of a tabular dataset. Each slot holds either a
//! numeric or a categorical value; the slot designated as the class
//! attribute carries the label.
use std::fmt;

use serde::{Deserialize, Serialize};

/// One attribute slot of an instance.
///
/// Distance functions dispatch on the two kinds exhaustively: numeric slots
/// are compared by difference, categorical slots by equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Numeric(f64),
    Categorical(String),
}

/// One row of attribute values. The class attribute is identified by index,
/// not by type, so query instances carry a placeholder at that position.
pub type Instance = Vec<AttributeValue>;

impl AttributeValue {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            AttributeValue::Numeric(v) => Some(*v),
            AttributeValue::Categorical(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, AttributeValue::Numeric(_))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Numeric(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Categorical(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Categorical(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Numeric(v) => write!(f, "{}", v),
            AttributeValue::Categorical(v) => write!(f, "{}", v),
        }
    }
}
