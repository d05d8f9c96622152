use std::collections::HashMap;

use crate::error::{Error, Result};

/// A fixed, ordered set of class names addressable by position or name.
pub trait StringTable {
    fn to_str(&self, id: usize) -> Option<&str>;
    fn to_id(&self, s: &str) -> Option<usize>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a class name coming from model data.
    fn class_id(&self, s: &str) -> Result<usize> {
        self.to_id(s)
            .ok_or_else(|| Error::InvalidWeights(format!("unknown class: {s:?}")))
    }
}

/// Class labels in enumeration order. The order is observable: argmax ties
/// resolve to the lowest id.
#[derive(Debug, Clone, Default)]
pub struct Quark {
    v: Vec<String>,
    m: HashMap<String, usize>,
}

impl From<Vec<String>> for Quark {
    fn from(value: Vec<String>) -> Self {
        let m = value.iter().enumerate().map(|(i, s)| (s.to_string(), i)).collect();
        Self { v: value, m }
    }
}

impl From<&[&str]> for Quark {
    fn from(value: &[&str]) -> Self {
        Self::from(value.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }
}

impl StringTable for Quark {
    fn to_str(&self, id: usize) -> Option<&str> {
        self.v.get(id).map(|x| x.as_str())
    }

    fn to_id(&self, s: &str) -> Option<usize> {
        self.m.get(s).copied()
    }

    fn len(&self) -> usize {
        self.v.len()
    }
}

impl Quark {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.v.iter().map(String::as_str)
    }
}
