use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Noun phrase boundary label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Iob {
    #[serde(rename = "B")]
    Begin,
    #[serde(rename = "I")]
    Inside,
    #[serde(rename = "O")]
    Outside,
}

/// Class enumeration order of the chunker model. Weight rows and argmax
/// tie-breaking both follow it.
pub const CLASSES: [Iob; 3] = [Iob::Inside, Iob::Outside, Iob::Begin];

impl Iob {
    pub fn as_char(self) -> char {
        match self {
            Iob::Begin => 'B',
            Iob::Inside => 'I',
            Iob::Outside => 'O',
        }
    }

    /// `Inside` may not directly follow `Outside`.
    #[inline]
    pub fn can_follow(self, prev: Iob) -> bool {
        !(prev == Iob::Outside && self == Iob::Inside)
    }
}

impl Display for Iob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Iob {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Iob::Begin),
            "I" => Ok(Iob::Inside),
            "O" => Ok(Iob::Outside),
            _ => Err(Error::InvalidInput(format!("not an IOB label: {s:?}"))),
        }
    }
}

/// A chunker output token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IobToken {
    pub token: String,
    pub tag: String,
    pub label: Iob,
}

impl IobToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>, label: Iob) -> Self {
        Self { token: token.into(), tag: tag.into(), label }
    }
}
