//! Noun phrase chunking over POS tagged sentences.

pub mod combine;
pub mod extract;
pub mod features;
pub mod iob;
pub mod model;
pub mod rules;
pub mod tagger;

/// A contiguous noun phrase as `(token, POS tag)` pairs.
pub type NounPhrase = Vec<(String, String)>;
