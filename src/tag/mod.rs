//! The sentence-level tagging abstraction shared by the POS tagger and the
//! NP chunker.

pub mod context;
pub mod model;
pub mod tagger;

pub use context::Context;
pub use model::{argmax, ClassScorer, Float};
pub use tagger::{tag_sentences, Tagger};
