//! Part-of-speech tagging and noun phrase chunking.
//!
//! Tokens flow through an averaged perceptron POS tagger, then a
//! hashed-feature IOB chunker, optionally followed by a document-wide pass
//! that merges recurring `NP (stopword)+ NP` patterns.

pub mod chunker;
pub mod dataset;
mod error;
pub mod evaluation;
pub mod hash;
pub mod normalize;
pub mod perceptron;
mod pipeline;
pub mod quark;
pub mod tag;

pub use chunker::{
    iob::{Iob, IobToken},
    model::{HashedModel, HashedWeights},
    rules::Rules,
    tagger::NpChunker,
    NounPhrase,
};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use evaluation::Evaluation;
pub use normalize::normalize;
pub use perceptron::{
    model::{AveragedPerceptron, PerceptronWeights},
    tagger::PerceptronTagger,
};
pub use pipeline::Pipeline;
pub use tag::{tag_sentences, ClassScorer, Tagger};
