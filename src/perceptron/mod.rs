//! Averaged perceptron part-of-speech tagger.

pub mod features;
pub mod model;
pub mod tagger;
