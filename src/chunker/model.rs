use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    hash::feature_hash,
    tag::{ClassScorer, Float},
};

use super::iob::CLASSES;

/// Default number of hashed feature slots (2^17).
pub const DEFAULT_FEATURE_SPACE: usize = 1 << 17;

const NUM_CLASSES: usize = CLASSES.len();

fn default_feature_space() -> usize {
    DEFAULT_FEATURE_SPACE
}

/// Hashed weights as handed over by the training side.
///
/// `weights` is a `(feature_space, 3)` matrix flattened row by row (the
/// three class weights of slot `h` live at `3h..3h+3`, in `CLASSES` order)
/// followed by the three class biases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashedWeights {
    #[serde(default = "default_feature_space")]
    pub feature_space: usize,
    pub weights: Vec<Float>,
}

impl HashedWeights {
    /// All-zero weights for `feature_space` slots.
    pub fn zeros(feature_space: usize) -> Self {
        Self { feature_space, weights: vec![0.0; feature_space * NUM_CLASSES + NUM_CLASSES] }
    }

    /// Add `delta` (in `CLASSES` order) to the row `feature` hashes to.
    pub fn add(&mut self, feature: &str, delta: [Float; NUM_CLASSES]) -> Result<()> {
        self.bias_offset()?;
        let offset = (feature_hash(feature) & (self.feature_space as u64 - 1)) as usize * NUM_CLASSES;
        for (w, d) in self.weights[offset..offset + NUM_CLASSES].iter_mut().zip(delta) {
            *w += d;
        }
        Ok(())
    }

    pub fn set_bias(&mut self, bias: [Float; NUM_CLASSES]) -> Result<()> {
        let offset = self.bias_offset()?;
        self.weights[offset..].copy_from_slice(&bias);
        Ok(())
    }

    /// Start of the bias segment, once the table shape checks out.
    fn bias_offset(&self) -> Result<usize> {
        let feature_space = self.feature_space;
        if !feature_space.is_power_of_two() {
            return Err(Error::InvalidWeights(format!("feature space {feature_space} is not a power of two")));
        }
        let expected = feature_space
            .checked_mul(NUM_CLASSES)
            .and_then(|n| n.checked_add(NUM_CLASSES))
            .ok_or_else(|| Error::InvalidWeights(format!("feature space {feature_space} is too large")))?;
        if self.weights.len() != expected {
            return Err(Error::InvalidWeights(format!(
                "expected {expected} weights for feature space {feature_space}, got {}",
                self.weights.len()
            )));
        }
        Ok(expected - NUM_CLASSES)
    }
}

/// Three-class linear model over hashed features.
///
/// Distinct features hashing to the same slot share weights.
#[derive(Debug, Clone)]
pub struct HashedModel {
    weights: Vec<Float>,
    mask: u64,
    bias_index: usize,
}

impl HashedModel {
    pub fn new(input: HashedWeights) -> Result<Self> {
        let bias_index = input.bias_offset()?;
        let HashedWeights { feature_space, weights } = input;
        log::debug!("hashed model: feature space {feature_space}");
        Ok(Self { weights, mask: feature_space as u64 - 1, bias_index })
    }

    pub fn feature_space(&self) -> usize {
        self.bias_index / NUM_CLASSES
    }

    /// Slot of `feature` in the hashed table.
    #[inline]
    pub fn index(&self, feature: &str) -> usize {
        (feature_hash(feature) & self.mask) as usize
    }
}

impl ClassScorer for HashedModel {
    fn num_classes(&self) -> usize {
        NUM_CLASSES
    }

    fn scores(&self, features: &[String], scores: &mut [Float]) {
        scores.copy_from_slice(&self.weights[self.bias_index..]);
        for feature in features {
            let offset = self.index(feature) * NUM_CLASSES;
            for (score, weight) in scores.iter_mut().zip(&self.weights[offset..offset + NUM_CLASSES]) {
                *score += weight;
            }
        }
    }
}
