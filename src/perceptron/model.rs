use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    quark::{Quark, StringTable},
    tag::{ClassScorer, Float},
};

use super::features::NUM_SLOTS;

/// Sparse per-class weights as produced by the training side: one table per
/// feature slot mapping a feature value to `{class name: weight}`, plus the
/// bias keyed by class name. Classes missing from a row weigh zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerceptronWeights {
    pub weights: Vec<HashMap<String, HashMap<String, Float>>>,
    pub bias: HashMap<String, Float>,
}

/// Multi-class linear model with a dense class row per feature value.
#[derive(Debug, Clone)]
pub struct AveragedPerceptron {
    classes: Quark,
    tables: Vec<HashMap<String, Vec<Float>>>,
    bias: Vec<Float>,
}

impl AveragedPerceptron {
    pub fn new(classes: Quark, input: PerceptronWeights) -> Result<Self> {
        if input.weights.len() != NUM_SLOTS {
            return Err(Error::InvalidWeights(format!(
                "expected {NUM_SLOTS} feature tables, got {}",
                input.weights.len()
            )));
        }
        let bias = dense_row(&classes, &input.bias)?;
        let tables = input
            .weights
            .iter()
            .map(|table| {
                table
                    .iter()
                    .map(|(feature, row)| Ok((feature.clone(), dense_row(&classes, row)?)))
                    .collect::<Result<HashMap<_, _>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        log::debug!(
            "perceptron: {} classes, table sizes {:?}",
            classes.len(),
            tables.iter().map(HashMap::len).collect::<Vec<_>>()
        );
        Ok(Self { classes, tables, bias })
    }

    pub fn classes(&self) -> &Quark {
        &self.classes
    }

    /// Name of the highest scoring class for `features`.
    pub fn predict(&self, features: &[String], scores: &mut Vec<Float>) -> &str {
        let best = self.best_class(features, scores, |_| true).unwrap_or_default();
        self.classes.to_str(best).unwrap_or_default()
    }
}

fn dense_row(classes: &Quark, sparse: &HashMap<String, Float>) -> Result<Vec<Float>> {
    let mut row = vec![0.0; classes.len()];
    for (class, &weight) in sparse {
        row[classes.class_id(class)?] = weight;
    }
    Ok(row)
}

impl ClassScorer for AveragedPerceptron {
    fn num_classes(&self) -> usize {
        self.classes.len()
    }

    fn scores(&self, features: &[String], scores: &mut [Float]) {
        scores.copy_from_slice(&self.bias);
        for (table, feature) in self.tables.iter().zip(features) {
            if let Some(row) = table.get(feature) {
                for (score, weight) in scores.iter_mut().zip(row) {
                    *score += weight;
                }
            }
        }
    }
}
