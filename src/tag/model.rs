pub type Float = f32;

/// A sparse linear multi-class scorer over string features.
pub trait ClassScorer {
    fn num_classes(&self) -> usize;

    /// Overwrite `scores` (one entry per class) with the bias plus the
    /// contribution of every feature. Features the model has never seen
    /// contribute nothing.
    fn scores(&self, features: &[String], scores: &mut [Float]);

    /// Score `features` and pick the best class accepted by `allowed`.
    fn best_class<F>(&self, features: &[String], scores: &mut Vec<Float>, allowed: F) -> Option<usize>
    where
        F: Fn(usize) -> bool,
    {
        scores.resize(self.num_classes(), 0.0);
        self.scores(features, scores);
        argmax(scores, allowed)
    }
}

/// Index of the maximal score among the allowed classes.
///
/// Only a strictly greater score replaces the running best, so ties go to
/// the class enumerated first.
pub fn argmax<F>(scores: &[Float], allowed: F) -> Option<usize>
where
    F: Fn(usize) -> bool,
{
    let mut best = None;
    let mut max_score = Float::NEG_INFINITY;
    for (k, &score) in scores.iter().enumerate() {
        if score > max_score && allowed(k) {
            max_score = score;
            best = Some(k);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_resolve_to_first_class() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0], |_| true), Some(1));
        assert_eq!(argmax(&[0.0, 0.0, 0.0], |_| true), Some(0));
    }

    #[test]
    fn disallowed_classes_are_skipped() {
        assert_eq!(argmax(&[5.0, 1.0, 1.0], |k| k != 0), Some(1));
        assert_eq!(argmax(&[5.0], |_| false), None);
    }

    #[test]
    fn negative_scores_still_win() {
        assert_eq!(argmax(&[-1.0e30, -2.0e30], |_| true), Some(0));
        assert_eq!(argmax(&[], |_| true), None);
    }
}
