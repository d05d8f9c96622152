use std::collections::HashMap;

use crate::{
    error::Result,
    normalize::normalize_all,
    quark::Quark,
    tag::{
        context::{START, START2},
        Context, Tagger,
    },
};

use super::{
    features::{self, NUM_SLOTS},
    model::{AveragedPerceptron, PerceptronWeights},
};

/// Penn Treebank tag set in the fixed class enumeration order.
pub const POS_TAGS: [&str; 45] = [
    "#", "$", "''", ",", "-LRB-", "-RRB-", ".", ":", "CC", "CD", "DT", "EX", "FW", "IN", "JJ", "JJR", "JJS", "LS",
    "MD", "NN", "NNP", "NNPS", "NNS", "PDT", "POS", "PRP", "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO", "UH",
    "VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP", "WP$", "WRB", "``",
];

#[derive(Debug)]
pub struct PerceptronTagger {
    model: AveragedPerceptron,
    /// Raw tokens whose tag is fixed regardless of the model.
    overrides: HashMap<String, String>,
}

impl PerceptronTagger {
    pub fn new<I>(weights: PerceptronWeights, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let model = AveragedPerceptron::new(Quark::from(&POS_TAGS[..]), weights)?;
        Ok(Self::with_model(model, overrides))
    }

    pub fn with_model<I>(model: AveragedPerceptron, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let overrides: HashMap<_, _> = overrides.into_iter().collect();
        log::debug!("perceptron tagger: {} tag overrides", overrides.len());
        Self { model, overrides }
    }

    pub fn model(&self) -> &AveragedPerceptron {
        &self.model
    }
}

impl Tagger for PerceptronTagger {
    type Input = String;
    type Output = (String, String);

    fn tag_sentence(&self, sentence: &[String]) -> Result<Vec<(String, String)>> {
        let context = Context::new(normalize_all(sentence)?);
        let mut tagged = Vec::with_capacity(sentence.len());
        let mut prev = START.to_string();
        let mut prev2 = START2.to_string();
        let mut features = Vec::with_capacity(NUM_SLOTS);
        let mut scores = Vec::new();

        for (k, word) in sentence.iter().enumerate() {
            let tag = match self.overrides.get(word) {
                Some(tag) => tag.clone(),
                None => {
                    features::extract(k, word, &context, &prev, &prev2, &mut features);
                    self.model.predict(&features, &mut scores).to_string()
                }
            };
            prev2 = std::mem::replace(&mut prev, tag.clone());
            tagged.push((word.clone(), tag));
        }
        Ok(tagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, quark::StringTable, tag::tag_sentences};

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn weights() -> PerceptronWeights {
        let mut weights = PerceptronWeights { weights: vec![HashMap::new(); NUM_SLOTS], ..Default::default() };
        let row = |class: &str, w: f32| HashMap::from([(class.to_string(), w)]);
        // current normalized word
        weights.weights[5].insert("the".into(), row("DT", 1.0));
        weights.weights[5].insert("dog".into(), row("NN", 1.0));
        weights.weights[5].insert("runs".into(), row("VBZ", 1.0));
        // previous tag
        weights.weights[2].insert("DT".into(), row("NN", 0.5));
        weights.weights[2].insert("NN".into(), row("VBZ", 0.5));
        weights.bias.insert("NN".into(), 0.1);
        weights
    }

    #[test]
    fn tags_with_model() {
        let tagger = PerceptronTagger::new(weights(), Vec::new()).unwrap();
        let tagged = tagger.tag_sentence(&words("The dog runs")).unwrap();
        let expected = [("The", "DT"), ("dog", "NN"), ("runs", "VBZ")];
        assert_eq!(tagged, expected.map(|(w, t)| (w.to_string(), t.to_string())));
    }

    #[test]
    fn previous_tag_feeds_the_next_prediction() {
        // "blah" is unknown; only the previous-tag feature scores it
        let tagger = PerceptronTagger::new(weights(), Vec::new()).unwrap();
        let tagged = tagger.tag_sentence(&words("the blah")).unwrap();
        assert_eq!(tagged[1].1, "NN");
    }

    #[test]
    fn overrides_take_precedence() {
        let overrides = vec![("dog".to_string(), "VB".to_string()), ("(".to_string(), "(".to_string())];
        let tagger = PerceptronTagger::new(weights(), overrides).unwrap();
        let tagged = tagger.tag_sentence(&words("the dog ( runs")).unwrap();
        let tags: Vec<_> = tagged.iter().map(|(_, t)| t.as_str()).collect();
        // previous tag is the override, so "runs" gets no NN -> VBZ boost
        assert_eq!(tags, vec!["DT", "VB", "(", "VBZ"]);
    }

    #[test]
    fn classes_follow_tag_set_order() {
        let tagger = PerceptronTagger::new(weights(), Vec::new()).unwrap();
        let classes = tagger.model().classes();
        assert_eq!(classes.len(), 45);
        assert!(classes.iter().eq(POS_TAGS));
        assert_eq!(classes.to_id("DT"), Some(10));
        assert_eq!(classes.to_str(19), Some("NN"));
    }

    #[test]
    fn tie_goes_to_earlier_class() {
        let mut input = PerceptronWeights { weights: vec![HashMap::new(); NUM_SLOTS], ..Default::default() };
        input.bias.insert("NN".into(), 1.0);
        input.bias.insert("DT".into(), 1.0);
        let tagger = PerceptronTagger::new(input, Vec::new()).unwrap();
        let tagged = tagger.tag_sentence(&words("anything")).unwrap();
        assert_eq!(tagged[0].1, "DT");
    }

    #[test]
    fn empty_sentences_and_tokens() {
        let tagger = PerceptronTagger::new(weights(), Vec::new()).unwrap();
        assert!(tagger.tag_sentence(&[]).unwrap().is_empty());
        let err = tagger.tag_sentence(&["a".to_string(), String::new()]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(..)));
        assert!(tag_sentences(&tagger, &[words("the dog"), vec![String::new()]]).is_err());
    }

    #[test]
    fn rejects_unknown_class() {
        let mut input = weights();
        input.bias.insert("NOPE".into(), 1.0);
        assert!(matches!(PerceptronTagger::new(input, Vec::new()), Err(Error::InvalidWeights(..))));
    }
}
