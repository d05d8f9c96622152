use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    normalize::normalize_all,
    tag::{tag_sentences, ClassScorer, Context, Tagger},
};

use super::{
    combine::CombineState,
    extract,
    features::{self, NUM_FEATURES},
    iob::{Iob, IobToken, CLASSES},
    model::{HashedModel, HashedWeights},
    rules::Rules,
    NounPhrase,
};

/// IOB noun phrase chunker over POS tagged sentences.
#[derive(Debug)]
pub struct NpChunker {
    model: HashedModel,
    /// Raw tokens whose label is fixed regardless of the model.
    overrides: HashMap<String, Iob>,
    rules: Rules,
}

impl NpChunker {
    pub fn new<I>(model: HashedModel, overrides: I, rules: Rules) -> Self
    where
        I: IntoIterator<Item = (String, Iob)>,
    {
        let overrides: HashMap<_, _> = overrides.into_iter().collect();
        log::debug!("np chunker: {} label overrides, rules {:?}", overrides.len(), rules);
        Self { model, overrides, rules }
    }

    /// Build a chunker from raw model data: overrides labeled `"B"`, `"I"`
    /// or `"O"` and named boolean options (`combine_np`).
    pub fn from_parts<'a, O, R>(weights: HashedWeights, overrides: O, options: R) -> Result<Self>
    where
        O: IntoIterator<Item = (String, String)>,
        R: IntoIterator<Item = (&'a str, bool)>,
    {
        let model = HashedModel::new(weights)?;
        let overrides = overrides
            .into_iter()
            .map(|(token, label)| match label.parse::<Iob>() {
                Ok(label) => Ok((token, label)),
                Err(_) => Err(Error::InvalidWeights(format!("bad override label {label:?} for {token:?}"))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(model, overrides, Rules::from_options(options)))
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Label every sentence of a document, then apply the enabled
    /// document-level rules.
    pub fn tag_sentences(&self, document: &[Vec<(String, String)>]) -> Result<Vec<Vec<IobToken>>> {
        let mut labeled = tag_sentences(self, document)?;
        self.apply_rules(&mut labeled);
        Ok(labeled)
    }

    /// Noun phrases of every sentence of a document.
    pub fn chunk_sentences(&self, document: &[Vec<(String, String)>]) -> Result<Vec<Vec<NounPhrase>>> {
        let labeled = self.tag_sentences(document)?;
        Ok(labeled.iter().map(|sentence| extract::noun_phrases(sentence)).collect())
    }

    fn apply_rules(&self, labeled: &mut [Vec<IobToken>]) {
        if self.rules.contains(Rules::COMBINE_NP) {
            CombineState::default().glob_np(labeled);
        }
    }
}

impl Tagger for NpChunker {
    type Input = (String, String);
    type Output = IobToken;

    fn tag_sentence(&self, sentence: &[(String, String)]) -> Result<Vec<IobToken>> {
        let tokens: Vec<&str> = sentence.iter().map(|(token, _)| token.as_str()).collect();
        let words = Context::new(normalize_all(&tokens)?);
        let tags = Context::new(sentence.iter().map(|(_, tag)| tag.clone()));

        let mut labeled = Vec::with_capacity(sentence.len());
        let mut features = Vec::with_capacity(NUM_FEATURES);
        let mut scores = Vec::with_capacity(CLASSES.len());
        // no sentence starts inside a phrase
        let mut last = Iob::Outside;

        for (k, (token, tag)) in sentence.iter().enumerate() {
            let label = match self.overrides.get(token) {
                Some(&label) => label,
                None => {
                    features::extract(k, token, &words, &tags, &mut features);
                    self.model
                        .best_class(&features, &mut scores, |c| CLASSES[c].can_follow(last))
                        .map_or(Iob::Outside, |c| CLASSES[c])
                }
            };
            last = label;
            labeled.push(IobToken::new(token.clone(), tag.clone(), label));
        }
        Ok(labeled)
    }
}
