use crate::{
    chunker::{iob::IobToken, tagger::NpChunker, NounPhrase},
    error::Result,
    perceptron::tagger::PerceptronTagger,
    tag::tag_sentences,
};

/// POS tagging followed by noun phrase chunking.
#[derive(Debug)]
pub struct Pipeline {
    pub tagger: PerceptronTagger,
    pub chunker: NpChunker,
}

impl Pipeline {
    pub fn new(tagger: PerceptronTagger, chunker: NpChunker) -> Self {
        Self { tagger, chunker }
    }

    /// IOB labels for a document of tokenized sentences.
    pub fn label(&self, document: &[Vec<String>]) -> Result<Vec<Vec<IobToken>>> {
        let tagged = tag_sentences(&self.tagger, document)?;
        self.chunker.tag_sentences(&tagged)
    }

    /// Noun phrases for a document of tokenized sentences.
    pub fn noun_phrases(&self, document: &[Vec<String>]) -> Result<Vec<Vec<NounPhrase>>> {
        let tagged = tag_sentences(&self.tagger, document)?;
        self.chunker.chunk_sentences(&tagged)
    }
}
