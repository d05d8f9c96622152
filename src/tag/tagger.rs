use crate::error::Result;

/// One stage of the pipeline operating on a single sentence.
///
/// `Input` is the representation of one token going in (a raw word, a
/// `(word, POS)` pair, ...) and `Output` the labeled version coming out.
pub trait Tagger {
    type Input;
    type Output;

    fn tag_sentence(&self, sentence: &[Self::Input]) -> Result<Vec<Self::Output>>;
}

/// Tag a document sentence by sentence. The first malformed sentence fails
/// the whole call.
pub fn tag_sentences<T>(tagger: &T, document: &[Vec<T::Input>]) -> Result<Vec<Vec<T::Output>>>
where
    T: Tagger + ?Sized,
{
    document.iter().map(|sentence| tagger.tag_sentence(sentence)).collect()
}
