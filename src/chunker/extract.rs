use super::{
    iob::{Iob, IobToken},
    NounPhrase,
};

/// Split one labeled sentence into its noun phrases, in sentence order.
///
/// `Inside` extends the open phrase (opening one if none is open), `Begin`
/// closes the open phrase and starts a new one, `Outside` closes it.
pub fn noun_phrases(sentence: &[IobToken]) -> Vec<NounPhrase> {
    let mut phrases = Vec::new();
    let mut phrase = NounPhrase::new();
    for IobToken { token, tag, label } in sentence {
        if *label != Iob::Inside && !phrase.is_empty() {
            phrases.push(std::mem::take(&mut phrase));
        }
        if *label != Iob::Outside {
            phrase.push((token.clone(), tag.clone()));
        }
    }
    if !phrase.is_empty() {
        phrases.push(phrase);
    }
    phrases
}

/// Rebuild labels from extracted phrases and the sentence length: `Begin` at
/// each phrase start, `Inside` for the rest of the phrase, `Outside` between.
///
/// Phrases are located greedily left to right, so this inverts
/// [`noun_phrases`] for any sequence without an `Outside -> Inside` step.
pub fn relabel(sentence: &[(String, String)], phrases: &[NounPhrase]) -> Vec<Iob> {
    let mut labels = vec![Iob::Outside; sentence.len()];
    let mut start = 0;
    for phrase in phrases.iter().filter(|p| !p.is_empty()) {
        let Some(offset) = sentence[start..].windows(phrase.len()).position(|w| w == phrase.as_slice()) else {
            break;
        };
        let begin = start + offset;
        labels[begin] = Iob::Begin;
        for label in &mut labels[begin + 1..begin + phrase.len()] {
            *label = Iob::Inside;
        }
        start = begin + phrase.len();
    }
    labels
}
