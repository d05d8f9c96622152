use nptag::{
    chunker::{extract, model::DEFAULT_FEATURE_SPACE},
    HashedModel, HashedWeights, Iob, IobToken, NpChunker, Rules, Tagger,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tagged(rows: &[(&str, &str)]) -> Vec<(String, String)> {
    rows.iter().map(|&(w, t)| (w.to_string(), t.to_string())).collect()
}

fn labels(sentence: &[IobToken]) -> Vec<Iob> {
    sentence.iter().map(|t| t.label).collect()
}

const INSIDE: [f32; 3] = [10.0, 0.0, 0.0];
const OUTSIDE: [f32; 3] = [0.0, 10.0, 0.0];
const BEGIN: [f32; 3] = [0.0, 0.0, 10.0];

/// Labels driven by the current POS tag alone.
fn pos_weights() -> HashedWeights {
    let mut weights = HashedWeights::zeros(DEFAULT_FEATURE_SPACE);
    weights.add("t0 DT", BEGIN).unwrap();
    weights.add("t0 JJ", INSIDE).unwrap();
    weights.add("t0 NN", INSIDE).unwrap();
    weights.add("t0 VBD", OUTSIDE).unwrap();
    weights.add("t0 IN", OUTSIDE).unwrap();
    weights
}

fn park() -> Vec<(String, String)> {
    tagged(&[
        ("The", "DT"),
        ("big", "JJ"),
        ("dog", "NN"),
        ("ran", "VBD"),
        ("in", "IN"),
        ("the", "DT"),
        ("park", "NN"),
    ])
}

#[test]
fn chunk_sentence() {
    init();
    let chunker = NpChunker::new(HashedModel::new(pos_weights()).unwrap(), Vec::new(), Rules::empty());
    let labeled = chunker.tag_sentence(&park()).unwrap();
    use Iob::*;
    assert_eq!(labels(&labeled), vec![Begin, Inside, Inside, Outside, Outside, Begin, Inside]);
    assert_eq!(labeled[1], IobToken::new("big", "JJ", Inside));

    let phrases = extract::noun_phrases(&labeled);
    assert_eq!(
        phrases,
        vec![tagged(&[("The", "DT"), ("big", "JJ"), ("dog", "NN")]), tagged(&[("the", "DT"), ("park", "NN")])]
    );
}

#[test]
fn chunk_sents() {
    init();
    let chunker = NpChunker::new(HashedModel::new(pos_weights()).unwrap(), Vec::new(), Rules::empty());
    let document = vec![park(), vec![], tagged(&[("dog", "NN"), ("ran", "VBD")])];
    let phrases = chunker.chunk_sentences(&document).unwrap();
    assert_eq!(phrases.len(), 3);
    assert_eq!(phrases[0].len(), 2);
    assert!(phrases[1].is_empty());
    // Inside cannot open a sentence, Outside wins over the zero Begin score
    assert!(phrases[2].is_empty());
}

/// Tiny deterministic generator so the invariant checks cover many weights.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn weight(&mut self) -> f32 {
        (self.next() % 2001) as f32 / 100.0 - 10.0
    }
}

#[test]
fn inside_never_starts_or_follows_outside() {
    init();
    let vocab = ["the", "a", "dog", "cat", "ran", "of", "big", ",", "Paris", "1999"];
    let pos = ["DT", "NN", "VBD", "IN", "JJ", ",", "NNP", "CD"];
    let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);
    for _ in 0..20 {
        let mut weights = HashedWeights::zeros(256);
        for w in weights.weights.iter_mut() {
            *w = rng.weight();
        }
        let chunker = NpChunker::new(HashedModel::new(weights).unwrap(), Vec::new(), Rules::COMBINE_NP);
        let document: Vec<Vec<(String, String)>> = (0..10)
            .map(|_| {
                let len = (rng.next() % 12) as usize;
                (0..len)
                    .map(|_| {
                        let w = vocab[(rng.next() % vocab.len() as u64) as usize];
                        let t = pos[(rng.next() % pos.len() as u64) as usize];
                        (w.to_string(), t.to_string())
                    })
                    .collect()
            })
            .collect();
        // merging keeps the invariant too
        for sentence in chunker.tag_sentences(&document).unwrap() {
            let labeled = labels(&sentence);
            assert_ne!(labeled.first(), Some(&Iob::Inside));
            for pair in labeled.windows(2) {
                assert!(!(pair[0] == Iob::Outside && pair[1] == Iob::Inside), "{labeled:?}");
            }
        }
    }
}

#[test]
fn overrides_beat_any_weight() {
    init();
    let overrides = vec![("ran".to_string(), Iob::Begin), ("The".to_string(), Iob::Outside)];
    let chunker = NpChunker::new(HashedModel::new(pos_weights()).unwrap(), overrides, Rules::empty());
    let labeled = chunker.tag_sentence(&park()).unwrap();
    use Iob::*;
    // after the forced Outside, "big" and "dog" cannot be Inside and the
    // zero-score tie between Outside and Begin goes to Outside
    assert_eq!(labels(&labeled), vec![Outside, Outside, Outside, Begin, Outside, Begin, Inside]);
}

#[test]
fn combine_np_merges_recurring_pairs() {
    init();
    let mut weights = HashedWeights::zeros(DEFAULT_FEATURE_SPACE);
    weights.add("t0 NNP", BEGIN).unwrap();
    weights.add("t0 IN", OUTSIDE).unwrap();
    weights.add("t0 VBZ", OUTSIDE).unwrap();
    let options = [("combine_np", true)];
    let chunker = NpChunker::from_parts(weights.clone(), Vec::new(), options).unwrap();

    let bank = tagged(&[("Bank", "NNP"), ("of", "IN"), ("America", "NNP")]);
    let once = tagged(&[("Bank", "NNP"), ("of", "IN"), ("England", "NNP"), ("is", "VBZ"), ("old", "NNP")]);
    let document = vec![bank.clone(), once, bank.clone()];

    let labeled = chunker.tag_sentences(&document).unwrap();
    use Iob::*;
    assert_eq!(labels(&labeled[0]), vec![Begin, Inside, Inside]);
    assert_eq!(labels(&labeled[1]), vec![Begin, Outside, Begin, Outside, Begin]);
    assert_eq!(labels(&labeled[2]), vec![Begin, Inside, Inside]);

    let phrases = chunker.chunk_sentences(&document).unwrap();
    assert_eq!(phrases[0], vec![bank.clone()]);
    assert_eq!(phrases[1].len(), 3);

    let plain = NpChunker::from_parts(weights, Vec::new(), [("combine_np", false)]).unwrap();
    assert_eq!(labels(&plain.tag_sentences(&document).unwrap()[0]), vec![Begin, Outside, Begin]);
}
