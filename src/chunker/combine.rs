//! Merging of noun phrases that recur joined by the same stop words.
//!
//! Consecutive pairs of noun phrases separated only by stop words are
//! candidates. Every candidate is counted by its lowercased token sequence
//! over the whole document, and sequences seen at least twice are merged
//! into a single phrase at each occurrence: the stop words and the first
//! token of the second phrase are relabeled `Inside`.

use std::collections::{HashMap, HashSet};

use super::iob::{Iob, IobToken};

pub const STOPWORDS: [&str; 5] = ["the", "a", "in", "of", "an"];

/// Processed after the last token of every sentence to close an open
/// second phrase.
const END_OF_SENTENCE: &str = "NP";

/// Occurrences needed before a candidate is merged.
const MIN_OCCURRENCES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Not inside any candidate.
    Idle,
    /// Inside the first noun phrase.
    FirstNp,
    /// Between the phrases, seen only stop words so far.
    Gap,
    /// Inside the second noun phrase.
    SecondNp,
}

/// One occurrence of a candidate: the sentence and its stop word positions.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Occurrence {
    sentence: usize,
    stopwords: Vec<usize>,
}

#[derive(Debug, Default)]
struct Candidate {
    tokens: Vec<String>,
    stopwords: Vec<usize>,
}

impl Candidate {
    fn clear(&mut self) {
        self.tokens.clear();
        self.stopwords.clear();
    }
}

/// Scanner over a document's IOB labels.
#[derive(Debug)]
pub struct CombineState {
    stopwords: HashSet<String>,
    counts: HashMap<Vec<String>, Vec<Occurrence>>,
    state: State,
    candidate: Candidate,
}

impl Default for CombineState {
    fn default() -> Self {
        Self::with_stopwords(STOPWORDS)
    }
}

impl CombineState {
    /// Stop words are matched case-insensitively.
    pub fn with_stopwords<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
            counts: HashMap::new(),
            state: State::Idle,
            candidate: Candidate::default(),
        }
    }

    /// Combine noun phrases of `sentences` in place.
    ///
    /// A single pass: merges made here are not rescanned, so running it
    /// again on its own output may merge further.
    pub fn glob_np(&mut self, sentences: &mut [Vec<IobToken>]) {
        self.counts.clear();
        self.reset();
        self.count_candidates(sentences);

        let mut merged = 0;
        for occurrences in self.counts.values() {
            if occurrences.len() < MIN_OCCURRENCES {
                continue;
            }
            merged += 1;
            for Occurrence { sentence, stopwords } in occurrences {
                let sentence = &mut sentences[*sentence];
                for &k in stopwords {
                    sentence[k].label = Iob::Inside;
                }
                if let Some(second) = stopwords.last().and_then(|&k| sentence.get_mut(k + 1)) {
                    second.label = Iob::Inside;
                }
            }
        }
        log::trace!("combine: {} candidate sequences, {} merged", self.counts.len(), merged);
    }

    fn reset(&mut self) {
        self.state = State::Idle;
        self.candidate.clear();
    }

    fn count_candidates(&mut self, sentences: &[Vec<IobToken>]) {
        for (i, sentence) in sentences.iter().enumerate() {
            self.reset();
            for (k, token) in sentence.iter().enumerate() {
                self.process_token(&token.token, token.label, k, i);
            }
            self.process_token(END_OF_SENTENCE, Iob::Outside, sentence.len(), i);
        }
    }

    fn start_first(&mut self, token: String) {
        self.reset();
        self.state = State::FirstNp;
        self.candidate.tokens.push(token);
    }

    fn process_token(&mut self, token: &str, label: Iob, k: usize, sentence: usize) {
        let lower = token.to_lowercase();
        match (self.state, label) {
            (State::Idle, Iob::Begin) => self.start_first(lower),
            (State::Idle, _) => {}

            // adjacent phrases without stop words in between are not candidates
            (State::FirstNp, Iob::Begin) => self.start_first(lower),
            (State::FirstNp | State::SecondNp, Iob::Inside) => self.candidate.tokens.push(lower),

            (State::FirstNp | State::Gap, Iob::Outside) => {
                if self.stopwords.contains(&lower) {
                    self.state = State::Gap;
                    self.candidate.tokens.push(lower);
                    self.candidate.stopwords.push(k);
                } else {
                    self.reset();
                }
            }
            (State::Gap, Iob::Begin) => {
                self.state = State::SecondNp;
                self.candidate.tokens.push(lower);
            }
            (State::Gap, Iob::Inside) => {}

            (State::SecondNp, _) => {
                let tokens = std::mem::take(&mut self.candidate.tokens);
                let stopwords = std::mem::take(&mut self.candidate.stopwords);
                self.counts.entry(tokens).or_default().push(Occurrence { sentence, stopwords });
                self.reset();
                if label == Iob::Begin {
                    self.start_first(lower);
                }
            }
        }
    }
}

/// Apply the combine rule to a document with the default stop words.
pub fn combine_noun_phrases(sentences: &mut [Vec<IobToken>]) {
    CombineState::default().glob_np(sentences);
}
