use std::{
    convert::TryFrom,
    fs::File,
    io::{BufRead, BufReader},
};

use crate::{
    chunker::iob::{Iob, IobToken},
    error::{Error, Result},
};

/// One reference sentence: tokens with gold POS tags and, for chunking
/// corpora, gold IOB labels.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub tokens: Vec<String>,
    pub tags: Vec<String>,
    pub labels: Vec<Iob>,
}

impl Sequence {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `(token, tag)` pairs, the chunker's input.
    pub fn tagged(&self) -> Vec<(String, String)> {
        self.tokens.iter().cloned().zip(self.tags.iter().cloned()).collect()
    }

    /// Gold labeled tokens, empty for corpora without IOB labels.
    pub fn labeled(&self) -> Vec<IobToken> {
        self.tokens
            .iter()
            .zip(&self.tags)
            .zip(&self.labels)
            .map(|((token, tag), &label)| IobToken::new(token.clone(), tag.clone(), label))
            .collect()
    }
}

/// A reference corpus: one `token\ttag` or `token\ttag\tlabel` line per
/// token, sentences separated by blank lines.
#[derive(Debug, Default)]
pub struct Dataset {
    pub v: Vec<Sequence>,
}

impl Dataset {
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut dataset = Dataset::default();
        let mut seq = Sequence::default();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                if !seq.is_empty() {
                    dataset.v.push(std::mem::take(&mut seq));
                }
                continue;
            }
            let columns: Vec<&str> = line.split('\t').collect();
            let invalid = |what: &str| Error::InvalidInput(format!("line {}: {what}: {line:?}", lineno + 1));
            match columns[..] {
                [token, tag] if seq.labels.is_empty() => {
                    seq.tokens.push(token.to_string());
                    seq.tags.push(tag.to_string());
                }
                [token, tag, label] if seq.labels.len() == seq.tokens.len() => {
                    seq.labels.push(label.parse().map_err(|_| invalid("bad IOB label"))?);
                    seq.tokens.push(token.to_string());
                    seq.tags.push(tag.to_string());
                }
                [_, _] | [_, _, _] => return Err(invalid("mixed labeled and unlabeled tokens")),
                _ => return Err(invalid("expected 2 or 3 tab separated columns")),
            }
        }
        if !seq.is_empty() {
            dataset.v.push(seq);
        }
        log::debug!("read {} sentences, {} tokens", dataset.len(), dataset.total_items());
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.v.iter().map(|x| x.len()).max().unwrap_or_default()
    }

    pub fn total_items(&self) -> usize {
        self.v.iter().map(|x| x.len()).sum()
    }

    /// Raw token sentences, the tagger's input.
    pub fn tokens(&self) -> Vec<Vec<String>> {
        self.v.iter().map(|s| s.tokens.clone()).collect()
    }

    /// `(token, tag)` sentences, the chunker's input.
    pub fn tagged(&self) -> Vec<Vec<(String, String)>> {
        self.v.iter().map(Sequence::tagged).collect()
    }
}

impl TryFrom<File> for Dataset {
    type Error = Error;

    fn try_from(value: File) -> Result<Self> {
        Dataset::read(BufReader::new(value))
    }
}
