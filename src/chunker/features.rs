use crate::tag::Context;

/// Features produced per position.
pub const NUM_FEATURES: usize = 20;

/// Build the features for position `k`.
///
/// `words` is the normalized padded sentence, `tags` the padded POS tags
/// and `word` the raw token. Every feature carries a prefix naming its
/// template so different templates never produce the same string.
///
/// The `p` feature is the first Unicode character of `word`, not its first
/// byte.
pub fn extract(k: usize, word: &str, words: &Context, tags: &Context, features: &mut Vec<String>) {
    let w = |offset| words.at(k, offset);
    let t = |offset| tags.at(k, offset);

    features.clear();
    features.reserve(NUM_FEATURES);

    // word unigrams
    features.push(format!("w-2 {}", w(-2)));
    features.push(format!("w-1 {}", w(-1)));
    features.push(format!("w0 {}", w(0)));
    features.push(format!("w1 {}", w(1)));
    features.push(format!("w2 {}", w(2)));

    // word bigrams
    features.push(format!("w-1w0 {} {}", w(-1), w(0)));
    features.push(format!("w0w1 {} {}", w(0), w(1)));

    // tag unigrams
    features.push(format!("t-2 {}", t(-2)));
    features.push(format!("t-1 {}", t(-1)));
    features.push(format!("t0 {}", t(0)));
    features.push(format!("t1 {}", t(1)));
    features.push(format!("t2 {}", t(2)));

    // tag bigrams
    features.push(format!("t-2t-1 {} {}", t(-2), t(-1)));
    features.push(format!("t-1t0 {} {}", t(-1), t(0)));
    features.push(format!("t0t1 {} {}", t(0), t(1)));
    features.push(format!("t1t2 {} {}", t(1), t(2)));

    // tag trigrams
    features.push(format!("t-2t-1t0 {} {} {}", t(-2), t(-1), t(0)));
    features.push(format!("t-1t0t1 {} {} {}", t(-1), t(0), t(1)));
    features.push(format!("t0t1t2 {} {} {}", t(0), t(1), t(2)));

    features.push(format!("p {}", word.chars().next().unwrap_or_default()));
}
