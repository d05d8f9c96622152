use crate::tag::Context;

/// Number of feature slots; slot `k` is looked up in weight table `k`.
pub const NUM_SLOTS: usize = 13;

/// The last `n` characters of `s` (all of it when shorter).
fn suffix(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}

fn first_char(s: &str) -> &str {
    match s.chars().next() {
        Some(c) => &s[..c.len_utf8()],
        None => s,
    }
}

/// Build the features for position `k`.
///
/// `word` is the raw token, `context` the normalized padded sentence, and
/// `prev`/`prev2` the two most recently assigned tags.
///
/// The suffix and first-letter slots count Unicode characters, not bytes, so
/// for non-ASCII words they differ from byte-based feature strings.
pub fn extract(k: usize, word: &str, context: &Context, prev: &str, prev2: &str, features: &mut Vec<String>) {
    features.clear();
    features.push(suffix(word, 3).to_string());
    features.push(first_char(word).to_string());
    features.push(prev.to_string());
    features.push(prev2.to_string());
    features.push(format!("{prev} {prev2}"));
    features.push(context.at(k, 0).to_string());
    features.push(format!("{prev} {}", context.at(k, 0)));
    features.push(context.at(k, -1).to_string());
    features.push(suffix(context.at(k, -1), 3).to_string());
    features.push(context.at(k, -2).to_string());
    features.push(context.at(k, 1).to_string());
    features.push(suffix(context.at(k, 1), 3).to_string());
    features.push(context.at(k, 2).to_string());
}
