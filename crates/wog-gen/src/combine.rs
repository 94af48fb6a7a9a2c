// Pairwise combination of distinct words
//
// For every ordered pair (A, B) of words that differ by content and every
// separator S, produce A + S + B. B + S + A is produced by the mirrored pair,
// and a word is never paired with itself.

use hashbrown::HashSet;
use wog_core::WordSet;
use wog_core::config::LengthBounds;

/// The distinct words of `set`, in first-occurrence order.
pub fn distinct_words(set: &WordSet) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(set.len());
    set.iter()
        .map(String::as_str)
        .filter(|w| seen.insert(*w))
        .collect()
}

/// Lazy iterator over all pairwise combinations.
///
/// Iteration order is: left word, then right word, then separator. When a
/// maximum length is given, combinations that would exceed it are skipped
/// without being built.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    words: Vec<&'a str>,
    /// Character count of each entry in `words`.
    lens: Vec<usize>,
    separators: Vec<&'a str>,
    sep_lens: Vec<usize>,
    max_len: Option<usize>,
    left: usize,
    right: usize,
    sep: usize,
}

impl<'a> Combinations<'a> {
    /// Combine `words` (expected to be distinct) with every separator.
    ///
    /// An empty separator list yields nothing; callers pass at least the
    /// implicit empty separator.
    pub fn new(words: Vec<&'a str>, separators: Vec<&'a str>, max_len: Option<usize>) -> Self {
        let lens = words.iter().map(|w| w.chars().count()).collect();
        let sep_lens = separators.iter().map(|s| s.chars().count()).collect();
        Self {
            words,
            lens,
            separators,
            sep_lens,
            max_len,
            left: 0,
            right: 0,
            sep: 0,
        }
    }

    /// Upper bound on the number of combinations, ignoring the length cap.
    pub fn total(&self) -> usize {
        let n = self.words.len();
        n.saturating_mul(n.saturating_sub(1))
            .saturating_mul(self.separators.len())
    }

    fn advance(&mut self) {
        self.sep += 1;
        if self.sep >= self.separators.len() {
            self.sep = 0;
            self.right += 1;
            if self.right >= self.words.len() {
                self.right = 0;
                self.left += 1;
            }
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.separators.is_empty() || self.words.len() < 2 {
            return None;
        }
        while self.left < self.words.len() {
            let (l, r, s) = (self.left, self.right, self.sep);
            self.advance();
            if l == r {
                continue;
            }
            let len = self.lens[l] + self.sep_lens[s] + self.lens[r];
            if self.max_len.is_some_and(|max| len > max) {
                continue;
            }
            let (a, sep, b) = (self.words[l], self.separators[s], self.words[r]);
            let mut out = String::with_capacity(a.len() + sep.len() + b.len());
            out.push_str(a);
            out.push_str(sep);
            out.push_str(b);
            return Some(out);
        }
        None
    }
}

/// Run the combination stage: the input words followed by every combination.
pub fn combine(set: WordSet, separators: &[&str], bounds: &LengthBounds) -> WordSet {
    let combinations: Vec<String> = {
        let words = distinct_words(&set);
        let combos = Combinations::new(words, separators.to_vec(), bounds.max);
        tracing::debug!(
            candidates = combos.total(),
            separators = separators.len(),
            "combining word pairs"
        );
        combos.collect()
    };
    let mut out = set;
    out.extend(combinations);
    tracing::debug!(words = out.len(), "combination stage finished");
    out
}
