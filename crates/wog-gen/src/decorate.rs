// Year and age decorations
//
// A decoration glues part of a numeric affix (a year "YYYY" or an age "YY")
// to a word. Years support progressive suffixes (last 2, 3 or 4 digits) on
// either side plus a split form "YY" + word + "YY"; ages are only prepended
// or appended whole.

use wog_core::config::{AgeSpec, AgeVariants, LengthBounds, YearSpec, YearVariants};

/// How an affix is attached to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// word + last `tail` characters of the affix.
    Append { tail: usize },
    /// last `tail` characters of the affix + word.
    Prepend { tail: usize },
    /// first `head` characters + word + the remaining characters.
    Wrap { head: usize },
}

impl Decoration {
    /// Characters added to the word for an affix of `affix_len` characters.
    pub fn added_len(&self, affix_len: usize) -> usize {
        match *self {
            Decoration::Append { tail } | Decoration::Prepend { tail } => tail.min(affix_len),
            Decoration::Wrap { .. } => affix_len,
        }
    }

    /// Apply the decoration. Affixes are ASCII digit strings.
    pub fn apply(&self, word: &str, affix: &str) -> String {
        let mut out = String::with_capacity(word.len() + affix.len());
        match *self {
            Decoration::Append { tail } => {
                out.push_str(word);
                out.push_str(&affix[affix.len().saturating_sub(tail)..]);
            }
            Decoration::Prepend { tail } => {
                out.push_str(&affix[affix.len().saturating_sub(tail)..]);
                out.push_str(word);
            }
            Decoration::Wrap { head } => {
                let (first, rest) = affix.split_at(head.min(affix.len()));
                out.push_str(first);
                out.push_str(word);
                out.push_str(rest);
            }
        }
        out
    }
}

/// The year decorations enabled by `variants`, in output order.
///
/// With every flag set this is `W+S2, W+S3, W+S4, S2+W, S3+W, S4+W, P+W+S2`
/// where `S2`/`S3`/`S4` are the last 2/3/4 digits and `P` the first two.
pub fn year_decorations(variants: &YearVariants) -> Vec<Decoration> {
    let mut out = Vec::with_capacity(variants.per_year());
    if variants.end_with_year {
        out.extend((2..=4).map(|tail| Decoration::Append { tail }));
    }
    if variants.begin_with_year {
        out.extend((2..=4).map(|tail| Decoration::Prepend { tail }));
    }
    if variants.splitted_year {
        out.push(Decoration::Wrap { head: 2 });
    }
    out
}

/// The age decorations enabled by `variants`, in output order.
pub fn age_decorations(variants: &AgeVariants) -> Vec<Decoration> {
    let mut out = Vec::with_capacity(2);
    if variants.start_with_age {
        out.push(Decoration::Prepend { tail: 2 });
    }
    if variants.end_with_age {
        out.push(Decoration::Append { tail: 2 });
    }
    out
}

/// Lazy iterator applying every decoration with every affix to every word.
///
/// Iteration order is: word, then affix, then decoration. Results longer
/// than the maximum length are skipped without being built.
#[derive(Debug, Clone)]
pub struct Decorations<'a> {
    words: &'a [String],
    affixes: Vec<String>,
    decorations: Vec<Decoration>,
    max_len: Option<usize>,
    word: usize,
    word_len: usize,
    affix: usize,
    decoration: usize,
}

impl<'a> Decorations<'a> {
    pub fn new(
        words: &'a [String],
        affixes: Vec<String>,
        decorations: Vec<Decoration>,
        max_len: Option<usize>,
    ) -> Self {
        let word_len = words.first().map_or(0, |w| w.chars().count());
        Self {
            words,
            affixes,
            decorations,
            max_len,
            word: 0,
            word_len,
            affix: 0,
            decoration: 0,
        }
    }

    /// An iterator that yields nothing.
    pub fn empty(words: &'a [String]) -> Self {
        Self::new(words, Vec::new(), Vec::new(), None)
    }

    /// Upper bound on the number of decorated words, ignoring the length cap.
    pub fn total(&self) -> usize {
        self.words
            .len()
            .saturating_mul(self.affixes.len())
            .saturating_mul(self.decorations.len())
    }

    fn next_word(&mut self) {
        self.word += 1;
        self.affix = 0;
        self.decoration = 0;
        if let Some(w) = self.words.get(self.word) {
            self.word_len = w.chars().count();
        }
    }
}

impl Iterator for Decorations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.affixes.is_empty() || self.decorations.is_empty() {
            return None;
        }
        while self.word < self.words.len() {
            if self.affix >= self.affixes.len() {
                self.next_word();
                continue;
            }
            let (a, d) = (self.affix, self.decoration);
            self.decoration += 1;
            if self.decoration >= self.decorations.len() {
                self.decoration = 0;
                self.affix += 1;
            }

            let affix = &self.affixes[a];
            let decoration = self.decorations[d];
            let len = self.word_len + decoration.added_len(affix.len());
            if self.max_len.is_some_and(|max| len > max) {
                continue;
            }
            return Some(decoration.apply(&self.words[self.word], affix));
        }
        None
    }
}

/// Year decorations of every word in `words`.
pub fn decorate_years<'a>(
    words: &'a [String],
    years: Option<&YearSpec>,
    variants: &YearVariants,
    bounds: &LengthBounds,
) -> Decorations<'a> {
    match years {
        Some(spec) => {
            tracing::debug!(years = spec.count(), words = words.len(), "decorating with years");
            Decorations::new(
                words,
                spec.years().collect(),
                year_decorations(variants),
                bounds.max,
            )
        }
        None => Decorations::empty(words),
    }
}

/// Age decorations of every word in `words`.
pub fn decorate_ages<'a>(
    words: &'a [String],
    ages: Option<&AgeSpec>,
    variants: &AgeVariants,
    bounds: &LengthBounds,
) -> Decorations<'a> {
    match ages {
        Some(spec) => {
            tracing::debug!(ages = spec.count(), words = words.len(), "decorating with ages");
            Decorations::new(
                words,
                spec.ages().collect(),
                age_decorations(variants),
                bounds.max,
            )
        }
        None => Decorations::empty(words),
    }
}
