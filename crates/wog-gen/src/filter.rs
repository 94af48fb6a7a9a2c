// Final length filter and deduplication

use hashbrown::HashSet;
use wog_core::WordSet;
use wog_core::config::LengthBounds;

/// Iterator adapter dropping words outside `bounds` and, optionally, repeats.
///
/// Deduplication keeps the first occurrence. Only accepted words are
/// remembered, so memory grows with the output rather than the input.
#[derive(Debug)]
pub struct FilterDedup<I> {
    inner: I,
    bounds: LengthBounds,
    seen: Option<HashSet<String>>,
}

impl<I: Iterator<Item = String>> FilterDedup<I> {
    pub fn new(inner: I, bounds: LengthBounds, unique: bool) -> Self {
        Self {
            inner,
            bounds,
            seen: unique.then(HashSet::new),
        }
    }
}

impl<I: Iterator<Item = String>> Iterator for FilterDedup<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let word = self.inner.next()?;
            if !self.bounds.contains(word.chars().count()) {
                continue;
            }
            if let Some(seen) = &mut self.seen {
                if seen.contains(&word) {
                    continue;
                }
                seen.insert(word.clone());
            }
            return Some(word);
        }
    }
}

/// Run the filter stage over a materialized set.
pub fn filter_dedup(set: WordSet, bounds: &LengthBounds, unique: bool) -> WordSet {
    FilterDedup::new(set.into_iter(), *bounds, unique).collect()
}

/// Drop words longer than the maximum bound.
///
/// Safe between stages because no later stage shortens a word. The minimum
/// bound is deliberately not applied: decoration may still lengthen a short
/// word past it.
pub fn prune_max(set: WordSet, bounds: &LengthBounds) -> WordSet {
    if bounds.max.is_none() {
        return set;
    }
    set.into_iter()
        .filter(|w| bounds.fits_max(w.chars().count()))
        .collect()
}
