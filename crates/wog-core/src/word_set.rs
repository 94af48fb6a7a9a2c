// Ordered word collection handed from one pipeline stage to the next

/// An ordered collection of candidate words.
///
/// Insertion order is preserved and duplicates are allowed; removing words
/// is left to the filtering stage. Stages take a `WordSet` by value and
/// return a new (usually extended) one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Whether a word equal to `word` is present.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.words
    }
}

impl From<Vec<String>> for WordSet {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for WordSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order_and_duplicates() {
        let mut set = WordSet::new();
        set.push("b");
        set.push("a");
        set.push("b");
        assert_eq!(set.as_slice(), &["b", "a", "b"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn collect_and_extend() {
        let mut set: WordSet = ["foo", "bar"].into_iter().collect();
        set.extend(vec![String::from("baz")]);
        assert_eq!(set.into_vec(), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn contains_by_content() {
        let set = WordSet::from(vec!["foo".to_string()]);
        assert!(set.contains("foo"));
        assert!(!set.contains("FOO"));
        assert!(!WordSet::new().contains(""));
    }
}
