// Character case utilities
//
// All case conversion in the generator goes through the "simple" one-to-one
// mappings below. The standard library's to_lowercase / to_uppercase yield
// iterators because some characters expand to several (e.g. 'ß' -> "SS");
// a wordlist variant must keep the character count of its source word, so
// only single-character mappings are honoured.

/// Convert a character to its simple lowercase equivalent.
///
/// Characters whose lowercase form is not exactly one character are returned
/// unchanged.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    match (iter.next(), iter.next()) {
        (Some(lower), None) => lower,
        _ => c,
    }
}

/// Convert a character to its simple uppercase equivalent.
///
/// Characters whose uppercase form is not exactly one character are returned
/// unchanged.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Check whether a character has two distinct simple case forms.
///
/// Only cased characters take part in case enumeration: digits, punctuation
/// and letters of uncased scripts stay fixed.
pub fn is_cased(c: char) -> bool {
    simple_lower(c) != simple_upper(c)
}

/// Number of cased characters in `word`.
pub fn count_cased(word: &str) -> usize {
    word.chars().filter(|&c| is_cased(c)).count()
}
