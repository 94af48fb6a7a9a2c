// Case conversion and case enumeration

use crate::character::{is_cased, simple_lower, simple_upper};

/// Largest number of cased characters [`CaseVariants`] can enumerate.
///
/// The enumeration counter is a `u64` bit mask, one bit per cased character.
pub const MAX_ENUMERABLE_CASED: usize = 63;

/// A whole-word case form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseForm {
    /// Every cased character lowercased: "koira".
    AllLower,
    /// Every cased character uppercased: "KOIRA".
    AllUpper,
    /// First character uppercased, the rest left as they are: "KoIRa" from "koIRa".
    FirstUpper,
    /// First character uppercased, the rest lowercased: "Koira" from "koIRa".
    Capitalized,
}

/// Return `word` converted to the given case form.
///
/// Characters without a simple case mapping pass through unchanged, so the
/// result always has the same number of characters as the input.
pub fn set_case(word: &str, form: CaseForm) -> String {
    let mut chars = word.chars();
    match form {
        CaseForm::AllLower => chars.map(simple_lower).collect(),
        CaseForm::AllUpper => chars.map(simple_upper).collect(),
        CaseForm::FirstUpper => match chars.next() {
            Some(first) => std::iter::once(simple_upper(first)).chain(chars).collect(),
            None => String::new(),
        },
        CaseForm::Capitalized => match chars.next() {
            Some(first) => std::iter::once(simple_upper(first))
                .chain(chars.map(simple_lower))
                .collect(),
            None => String::new(),
        },
    }
}

/// Lazily enumerates every case assignment of a word's cased characters.
///
/// For a word with `k` cased characters the iterator yields exactly `2^k`
/// distinct strings. Uncased characters keep their position and value. The
/// first item is the all-lowercase form and the last one the all-uppercase
/// form; the rightmost cased character toggles fastest.
#[derive(Debug, Clone)]
pub struct CaseVariants {
    chars: Vec<char>,
    /// Indices into `chars` of the cased characters, left to right.
    cased: Vec<usize>,
    next: u64,
    total: u64,
}

impl CaseVariants {
    /// Prepare the enumeration for `word`.
    ///
    /// Returns `None` when the word has more than [`MAX_ENUMERABLE_CASED`]
    /// cased characters.
    pub fn new(word: &str) -> Option<Self> {
        let chars: Vec<char> = word.chars().collect();
        let cased: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| is_cased(**c))
            .map(|(i, _)| i)
            .collect();
        if cased.len() > MAX_ENUMERABLE_CASED {
            return None;
        }
        let total = 1u64 << cased.len();
        Some(Self {
            chars,
            cased,
            next: 0,
            total,
        })
    }

    /// Number of cased characters being enumerated.
    pub fn cased_len(&self) -> usize {
        self.cased.len()
    }

    fn render(&self, mask: u64) -> String {
        let mut out = self.chars.clone();
        let k = self.cased.len();
        for (j, &pos) in self.cased.iter().enumerate() {
            let bit = 1u64 << (k - 1 - j);
            out[pos] = if mask & bit != 0 {
                simple_upper(out[pos])
            } else {
                simple_lower(out[pos])
            };
        }
        out.into_iter().collect()
    }
}

impl Iterator for CaseVariants {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= self.total {
            return None;
        }
        let mask = self.next;
        self.next += 1;
        Some(self.render(mask))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // -- set_case tests --

    #[test]
    fn set_case_all_lower() {
        assert_eq!(set_case("KOIRA", CaseForm::AllLower), "koira");
    }

    #[test]
    fn set_case_all_upper_keeps_digits() {
        assert_eq!(set_case("koira_2", CaseForm::AllUpper), "KOIRA_2");
    }

    #[test]
    fn set_case_first_upper_leaves_rest() {
        assert_eq!(set_case("koIRa", CaseForm::FirstUpper), "KoIRa");
        assert_eq!(set_case("1abc", CaseForm::FirstUpper), "1abc");
    }

    #[test]
    fn set_case_capitalized_lowers_rest() {
        assert_eq!(set_case("koIRa", CaseForm::Capitalized), "Koira");
        assert_eq!(set_case("mcDONALD", CaseForm::Capitalized), "Mcdonald");
    }

    #[test]
    fn set_case_empty() {
        assert_eq!(set_case("", CaseForm::FirstUpper), "");
        assert_eq!(set_case("", CaseForm::Capitalized), "");
        assert_eq!(set_case("", CaseForm::AllUpper), "");
    }

    #[test]
    fn set_case_finnish_chars() {
        assert_eq!(set_case("\u{00E4}iti", CaseForm::AllUpper), "\u{00C4}ITI"); // äiti -> ÄITI
    }

    // -- CaseVariants tests --

    #[test]
    fn variants_count_is_power_of_two() {
        let variants: Vec<String> = CaseVariants::new("abc").unwrap().collect();
        assert_eq!(variants.len(), 8);
        let distinct: HashSet<&String> = variants.iter().collect();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn variants_are_equal_ignoring_case() {
        for v in CaseVariants::new("PaSs").unwrap() {
            assert_eq!(v.to_lowercase(), "pass");
        }
    }

    #[test]
    fn variants_order() {
        let variants: Vec<String> = CaseVariants::new("ab").unwrap().collect();
        assert_eq!(variants, vec!["ab", "aB", "Ab", "AB"]);
    }

    #[test]
    fn variants_keep_uncased_characters_fixed() {
        let variants: Vec<String> = CaseVariants::new("a1-b").unwrap().collect();
        assert_eq!(variants, vec!["a1-b", "a1-B", "A1-b", "A1-B"]);
    }

    #[test]
    fn variants_without_cased_characters() {
        let variants: Vec<String> = CaseVariants::new("1984").unwrap().collect();
        assert_eq!(variants, vec!["1984"]);
    }

    #[test]
    fn variants_size_hint_is_exact() {
        let mut it = CaseVariants::new("abcd").unwrap();
        assert_eq!(it.size_hint(), (16, Some(16)));
        it.next();
        assert_eq!(it.size_hint(), (15, Some(15)));
        assert_eq!(it.cased_len(), 4);
    }

    #[test]
    fn variants_refuse_too_many_cased() {
        let word = "a".repeat(MAX_ENUMERABLE_CASED + 1);
        assert!(CaseVariants::new(&word).is_none());
        let word = "a".repeat(MAX_ENUMERABLE_CASED);
        assert!(CaseVariants::new(&word).is_some());
    }
}
