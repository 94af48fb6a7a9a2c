// Additive case transformations
//
// Each seed word is kept and followed by its new case variants. A variant is
// "new" when it differs from the seed and from every variant already emitted
// for that seed.

use wog_core::WordSet;
use wog_core::case::{CaseForm, CaseVariants, set_case};
use wog_core::character::count_cased;
use wog_core::config::{GrowthPolicy, LengthBounds, OnGrowthLimit, TransformSet};

use crate::GenerateError;

/// Case variants of a single word, excluding the word itself.
///
/// The all-possible-cases enumeration is produced lazily; the single-form
/// transformations are few enough to be computed up front.
#[derive(Debug, Clone)]
pub enum Variants {
    Forms(std::vec::IntoIter<String>),
    AllCases {
        inner: CaseVariants,
        original: String,
    },
}

impl Iterator for Variants {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            Variants::Forms(forms) => forms.next(),
            Variants::AllCases { inner, original } => {
                let original = &*original;
                inner.find(|v| v != original)
            }
        }
    }
}

/// Apply the given single-result case forms to `word`.
fn form_variants(word: &str, forms: &[CaseForm]) -> Variants {
    let mut out: Vec<String> = Vec::with_capacity(forms.len());
    for &form in forms {
        let v = set_case(word, form);
        if v != word && !out.contains(&v) {
            out.push(v);
        }
    }
    Variants::Forms(out.into_iter())
}

/// Compute the new case variants of `word` under `transforms`.
///
/// When all-possible-cases is enabled it subsumes every other form, since
/// each of them is one particular case assignment. Words above the growth
/// cap fall back to the other enabled forms under [`OnGrowthLimit::Skip`] and
/// fail the run under [`OnGrowthLimit::Refuse`].
pub fn variants(
    word: &str,
    transforms: &TransformSet,
    growth: &GrowthPolicy,
) -> Result<Variants, GenerateError> {
    if word.is_empty() {
        return Ok(Variants::Forms(Vec::new().into_iter()));
    }

    if transforms.all_possible_cases {
        let enumerable =
            CaseVariants::new(word).filter(|inner| inner.cased_len() <= growth.max_cased);
        if let Some(inner) = enumerable {
            return Ok(Variants::AllCases {
                inner,
                original: word.to_string(),
            });
        }
        let cased = count_cased(word);
        match growth.on_limit {
            OnGrowthLimit::Refuse => {
                return Err(GenerateError::GrowthLimit {
                    word: word.to_string(),
                    cased,
                    cap: growth.max_cased,
                });
            }
            OnGrowthLimit::Skip => {
                tracing::warn!(
                    word,
                    cased,
                    cap = growth.max_cased,
                    "skipping all-possible-cases: too many cased characters"
                );
            }
        }
    }

    Ok(form_variants(word, &transforms.forms()))
}

/// Run the transformation stage.
///
/// Every seed is followed by its variants. Words longer than the maximum
/// bound are dropped here already: case changes never alter the length and
/// later stages only append characters.
pub fn transform(
    seeds: WordSet,
    transforms: &TransformSet,
    growth: &GrowthPolicy,
    bounds: &LengthBounds,
) -> Result<WordSet, GenerateError> {
    let mut out = WordSet::with_capacity(seeds.len());
    for word in seeds {
        if !bounds.fits_max(word.chars().count()) {
            continue;
        }
        let new = variants(&word, transforms, growth)?;
        out.push(word);
        out.extend(new);
    }
    tracing::debug!(words = out.len(), "transformation stage finished");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(f: impl FnOnce(&mut TransformSet)) -> TransformSet {
        let mut t = TransformSet::default();
        f(&mut t);
        t
    }

    fn run(seeds: &[&str], transforms: &TransformSet) -> Vec<String> {
        let seeds: WordSet = seeds.iter().copied().collect();
        transform(
            seeds,
            transforms,
            &GrowthPolicy::default(),
            &LengthBounds::default(),
        )
        .unwrap()
        .into_vec()
    }

    #[test]
    fn all_uppercase_keeps_original() {
        let t = only(|t| t.all_uppercase = true);
        assert_eq!(run(&["foo"], &t), vec!["foo", "FOO"]);
    }

    #[test]
    fn unchanged_variant_is_not_added() {
        let t = only(|t| t.all_lowercase = true);
        assert_eq!(run(&["foo"], &t), vec!["foo"]);
    }

    #[test]
    fn first_uppercase_does_not_lower_rest() {
        let t = only(|t| t.first_uppercase = true);
        assert_eq!(run(&["mcDonald"], &t), vec!["mcDonald", "McDonald"]);
    }

    #[test]
    fn camelcase_normalizes_mixed_case() {
        let t = only(|t| t.camelcase = true);
        assert_eq!(run(&["mcDONALD"], &t), vec!["mcDONALD", "Mcdonald"]);
    }

    #[test]
    fn coinciding_forms_are_emitted_once() {
        let t = only(|t| {
            t.first_uppercase = true;
            t.camelcase = true;
        });
        assert_eq!(run(&["foo"], &t), vec!["foo", "Foo"]);
    }

    #[test]
    fn several_forms_in_fixed_order() {
        let t = only(|t| {
            t.all_uppercase = true;
            t.all_lowercase = true;
            t.camelcase = true;
        });
        assert_eq!(run(&["hElLo"], &t), vec!["hElLo", "HELLO", "hello", "Hello"]);
    }

    #[test]
    fn all_possible_cases_adds_every_other_assignment() {
        let t = only(|t| t.all_possible_cases = true);
        let out = run(&["aB"], &t);
        assert_eq!(out, vec!["aB", "ab", "Ab", "AB"]);
    }

    #[test]
    fn all_possible_cases_subsumes_other_forms() {
        let t = TransformSet {
            all_uppercase: true,
            all_possible_cases: true,
            ..Default::default()
        };
        let out = run(&["ab"], &t);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn non_letters_pass_through() {
        let t = only(|t| t.all_uppercase = true);
        assert_eq!(run(&["a-1_b"], &t), vec!["a-1_b", "A-1_B"]);
        assert_eq!(run(&["1984"], &t), vec!["1984"]);
    }

    #[test]
    fn empty_word_has_no_variants() {
        let t = only(|t| t.all_possible_cases = true);
        let v = variants("", &t, &GrowthPolicy::default()).unwrap();
        assert_eq!(v.count(), 0);
    }

    #[test]
    fn growth_limit_skip_falls_back_to_forms() {
        let t = TransformSet {
            all_uppercase: true,
            all_possible_cases: true,
            ..Default::default()
        };
        let growth = GrowthPolicy {
            max_cased: 2,
            on_limit: OnGrowthLimit::Skip,
        };
        let v: Vec<String> = variants("abc", &t, &growth).unwrap().collect();
        assert_eq!(v, vec!["ABC"]);
    }

    #[test]
    fn growth_limit_refuse_is_an_error() {
        let t = only(|t| t.all_possible_cases = true);
        let growth = GrowthPolicy {
            max_cased: 2,
            on_limit: OnGrowthLimit::Refuse,
        };
        let err = variants("abc", &t, &growth).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::GrowthLimit { cased: 3, cap: 2, .. }
        ));
    }

    #[test]
    fn too_long_seeds_are_pruned_by_max() {
        let t = only(|t| t.all_uppercase = true);
        let seeds: WordSet = ["ab", "abcdef"].into_iter().collect();
        let bounds = LengthBounds::new(None, Some(4)).unwrap();
        let out = transform(seeds, &t, &GrowthPolicy::default(), &bounds).unwrap();
        assert_eq!(out.into_vec(), vec!["ab", "AB"]);
    }
}
