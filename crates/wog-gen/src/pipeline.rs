// Generation pipeline: transform -> combine -> decorate -> filter/dedup
//
// The first two stages materialize a base set, since combination needs to
// see every distinct word. Decoration and filtering are streamed from that
// base set, so the (typically much larger) decorated output is never held in
// memory unless the caller collects it.

use std::iter::{Chain, Cloned};
use std::slice;

use wog_core::{GeneratorConfig, WordSet};

use crate::GenerateError;
use crate::combine::combine;
use crate::decorate::{Decorations, age_decorations, decorate_ages, decorate_years};
use crate::filter::{FilterDedup, prune_max};
use crate::transform::transform;

/// Streamed output of a run: the base words, then year decorations, then
/// age decorations, filtered by length and optionally deduplicated.
pub type Output<'a> =
    FilterDedup<Chain<Chain<Cloned<slice::Iter<'a, String>>, Decorations<'a>>, Decorations<'a>>>;

/// A validated, reusable pipeline.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Validate `config` and build a generator from it.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Number of year and age decorations [`Generator::output`] considers
    /// for `base`, before the length filter.
    pub fn decoration_candidates(&self, base: &WordSet) -> (usize, usize) {
        let config = &self.config;
        let per_word_years = config
            .year
            .as_ref()
            .map_or(0, |y| y.count() * config.year_variants.per_year());
        let per_word_ages = config
            .age
            .as_ref()
            .map_or(0, |a| a.count() * age_decorations(&config.age_variants).len());
        (base.len() * per_word_years, base.len() * per_word_ages)
    }

    /// Run the transformation and combination stages.
    ///
    /// Empty seed words are ignored. No seeds at all is not an error; it
    /// simply produces an empty set.
    pub fn base<I, S>(&self, seeds: I) -> Result<WordSet, GenerateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = &self.config;
        let seeds: WordSet = seeds
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        if seeds.is_empty() {
            tracing::debug!("no seed words, output will be empty");
            return Ok(WordSet::new());
        }
        tracing::debug!(seeds = seeds.len(), "starting generation");

        let set = transform(seeds, &config.transforms, &config.growth, &config.bounds)?;
        let set = combine(set, &config.effective_separators(), &config.bounds);
        Ok(prune_max(set, &config.bounds))
    }

    /// Stream the decorated, filtered output of a base set.
    ///
    /// Year and age decorations are both applied to the base set; neither is
    /// applied to the other's output.
    pub fn output<'a>(&'a self, base: &'a WordSet) -> Output<'a> {
        let config = &self.config;
        let words = base.as_slice();
        let years = decorate_years(
            words,
            config.year.as_ref(),
            &config.year_variants,
            &config.bounds,
        );
        let ages = decorate_ages(
            words,
            config.age.as_ref(),
            &config.age_variants,
            &config.bounds,
        );
        tracing::debug!(
            base = words.len(),
            year_candidates = years.total(),
            age_candidates = ages.total(),
            "decorating"
        );
        FilterDedup::new(
            words.iter().cloned().chain(years).chain(ages),
            config.bounds,
            config.unique,
        )
    }

    /// Run the whole pipeline and collect the result.
    pub fn run<I, S>(&self, seeds: I) -> Result<WordSet, GenerateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let base = self.base(seeds)?;
        let out: WordSet = self.output(&base).collect();
        tracing::debug!(words = out.len(), "generation finished");
        Ok(out)
    }
}

/// Validate `config` and run the whole pipeline over `seeds`.
pub fn generate<I, S>(seeds: I, config: GeneratorConfig) -> Result<WordSet, GenerateError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Generator::new(config)?.run(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wog_core::ConfigError;
    use wog_core::config::{
        AgeSpec, AgeVariants, LengthBounds, TransformSet, YearSpec, YearVariants,
    };

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = GeneratorConfig {
            bounds: LengthBounds {
                min: Some(10),
                max: Some(2),
            },
            ..Default::default()
        };
        assert!(matches!(
            Generator::new(config),
            Err(GenerateError::Config(ConfigError::LengthBounds { min: 10, max: 2 }))
        ));
    }

    #[test]
    fn reversed_year_range_is_rejected() {
        let config = GeneratorConfig {
            year: Some(YearSpec {
                start: 2000,
                end: 1990,
            }),
            year_variants: YearVariants::all(),
            ..Default::default()
        };
        assert!(matches!(
            Generator::new(config),
            Err(GenerateError::Config(ConfigError::YearRange { .. }))
        ));
    }

    #[test]
    fn no_seeds_gives_empty_output() {
        let out = generate(Vec::<String>::new(), GeneratorConfig::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn empty_seed_words_are_ignored() {
        let out = generate(["", ""], GeneratorConfig::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn base_then_output_streams_same_result_as_run() {
        let config = GeneratorConfig {
            transforms: TransformSet {
                all_uppercase: true,
                ..Default::default()
            },
            year: Some(YearSpec::single(1999)),
            year_variants: YearVariants::all(),
            unique: true,
            ..Default::default()
        };
        let generator = Generator::new(config).unwrap();
        let base = generator.base(["ab", "cd"]).unwrap();
        let streamed: Vec<String> = generator.output(&base).collect();
        let collected = generator.run(["ab", "cd"]).unwrap();
        assert_eq!(streamed, collected.into_vec());
    }

    #[test]
    fn decorations_follow_base_words() {
        let config = GeneratorConfig {
            year: Some(YearSpec::single(2001)),
            year_variants: YearVariants {
                end_with_year: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let out = generate(["x"], config).unwrap();
        assert_eq!(out.into_vec(), vec!["x", "x01", "x001", "x2001"]);
    }

    #[test]
    fn decoration_candidates_scale_with_base() {
        let config = GeneratorConfig {
            year: Some(YearSpec::range(1990, 1991).unwrap()),
            year_variants: YearVariants::all(),
            age: Some(AgeSpec::single(5)),
            age_variants: AgeVariants {
                start_with_age: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let generator = Generator::new(config).unwrap();
        let base = generator.base(["ab", "cd"]).unwrap();
        assert_eq!(base.len(), 4);
        assert_eq!(generator.decoration_candidates(&base), (56, 4));
    }

    #[test]
    fn no_decorations_without_years_or_ages() {
        let generator = Generator::new(GeneratorConfig::default()).unwrap();
        let base = generator.base(["ab"]).unwrap();
        assert_eq!(generator.decoration_candidates(&base), (0, 0));
    }
}
