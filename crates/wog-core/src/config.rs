// Generator configuration model
//
// Everything the pipeline needs to know about a run. The command-line layer
// fills it in; tests and presets can also deserialize it from JSON.

use serde::Deserialize;

use crate::case::{CaseForm, MAX_ENUMERABLE_CASED};
use crate::error::ConfigError;

/// Default cap on cased characters for all-possible-cases (2^20 variants).
pub const DEFAULT_MAX_CASED: usize = 20;

// ---------------------------------------------------------------------------
// Transformations
// ---------------------------------------------------------------------------

/// Enabled additive case transformations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransformSet {
    pub all_uppercase: bool,
    pub all_lowercase: bool,
    pub first_uppercase: bool,
    pub camelcase: bool,
    pub all_possible_cases: bool,
}

impl TransformSet {
    pub fn is_empty(&self) -> bool {
        !(self.all_uppercase
            || self.all_lowercase
            || self.first_uppercase
            || self.camelcase
            || self.all_possible_cases)
    }

    /// Fall back to all-possible-cases when nothing was selected.
    pub fn or_default(self) -> Self {
        if self.is_empty() {
            Self {
                all_possible_cases: true,
                ..self
            }
        } else {
            self
        }
    }

    /// The single-result case forms that are enabled, in a fixed order.
    pub fn forms(&self) -> Vec<CaseForm> {
        let mut forms = Vec::with_capacity(4);
        if self.all_uppercase {
            forms.push(CaseForm::AllUpper);
        }
        if self.all_lowercase {
            forms.push(CaseForm::AllLower);
        }
        if self.first_uppercase {
            forms.push(CaseForm::FirstUpper);
        }
        if self.camelcase {
            forms.push(CaseForm::Capitalized);
        }
        forms
    }
}

// ---------------------------------------------------------------------------
// Years and ages
// ---------------------------------------------------------------------------

/// Which year decorations to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct YearVariants {
    pub begin_with_year: bool,
    pub end_with_year: bool,
    pub splitted_year: bool,
}

impl YearVariants {
    pub fn all() -> Self {
        Self {
            begin_with_year: true,
            end_with_year: true,
            splitted_year: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.begin_with_year || self.end_with_year || self.splitted_year)
    }

    /// Enable every variant when none was selected.
    pub fn or_all(self) -> Self {
        if self.is_empty() { Self::all() } else { self }
    }

    /// Number of decorated words produced per (word, year) pair.
    pub fn per_year(&self) -> usize {
        3 * usize::from(self.end_with_year)
            + 3 * usize::from(self.begin_with_year)
            + usize::from(self.splitted_year)
    }
}

/// Which age decorations to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AgeVariants {
    pub start_with_age: bool,
    pub end_with_age: bool,
}

impl AgeVariants {
    pub fn all() -> Self {
        Self {
            start_with_age: true,
            end_with_age: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.start_with_age || self.end_with_age)
    }

    /// Enable every variant when none was selected.
    pub fn or_all(self) -> Self {
        if self.is_empty() { Self::all() } else { self }
    }
}

/// Inclusive range of four-digit years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct YearSpec {
    pub start: u16,
    pub end: u16,
}

impl YearSpec {
    pub const MAX: u16 = 9999;

    pub fn single(year: u16) -> Self {
        Self {
            start: year,
            end: year,
        }
    }

    pub fn range(start: u16, end: u16) -> Result<Self, ConfigError> {
        let spec = Self { start, end };
        spec.validate()?;
        Ok(spec)
    }

    /// Parse one or two `YYYY` values.
    ///
    /// No values means no year decoration. Two equal values collapse into a
    /// single year.
    pub fn parse<S: AsRef<str>>(values: &[S]) -> Result<Option<Self>, ConfigError> {
        let years = parse_fixed_digits(values, 4, "year", ConfigError::InvalidYear)?;
        match years.as_slice() {
            [] => Ok(None),
            [y] => Ok(Some(Self::single(*y as u16))),
            [a, b] => Self::range(*a as u16, *b as u16).map(Some),
            _ => unreachable!("parse_fixed_digits caps the value count"),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for y in [self.start, self.end] {
            if y > Self::MAX {
                return Err(ConfigError::InvalidYear(y.to_string()));
            }
        }
        if self.start > self.end {
            return Err(ConfigError::YearRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Every year in the range as a zero-padded four-character string.
    pub fn years(&self) -> impl Iterator<Item = String> + Clone + use<> {
        (self.start..=self.end).map(|y| format!("{y:04}"))
    }

    /// Number of values in the range.
    pub fn count(&self) -> usize {
        usize::from(self.end.saturating_sub(self.start)) + 1
    }
}

/// Inclusive range of two-digit ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AgeSpec {
    pub start: u8,
    pub end: u8,
}

impl AgeSpec {
    pub const MAX: u8 = 99;

    pub fn single(age: u8) -> Self {
        Self {
            start: age,
            end: age,
        }
    }

    pub fn range(start: u8, end: u8) -> Result<Self, ConfigError> {
        let spec = Self { start, end };
        spec.validate()?;
        Ok(spec)
    }

    /// Parse one or two `YY` values.
    pub fn parse<S: AsRef<str>>(values: &[S]) -> Result<Option<Self>, ConfigError> {
        let ages = parse_fixed_digits(values, 2, "age", ConfigError::InvalidAge)?;
        match ages.as_slice() {
            [] => Ok(None),
            [a] => Ok(Some(Self::single(*a as u8))),
            [a, b] => Self::range(*a as u8, *b as u8).map(Some),
            _ => unreachable!("parse_fixed_digits caps the value count"),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for a in [self.start, self.end] {
            if a > Self::MAX {
                return Err(ConfigError::InvalidAge(a.to_string()));
            }
        }
        if self.start > self.end {
            return Err(ConfigError::AgeRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Every age in the range as a zero-padded two-character string.
    pub fn ages(&self) -> impl Iterator<Item = String> + Clone + use<> {
        (self.start..=self.end).map(|a| format!("{a:02}"))
    }

    /// Number of values in the range.
    pub fn count(&self) -> usize {
        usize::from(self.end.saturating_sub(self.start)) + 1
    }
}

fn parse_fixed_digits<S: AsRef<str>>(
    values: &[S],
    width: usize,
    option: &'static str,
    invalid: fn(String) -> ConfigError,
) -> Result<Vec<u32>, ConfigError> {
    if values.len() > 2 {
        return Err(ConfigError::TooManyValues {
            option,
            count: values.len(),
        });
    }
    values
        .iter()
        .map(|v| {
            let v = v.as_ref();
            if v.len() != width || !v.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(v.to_string()));
            }
            v.parse::<u32>().map_err(|_| invalid(v.to_string()))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Length bounds and growth policy
// ---------------------------------------------------------------------------

/// Optional inclusive character-count bounds on output words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LengthBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthBounds {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Result<Self, ConfigError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(ConfigError::LengthBounds { min, max }),
            _ => Ok(()),
        }
    }

    /// Whether a word of `len` characters satisfies both bounds.
    pub fn contains(&self, len: usize) -> bool {
        self.min.is_none_or(|min| len >= min) && self.fits_max(len)
    }

    /// Whether a word of `len` characters satisfies the upper bound.
    pub fn fits_max(&self, len: usize) -> bool {
        self.max.is_none_or(|max| len <= max)
    }
}

/// What to do with a word whose case enumeration exceeds the cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnGrowthLimit {
    /// Leave the word without case variants and log a warning.
    #[default]
    Skip,
    /// Abort the run.
    Refuse,
}

/// Bounds on the all-possible-cases transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GrowthPolicy {
    /// Maximum number of cased characters a word may have to be enumerated.
    pub max_cased: usize,
    pub on_limit: OnGrowthLimit,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            max_cased: DEFAULT_MAX_CASED,
            on_limit: OnGrowthLimit::Skip,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level configuration
// ---------------------------------------------------------------------------

/// Complete configuration of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    pub transforms: TransformSet,
    /// Extra separators; the empty separator is always tried as well.
    pub separators: Vec<String>,
    pub year: Option<YearSpec>,
    pub year_variants: YearVariants,
    pub age: Option<AgeSpec>,
    pub age_variants: AgeVariants,
    pub bounds: LengthBounds,
    pub unique: bool,
    pub growth: GrowthPolicy,
}

impl GeneratorConfig {
    /// Check every range and bound. Called before any generation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(year) = &self.year {
            year.validate()?;
        }
        if let Some(age) = &self.age {
            age.validate()?;
        }
        self.bounds.validate()?;
        if self.growth.max_cased > MAX_ENUMERABLE_CASED {
            return Err(ConfigError::CaseCapTooLarge {
                cap: self.growth.max_cased,
                max: MAX_ENUMERABLE_CASED,
            });
        }
        Ok(())
    }

    /// Separators to try, deduplicated, with the empty separator first.
    pub fn effective_separators(&self) -> Vec<&str> {
        let mut out: Vec<&str> = vec![""];
        for sep in &self.separators {
            if !out.contains(&sep.as_str()) {
                out.push(sep);
            }
        }
        out
    }
}
