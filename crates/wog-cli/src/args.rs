// Command-line arguments and their mapping onto GeneratorConfig

use std::path::PathBuf;

use clap::Parser;
use wog_core::config::{
    AgeSpec, AgeVariants, DEFAULT_MAX_CASED, GrowthPolicy, LengthBounds, OnGrowthLimit,
    TransformSet, YearSpec, YearVariants,
};
use wog_core::{ConfigError, GeneratorConfig};

const AFTER_HELP: &str = "\
Example:
  Starting from seeds.txt, apply the all-possible-cases transformation,
  combine every pair of words with and without the separators , _ . -
  decorate the result with the years 1980 to 1999 and keep only words of
  8 to 12 characters:

    wog seeds.txt -v -a -S , _ . - -Y 1980 1999 -m 8 -M 12 -o wordlist.txt

When no case transformation is selected, --all-possible-cases is implied.
When --year is given without --begin-with-year, --end-with-year or
--splitted-year, all three are implied; likewise for --age.";

/// A simple wordlist generator.
#[derive(Debug, Parser)]
#[command(name = "wog")]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// File containing the seed words, one per line
    #[arg(value_name = "input.wordlist")]
    pub input: PathBuf,

    /// Add the all-uppercase variant of every word
    #[arg(long)]
    pub all_uppercase: bool,

    /// Add the all-lowercase variant of every word
    #[arg(long)]
    pub all_lowercase: bool,

    /// Add the variant with the first character uppercased
    #[arg(long)]
    pub first_uppercase: bool,

    /// Add the variant with the first character uppercased and the rest lowercased
    #[arg(long)]
    pub camelcase: bool,

    /// Add every possible upper/lower case assignment of every word
    #[arg(short = 'a', long)]
    pub all_possible_cases: bool,

    /// Separator(s) placed between combined words
    #[arg(short = 'S', long = "separator", value_name = "SEP", num_args = 0..)]
    pub separators: Vec<String>,

    /// A year YYYY or an inclusive range YYYY YYYY
    #[arg(short = 'Y', long, value_name = "YYYY", num_args = 1..=2)]
    pub year: Vec<String>,

    /// Prepend the last 2, 3 and 4 digits of each year
    #[arg(long)]
    pub begin_with_year: bool,

    /// Append the last 2, 3 and 4 digits of each year
    #[arg(long)]
    pub end_with_year: bool,

    /// Wrap each word in the two halves of each year
    #[arg(long)]
    pub splitted_year: bool,

    /// An age YY or an inclusive range YY YY
    #[arg(short = 'A', long, value_name = "YY", num_args = 1..=2)]
    pub age: Vec<String>,

    /// Prepend each age
    #[arg(long)]
    pub start_with_age: bool,

    /// Append each age
    #[arg(long)]
    pub end_with_age: bool,

    /// Minimum number of characters in output words (0 = no minimum)
    #[arg(short = 'm', long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum number of characters in output words (0 = no maximum)
    #[arg(short = 'M', long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Remove duplicate output words
    #[arg(short = 'u', long)]
    pub uniq: bool,

    /// Words with more cased letters than this get no all-possible-cases variants
    #[arg(long, value_name = "K", default_value_t = DEFAULT_MAX_CASED)]
    pub max_cased: usize,

    /// Abort instead of skipping when a word exceeds --max-cased
    #[arg(long)]
    pub refuse_growth: bool,

    /// File the generated wordlist is written to
    #[arg(short = 'o', long = "output-file", value_name = "output.wordlist")]
    pub output: PathBuf,

    /// Log every pipeline step
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// Build the generator configuration, applying the implied defaults.
    pub fn to_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let transforms = TransformSet {
            all_uppercase: self.all_uppercase,
            all_lowercase: self.all_lowercase,
            first_uppercase: self.first_uppercase,
            camelcase: self.camelcase,
            all_possible_cases: self.all_possible_cases,
        }
        .or_default();

        let year = YearSpec::parse(&self.year)?;
        let year_variants = YearVariants {
            begin_with_year: self.begin_with_year,
            end_with_year: self.end_with_year,
            splitted_year: self.splitted_year,
        };
        let age = AgeSpec::parse(&self.age)?;
        let age_variants = AgeVariants {
            start_with_age: self.start_with_age,
            end_with_age: self.end_with_age,
        };

        let bounds = LengthBounds::new(
            self.min_length.filter(|&n| n > 0),
            self.max_length.filter(|&n| n > 0),
        )?;

        let config = GeneratorConfig {
            transforms,
            separators: self.separators.clone(),
            year,
            year_variants: if year.is_some() {
                year_variants.or_all()
            } else {
                year_variants
            },
            age,
            age_variants: if age.is_some() {
                age_variants.or_all()
            } else {
                age_variants
            },
            bounds,
            unique: self.uniq,
            growth: GrowthPolicy {
                max_cased: self.max_cased,
                on_limit: if self.refuse_growth {
                    OnGrowthLimit::Refuse
                } else {
                    OnGrowthLimit::Skip
                },
            },
        };
        config.validate()?;
        Ok(config)
    }
}
