// wog: generate a wordlist from a file of seed words.
//
// Usage:
//   wog [OPTIONS] -o <output.wordlist> <input.wordlist>
//
// See `wog --help` for the full option list.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use wog_cli::Args;
use wog_cli::io::{check_output_path, load_seeds, write_words};
use wog_gen::Generator;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    wog_cli::init_tracing(args.verbose);

    let generator = Generator::new(args.to_config()?)?;
    tracing::debug!(config = ?generator.config(), "arguments parsed");

    check_output_path(&args.output)?;
    let seeds = load_seeds(&args.input)?;
    tracing::debug!(
        seeds = seeds.len(),
        input = %args.input.display(),
        "loaded input words"
    );

    let started = Instant::now();
    tracing::info!("wordlist generation process has started");

    let base = generator.base(seeds)?;
    if args.verbose {
        let (years, ages) = generator.decoration_candidates(&base);
        tracing::info!(words = base.len(), "transformed and combined words ready");
        tracing::info!(years, ages, "decorating and writing");
    }

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    let written = write_words(&mut out, generator.output(&base))
        .and_then(|n| out.flush().map(|()| n))
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    tracing::info!(
        output = %args.output.display(),
        "{written} words were generated in {:.3} seconds",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
