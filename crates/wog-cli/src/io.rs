// Seed file reading and wordlist writing

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use anyhow::{Context, bail};
use hashbrown::HashSet;

/// Number of leading bytes inspected by [`is_text`].
const TEXT_PROBE_LEN: usize = 512;

/// Largest share of non-text bytes a text file may contain.
const MAX_NONTEXT_RATIO: f64 = 0.30;

/// Heuristically decide whether `block` is the start of a text file.
///
/// A NUL byte means binary. Otherwise the block is text when at most 30% of
/// its bytes fall outside printable ASCII and the usual control characters.
/// Bytes of multi-byte UTF-8 sequences count as non-text, so seed files with
/// mostly non-Latin words may be rejected.
pub fn is_text(block: &[u8]) -> bool {
    if block.is_empty() {
        return true;
    }
    if block.contains(&0) {
        return false;
    }
    let nontext = block
        .iter()
        .filter(|&&b| !matches!(b, 0x20..=0x7E | b'\n' | b'\r' | b'\t' | 0x0C | 0x08))
        .count();
    (nontext as f64) / (block.len() as f64) <= MAX_NONTEXT_RATIO
}

/// Read seed words from `reader`, one per line.
///
/// A trailing `\r` is stripped, empty lines are skipped and repeated seeds
/// are dropped (first occurrence kept). Other whitespace is part of the seed.
pub fn parse_seeds(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut seeds: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.strip_suffix('\r').unwrap_or(&line);
        if word.is_empty() || seen.contains(word) {
            continue;
        }
        seen.insert(word.to_string());
        seeds.push(word.to_string());
    }
    Ok(seeds)
}

/// Load the seed words from the file at `path`.
pub fn load_seeds(path: &Path) -> anyhow::Result<Vec<String>> {
    if !path.is_file() {
        bail!("{:?} is not a valid input file path", path.display().to_string());
    }
    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut probe = Vec::with_capacity(TEXT_PROBE_LEN);
    (&mut file)
        .take(TEXT_PROBE_LEN as u64)
        .read_to_end(&mut probe)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if !is_text(&probe) {
        bail!("{:?} does not look like a text file", path.display().to_string());
    }

    let reader = BufReader::new(io::Cursor::new(probe).chain(file));
    parse_seeds(reader).with_context(|| format!("failed to read {}", path.display()))
}

/// Make sure the output file can be created: its directory must exist.
pub fn check_output_path(path: &Path) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        bail!("{:?} is not a valid output file path", path.display().to_string());
    }
    if path.is_dir() {
        bail!("{:?} is a directory", path.display().to_string());
    }
    Ok(())
}

/// Write every word on its own line. Returns the number of words written.
pub fn write_words<W: Write>(out: &mut W, words: impl Iterator<Item = String>) -> io::Result<usize> {
    let mut written = 0;
    for word in words {
        out.write_all(word.as_bytes())?;
        out.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}
