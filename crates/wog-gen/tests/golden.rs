//! Golden tests: run the pipeline over the cases in `tests/golden/cases.json`
//! and compare the exact output sequence.

use std::path::PathBuf;

use serde::Deserialize;
use wog_core::GeneratorConfig;
use wog_gen::generate;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    seeds: Vec<String>,
    config: GeneratorConfig,
    expected: Vec<String>,
}

fn load_cases() -> Vec<Case> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/cases.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

#[test]
fn golden_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in cases {
        let out = generate(case.seeds, case.config)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name))
            .into_vec();
        if out != case.expected {
            failures.push(format!(
                "{}:\n  expected {:?}\n  got      {:?}",
                case.name, case.expected, out
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} golden case(s) differ:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
