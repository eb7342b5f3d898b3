//! Hygiene: budgets for panicking and error-discarding patterns in `client/src`.
//!
//! Each pattern has a budget that only ratchets down. Test files
//! (`*_test.rs`) are exempt.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    note: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, note: "propagate or degrade instead" },
    Budget { pattern: ".expect(", max: 0, note: "propagate or degrade instead" },
    Budget { pattern: "panic!(", max: 0, note: "the page must never abort" },
    Budget { pattern: "unreachable!(", max: 0, note: "encode the case in the types" },
    Budget { pattern: "todo!(", max: 0, note: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, note: "finish the stub" },
    // Parameter sinks in the non-hydrate branches of browser adapters.
    Budget { pattern: "let _ =", max: 6, note: "log the failure or consume the value" },
    Budget { pattern: ".ok()", max: 0, note: "inspect the error before dropping it" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, note: "delete the dead code" },
];

fn source_files() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_source = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_source && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|(path, _)| path.ends_with("lib.rs")),
        "hygiene must run from the client crate root"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();

    for budget in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|(path, content)| {
                let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
                (path.display().to_string(), count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();
        let found: usize = hits.iter().map(|(_, count)| count).sum();
        if found > budget.max {
            let detail = hits
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "{} budget exceeded: found {found}, max {} ({})\n{detail}",
                budget.pattern, budget.max, budget.note
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
