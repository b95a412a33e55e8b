//! Integration Test: Sleep Prohibition
//!
//! **Policy**: The page core never sleeps. Every delay is a scheduler timer
//! so a manual clock can drive it in tests.
//! **Exceptions**: frame pacing in the TUI event loop (`tui/src/app.rs`).

use architectural_enforcement::{code_part, production_lines, rust_sources};

fn is_sleep_call(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(") || code.contains(" sleep(")
}

/// Test that the core contains no sleep() calls at all
#[test]
fn test_no_sleep_in_core() {
    let mut violations = Vec::new();

    for (path, content) in rust_sources("showcase/core/src") {
        for (line_number, line) in production_lines(&content) {
            if is_sleep_call(code_part(line)) {
                violations.push(format!("{}:{line_number}: {}", path.display(), line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "sleep calls in showcase-core:\n  {}",
        violations.join("\n  ")
    );
}

/// Test that the TUI only sleeps to pace frames
#[test]
fn test_tui_sleeps_only_for_frame_pacing() {
    let mut violations = Vec::new();

    for (path, content) in rust_sources("tui/src") {
        let frame_loop = path.ends_with("app.rs");
        for (line_number, line) in production_lines(&content) {
            let code = code_part(line);
            if is_sleep_call(code) && !(frame_loop && code.contains("tokio::time::sleep(")) {
                violations.push(format!("{}:{line_number}: {}", path.display(), line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "sleep calls outside the frame loop:\n  {}",
        violations.join("\n  ")
    );
}
