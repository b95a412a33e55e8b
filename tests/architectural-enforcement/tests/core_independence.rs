//! Integration Test: Headless Core
//!
//! **Policy**: `showcase-core` must build without a terminal or an async
//! runtime. Surfaces depend on the core, never the reverse.

use std::fs;

use architectural_enforcement::{code_part, production_lines, rust_sources, workspace_root};

const SURFACE_CRATES: [&str; 5] = ["ratatui", "crossterm", "tokio", "futures", "showcase-tui"];

#[test]
fn test_core_manifest_has_no_surface_crates() {
    let manifest = fs::read_to_string(workspace_root().join("showcase/core/Cargo.toml"))
        .expect("core manifest readable");

    for line in manifest.lines() {
        let key = line.split('=').next().unwrap_or("").trim();
        assert!(
            !SURFACE_CRATES.contains(&key),
            "showcase-core depends on surface crate `{key}`"
        );
    }
}

#[test]
fn test_core_sources_do_not_import_surface_crates() {
    for (path, content) in rust_sources("showcase/core/src") {
        for (line_number, line) in production_lines(&content) {
            let code = code_part(line);
            for krate in ["ratatui::", "crossterm::", "tokio::", "showcase_tui::"] {
                assert!(
                    !code.contains(krate),
                    "{}:{line_number} uses {krate}",
                    path.display()
                );
            }
        }
    }
}
