pub mod evidence;
pub mod files;
pub mod live;

use regex::Regex;
use std::path::Path;

fn file_exists(path: &Path) -> bool {
    path.exists()
}

fn file_contains(path: &Path, needle: &str) -> bool {
    visible_content(path).is_some_and(|c| c.contains(needle))
}

fn file_matches(path: &Path, pattern: &Regex) -> bool {
    visible_content(path).is_some_and(|c| pattern.is_match(&c))
}

/// File text with `#` line comments removed for Terraform sources, so a
/// commented-out `backend "s3"` block does not satisfy a content check.
/// A file that cannot be read yields `None`, failing every content check.
fn visible_content(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    if path.extension().is_some_and(|e| e == "tf") {
        let kept: Vec<&str> = content
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .collect();
        Some(kept.join("\n"))
    } else {
        Some(content)
    }
}
