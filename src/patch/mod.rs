//! Regex-driven text patchers.
//!
//! A patcher is a pure `&str -> Patched` transformation. [`apply_to_file`]
//! adds the file plumbing: read, patch, write back only on change.

pub mod apikey;
pub mod cors;

use crate::error::PatchResult;
use crate::report::Outcome;
use crate::utils::{file_exists, read_file_to_string, write_file_sync};
use regex::{Regex, Replacer};
use similar::TextDiff;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

pub use apikey::{ApiKeyPatch, ValueSource};
pub use cors::CorsPatch;

/// Result of running a patcher over a content snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patched {
    /// At least one block was rewritten
    Changed(String),
    /// Text left as-is; `matched` tells whether any block was recognised
    Unchanged { matched: bool },
}

impl Patched {
    /// Build from the original text and the candidate replacement
    pub fn from_replacement(original: &str, replaced: Cow<'_, str>, matched: bool) -> Self {
        if replaced == original {
            Patched::Unchanged { matched }
        } else {
            Patched::Changed(replaced.into_owned())
        }
    }

    /// Outcome to report when nothing was written, or `Updated` otherwise
    pub fn outcome(&self) -> Outcome {
        match self {
            Patched::Changed(_) => Outcome::Updated,
            Patched::Unchanged { matched: true } => Outcome::AlreadyCompliant,
            Patched::Unchanged { matched: false } => Outcome::NoMatch,
        }
    }
}

/// A find-and-replace policy over whole-file text
pub trait TextPatch {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Apply the policy to `content`
    fn patch(&self, content: &str) -> Patched;
}

/// Matcher for brace-delimited blocks that contain no nested braces.
///
/// Patterns are expected to use `[^}]` for the block body, so a block that
/// contains an inner `}` (a nested object, a `${...}` template) is never
/// matched. This is a known limitation, not a parser.
#[derive(Debug, Clone)]
pub struct FlatBlockMatcher {
    regex: Regex,
}

impl FlatBlockMatcher {
    pub fn new(pattern: &str) -> PatchResult<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of non-overlapping blocks in `text`
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Replace every matched block
    pub fn replace_all<'t, R: Replacer>(&self, text: &'t str, rep: R) -> Cow<'t, str> {
        self.regex.replace_all(text, rep)
    }
}

/// Read `path`, run `patch` over it and overwrite the file if the text changed
pub fn apply_to_file(patch: &dyn TextPatch, path: &Path) -> PatchResult<Outcome> {
    if !file_exists(path) {
        debug!("{}: {} not found", patch.name(), path.display());
        return Ok(Outcome::NotFound);
    }

    let original = read_file_to_string(path)?;
    let patched = patch.patch(&original);
    let outcome = patched.outcome();

    if let Patched::Changed(content) = patched {
        debug!("{}", unified_diff(path, &original, &content));
        write_file_sync(path, &content)?;
        info!("{}: updated {}", patch.name(), path.display());
    } else {
        debug!("{}: {} left unchanged ({:?})", patch.name(), path.display(), outcome);
    }

    Ok(outcome)
}

fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(2)
        .header(&name, &name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    struct Upper;

    impl TextPatch for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn patch(&self, content: &str) -> Patched {
            let matched = content.contains("fetch");
            Patched::from_replacement(content, Cow::Owned(content.to_uppercase()), matched)
        }
    }

    #[test]
    fn test_flat_block_matcher_skips_nested_braces() {
        let matcher = FlatBlockMatcher::new(r"const x = \{[^}]+\};").unwrap();
        assert!(matcher.is_match("const x = { a: 1 };"));
        assert!(!matcher.is_match("const x = { a: { b: 1 } };"));
        assert_eq!(matcher.count("const x = { a: 1 };\nconst x = { b: 2 };"), 2);
    }

    #[test]
    fn test_apply_to_file_writes_only_on_change() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.ts");

        fs::write(&path, "fetch").unwrap();
        assert_eq!(apply_to_file(&Upper, &path).unwrap(), Outcome::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), "FETCH");

        assert_eq!(apply_to_file(&Upper, &path).unwrap(), Outcome::NoMatch);
        assert_eq!(fs::read_to_string(&path).unwrap(), "FETCH");
    }

    #[test]
    fn test_apply_to_file_missing() {
        let dir = tempdir().unwrap();
        let outcome = apply_to_file(&Upper, &dir.path().join("gone.ts")).unwrap();
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[test]
    fn test_patched_outcome() {
        assert_eq!(
            Patched::Unchanged { matched: true }.outcome(),
            Outcome::AlreadyCompliant
        );
        assert_eq!(
            Patched::from_replacement("a", Cow::Borrowed("a"), false).outcome(),
            Outcome::NoMatch
        );
        assert!(matches!(
            Patched::from_replacement("a", Cow::Borrowed("b"), true),
            Patched::Changed(_)
        ));
    }
}
