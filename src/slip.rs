// Route slips: the unit being scheduled.
//
// A slip is one plain-text description of an outing. Its word set is
// extracted once at load time and never mutated; everything downstream
// (the similarity table, the ordering search) reads from it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::tokenizer::significant_words;

/// One route slip, identified by the path it was loaded from.
#[derive(Debug, Clone)]
pub struct RouteSlip {
    /// Source path string, used as the identifier in all output.
    pub name: String,
    /// Distinct significant words in the slip text.
    pub words: HashSet<String>,
}

impl RouteSlip {
    /// Build a slip from raw text, without touching the filesystem.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            words: significant_words(text),
        }
    }

    /// Read and tokenize the slip at `path`.
    ///
    /// A missing or unreadable file is a hard error naming the path; the
    /// run was asked to order exactly these slips, so none may be skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read route slip {}", path.display()))?;
        let slip = Self::from_text(path.display().to_string(), &text);
        debug!(slip = %slip.name, words = slip.words.len(), "parsed route slip");
        Ok(slip)
    }
}
