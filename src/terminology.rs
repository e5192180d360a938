/*!
 * Domain terminology table.
 *
 * Loads a per-domain controlled vocabulary from a line-oriented term source
 * and enforces it as a post-processing pass over provider output. The table
 * is immutable once loaded for a domain within a session; loading a
 * different domain replaces it wholesale.
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use regex::{NoExpand, Regex};

/// One term mapping with its precompiled whole-word matcher
#[derive(Debug)]
struct TermEntry {
    /// Source-language term as it appears in the term file
    term: String,
    /// Canonical translation to enforce
    canonical: String,
    /// Case-insensitive whole-word pattern for the term
    pattern: Regex,
}

/// Domain-specific term → canonical-translation table
#[derive(Debug)]
pub struct TerminologyTable {
    /// Directory holding `<domain>_terms.txt` files
    terms_dir: PathBuf,
    /// Domain the current entries belong to
    loaded_domain: Option<String>,
    /// Entries ordered longest term first, so overlapping terms are
    /// substituted deterministically ("file system" wins over "system")
    entries: Vec<TermEntry>,
}

impl TerminologyTable {
    /// Create an empty table reading term files from `terms_dir`
    pub fn new(terms_dir: impl Into<PathBuf>) -> Self {
        Self {
            terms_dir: terms_dir.into(),
            loaded_domain: None,
            entries: Vec::new(),
        }
    }

    /// Load the term source for `domain`.
    ///
    /// Idempotent per domain: repeated calls for the already loaded domain
    /// are no-ops. A different domain replaces the table, it never merges.
    /// A missing term file yields an empty table rather than an error.
    pub fn load(&mut self, domain: &str) -> Result<usize> {
        if self.loaded_domain.as_deref() == Some(domain) {
            return Ok(self.entries.len());
        }

        let path = self.terms_dir.join(format!("{}_terms.txt", domain));
        let mut entries = Vec::new();

        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read term file {}", path.display()))?;
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let Some((term, canonical)) = line.split_once('=') else {
                    debug!("ignoring malformed term line: {}", line);
                    continue;
                };
                let term = term.trim();
                let canonical = canonical.trim();
                if term.is_empty() {
                    continue;
                }
                let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                    .with_context(|| format!("failed to compile pattern for term '{}'", term))?;
                entries.push(TermEntry {
                    term: term.to_string(),
                    canonical: canonical.to_string(),
                    pattern,
                });
            }
            // Longest-first keeps overlapping substitutions deterministic
            entries.sort_by(|a, b| b.term.len().cmp(&a.term.len()));
            debug!("loaded {} term(s) for domain '{}'", entries.len(), domain);
        } else {
            warn!("no term file for domain '{}' at {}", domain, path.display());
        }

        self.entries = entries;
        self.loaded_domain = Some(domain.to_string());
        Ok(self.entries.len())
    }

    /// Domain the table currently holds entries for
    pub fn domain(&self) -> Option<&str> {
        self.loaded_domain.as_deref()
    }

    /// Number of loaded terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no terms
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `term = canonical` hint lines for every term occurring verbatim as a
    /// substring of `text`. These are advisory material for the request
    /// prompt; enforcement happens in [`TerminologyTable::enhance`].
    pub fn hints_for(&self, text: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| text.contains(&entry.term))
            .map(|entry| format!("{} = {}", entry.term, entry.canonical))
            .collect()
    }

    /// Enforce the vocabulary on a candidate translation.
    ///
    /// For every term matching whole-word case-insensitively in
    /// `source_text`, any whole-word case-insensitive occurrence of that
    /// term left in `candidate` is replaced by its canonical translation.
    /// Terms are applied longest first.
    pub fn enhance(&self, source_text: &str, candidate: &str) -> String {
        if self.entries.is_empty() {
            return candidate.to_string();
        }

        let mut enhanced = candidate.to_string();
        for entry in &self.entries {
            if entry.pattern.is_match(source_text) {
                enhanced = entry
                    .pattern
                    .replace_all(&enhanced, NoExpand(&entry.canonical))
                    .into_owned();
            }
        }
        enhanced
    }
}
