//! Symbol-to-documentation facade.
//!
//! Resolves a function symbol to its reference page, runs the
//! normalize → equation rewrite → extract pipeline and caches the outcome.
//! Missing or broken pages never surface as errors: the caller always gets a
//! structurally valid record.

use crate::config::Settings;
use crate::equation;
use crate::error::{DocError, Result};
use crate::extract;
use crate::index::FileIndex;
use crate::model::{DocumentationRecord, FunctionSymbol};
use crate::normalize;
use crate::translate::EnumTranslator;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Counters describing how much work the caches saved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorStats {
    /// Reference pages read and parsed.
    pub files_parsed: usize,
    /// `process` calls answered from the per-symbol cache.
    pub symbol_cache_hits: usize,
    /// Lookups answered from the last-parsed-file slot.
    pub file_cache_hits: usize,
    /// Default records handed out because no usable page was found.
    pub placeholders: usize,
}

/// The most recently parsed file and its outcome (`None` when it failed).
struct LastFile {
    path: PathBuf,
    record: Option<Rc<DocumentationRecord>>,
}

/// Not thread-safe: both caches are plain owned state behind `&mut self`.
pub struct DocProcessor {
    settings: Settings,
    index: FileIndex,
    documentation: HashMap<String, Rc<DocumentationRecord>>,
    last_file: Option<LastFile>,
    stats: ProcessorStats,
}

impl DocProcessor {
    /// Index the configured directories. Fails only when neither exists.
    pub fn new(settings: Settings) -> Result<Self> {
        let index = FileIndex::build(&settings.doc_path, &settings.fallback_doc_path)?;
        Ok(Self::with_index(settings, index))
    }

    pub fn with_index(settings: Settings, index: FileIndex) -> Self {
        DocProcessor {
            settings,
            index,
            documentation: HashMap::new(),
            last_file: None,
            stats: ProcessorStats::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn index(&self) -> &FileIndex {
        &self.index
    }

    pub fn stats(&self) -> ProcessorStats {
        self.stats
    }

    /// Documentation for `symbol`, cached by canonical name.
    ///
    /// Calling this twice for the same symbol returns the same `Rc` without
    /// touching the file system.
    pub fn process(
        &mut self,
        symbol: &FunctionSymbol,
        translator: &dyn EnumTranslator,
    ) -> Rc<DocumentationRecord> {
        if let Some(cached) = self.documentation.get(&symbol.canonical_name) {
            self.stats.symbol_cache_hits += 1;
            tracing::debug!(symbol = %symbol.canonical_name, "documentation cache hit");
            return Rc::clone(cached);
        }

        let path = self.resolve(symbol).map(Path::to_path_buf);
        let found = path.and_then(|path| self.process_file(&path, translator));

        let docs = match found {
            Some(docs) => docs,
            None => {
                self.stats.placeholders += 1;
                Rc::new(DocumentationRecord::placeholder(symbol))
            }
        };

        self.documentation
            .insert(symbol.canonical_name.clone(), Rc::clone(&docs));
        docs
    }

    /// File names tried for `symbol`, in lookup order.
    pub fn candidate_names(&self, symbol: &FunctionSymbol) -> [String; 3] {
        let prefix = &self.settings.function_prefix;
        let stripped = symbol.trimmed_name.trim_end_matches(|c: char| c.is_ascii_digit());
        [
            format!("{prefix}{}.xml", symbol.canonical_name),
            format!("{prefix}{}.xml", symbol.trimmed_name),
            format!("{prefix}{stripped}.xml"),
        ]
    }

    /// Path of the first candidate present in the index.
    pub fn resolve(&self, symbol: &FunctionSymbol) -> Option<&Path> {
        let found = self
            .candidate_names(symbol)
            .into_iter()
            .find_map(|name| self.index.resolve(&name));
        match found {
            Some(path) => tracing::debug!(symbol = %symbol.canonical_name, file = %path.display(), "resolved documentation file"),
            None => tracing::debug!(symbol = %symbol.canonical_name, "no documentation file"),
        }
        found
    }

    /// Parse `path` unless it was the last file parsed. `None` when the file
    /// could not be read or is malformed.
    fn process_file(
        &mut self,
        path: &Path,
        translator: &dyn EnumTranslator,
    ) -> Option<Rc<DocumentationRecord>> {
        if let Some(last) = self.last_file.as_ref().filter(|last| last.path == path) {
            self.stats.file_cache_hits += 1;
            return last.record.clone();
        }

        self.stats.files_parsed += 1;
        let record = match parse_file(path, &self.settings, translator) {
            Ok(mut docs) => {
                docs.source = Some(path.to_path_buf());
                Some(Rc::new(docs))
            }
            Err(DocError::Io { path, source }) => {
                tracing::warn!(file = %path.display(), error = %source, "failed to read documentation file");
                None
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "malformed documentation file");
                None
            }
        };

        self.last_file = Some(LastFile {
            path: path.to_path_buf(),
            record: record.clone(),
        });
        record
    }
}

/// Read, normalize, rewrite equations and extract.
fn parse_file(
    path: &Path,
    settings: &Settings,
    translator: &dyn EnumTranslator,
) -> Result<DocumentationRecord> {
    let bytes = fs::read(path).map_err(|source| DocError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Older pages are not always valid UTF-8; stray bytes become U+FFFD.
    let raw = String::from_utf8_lossy(&bytes);
    let text = equation::rewrite(&normalize::normalize(&raw));
    extract::extract(&text, settings, translator).inspect_err(|e| {
        if e.is_malformed_document() {
            tracing::debug!(file = %path.display(), content = %text, "offending document");
        }
    })
}
