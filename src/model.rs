//! Data model for extracted documentation — format-agnostic.

use serde::Serialize;
use std::path::PathBuf;

/// Normalized documentation for a single function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentationRecord {
    /// One line, first character upper-cased. Empty when nothing was found.
    pub summary: String,
    /// In the order the reference page lists them.
    pub parameters: Vec<ParameterDoc>,
    /// Reference page the record was extracted from; `None` for a
    /// synthesized default record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl DocumentationRecord {
    /// Empty record carrying one blank entry per declared parameter.
    pub fn placeholder(symbol: &FunctionSymbol) -> Self {
        DocumentationRecord {
            summary: String::new(),
            parameters: symbol
                .parameters
                .iter()
                .map(|name| ParameterDoc::new(name.clone(), String::new()))
                .collect(),
            source: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDoc {
    pub name: String,
    pub description: String,
}

impl ParameterDoc {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        ParameterDoc {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A function the binding generator wants documentation for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSymbol {
    /// Full native name, e.g. `BindBuffer` or `Uniform4fv`. Cache key.
    pub canonical_name: String,
    /// Shorter generator-facing name, e.g. `Uniform4`. Fallback lookup key.
    pub trimmed_name: String,
    /// Declared parameter names, used only for the default record.
    pub parameters: Vec<String>,
}

impl FunctionSymbol {
    pub fn new<I, S>(canonical_name: &str, trimmed_name: &str, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FunctionSymbol {
            canonical_name: canonical_name.to_string(),
            trimmed_name: trimmed_name.to_string(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}
