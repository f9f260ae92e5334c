//! Summary and parameter extraction from a normalized reference page.

use crate::config::Settings;
use crate::error::{DocError, Result};
use crate::model::{DocumentationRecord, ParameterDoc};
use crate::query::TreePath;
use crate::translate::EnumTranslator;
use crate::tree::DocTree;
use std::sync::LazyLock;

const SUMMARY_EXPR: &str = "/refentry/refnamediv/refpurpose";

static SUMMARY: LazyLock<TreePath> = LazyLock::new(|| TreePath::parse(SUMMARY_EXPR).unwrap());

static PARAMETER_NAMES: LazyLock<TreePath> = LazyLock::new(|| {
    TreePath::parse("/refentry/refsect1[@id='parameters']/variablelist/varlistentry/term/parameter")
        .unwrap()
});

// Relative to a `parameter`: up through `term` to the `varlistentry`.
static PARAMETER_DESCRIPTION: LazyLock<TreePath> =
    LazyLock::new(|| TreePath::parse("../../listitem").unwrap());

static CONSTANTS: LazyLock<TreePath> = LazyLock::new(|| TreePath::parse("//constant").unwrap());

/// Parse normalized, equation-free text and extract its documentation.
///
/// `source` is left unset; the caller knows which file the text came from.
pub fn extract(
    text: &str,
    settings: &Settings,
    translator: &dyn EnumTranslator,
) -> Result<DocumentationRecord> {
    let mut tree = DocTree::parse(text)?;
    if settings.translate_constants() {
        translate_constants(&mut tree, &settings.constant_prefix, translator);
    }
    to_documentation(&tree)
}

/// Rewrite every `<constant>` through the translator, stripping `prefix`
/// first when the text starts with it.
pub fn translate_constants(tree: &mut DocTree, prefix: &str, translator: &dyn EnumTranslator) {
    for id in CONSTANTS.select(tree, tree.root()) {
        let text = tree.text(id);
        let token = text.strip_prefix(prefix).unwrap_or(&text);
        let translated = translator.translate_constant_name(token, false);
        tree.set_text(id, translated);
    }
}

pub fn to_documentation(tree: &DocTree) -> Result<DocumentationRecord> {
    let summary = SUMMARY
        .select_first(tree, tree.root())
        .ok_or(DocError::MissingSummary(SUMMARY_EXPR))?;

    let parameters = PARAMETER_NAMES
        .select(tree, tree.root())
        .into_iter()
        .map(|param| {
            let description = PARAMETER_DESCRIPTION
                .select_first(tree, param)
                .map(|item| cleanup(&tree.text(item)))
                .unwrap_or_default();
            ParameterDoc::new(tree.text(param).trim(), description)
        })
        .collect();

    let summary = cleanup(&tree.text(summary));
    if summary.is_empty() {
        return Err(DocError::MissingSummary(SUMMARY_EXPR));
    }

    Ok(DocumentationRecord {
        summary: capitalize(&summary),
        parameters,
        source: None,
    })
}

/// Collapse multi-line, indented markup text into one line.
pub fn cleanup(text: &str) -> String {
    text.replace('\r', "\n")
        .split('\n')
        .filter(|segment| !segment.is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Upper-case the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
