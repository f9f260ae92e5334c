//! String-level cleanup applied before a reference page is parsed.
//!
//! The pages are legacy DocBook: they use entities the XML parser does not
//! know, `xml:`-qualified attributes, a DOCTYPE pulling in external entity
//! files and a default namespace. All four are rewritten away here so the
//! extractor can run plain, namespace-free path queries.

use regex::Regex;
use std::sync::LazyLock;

/// Non-standard entities and their literal replacement.
const ENTITIES: &[(&str, &str)] = &[("&epsi;", "epsilon")];

const XML_PREFIX: &str = "xml:";

static RE_DOCTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!DOCTYPE[^>\[]*(\[.*?\])?\s*>").unwrap());

// Prefixed declarations (`xmlns:xlink`) stay; only the default namespace goes.
static RE_DEFAULT_XMLNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+xmlns\s*=\s*("[^"]*"|'[^']*')"#).unwrap());

/// Run every rewrite in order. Entity replacement must precede parsing and
/// prefix stripping must precede namespace removal.
pub fn normalize(text: &str) -> String {
    let text = replace_entities(text);
    let text = strip_xml_prefix(&text);
    let text = remove_doctype(&text);
    remove_default_namespace(&text)
}

pub fn replace_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, literal)| acc.replace(entity, literal))
}

/// `xml:id="glClear"` becomes `id="glClear"`.
pub fn strip_xml_prefix(text: &str) -> String {
    text.replace(XML_PREFIX, "")
}

pub fn remove_doctype(text: &str) -> String {
    RE_DOCTYPE.replace_all(text, "").into_owned()
}

pub fn remove_default_namespace(text: &str) -> String {
    RE_DEFAULT_XMLNS.replace_all(text, "").into_owned()
}
