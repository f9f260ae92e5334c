//! JSON renderer — structured output for tooling integration.
//!
//! One object per function, in request order.

use crate::model::DocumentationRecord;
use crate::render::{Entry, Renderer};
use anyhow::Result;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    docs: &'a DocumentationRecord,
}

impl Renderer for JsonRenderer {
    fn render(&self, entries: &[Entry]) -> Result<String> {
        let out: Vec<JsonEntry> = entries
            .iter()
            .map(|e| JsonEntry {
                name: e.name,
                docs: e.docs,
            })
            .collect();
        let mut json = serde_json::to_string_pretty(&out)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterDoc;
    use std::path::PathBuf;

    #[test]
    fn renders_flat_objects() {
        let docs = DocumentationRecord {
            summary: "Clear buffers".to_string(),
            parameters: vec![ParameterDoc::new("mask", "Buffers to clear.")],
            source: Some(PathBuf::from("/docs/glClear.xml")),
        };
        let out = JsonRenderer
            .render(&[Entry {
                name: "Clear",
                docs: &docs,
            }])
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "Clear");
        assert_eq!(value[0]["summary"], "Clear buffers");
        assert_eq!(value[0]["parameters"][0]["name"], "mask");
        assert_eq!(value[0]["parameters"][0]["description"], "Buffers to clear.");
        assert_eq!(value[0]["source"], "/docs/glClear.xml");
    }

    #[test]
    fn placeholder_has_no_source() {
        let docs = DocumentationRecord::default();
        let out = JsonRenderer
            .render(&[Entry {
                name: "Missing",
                docs: &docs,
            }])
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value[0].get("source").is_none());
        assert_eq!(value[0]["summary"], "");
    }
}
