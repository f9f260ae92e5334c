//! GitHub-flavored markdown renderer.

use crate::model::DocumentationRecord;
use crate::render::{Entry, Renderer};
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, entries: &[Entry]) -> Result<String> {
        let mut output = String::new();

        if !entries.is_empty() {
            output.push_str("## Index\n\n");
            for entry in entries {
                output.push_str(&toc::render_toc_item(entry.name));
                output.push('\n');
            }
            output.push('\n');
        }

        for entry in entries {
            output.push_str(&render_function(entry.name, entry.docs));
            output.push('\n');
        }

        Ok(output)
    }
}

/// Render a single function's documentation block.
fn render_function(name: &str, docs: &DocumentationRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", name));

    if docs.is_placeholder() {
        lines.push("_No documentation found._".to_string());
        lines.push(String::new());
    } else if !docs.summary.is_empty() {
        lines.push(escape(&docs.summary));
        lines.push(String::new());
    }

    if !docs.parameters.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for param in &docs.parameters {
            if param.description.is_empty() {
                lines.push(format!("* **{}**", param.name));
            } else {
                lines.push(format!("* **{}**: {}", param.name, escape(&param.description)));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Equations come through as raw text (`x^2 < y*z`); keep them literal.
fn escape(text: &str) -> String {
    text.replace('<', "\\<")
        .replace('>', "\\>")
        .replace('*', "\\*")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterDoc;
    use std::path::PathBuf;

    fn clear() -> DocumentationRecord {
        DocumentationRecord {
            summary: "Clear buffers to preset values".to_string(),
            parameters: vec![
                ParameterDoc::new("mask", "Bitwise OR of masks."),
                ParameterDoc::new("unused", ""),
            ],
            source: Some(PathBuf::from("glClear.xml")),
        }
    }

    #[test]
    fn renders_index_and_block() {
        let docs = clear();
        let out = MarkdownRenderer
            .render(&[Entry {
                name: "Clear",
                docs: &docs,
            }])
            .unwrap();
        assert_eq!(
            out,
            "## Index\n\n* [Clear](#clear)\n\n### Clear\n\nClear buffers to preset values\n\n#### Parameters\n\n* **mask**: Bitwise OR of masks.\n* **unused**\n\n"
        );
    }

    #[test]
    fn placeholder_is_marked() {
        let docs = DocumentationRecord {
            parameters: vec![ParameterDoc::new("x", "")],
            ..DocumentationRecord::default()
        };
        let out = render_function("Missing", &docs);
        assert!(out.contains("_No documentation found._"));
        assert!(out.contains("* **x**"));
    }

    #[test]
    fn escapes_equation_text() {
        assert_eq!(escape("2^n < m_i * k"), "2^n \\< m\\_i \\* k");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(MarkdownRenderer.render(&[]).unwrap(), "");
    }
}
