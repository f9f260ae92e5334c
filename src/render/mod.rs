//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::DocumentationRecord;
use anyhow::{anyhow, Result};

/// A documented function ready for output.
pub struct Entry<'a> {
    pub name: &'a str,
    pub docs: &'a DocumentationRecord,
}

/// Trait for rendering documentation entries into a specific output format.
pub trait Renderer {
    fn render(&self, entries: &[Entry]) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown or json",
            format
        )),
    }
}
