//! bind-docs — documentation extraction for binding generators.
//!
//! Turns DocBook reference pages (`glClear.xml`, ...) into a one-line
//! summary plus per-parameter descriptions for each generated function.
//!
//! Pipeline per page:
//!
//! 1. **Normalize** — fix unknown entities, drop `xml:` prefixes, the DOCTYPE
//!    and the default namespace
//! 2. **Rewrite equations** — replace MathML blocks with the plain-text
//!    form from their `<!-- eqn: ... :-->` comment
//! 3. **Extract** — parse, translate `<constant>` names, pull out the
//!    purpose and the parameter list
//!
//! [`DocProcessor`] maps symbols to pages and caches the results.

pub mod config;
pub mod equation;
pub mod error;
pub mod extract;
pub mod index;
pub mod model;
pub mod normalize;
pub mod processor;
pub mod query;
pub mod render;
pub mod translate;
pub mod tree;

mod toc;

pub use config::{Legacy, Settings};
pub use error::DocError;
pub use index::FileIndex;
pub use model::{DocumentationRecord, FunctionSymbol, ParameterDoc};
pub use processor::{DocProcessor, ProcessorStats};
pub use translate::{EnumTranslator, IdentityTranslator, PascalCaseTranslator};
