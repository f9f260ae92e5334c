//! MathML equation rewriting.
//!
//! Reference pages embed equations as `<mml:math>` or `<inlineequation>`
//! blocks, which are neither valid on their own (the `mml` prefix is never
//! declared) nor renderable as plain text. Most blocks carry a plain-text
//! rendition in a comment:
//!
//! ```text
//! <inlineequation><mml:math>
//!     <!-- eqn: 2^n - 1:-->
//!     <mml:mrow>...</mml:mrow>
//! </mml:math></inlineequation>
//! ```
//!
//! Each block is replaced by a CDATA section holding that rendition. Blocks
//! without one are dropped; their content cannot be recovered.

use regex::Regex;
use std::sync::LazyLock;

static RE_EQUATION_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(mml:math|inlineequation)[^>]*>").unwrap());

static RE_MATH_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</\s*mml:math\s*>").unwrap());

static RE_INLINE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</\s*inlineequation\s*>").unwrap());

const EQN_MARKER: &str = "eqn";

/// Distance from the start of the marker to the equation text (`eqn:`).
const EQN_OFFSET: usize = 4;

/// Closing delimiters, tried in order. A few man4 pages use the spaced form.
const EQN_DELIMITERS: &[&str] = &[":-->", ": -->"];

/// What a single equation block turns into.
#[derive(Debug, PartialEq, Eq)]
pub enum Equation<'a> {
    /// Plain-text rendition found in the `eqn` comment.
    Literal(&'a str),
    /// No `eqn` comment in the block.
    NoMarker,
    /// An `eqn` comment without a recognized closing delimiter.
    DelimiterNotFound,
}

/// Pull the plain-text rendition out of one matched block.
pub fn extract_equation(block: &str) -> Equation<'_> {
    let Some(marker) = block.find(EQN_MARKER) else {
        return Equation::NoMarker;
    };
    // The offset may land inside a multi-byte char; move to the next boundary.
    let Some(start) = (marker + EQN_OFFSET..=block.len()).find(|&i| block.is_char_boundary(i))
    else {
        return Equation::DelimiterNotFound;
    };
    let rest = &block[start..];
    EQN_DELIMITERS
        .iter()
        .find_map(|delim| rest.find(delim))
        .map_or(Equation::DelimiterNotFound, |end| Equation::Literal(&rest[..end]))
}

/// Replace every equation block in `text` until none remain.
///
/// Idempotent: the CDATA placeholders never match the block pattern.
pub fn rewrite(text: &str) -> String {
    let mut current = text.to_string();
    // Every rewrite strictly shortens the text, so this terminates.
    while let Some(next) = rewrite_pass(&current) {
        current = next;
    }
    current
}

/// One left-to-right pass copying into a fresh buffer. `None` when the text
/// contains no complete equation block.
fn rewrite_pass(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut search_from = 0;
    let mut changed = false;

    while let Some(open) = RE_EQUATION_OPEN.find_at(text, search_from) {
        let close_re = if text[open.start()..].starts_with("<mml:math") {
            &*RE_MATH_CLOSE
        } else {
            &*RE_INLINE_CLOSE
        };
        let Some(close) = close_re.find_at(text, open.end()) else {
            // Unclosed tag: look for a later block starting past this '<'.
            search_from = open.start() + 1;
            continue;
        };

        out.push_str(&text[cursor..open.start()]);
        let block = &text[open.start()..close.end()];
        match extract_equation(block) {
            Equation::Literal(eqn) => {
                out.push_str("<![CDATA[");
                out.push_str(eqn);
                out.push_str("]]>");
            }
            Equation::NoMarker => {
                tracing::debug!(block, "dropping equation without eqn comment");
            }
            Equation::DelimiterNotFound => {
                tracing::warn!(block, "failed to find equation end delimiter, dropping equation");
            }
        }
        cursor = close.end();
        search_from = cursor;
        changed = true;
    }

    if !changed {
        return None;
    }
    out.push_str(&text[cursor..]);
    Some(out)
}
