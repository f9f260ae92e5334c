//! Settings consumed by the documentation processor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Compatibility switches inherited from older generator modes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Legacy {
    /// Keep constant names exactly as the reference pages spell them.
    NoAdvancedEnumProcessing,
    /// Constants are emitted as plain integers, so there is nothing to link to.
    ConstIntEnums,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Primary directory of reference pages.
    pub doc_path: PathBuf,
    /// Consulted for names the primary directory lacks.
    pub fallback_doc_path: PathBuf,
    /// Prepended to symbol names to form file names (`gl` + `BindBuffer`).
    pub function_prefix: String,
    /// Stripped from `<constant>` text before translation (`GL_`).
    pub constant_prefix: String,
    pub legacy: BTreeSet<Legacy>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            doc_path: PathBuf::from("Specifications/Docs"),
            fallback_doc_path: PathBuf::from("Specifications/Docs/GL2"),
            function_prefix: "gl".to_string(),
            constant_prefix: "GL_".to_string(),
            legacy: BTreeSet::new(),
        }
    }
}

impl Settings {
    pub fn is_enabled(&self, flag: Legacy) -> bool {
        self.legacy.contains(&flag)
    }

    /// Constant translation runs unless a legacy mode turns it off.
    pub fn translate_constants(&self) -> bool {
        !(self.is_enabled(Legacy::NoAdvancedEnumProcessing) || self.is_enabled(Legacy::ConstIntEnums))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_translates_constants() {
        assert!(Settings::default().translate_constants());
    }

    #[test]
    fn either_legacy_flag_disables_translation() {
        for flag in [Legacy::NoAdvancedEnumProcessing, Legacy::ConstIntEnums] {
            let mut settings = Settings::default();
            settings.legacy.insert(flag);
            assert!(!settings.translate_constants(), "{flag:?}");
        }
    }
}
