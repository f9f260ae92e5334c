//! Constant-name translation.
//!
//! The binding generator owns the real enum naming rules; documentation
//! extraction only needs a way to ask for them. Closures implement the trait
//! directly, and two simple translators cover the command-line tool.

/// Maps a raw constant token (`COLOR_BUFFER_BIT`, prefix already stripped)
/// to the identifier the generated bindings use.
pub trait EnumTranslator {
    fn translate_constant_name(&self, token: &str, is_bitfield: bool) -> String;
}

impl<F> EnumTranslator for F
where
    F: Fn(&str, bool) -> String,
{
    fn translate_constant_name(&self, token: &str, is_bitfield: bool) -> String {
        self(token, is_bitfield)
    }
}

/// Returns tokens unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTranslator;

impl EnumTranslator for IdentityTranslator {
    fn translate_constant_name(&self, token: &str, _is_bitfield: bool) -> String {
        token.to_string()
    }
}

/// `COLOR_BUFFER_BIT` → `ColorBufferBit`, `TEXTURE_2D` → `Texture2D`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PascalCaseTranslator;

impl EnumTranslator for PascalCaseTranslator {
    fn translate_constant_name(&self, token: &str, _is_bitfield: bool) -> String {
        let mut out = String::with_capacity(token.len());
        for part in token.split('_').filter(|p| !p.is_empty()) {
            let mut upper_next = true;
            for c in part.chars() {
                if upper_next {
                    out.extend(c.to_uppercase());
                } else {
                    out.extend(c.to_lowercase());
                }
                // Keep suffixes like `2D` and `32F` upper-case.
                upper_next = c.is_ascii_digit();
            }
        }
        if out.starts_with(|c: char| c.is_ascii_digit()) {
            out.insert(0, '_');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case() {
        let t = PascalCaseTranslator;
        assert_eq!(t.translate_constant_name("COLOR_BUFFER_BIT", true), "ColorBufferBit");
        assert_eq!(t.translate_constant_name("TEXTURE_2D", false), "Texture2D");
        assert_eq!(t.translate_constant_name("RGBA32F", false), "Rgba32F");
        assert_eq!(t.translate_constant_name("FALSE", false), "False");
    }

    #[test]
    fn leading_digit_gets_underscore() {
        assert_eq!(PascalCaseTranslator.translate_constant_name("2_BYTES", false), "_2Bytes");
    }

    #[test]
    fn identity() {
        assert_eq!(IdentityTranslator.translate_constant_name("FOO_BAR", false), "FOO_BAR");
    }

    #[test]
    fn closures_are_translators() {
        let t = |token: &str, _: bool| format!("All.{token}");
        assert_eq!(t.translate_constant_name("ONE", false), "All.ONE");
    }
}
