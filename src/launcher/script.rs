//! Literal placeholder substitution for the build script.
//!
//! Unlike a template engine there is no syntax here: every occurrence of the
//! placeholder string is replaced by the value, verbatim. The value is not
//! shell-escaped.

/// A build script with its placeholder substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScript {
    text: String,
    replacements: usize,
}

impl RenderedScript {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of placeholder occurrences that were replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

/// Replace every occurrence of `placeholder` in `template` with `value`.
///
/// An empty placeholder matches nothing and leaves the template unchanged.
///
/// # Examples
///
/// ```text
/// render_script("TPL_DIR_PATH=\"./tpl\"\necho $TPL_DIR_PATH",
///               "TPL_DIR_PATH=\"./tpl\"",
///               "TPL_DIR_PATH=\"/tmp/kublo-42\"")
///     => "TPL_DIR_PATH=\"/tmp/kublo-42\"\necho $TPL_DIR_PATH"
/// ```
pub fn render_script(template: &str, placeholder: &str, value: &str) -> RenderedScript {
    if placeholder.is_empty() {
        return RenderedScript {
            text: template.to_string(),
            replacements: 0,
        };
    }

    RenderedScript {
        text: template.replace(placeholder, value),
        replacements: template.matches(placeholder).count(),
    }
}
