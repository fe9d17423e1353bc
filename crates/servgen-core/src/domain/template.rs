//! Template file entity.

/// A file the generator emits: a filename plus its fixed content.
///
/// Content is static text written verbatim. Nothing is interpolated per
/// invocation — the generated files never embed the service name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Bare filename, e.g. `service.ts`. Joined onto the target directory
    /// by the generator; must not contain path separators.
    pub filename: String,
    /// Verbatim file body.
    pub content: String,
}

impl TemplateFile {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}
