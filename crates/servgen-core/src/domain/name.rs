//! Service and folder name value objects.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. The only
//! behavior is the kebab-case transform, which is a *literal per-character
//! rule*, not word-boundary detection:
//!
//! 1. A leading ASCII uppercase letter is lowercased in place.
//! 2. Every later ASCII uppercase letter becomes `-` plus its lowercase form.
//!
//! So `ServiceName` → `service-name`, but `ALLCAPS` → `a-l-l-c-a-p-s`:
//! every uppercase letter after the first triggers a split, acronyms
//! included. That unusual acronym behavior is intentional and must not be
//! replaced with a "smarter" word-aware transform.
//!
//! The rule is ASCII-only (the `A-Z` range); non-ASCII characters pass
//! through unchanged.

use std::fmt;

// ── ServiceName ──────────────────────────────────────────────────────────────

/// The user-supplied identifier for a service to generate.
///
/// Accepts any casing — Pascal, camel, snake, already-kebab, anything.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the kebab-case folder name for this service.
    pub fn folder_name(&self) -> FolderName {
        FolderName(kebab_case(&self.0))
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ServiceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ── FolderName ───────────────────────────────────────────────────────────────

/// A kebab-case folder segment derived from a [`ServiceName`].
///
/// Only constructed through [`ServiceName::folder_name`]; exists as an
/// intermediate value and is never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderName(String);

impl FolderName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── transform ────────────────────────────────────────────────────────────────

/// Apply the per-character kebab-case rule.
///
/// Total over any string input: the empty string maps to itself, and input
/// with no ASCII uppercase letters is returned unchanged.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut chars = name.chars();

    if let Some(first) = chars.next() {
        out.push(first.to_ascii_lowercase());
    }

    for c in chars {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

// ── tests ─────────────────────────────────────────────────────────────────────
