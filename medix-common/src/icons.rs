//! Genre icon lookup table.
//!
//! The table is immutable once built and is handed to the renderers, so new
//! categories only need a config entry.

use std::collections::BTreeMap;

/// Glyph used when neither the report nor the table knows a category.
pub const FALLBACK_ICON: &str = "🎬";

/// Built-in genre glyphs.
pub const DEFAULT_ICONS: &[(&str, &str)] = &[
    ("Action", "🔥"),
    ("Adventure", "🗺️"),
    ("Animation", "🎨"),
    ("Comedy", "😂"),
    ("Crime", "🔍"),
    ("Documentary", "📽️"),
    ("Drama", "🎭"),
    ("Family", "🏠"),
    ("Fantasy", "🧙"),
    ("Horror", "👻"),
    ("Musical", "🎶"),
    ("Mystery", "🧩"),
    ("Romance", "💕"),
    ("Sci-Fi", "👽"),
    ("Thriller", "🔪"),
    ("War", "⚔️"),
    ("Western", "🤠"),
];

/// Immutable mapping from category name to display glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTable {
    glyphs: BTreeMap<String, String>,
    fallback: String,
}

impl IconTable {
    /// Create an empty table that resolves everything to the fallback glyph.
    pub fn empty() -> Self {
        Self {
            glyphs: BTreeMap::new(),
            fallback: FALLBACK_ICON.to_string(),
        }
    }

    /// Create a table holding the built-in genre glyphs.
    pub fn builtin() -> Self {
        Self::empty().with_overrides(
            DEFAULT_ICONS
                .iter()
                .map(|(name, glyph)| (name.to_string(), glyph.to_string())),
        )
    }

    /// Add or replace entries.
    pub fn with_overrides<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.glyphs.extend(entries);
        self
    }

    /// Replace the fallback glyph.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Look up a category without falling back.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.glyphs.get(name).map(String::as_str)
    }

    /// Glyph for a category, or the fallback.
    pub fn glyph_for(&self, name: &str) -> &str {
        self.lookup(name).unwrap_or(&self.fallback)
    }

    /// Resolve the glyph to display: an explicit non-empty glyph from the
    /// report wins, then the table, then the fallback.
    pub fn resolve<'a>(&'a self, explicit: Option<&'a str>, name: &str) -> &'a str {
        match explicit {
            Some(glyph) if !glyph.trim().is_empty() => glyph,
            _ => self.glyph_for(name),
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for IconTable {
    fn default() -> Self {
        Self::builtin()
    }
}
