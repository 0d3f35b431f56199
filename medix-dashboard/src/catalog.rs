//! Category listings: genres with per-title icon status badges.

use std::path::Path;

use serde::Serialize;

use medix_common::{CatalogGenre, TitleStatus};

/// A media category with its own listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Movies,
    TvShows,
}

impl CategoryKind {
    /// Detect the category from a page or file name.
    pub fn detect(name: &str) -> Option<Self> {
        let file = name.rsplit(['/', '\\']).next().unwrap_or(name);
        if file.contains("movies") {
            Some(CategoryKind::Movies)
        } else if file.contains("tvshows") || file.contains("tv_shows") {
            Some(CategoryKind::TvShows)
        } else {
            None
        }
    }

    /// Report file the category is listed in.
    pub fn data_file(&self) -> &'static str {
        match self {
            CategoryKind::Movies => "movies.json",
            CategoryKind::TvShows => "tv_shows.json",
        }
    }

    /// Whether `path` names this category's report file.
    pub fn is_data_file(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(self.data_file()))
    }

    pub fn title(&self) -> &'static str {
        match self {
            CategoryKind::Movies => "🎬 Movies by Genre",
            CategoryKind::TvShows => "📺 TV Shows by Genre",
        }
    }
}

pub const UNKNOWN_CATEGORY_TITLE: &str = "Unknown Category";

/// Glyph plus hover text for a title's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub glyph: &'static str,
    pub tooltip: &'static str,
}

impl StatusBadge {
    /// Anything that isn't a warning or a miss reads as complete.
    pub fn for_status(status: TitleStatus) -> Self {
        match status {
            TitleStatus::Warn => Self {
                glyph: "⚠️",
                tooltip: "Missing Thumbnail",
            },
            TitleStatus::Missing => Self {
                glyph: "❌",
                tooltip: "Missing Icon",
            },
            TitleStatus::Ok | TitleStatus::Unknown => Self {
                glyph: "✅",
                tooltip: "Complete",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub badge: StatusBadge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSection {
    pub genre: String,
    pub entries: Vec<CatalogEntry>,
}

impl CatalogSection {
    /// Count of entries carrying the given badge glyph.
    pub fn count_with(&self, glyph: &str) -> usize {
        self.entries.iter().filter(|e| e.badge.glyph == glyph).count()
    }
}

/// A category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub kind: Option<CategoryKind>,
    pub heading: String,
    pub sections: Vec<CatalogSection>,
}

impl CatalogView {
    /// Build the page. An unknown category shows only its heading.
    pub fn build(kind: Option<CategoryKind>, genres: &[CatalogGenre]) -> Self {
        let Some(kind) = kind else {
            return Self {
                kind: None,
                heading: UNKNOWN_CATEGORY_TITLE.to_string(),
                sections: Vec::new(),
            };
        };

        let sections = genres
            .iter()
            .map(|genre| CatalogSection {
                genre: genre.genre.clone(),
                entries: genre
                    .titles
                    .iter()
                    .map(|title| CatalogEntry {
                        name: title.name.clone(),
                        badge: StatusBadge::for_status(title.status()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            kind: Some(kind),
            heading: kind.title().to_string(),
            sections,
        }
    }
}
