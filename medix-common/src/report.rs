//! Report documents produced by the Medix scanners.
//!
//! Every document implements [`Report`], which names it for error messages
//! and lets the loader decode it from JSON or CBOR.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::icons::IconTable;
use crate::serialization::decode_auto;

/// Status glyph the producer writes for a fully converted genre.
pub const STATUS_DONE: &str = "✅";

/// Status glyph the producer writes for a genre still being converted.
pub const STATUS_PENDING: &str = "⏳";

/// A decodable report document.
pub trait Report: DeserializeOwned {
    /// Short name used in logs and errors.
    const KIND: &'static str;

    /// Decode a document, auto-detecting JSON or CBOR.
    ///
    /// Any decoding failure (missing required field, wrong type, bad syntax)
    /// becomes [`Error::InvalidReport`].
    fn parse(data: &[u8]) -> Result<Self> {
        decode_auto(data).map_err(|e| Error::invalid_report(Self::KIND, e.to_string()))
    }
}

// ============================================================================
// Conversion progress
// ============================================================================

/// Conversion progress of one genre through the RAW → PNG → ICO pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreProgress {
    /// Display label.
    pub genre: String,

    /// Optional display glyph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Total number of source items.
    #[serde(default)]
    pub raw: i64,

    /// Items that reached the PNG stage.
    #[serde(default)]
    pub png: i64,

    /// Items that reached the final ICO stage.
    #[serde(default)]
    pub ico: i64,

    /// Free-text state label.
    #[serde(default)]
    pub status: String,
}

impl GenreProgress {
    pub fn new(genre: impl Into<String>, raw: i64, png: i64, ico: i64) -> Self {
        Self {
            genre: genre.into(),
            icon: None,
            raw,
            png,
            ico,
            status: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Headline progress, precomputed by the producer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallProgress {
    pub percent: i64,
    pub done: i64,
    pub total: i64,
}

/// The `progress.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    #[serde(default)]
    pub percent: i64,

    #[serde(default)]
    pub done: i64,

    #[serde(default)]
    pub total: i64,

    /// Genre rows, in display order. Required.
    pub genres: Vec<GenreProgress>,
}

impl Report for ProgressReport {
    const KIND: &'static str = "progress";
}

/// Raw per-genre file counts, as collected by a directory scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCounts {
    pub genre: String,
    #[serde(default)]
    pub raw: i64,
    #[serde(default)]
    pub png: i64,
    #[serde(default)]
    pub ico: i64,
}

/// A list of [`GenreCounts`], the input of [`ProgressReport::from_counts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountsReport(pub Vec<GenreCounts>);

impl Report for CountsReport {
    const KIND: &'static str = "counts";
}

impl ProgressReport {
    /// Headline numbers of this report.
    pub fn overall(&self) -> OverallProgress {
        OverallProgress {
            percent: self.percent,
            done: self.done,
            total: self.total,
        }
    }

    /// Build a report from scanned counts.
    ///
    /// Genres are ordered by raw count, largest first (stable for ties). A
    /// genre is done when all three stages hold the same number of items.
    pub fn from_counts(mut counts: Vec<GenreCounts>, icons: &IconTable) -> Self {
        counts.sort_by(|a, b| b.raw.cmp(&a.raw));

        let mut done = 0;
        let genres: Vec<GenreProgress> = counts
            .into_iter()
            .map(|c| {
                let complete = c.raw == c.png && c.raw == c.ico;
                if complete {
                    done += 1;
                }
                let mut progress = GenreProgress::new(c.genre, c.raw, c.png, c.ico)
                    .with_status(if complete { STATUS_DONE } else { STATUS_PENDING });
                progress.icon = icons.lookup(&progress.genre).map(str::to_string);
                progress
            })
            .collect();

        let total = genres.len() as i64;
        let percent = if total > 0 { done * 100 / total } else { 0 };

        Self {
            percent,
            done,
            total,
            genres,
        }
    }
}

// ============================================================================
// Catalog listings
// ============================================================================

/// Icon status of a single title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleStatus {
    Ok,
    /// Icon present but the thumbnail is missing.
    Warn,
    /// No icon at all.
    Missing,
    /// Any other label.
    Unknown,
}

impl TitleStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "ok" => TitleStatus::Ok,
            "warn" => TitleStatus::Warn,
            "missing" => TitleStatus::Missing,
            _ => TitleStatus::Unknown,
        }
    }
}

/// A title with its icon status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleEntry {
    pub name: String,
    #[serde(default)]
    pub status: String,
}

impl TitleEntry {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }

    pub fn status(&self) -> TitleStatus {
        TitleStatus::parse(&self.status)
    }
}

/// One genre of a category listing (`movies.json`, `tv_shows.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogGenre {
    pub genre: String,
    #[serde(default)]
    pub titles: Vec<TitleEntry>,
}

/// A category listing: genres in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogReport(pub Vec<CatalogGenre>);

impl Report for CatalogReport {
    const KIND: &'static str = "catalog";
}

/// An entry of a grouped title list: a plain title or a collection of titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TitleItem {
    Collection {
        name: String,
        group: Vec<TitleEntry>,
    },
    Title(TitleEntry),
}

impl TitleItem {
    pub fn name(&self) -> &str {
        match self {
            TitleItem::Collection { name, .. } => name,
            TitleItem::Title(entry) => &entry.name,
        }
    }
}

/// Titles grouped by genre, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedTitles(pub OrderedGroups<TitleItem>);

impl Report for GroupedTitles {
    const KIND: &'static str = "title list";
}

// ============================================================================
// Unused icons
// ============================================================================

/// An icon file not referenced by any media entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedIcon {
    pub name: String,
    /// Where the icon came from (e.g. "personal", "downloaded").
    #[serde(default)]
    pub source: String,
}

/// The `unused-icons.report.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedIconsReport {
    #[serde(default)]
    pub groups: Option<OrderedGroups<UnusedIcon>>,
}

impl UnusedIconsReport {
    /// Groups, or an empty slice when the report has none.
    pub fn groups(&self) -> &[(String, Vec<UnusedIcon>)] {
        self.groups.as_ref().map(|g| g.0.as_slice()).unwrap_or(&[])
    }
}

impl Report for UnusedIconsReport {
    const KIND: &'static str = "unused icons";
}

// ============================================================================
// Ordered JSON object
// ============================================================================

/// A JSON object of `key -> [T]` that keeps the document's key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedGroups<T>(pub Vec<(String, Vec<T>)>);

impl<T> Default for OrderedGroups<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> OrderedGroups<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Serialize> Serialize for OrderedGroups<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, items) in &self.0 {
            map.serialize_entry(key, items)?;
        }
        map.end()
    }
}

struct OrderedGroupsVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedGroupsVisitor<T> {
    type Value = OrderedGroups<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of arrays")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, items)) = access.next_entry::<String, Vec<T>>()? {
            if groups.iter().any(|(k, _): &(String, Vec<T>)| *k == key) {
                return Err(de::Error::custom(format!("duplicate group `{}`", key)));
            }
            groups.push((key, items));
        }
        Ok(OrderedGroups(groups))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedGroups<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedGroupsVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_progress_report() {
        let json = r#"{
            "percent": 50, "done": 1, "total": 2,
            "genres": [
                { "genre": "Horror", "icon": "👻", "raw": 10, "png": 6, "ico": 2, "status": "⏳" },
                { "genre": "Drama", "raw": 4, "png": 4, "ico": 4 }
            ]
        }"#;

        let report = ProgressReport::parse(json.as_bytes()).unwrap();
        assert_eq!(report.overall(), OverallProgress { percent: 50, done: 1, total: 2 });
        assert_eq!(report.genres[0].icon.as_deref(), Some("👻"));
        assert_eq!(report.genres[1].icon, None);
        assert_eq!(report.genres[1].status, "");
    }

    #[test]
    fn test_missing_genres_is_invalid() {
        let err = ProgressReport::parse(br#"{ "percent": 10, "done": 1, "total": 10 }"#).unwrap_err();
        match err {
            Error::InvalidReport { kind, reason } => {
                assert_eq!(kind, "progress");
                assert!(reason.contains("genres"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let report = ProgressReport::parse(br#"{ "genres": [ { "genre": "Empty" } ] }"#).unwrap();
        let g = &report.genres[0];
        assert_eq!((g.raw, g.png, g.ico), (0, 0, 0));
        assert_eq!(report.overall(), OverallProgress::default());
    }

    #[test]
    fn test_negative_counts_are_accepted() {
        let report =
            ProgressReport::parse(br#"{ "genres": [ { "genre": "Bad", "raw": -3 } ] }"#).unwrap();
        assert_eq!(report.genres[0].raw, -3);
    }

    #[test]
    fn test_from_counts() {
        let counts = vec![
            GenreCounts { genre: "Drama".into(), raw: 4, png: 4, ico: 4 },
            GenreCounts { genre: "Horror".into(), raw: 10, png: 6, ico: 2 },
            GenreCounts { genre: "Noir".into(), raw: 1, png: 0, ico: 0 },
        ];

        let report = ProgressReport::from_counts(counts, &IconTable::builtin());

        let names: Vec<_> = report.genres.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(names, ["Horror", "Drama", "Noir"]);
        assert_eq!(report.done, 1);
        assert_eq!(report.total, 3);
        assert_eq!(report.percent, 33);
        assert_eq!(report.genres[0].status, STATUS_PENDING);
        assert_eq!(report.genres[1].status, STATUS_DONE);
        assert_eq!(report.genres[0].icon.as_deref(), Some("👻"));
        assert_eq!(report.genres[2].icon, None);
    }

    #[test]
    fn test_from_counts_empty() {
        let report = ProgressReport::from_counts(Vec::new(), &IconTable::builtin());
        assert_eq!(report.percent, 0);
        assert_eq!(report.total, 0);
        assert!(report.genres.is_empty());
    }

    #[test]
    fn test_title_status() {
        assert_eq!(TitleStatus::parse("ok"), TitleStatus::Ok);
        assert_eq!(TitleStatus::parse("warn"), TitleStatus::Warn);
        assert_eq!(TitleStatus::parse("missing"), TitleStatus::Missing);
        assert_eq!(TitleStatus::parse("OK"), TitleStatus::Unknown);
    }

    #[test]
    fn test_grouped_titles_keep_order() {
        let json = br#"{
            "Western": [ { "name": "Unforgiven", "status": "ok" } ],
            "Action": [
                { "name": "Die Hard Collection", "group": [
                    { "name": "Die Hard", "status": "ok" },
                    { "name": "Die Hard 2", "status": "missing" }
                ] },
                { "name": "Heat", "status": "warn" }
            ]
        }"#;

        let titles = GroupedTitles::parse(json).unwrap();
        let keys: Vec<_> = titles.0.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Western", "Action"]);

        let action = &titles.0.0[1].1;
        assert!(matches!(&action[0], TitleItem::Collection { group, .. } if group.len() == 2));
        assert!(matches!(&action[1], TitleItem::Title(t) if t.status() == TitleStatus::Warn));
        assert_eq!(action[0].name(), "Die Hard Collection");
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let json = br#"{ "A": [], "A": [] }"#;
        assert!(GroupedTitles::parse(json).is_err());
    }

    #[test]
    fn test_unused_icons_without_groups() {
        let report = UnusedIconsReport::parse(b"{}").unwrap();
        assert!(report.groups().is_empty());

        let report = UnusedIconsReport::parse(br#"{ "groups": null }"#).unwrap();
        assert!(report.groups().is_empty());
    }

    #[test]
    fn test_catalog_report() {
        let json = br#"[ { "genre": "Drama", "titles": [ { "name": "Heat", "status": "warn" } ] } ]"#;
        let catalog = CatalogReport::parse(json).unwrap();
        assert_eq!(catalog.0[0].titles[0].status(), TitleStatus::Warn);
    }

    #[test]
    fn test_ordered_groups_serialize_as_object() {
        let groups = OrderedGroups(vec![
            ("b".to_string(), vec![1]),
            ("a".to_string(), vec![2, 3]),
        ]);
        let json = serde_json::to_string(&groups).unwrap();
        assert_eq!(json, r#"{"b":[1],"a":[2,3]}"#);
    }
}
