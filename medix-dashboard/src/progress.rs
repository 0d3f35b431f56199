//! Conversion progress aggregation.
//!
//! Turns a [`ProgressReport`] into a [`ProgressView`]: one stacked bar per
//! genre (ICO / PNG-only / RAW-only segments), a completion percentage with a
//! label style, the headline progress and the legend. Pure and synchronous;
//! rows keep the report's order.

use serde::Serialize;
use tracing::{debug, warn};

use medix_common::{GenreProgress, IconTable, OverallProgress, ProgressReport};

use crate::config::ViewFeatures;

/// Completion below which a pale bar gets a right-aligned light label.
pub const LIGHT_RIGHT_BELOW: u8 = 20;
/// Completion below which a pale bar gets a light label.
pub const LIGHT_BELOW: u8 = 40;
/// PNG coverage below which a bar counts as pale.
pub const PALE_BELOW: f64 = 40.0;

/// A pipeline stage, from most to least processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Ico,
    Png,
    Raw,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Ico, Stage::Png, Stage::Raw];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Ico => "ICO",
            Stage::Png => "PNG",
            Stage::Raw => "RAW",
        }
    }

    /// Colour name of the bar segment for this stage.
    pub fn color_name(&self) -> &'static str {
        match self {
            Stage::Ico => "green",
            Stage::Png => "amber",
            Stage::Raw => "gray",
        }
    }
}

/// Widths of the three stacked segments, in percent of the bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Segments {
    /// Finished items.
    pub ico: f64,
    /// Items at PNG but not yet ICO.
    pub png_only: f64,
    /// Items not converted at all.
    pub raw_only: f64,
}

impl Segments {
    pub fn total(&self) -> f64 {
        self.ico + self.png_only + self.raw_only
    }

    /// Each width clamped to `[0, 100]`.
    pub fn clamped(&self) -> Self {
        Self {
            ico: self.ico.clamp(0.0, 100.0),
            png_only: self.png_only.clamp(0.0, 100.0),
            raw_only: self.raw_only.clamp(0.0, 100.0),
        }
    }
}

/// Placement and contrast of the percentage label on a bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Dark, centered.
    #[default]
    Default,
    /// Light text, centered.
    Light,
    /// Light text, pushed to the right end of the bar.
    LightRight,
}

impl LabelStyle {
    /// Pick the label style for a bar.
    ///
    /// A bar is pale when less than 40% of its items reached PNG. Pale bars
    /// under 20% completion get a right-aligned light label, pale bars under
    /// 40% a light label; everything else the default.
    pub fn select(completion: u8, secondary_pct: f64) -> Self {
        let pale = secondary_pct < PALE_BELOW;
        if completion < LIGHT_RIGHT_BELOW && pale {
            LabelStyle::LightRight
        } else if completion < LIGHT_BELOW && pale {
            LabelStyle::Light
        } else {
            LabelStyle::Default
        }
    }

    pub fn is_light(&self) -> bool {
        !matches!(self, LabelStyle::Default)
    }

    pub fn is_right_aligned(&self) -> bool {
        matches!(self, LabelStyle::LightRight)
    }
}

/// Why a row's counts cannot be drawn as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowIssue {
    /// A count is below zero.
    NegativeCount,
    /// More ICO than PNG items.
    IcoExceedsPng,
    /// More PNG than RAW items.
    PngExceedsRaw,
}

impl RowIssue {
    /// Check the `0 <= ico <= png <= raw` ordering.
    pub fn detect(genre: &GenreProgress) -> Option<Self> {
        if genre.raw < 0 || genre.png < 0 || genre.ico < 0 {
            Some(RowIssue::NegativeCount)
        } else if genre.ico > genre.png {
            Some(RowIssue::IcoExceedsPng)
        } else if genre.png > genre.raw {
            Some(RowIssue::PngExceedsRaw)
        } else {
            None
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RowIssue::NegativeCount => "negative count",
            RowIssue::IcoExceedsPng => "more ICO than PNG items",
            RowIssue::PngExceedsRaw => "more PNG than RAW items",
        }
    }
}

/// Quantities derived from one genre's counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenreMetrics {
    /// Divisor, never below 1.
    pub safe_raw: i64,
    /// `png - ico`, or `None` when the counts are too far apart for an `i64`.
    pub png_only: Option<i64>,
    /// `safe_raw - png`, or `None` on overflow.
    pub raw_only: Option<i64>,
    /// Segment widths, unclamped.
    pub widths: Segments,
    /// Rounded ICO share, clamped to `[0, 100]`. Computed on its own, so it
    /// may differ from `widths.ico` by a rounding unit.
    pub completion: u8,
    /// Share of items that reached PNG.
    pub secondary_pct: f64,
}

impl GenreMetrics {
    pub fn compute(genre: &GenreProgress) -> Self {
        let safe_raw = if genre.raw > 0 { genre.raw } else { 1 };

        // Widths are taken from float differences, so malformed counts at the
        // ends of the i64 range still produce a (degraded) row.
        let share = |n: f64| (n / safe_raw as f64) * 100.0;
        let (raw, png, ico) = (safe_raw as f64, genre.png as f64, genre.ico as f64);

        let widths = Segments {
            ico: share(ico),
            png_only: share(png - ico),
            raw_only: share(raw - png),
        };
        let completion = share(ico).round().clamp(0.0, 100.0) as u8;

        Self {
            safe_raw,
            png_only: genre.png.checked_sub(genre.ico),
            raw_only: safe_raw.checked_sub(genre.png),
            widths,
            completion,
            secondary_pct: share(png),
        }
    }
}

/// Supplied counts, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    pub ico: i64,
    pub png: i64,
    pub raw: i64,
}

/// One renderable genre row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRow {
    pub genre: String,
    pub icon: String,
    /// Derived widths, unclamped.
    pub widths: Segments,
    /// Widths to draw: clamped when the row is degraded, else `widths`.
    pub bar: Segments,
    pub completion: u8,
    pub secondary_pct: f64,
    pub label_style: LabelStyle,
    pub counts: StageCounts,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<RowIssue>,
}

impl GenreRow {
    pub fn is_degraded(&self) -> bool {
        self.issue.is_some()
    }

    /// Completion as label text, e.g. `"20%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.completion)
    }
}

/// Headline progress, rendered verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallRow {
    pub percent: i64,
    pub done: i64,
    pub total: i64,
}

impl From<OverallProgress> for OverallRow {
    fn from(p: OverallProgress) -> Self {
        Self {
            percent: p.percent,
            done: p.done,
            total: p.total,
        }
    }
}

impl OverallRow {
    /// Fill ratio for the headline bar, clamped to `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        (self.percent as f64 / 100.0).clamp(0.0, 1.0)
    }
}

/// One legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub stage: Stage,
    pub label: &'static str,
    pub color: &'static str,
}

/// The fixed segment legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn stages() -> Self {
        Self {
            entries: Stage::ALL
                .iter()
                .map(|&stage| LegendEntry {
                    stage,
                    label: stage.label(),
                    color: stage.color_name(),
                })
                .collect(),
        }
    }
}

/// Everything the progress page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub overall: OverallRow,
    pub rows: Vec<GenreRow>,
    pub legend: Legend,
    pub features: FeatureFlags,
}

impl ProgressView {
    pub fn degraded_rows(&self) -> impl Iterator<Item = &GenreRow> {
        self.rows.iter().filter(|r| r.is_degraded())
    }
}

/// Serializable copy of the enabled view features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub table: bool,
    pub cards: bool,
    pub legend: bool,
    pub counts: bool,
}

impl From<ViewFeatures> for FeatureFlags {
    fn from(f: ViewFeatures) -> Self {
        Self {
            table: f.table,
            cards: f.cards,
            legend: f.legend,
            counts: f.counts,
        }
    }
}

/// Builds [`ProgressView`]s with an injected icon table.
#[derive(Debug, Clone)]
pub struct ProgressRenderer<'a> {
    icons: &'a IconTable,
    features: ViewFeatures,
}

impl<'a> ProgressRenderer<'a> {
    pub fn new(icons: &'a IconTable, features: ViewFeatures) -> Self {
        Self { icons, features }
    }

    /// Build the row for one genre.
    pub fn row(&self, genre: &GenreProgress) -> GenreRow {
        let metrics = GenreMetrics::compute(genre);
        let issue = RowIssue::detect(genre);

        let bar = if issue.is_some() {
            metrics.widths.clamped()
        } else {
            metrics.widths
        };

        let label_style = if self.features.contrast_labels {
            LabelStyle::select(metrics.completion, metrics.secondary_pct)
        } else {
            LabelStyle::Default
        };

        GenreRow {
            genre: genre.genre.clone(),
            icon: self.icons.resolve(genre.icon.as_deref(), &genre.genre).to_string(),
            widths: metrics.widths,
            bar,
            completion: metrics.completion,
            secondary_pct: metrics.secondary_pct,
            label_style,
            counts: StageCounts {
                ico: genre.ico,
                png: genre.png,
                raw: genre.raw,
            },
            status: genre.status.clone(),
            issue,
        }
    }

    /// Build the whole view.
    pub fn render(&self, report: &ProgressReport) -> ProgressView {
        let rows: Vec<GenreRow> = report
            .genres
            .iter()
            .map(|genre| {
                let row = self.row(genre);
                debug!(
                    genre = %row.genre,
                    raw = row.counts.raw,
                    png = row.counts.png,
                    ico = row.counts.ico,
                    ico_width = row.widths.ico,
                    png_width = row.widths.png_only,
                    raw_width = row.widths.raw_only,
                    completion = row.completion,
                    "Genre progress"
                );
                if let Some(issue) = row.issue {
                    warn!(genre = %row.genre, issue = issue.description(), "Inconsistent genre counts");
                }
                row
            })
            .collect();

        ProgressView {
            overall: report.overall().into(),
            rows,
            legend: Legend::stages(),
            features: self.features.into(),
        }
    }
}
