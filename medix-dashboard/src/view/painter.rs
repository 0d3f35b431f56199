//! Paints view descriptors as terminal text.

use crossterm::style::{Color, Stylize};

use crate::catalog::{CatalogView, StatusBadge};
use crate::config::BarConfig;
use crate::progress::{GenreRow, ProgressView, Stage};
use crate::titles::{TitleLine, TitleListView};
use crate::unused::UnusedIconsView;
use medix_common::TitleStatus;

use super::components::{ProgressBar, StackedBar, stage_color, stage_fill};
use super::formatting::{display_width, format_counts, format_quantity, pad_right};

/// Shown next to a row whose counts had to be clamped.
pub const DEGRADED_MARKER: &str = "⚠ inconsistent counts";

const INDENT: &str = "  ";

/// Paints descriptors into newline-terminated text.
#[derive(Debug, Clone, Copy)]
pub struct TextPainter {
    bar_width: usize,
    color: bool,
}

impl TextPainter {
    pub fn new(bar: &BarConfig) -> Self {
        Self {
            bar_width: bar.width,
            color: bar.color,
        }
    }

    fn finish(lines: Vec<String>) -> String {
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn genre_bar(&self, row: &GenreRow) -> String {
        let label = row.label();
        StackedBar::new(row.bar, self.bar_width)
            .with_label(&label, row.label_style)
            .with_color(self.color)
            .render()
    }

    fn degraded_marker(&self, row: &GenreRow) -> Option<String> {
        let issue = row.issue?;
        let marker = format!("{} ({})", DEGRADED_MARKER, issue.description());
        Some(if self.color {
            marker.with(Color::Yellow).to_string()
        } else {
            marker
        })
    }

    fn swatch(&self, stage: Stage) -> String {
        let fill = stage_fill(stage);
        if self.color {
            fill.with(stage_color(stage)).to_string()
        } else {
            fill.to_string()
        }
    }

    /// Headline, then the genre table and/or cards, then the legend.
    pub fn paint_progress(&self, view: &ProgressView) -> String {
        let overall = &view.overall;
        let mut lines = vec![format!(
            "Progress: {} {}% ({}/{})",
            ProgressBar::new(overall.ratio(), self.bar_width)
                .with_color(self.color)
                .render(),
            overall.percent,
            overall.done,
            overall.total
        )];

        if view.features.table && !view.rows.is_empty() {
            lines.push(String::new());
            let name_width = view
                .rows
                .iter()
                .map(|r| display_width(&r.genre))
                .max()
                .unwrap_or(0);

            for row in &view.rows {
                let mut line = format!(
                    "{} {}  {}",
                    row.icon,
                    pad_right(&row.genre, name_width),
                    self.genre_bar(row)
                );
                if !row.status.is_empty() {
                    line.push_str(INDENT);
                    line.push_str(&row.status);
                }
                if let Some(marker) = self.degraded_marker(row) {
                    line.push_str(INDENT);
                    line.push_str(&marker);
                }
                lines.push(line);

                if view.features.counts {
                    lines.push(format!("{INDENT}{INDENT}{}", format_counts(&row.counts)));
                }
            }
        }

        if view.features.cards {
            for row in &view.rows {
                lines.push(String::new());
                let mut header = format!("┌ {} {}", row.icon, row.genre);
                if !row.status.is_empty() {
                    header.push_str(INDENT);
                    header.push_str(&row.status);
                }
                lines.push(header);
                lines.push(format!("│ {}", self.genre_bar(row)));
                if view.features.counts {
                    lines.push(format!("│ {}", format_counts(&row.counts)));
                }
                if let Some(marker) = self.degraded_marker(row) {
                    lines.push(format!("│ {}", marker));
                }
            }
        }

        if view.features.legend {
            let entries: Vec<String> = view
                .legend
                .entries
                .iter()
                .map(|e| format!("{} {}", self.swatch(e.stage), e.label))
                .collect();
            lines.push(String::new());
            lines.push(format!("Legend: {}", entries.join(INDENT)));
        }

        Self::finish(lines)
    }

    /// Category heading, badge key, then one block per genre.
    pub fn paint_catalog(&self, view: &CatalogView) -> String {
        let mut lines = vec![view.heading.clone()];
        if view.kind.is_none() {
            return Self::finish(lines);
        }

        let key: Vec<String> = [TitleStatus::Ok, TitleStatus::Warn, TitleStatus::Missing]
            .into_iter()
            .map(StatusBadge::for_status)
            .map(|b| format!("{} {}", b.glyph, b.tooltip))
            .collect();
        lines.push(key.join(INDENT));

        for section in &view.sections {
            lines.push(String::new());
            lines.push(section.genre.clone());
            for entry in &section.entries {
                lines.push(format!("{INDENT}{} {}", entry.badge.glyph, entry.name));
            }
        }

        Self::finish(lines)
    }

    /// Genre sections with their chevrons; bodies only when expanded.
    pub fn paint_titles(&self, view: &TitleListView) -> String {
        let mut lines = vec![format!("[{}]", view.toggle.button_label)];

        for section in &view.sections {
            lines.push(format!(
                "{} {} {}",
                section.toggle.chevron, section.heading, section.count_label
            ));
            if !section.toggle.body_visible {
                continue;
            }

            for line in &section.lines {
                match line {
                    TitleLine::Title { text } => lines.push(format!("{INDENT}{text}")),
                    TitleLine::Collection {
                        text,
                        toggle,
                        titles,
                    } => {
                        lines.push(format!("{INDENT}{} {}", toggle.chevron, text));
                        if toggle.body_visible {
                            lines.extend(titles.iter().map(|t| format!("{INDENT}{INDENT}{t}")));
                        }
                    }
                }
            }
        }

        Self::finish(lines)
    }

    /// Icon groups with their sources, or the all-in-use message.
    pub fn paint_unused(&self, view: &UnusedIconsView) -> String {
        let sections = match view {
            UnusedIconsView::AllInUse { message } => return Self::finish(vec![message.clone()]),
            UnusedIconsView::Groups { sections } => sections,
        };

        let mut lines = Vec::new();
        for section in sections {
            lines.push(format!(
                "{} {}{INDENT}{}",
                section.toggle.chevron, section.heading, section.count_label
            ));
            if !section.toggle.body_visible {
                continue;
            }
            for icon in &section.icons {
                if icon.source.is_empty() {
                    lines.push(format!("{INDENT}{}", icon.name));
                } else {
                    lines.push(format!("{INDENT}{}{INDENT}[{}]", icon.name, icon.source));
                }
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "{} unused",
            format_quantity(view.total_icons(), "icon", "icons")
        ));

        Self::finish(lines)
    }
}
