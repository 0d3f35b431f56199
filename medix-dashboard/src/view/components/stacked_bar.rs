//! Stacked ICO / PNG / RAW bar for a terminal.

use crossterm::style::{Color, Stylize};

use crate::progress::{LabelStyle, Segments, Stage};

/// Terminal colour of a stage's segment.
pub fn stage_color(stage: Stage) -> Color {
    match stage {
        Stage::Ico => Color::Green,
        Stage::Png => Color::DarkYellow,
        Stage::Raw => Color::DarkGrey,
    }
}

/// Fill character of a stage's segment, distinguishable without colour.
pub fn stage_fill(stage: Stage) -> char {
    match stage {
        Stage::Ico => '█',
        Stage::Png => '▓',
        Stage::Raw => '░',
    }
}

/// Number of cells each segment occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCounts {
    pub ico: usize,
    pub png: usize,
    pub raw: usize,
}

impl CellCounts {
    /// Split `width` cells between the segments.
    ///
    /// Cells are cut at rounded cumulative edges, so the parts never exceed
    /// the bar and a 100% total always fills it exactly.
    pub fn allocate(segments: &Segments, width: usize) -> Self {
        let w = width as f64;
        let edge = |pct: f64| ((pct / 100.0) * w).round().clamp(0.0, w) as usize;

        let ico = edge(segments.ico);
        let png = edge(segments.ico + segments.png_only).max(ico);
        let raw = edge(segments.total()).max(png);

        Self {
            ico,
            png: png - ico,
            raw: raw - png,
        }
    }

    pub fn total(&self) -> usize {
        self.ico + self.png + self.raw
    }

    fn get(&self, stage: Stage) -> usize {
        match stage {
            Stage::Ico => self.ico,
            Stage::Png => self.png,
            Stage::Raw => self.raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    stage: Option<Stage>,
    label: bool,
}

/// A stacked bar with an optional label drawn over it.
#[derive(Debug, Clone)]
pub struct StackedBar<'a> {
    segments: Segments,
    width: usize,
    label: &'a str,
    style: LabelStyle,
    color: bool,
}

impl<'a> StackedBar<'a> {
    pub fn new(segments: Segments, width: usize) -> Self {
        Self {
            segments,
            width,
            label: "",
            style: LabelStyle::Default,
            color: false,
        }
    }

    pub fn with_label(mut self, label: &'a str, style: LabelStyle) -> Self {
        self.label = label;
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn cells(&self) -> Vec<Cell> {
        let counts = CellCounts::allocate(&self.segments, self.width);

        let mut cells: Vec<Cell> = Stage::ALL
            .iter()
            .flat_map(|&stage| {
                std::iter::repeat_n(
                    Cell {
                        ch: stage_fill(stage),
                        stage: Some(stage),
                        label: false,
                    },
                    counts.get(stage),
                )
            })
            .collect();
        cells.resize(
            self.width,
            Cell {
                ch: ' ',
                stage: None,
                label: false,
            },
        );

        let len = self.label.chars().count();
        if len > 0 && len <= self.width {
            let start = if self.style.is_right_aligned() {
                self.width.saturating_sub(len + 1)
            } else {
                (self.width - len) / 2
            };
            for (cell, ch) in cells[start..].iter_mut().zip(self.label.chars()) {
                cell.ch = ch;
                cell.label = true;
            }
        }

        cells
    }

    /// Render as `[...]`, with ANSI colours when enabled.
    pub fn render(&self) -> String {
        let cells = self.cells();

        if !self.color {
            let body: String = cells.iter().map(|c| c.ch).collect();
            return format!("[{}]", body);
        }

        let label_fg = if self.style.is_light() {
            Color::White
        } else {
            Color::Black
        };

        // The label is one run on the background of its first cell, even
        // when it spans a segment edge.
        let mut out = String::from("[");
        for run in cells.chunk_by(|a, b| a.label == b.label && (a.label || a.stage == b.stage)) {
            let text: String = run.iter().map(|c| c.ch).collect();
            let bg = run[0].stage.map(stage_color).unwrap_or(Color::Reset);
            let styled = if run[0].label {
                text.with(label_fg).on(bg).to_string()
            } else {
                text.with(bg).to_string()
            };
            out.push_str(&styled);
        }
        out.push(']');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(ico: f64, png_only: f64, raw_only: f64) -> Segments {
        Segments {
            ico,
            png_only,
            raw_only,
        }
    }

    #[test]
    fn test_allocate_exact() {
        let counts = CellCounts::allocate(&segments(20.0, 40.0, 40.0), 10);
        assert_eq!(
            counts,
            CellCounts {
                ico: 2,
                png: 4,
                raw: 4
            }
        );
    }

    #[test]
    fn test_allocate_thirds_fill_bar() {
        let third = 100.0 / 3.0;
        let counts = CellCounts::allocate(&segments(third, third, third), 10);
        assert_eq!(counts.total(), 10);
    }

    #[test]
    fn test_allocate_never_overflows() {
        let counts = CellCounts::allocate(&segments(100.0, 100.0, 0.0), 10);
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.ico, 10);

        let empty = CellCounts::allocate(&segments(0.0, 0.0, 0.0), 10);
        assert_eq!(empty.total(), 0);
    }

    #[test]
    fn test_render_plain() {
        let bar = StackedBar::new(segments(20.0, 40.0, 40.0), 10).render();
        assert_eq!(bar, "[██▓▓▓▓░░░░]");
    }

    #[test]
    fn test_render_centered_label() {
        let bar = StackedBar::new(segments(20.0, 40.0, 40.0), 10)
            .with_label("20%", LabelStyle::Default)
            .render();
        assert_eq!(bar, "[██▓20%░░░░]");
    }

    #[test]
    fn test_render_right_label() {
        let bar = StackedBar::new(segments(10.0, 20.0, 70.0), 10)
            .with_label("10%", LabelStyle::LightRight)
            .render();
        assert_eq!(bar, "[█▓▓░░░10%░]");
    }

    #[test]
    fn test_label_wider_than_bar_is_dropped() {
        let bar = StackedBar::new(segments(0.0, 0.0, 100.0), 2)
            .with_label("100%", LabelStyle::Default)
            .render();
        assert_eq!(bar, "[░░]");
    }

    #[test]
    fn test_colored_label_across_segment_edge() {
        // Label cells 3..6 start in the ICO segment and end in RAW.
        let bar = StackedBar::new(segments(40.0, 0.0, 60.0), 10)
            .with_label("50%", LabelStyle::Default)
            .with_color(true);
        let cells = bar.cells();
        assert_eq!(cells[3].stage, Some(Stage::Ico));
        assert_eq!(cells[5].stage, Some(Stage::Raw));

        let rendered = bar.render();
        assert!(rendered.contains("50%"));
        assert_eq!(rendered.matches("50%").count(), 1);
    }

    #[test]
    fn test_render_color_keeps_text() {
        let bar = StackedBar::new(segments(50.0, 0.0, 50.0), 10)
            .with_label("50%", LabelStyle::Default)
            .with_color(true)
            .render();
        assert!(bar.starts_with('['));
        assert!(bar.ends_with(']'));
        assert!(bar.contains("50%"));
        assert!(bar.contains('█'));
    }
}
