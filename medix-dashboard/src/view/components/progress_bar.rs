//! Single-fill progress bar for the headline.

use crossterm::style::{Color, Stylize};

const FILLED: char = '█';
const EMPTY: char = '░';

/// A bar filled to a ratio.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    /// Fill ratio (0.0 - 1.0).
    ratio: f64,
    /// Width in cells.
    width: usize,
    /// Use ANSI colours.
    color: bool,
}

impl ProgressBar {
    /// Create a new progress bar. The ratio is clamped to `[0, 1]`.
    pub fn new(ratio: f64, width: usize) -> Self {
        Self {
            ratio: if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) },
            width,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        ((self.ratio * self.width as f64).round() as usize).min(self.width)
    }

    /// Render as `[████░░░░]`.
    pub fn render(&self) -> String {
        let filled = FILLED.to_string().repeat(self.filled());
        let empty = EMPTY.to_string().repeat(self.width - self.filled());

        if self.color {
            format!("[{}{}]", filled.with(Color::Green), empty.with(Color::DarkGrey))
        } else {
            format!("[{}{}]", filled, empty)
        }
    }
}
