//! Collapsible section styling.
//!
//! The open/closed flag belongs to whoever paints; this only maps it to what
//! the disclosure control should look like.

use serde::Serialize;

pub const CHEVRON_DOWN: &str = "▾";
pub const CHEVRON_UP: &str = "▴";

/// Look of a disclosure control for a given expanded state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleStyle {
    pub expanded: bool,
    /// Points down when collapsed, up when expanded.
    pub chevron: &'static str,
    /// Label of a collapse/expand button.
    pub button_label: &'static str,
    pub aria_expanded: bool,
    pub body_visible: bool,
}

impl ToggleStyle {
    pub fn from_expanded(expanded: bool) -> Self {
        Self {
            expanded,
            chevron: if expanded { CHEVRON_UP } else { CHEVRON_DOWN },
            button_label: if expanded { "🔽 Collapse" } else { "▶️ Show All" },
            aria_expanded: expanded,
            body_visible: expanded,
        }
    }

    /// Style after one click.
    pub fn toggled(&self) -> Self {
        Self::from_expanded(!self.expanded)
    }
}

impl From<bool> for ToggleStyle {
    fn from(expanded: bool) -> Self {
        Self::from_expanded(expanded)
    }
}
