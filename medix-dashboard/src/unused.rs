//! Unused icon report view.

use serde::Serialize;

use medix_common::{IconTable, UnusedIconsReport};

use crate::toggle::ToggleStyle;

pub const ALL_IN_USE_MESSAGE: &str = "✅ All icons are in use.";

/// Strip a trailing `.ico` extension, ignoring case.
pub fn display_name(name: &str) -> &str {
    let len = name.len();
    if len >= 4
        && name.is_char_boundary(len - 4)
        && name[len - 4..].eq_ignore_ascii_case(".ico")
    {
        &name[..len - 4]
    } else {
        name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconLine {
    pub name: String,
    /// Source tag, e.g. "personal".
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconGroupSection {
    pub group: String,
    pub heading: String,
    pub count_label: String,
    pub toggle: ToggleStyle,
    pub icons: Vec<IconLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnusedIconsView {
    AllInUse { message: String },
    Groups { sections: Vec<IconGroupSection> },
}

impl UnusedIconsView {
    /// Build the view. Groups are listed alphabetically; icons keep their
    /// report order.
    pub fn build(report: &UnusedIconsReport, icons: &IconTable, expanded: bool) -> Self {
        let groups = report.groups();
        if groups.is_empty() {
            return UnusedIconsView::AllInUse {
                message: ALL_IN_USE_MESSAGE.to_string(),
            };
        }

        let mut sorted: Vec<_> = groups.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.cmp(b));

        let toggle = ToggleStyle::from_expanded(expanded);
        let sections = sorted
            .into_iter()
            .map(|(group, entries)| IconGroupSection {
                group: group.clone(),
                heading: format!("{} {}", icons.glyph_for(group), group),
                count_label: format!("{} icons", entries.len()),
                toggle,
                icons: entries
                    .iter()
                    .map(|icon| IconLine {
                        name: display_name(&icon.name).to_string(),
                        source: icon.source.clone(),
                    })
                    .collect(),
            })
            .collect();

        UnusedIconsView::Groups { sections }
    }

    pub fn total_icons(&self) -> usize {
        match self {
            UnusedIconsView::AllInUse { .. } => 0,
            UnusedIconsView::Groups { sections } => sections.iter().map(|s| s.icons.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medix_common::Report;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Heat.ico"), "Heat");
        assert_eq!(display_name("Heat.ICO"), "Heat");
        assert_eq!(display_name("Heat.png"), "Heat.png");
        assert_eq!(display_name("Heat.ico.bak"), "Heat.ico.bak");
        assert_eq!(display_name("ico"), "ico");
        assert_eq!(display_name("Amélie.ico"), "Amélie");
        assert_eq!(display_name("é.ico"), "é");
    }

    #[test]
    fn test_all_in_use() {
        let view = UnusedIconsView::build(&UnusedIconsReport::default(), &IconTable::builtin(), false);
        assert_eq!(
            view,
            UnusedIconsView::AllInUse {
                message: ALL_IN_USE_MESSAGE.to_string()
            }
        );
        assert_eq!(view.total_icons(), 0);
    }

    #[test]
    fn test_groups_sorted() {
        let report = UnusedIconsReport::parse(
            br#"{ "groups": {
                "Western": [ { "name": "Rio Bravo.ico", "source": "personal" } ],
                "Action": [
                    { "name": "Heat.ico", "source": "downloaded" },
                    { "name": "Commando.ICO", "source": "personal" }
                ],
                "Noir": [ { "name": "Laura.ico" } ]
            } }"#,
        )
        .unwrap();

        let view = UnusedIconsView::build(&report, &IconTable::builtin(), false);
        let UnusedIconsView::Groups { sections } = &view else {
            panic!("expected groups");
        };

        let groups: Vec<_> = sections.iter().map(|s| s.group.as_str()).collect();
        assert_eq!(groups, ["Action", "Noir", "Western"]);
        assert_eq!(sections[0].heading, "🔥 Action");
        assert_eq!(sections[0].count_label, "2 icons");
        assert_eq!(sections[0].icons[1].name, "Commando");
        assert_eq!(sections[1].heading, "🎬 Noir");
        assert!(!sections[0].toggle.body_visible);
        assert_eq!(view.total_icons(), 4);
    }
}
