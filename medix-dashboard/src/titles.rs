//! Titles grouped by genre, with collections nested as their own sections.

use serde::Serialize;

use medix_common::{GroupedTitles, IconTable, TitleEntry, TitleItem, TitleStatus};

use crate::toggle::ToggleStyle;

pub const COLLECTION_ICON: &str = "📂";

/// Status glyph shown before a title; unknown statuses show nothing.
pub fn status_glyph(status: TitleStatus) -> &'static str {
    match status {
        TitleStatus::Ok => "✅",
        TitleStatus::Warn => "⚠️",
        TitleStatus::Missing => "❌",
        TitleStatus::Unknown => "",
    }
}

fn title_text(entry: &TitleEntry) -> String {
    match status_glyph(entry.status()) {
        "" => entry.name.clone(),
        glyph => format!("{} {}", glyph, entry.name),
    }
}

/// One line in a genre section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TitleLine {
    Title {
        text: String,
    },
    Collection {
        text: String,
        toggle: ToggleStyle,
        titles: Vec<String>,
    },
}

impl TitleLine {
    pub fn text(&self) -> &str {
        match self {
            TitleLine::Title { text } | TitleLine::Collection { text, .. } => text,
        }
    }
}

/// A collapsible genre section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSection {
    pub genre: String,
    pub icon: String,
    pub heading: String,
    /// Top-level items; a collection counts once.
    pub item_count: usize,
    pub count_label: String,
    pub toggle: ToggleStyle,
    pub lines: Vec<TitleLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleListView {
    /// Collapse-all / show-all control.
    pub toggle: ToggleStyle,
    pub sections: Vec<TitleSection>,
}

impl TitleListView {
    /// Build the list. Every section and collection starts in the given
    /// expanded state.
    pub fn build(titles: &GroupedTitles, icons: &IconTable, expanded: bool) -> Self {
        let toggle = ToggleStyle::from_expanded(expanded);

        let sections = titles
            .0
            .iter()
            .map(|(genre, items)| {
                let icon = icons.glyph_for(genre).to_string();
                let lines = items
                    .iter()
                    .map(|item| match item {
                        TitleItem::Title(entry) => TitleLine::Title {
                            text: title_text(entry),
                        },
                        TitleItem::Collection { name, group } => TitleLine::Collection {
                            text: format!("{} {}", COLLECTION_ICON, name),
                            toggle,
                            titles: group.iter().map(title_text).collect(),
                        },
                    })
                    .collect();

                TitleSection {
                    genre: genre.to_string(),
                    heading: format!("{} {}", icon, genre),
                    icon,
                    item_count: items.len(),
                    count_label: format!("({} items)", items.len()),
                    toggle,
                    lines,
                }
            })
            .collect();

        Self { toggle, sections }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medix_common::{OrderedGroups, Report};

    fn sample() -> GroupedTitles {
        GroupedTitles(OrderedGroups(vec![
            (
                "Horror".to_string(),
                vec![
                    TitleItem::Title(TitleEntry::new("Alien", "ok")),
                    TitleItem::Collection {
                        name: "Scream".to_string(),
                        group: vec![
                            TitleEntry::new("Scream", "ok"),
                            TitleEntry::new("Scream 2", "missing"),
                        ],
                    },
                    TitleItem::Title(TitleEntry::new("It", "odd")),
                ],
            ),
            ("Noir".to_string(), vec![]),
        ]))
    }

    #[test]
    fn test_status_glyphs() {
        assert_eq!(status_glyph(TitleStatus::Ok), "✅");
        assert_eq!(status_glyph(TitleStatus::Warn), "⚠️");
        assert_eq!(status_glyph(TitleStatus::Missing), "❌");
        assert_eq!(status_glyph(TitleStatus::Unknown), "");
    }

    #[test]
    fn test_build_sections() {
        let view = TitleListView::build(&sample(), &IconTable::builtin(), false);

        assert_eq!(view.sections.len(), 2);
        let horror = &view.sections[0];
        assert_eq!(horror.heading, "👻 Horror");
        assert_eq!(horror.item_count, 3);
        assert_eq!(horror.count_label, "(3 items)");
        assert!(!horror.toggle.expanded);

        assert_eq!(horror.lines[0].text(), "✅ Alien");
        match &horror.lines[1] {
            TitleLine::Collection { text, titles, toggle } => {
                assert_eq!(text, "📂 Scream");
                assert_eq!(titles, &["✅ Scream", "❌ Scream 2"]);
                assert!(!toggle.body_visible);
            }
            other => panic!("expected collection, got {other:?}"),
        }
        assert_eq!(horror.lines[2].text(), "It");

        assert_eq!(view.sections[1].heading, "🎬 Noir");
        assert_eq!(view.sections[1].count_label, "(0 items)");
    }

    #[test]
    fn test_expanded_state() {
        let view = TitleListView::build(&sample(), &IconTable::builtin(), true);
        assert!(view.sections.iter().all(|s| s.toggle.expanded));
        assert_eq!(view.toggle.button_label, "🔽 Collapse");
    }

    #[test]
    fn test_build_from_document() {
        let titles = GroupedTitles::parse(
            br#"{ "Comedy": [ { "name": "Airplane!", "status": "warn" } ] }"#,
        )
        .unwrap();
        let view = TitleListView::build(&titles, &IconTable::builtin(), false);
        assert_eq!(view.sections[0].heading, "😂 Comedy");
        assert_eq!(view.sections[0].lines[0].text(), "⚠️ Airplane!");
    }
}
