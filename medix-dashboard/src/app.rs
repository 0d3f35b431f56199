//! Command dispatch: load a report, build its view, produce output bytes.

use std::path::PathBuf;

use clap::Subcommand;
use tracing::{debug, info, warn};

use medix_common::{
    CatalogReport, CountsReport, GroupedTitles, ProgressReport, UnusedIconsReport, load_report,
};

use crate::catalog::{CatalogView, CategoryKind};
use crate::config::DashboardConfig;
use crate::output;
use crate::progress::ProgressRenderer;
use crate::titles::TitleListView;
use crate::unused::UnusedIconsView;
use crate::view::TextPainter;

/// What to render.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Per-genre conversion progress.
    Progress {
        /// Progress report (JSON or CBOR).
        report: PathBuf,
    },
    /// Category listing with per-title status badges.
    Catalog {
        /// Catalog report (JSON or CBOR).
        report: PathBuf,
        /// Page or file name the category is detected from (defaults to the
        /// report path).
        #[arg(long)]
        page: Option<String>,
    },
    /// Titles grouped by genre.
    Titles {
        /// Title list report (JSON or CBOR).
        report: PathBuf,
    },
    /// Icons no media entry uses.
    Unused {
        /// Unused icons report (JSON or CBOR).
        report: PathBuf,
    },
    /// Build a progress report from raw per-genre counts.
    Summarize {
        /// Counts document (JSON or CBOR).
        counts: PathBuf,
    },
}

/// Run one command and return what should be written to stdout.
///
/// `expand` opens every collapsible section. Degraded progress rows are
/// logged but never fail the command.
pub async fn run(
    command: &Command,
    config: &DashboardConfig,
    expand: bool,
) -> anyhow::Result<Vec<u8>> {
    let icons = config.icon_table();
    let renderer = ProgressRenderer::new(&icons, config.view);
    let painter = TextPainter::new(&config.bar);
    let format = config.output;

    let bytes = match command {
        Command::Progress { report } => {
            let report: ProgressReport = load_report(report).await?;
            let view = renderer.render(&report);

            let degraded = view.degraded_rows().count();
            if degraded > 0 {
                warn!(degraded, "Rendered genres with inconsistent counts");
            }

            output::render(format, &view, || painter.paint_progress(&view))?
        }
        Command::Catalog { report, page } => {
            let page = page
                .clone()
                .unwrap_or_else(|| report.to_string_lossy().into_owned());
            let kind = CategoryKind::detect(&page);
            debug!(page = %page, kind = ?kind, "Detected category");
            match kind {
                None => warn!(page = %page, "Unknown category"),
                Some(kind) if !kind.is_data_file(report) => debug!(
                    report = %report.display(),
                    expected = kind.data_file(),
                    "Catalog report is not the category's usual data file"
                ),
                Some(_) => {}
            }

            let catalog: CatalogReport = load_report(report).await?;
            let view = CatalogView::build(kind, &catalog.0);
            output::render(format, &view, || painter.paint_catalog(&view))?
        }
        Command::Titles { report } => {
            let titles: GroupedTitles = load_report(report).await?;
            let view = TitleListView::build(&titles, &icons, expand);
            output::render(format, &view, || painter.paint_titles(&view))?
        }
        Command::Unused { report } => {
            let unused: UnusedIconsReport = load_report(report).await?;
            let view = UnusedIconsView::build(&unused, &icons, expand);
            output::render(format, &view, || painter.paint_unused(&view))?
        }
        Command::Summarize { counts } => {
            let counts: CountsReport = load_report(counts).await?;
            let report = ProgressReport::from_counts(counts.0, &icons);
            info!(
                done = report.done,
                total = report.total,
                percent = report.percent,
                "Summarized genre counts"
            );

            // Encoded output is the report document itself, so it can be fed
            // back to `progress`.
            output::render(format, &report, || {
                painter.paint_progress(&renderer.render(&report))
            })?
        }
    };

    Ok(bytes)
}
