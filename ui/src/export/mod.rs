//! Saving what the dashboard shows: the magnified grid as PNG, the active
//! snapshot as JSON (also copied to the clipboard) and the archive as CSV.

use dioxus::prelude::*;

use crate::core::platform::Platform;
use crate::data::SkyData;
use crate::t;

mod deliver;
mod formats;

pub use deliver::Delivery;
pub use formats::{Artifact, ExportFormat};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("the grid has no cells")]
    EmptyGrid,
    #[error("the archive has no snapshots")]
    EmptyArchive,
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error("JSON encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("no folder available for exports")]
    NoExportDir,
    #[error("browser download failed at {0}")]
    Browser(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// One button press worth of work.
#[derive(Debug, Clone)]
enum Job {
    Png(SkyData),
    Json(SkyData),
    Csv(Vec<SkyData>),
}

impl Job {
    fn format(&self) -> ExportFormat {
        match self {
            Self::Png(_) => ExportFormat::Png,
            Self::Json(_) => ExportFormat::Json,
            Self::Csv(_) => ExportFormat::Csv,
        }
    }

    async fn run(self) -> Result<Outcome, ExportError> {
        let (artifact, clipboard) = match self {
            Self::Png(snapshot) => (formats::snapshot_png(&snapshot)?, None),
            Self::Json(snapshot) => {
                let artifact = formats::snapshot_json(&snapshot)?;
                let text = String::from_utf8_lossy(&artifact.bytes).into_owned();
                (artifact, Some(text))
            }
            Self::Csv(history) => (formats::archive_csv(&history)?, None),
        };

        let copied = match clipboard {
            Some(text) => match deliver::copy_text(&text).await {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(%err, "clipboard copy skipped");
                    false
                }
            },
            None => false,
        };
        let delivery = deliver::deliver(artifact).await?;
        Ok(Outcome { delivery, copied })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Outcome {
    delivery: Delivery,
    copied: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum ExportState {
    Idle,
    Working(ExportFormat),
    Finished(ExportFormat, Outcome),
    Failed(ExportFormat, String),
}

impl ExportState {
    fn is_busy(&self) -> bool {
        matches!(self, Self::Working(_))
    }

    /// CSS class and localized text of the status line.
    fn status_line(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Idle => None,
            Self::Working(format) => Some((
                "export__status",
                format!("{}…", t!("export-working", format = format.label())),
            )),
            Self::Finished(format, outcome) => {
                let mut text = match &outcome.delivery {
                    Delivery::Downloaded => t!("export-downloaded", format = format.label()),
                    Delivery::Saved(path) => t!(
                        "export-saved",
                        format = format.label(),
                        path = path.display().to_string()
                    ),
                };
                if outcome.copied {
                    text = format!("{text} {}", t!("export-copied"));
                }
                Some(("export__status export__status--success", format!("✅ {text}")))
            }
            Self::Failed(format, reason) => Some((
                "export__status export__status--error",
                format!(
                    "⚠️ {}",
                    t!("export-failed", format = format.label(), reason = reason.clone())
                ),
            )),
        }
    }
}

/// Starts `job` unless another export is still running.
fn start(mut state: Signal<ExportState>, job: Job) {
    if state.peek().is_busy() {
        return;
    }
    let format = job.format();
    state.set(ExportState::Working(format));

    spawn(async move {
        let platform = Platform::current().as_str();
        let next = match job.run().await {
            Ok(outcome) => {
                tracing::info!(format = format.label(), platform, ?outcome.delivery, "export finished");
                ExportState::Finished(format, outcome)
            }
            Err(err) => {
                tracing::warn!(format = format.label(), platform, %err, "export failed");
                ExportState::Failed(format, err.to_string())
            }
        };
        state.set(next);
    });
}

#[component]
pub fn ExportPanel(snapshot: SkyData, history: Vec<SkyData>) -> Element {
    let state = use_signal(|| ExportState::Idle);
    let busy = state.read().is_busy();
    let status = state.read().status_line();
    let has_cells = !snapshot.grid.is_empty();
    let has_history = !history.is_empty();

    let png_job = Job::Png(snapshot.clone());
    let json_job = Job::Json(snapshot);
    let csv_job = Job::Csv(history);

    rsx! {
        section { class: "sky-card export",
            h3 { class: "sky-card__heading", {t!("export-title")} }
            p { class: "export__intro", {t!("export-intro")} }

            div { class: "export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy || !has_cells,
                    onclick: move |_| start(state, png_job.clone()),
                    {t!("export-png")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy,
                    onclick: move |_| start(state, json_job.clone()),
                    {t!("export-json")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy || !has_history,
                    onclick: move |_| start(state, csv_job.clone()),
                    {t!("export-csv")}
                }
            }

            if let Some((class_name, text)) = status {
                p { class: "{class_name}", "{text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SAMPLE_JSON;
    use crate::i18n;
    use dioxus::dioxus_core::VirtualDom;
    use std::path::PathBuf;

    fn english() {
        i18n::init();
        i18n::set_language("en-US").unwrap();
    }

    fn sample() -> SkyData {
        serde_json::from_str(SAMPLE_JSON).unwrap()
    }

    /// Other tests may reselect the bundle mid-run, briefly turning isolation
    /// marks back on.
    fn status_text(state: &ExportState) -> (&'static str, String) {
        let (class_name, text) = state.status_line().unwrap();
        (class_name, text.replace(['\u{2068}', '\u{2069}'], ""))
    }

    #[test]
    fn jobs_report_their_format() {
        assert_eq!(Job::Png(sample()).format(), ExportFormat::Png);
        assert_eq!(Job::Json(sample()).format(), ExportFormat::Json);
        assert_eq!(Job::Csv(Vec::new()).format(), ExportFormat::Csv);
    }

    #[test]
    fn only_working_counts_as_busy() {
        assert!(ExportState::Working(ExportFormat::Csv).is_busy());
        assert!(!ExportState::Idle.is_busy());
        assert!(!ExportState::Failed(ExportFormat::Png, "x".into()).is_busy());
    }

    #[test]
    fn status_line_names_the_saved_file() {
        english();
        let state = ExportState::Finished(
            ExportFormat::Csv,
            Outcome {
                delivery: Delivery::Saved(PathBuf::from("/tmp/archive.csv")),
                copied: false,
            },
        );
        let (class_name, text) = status_text(&state);
        assert!(class_name.ends_with("--success"));
        assert_eq!(text, "✅ CSV saved to /tmp/archive.csv");
    }

    #[test]
    fn status_line_mentions_the_clipboard_copy() {
        english();
        let state = ExportState::Finished(
            ExportFormat::Json,
            Outcome {
                delivery: Delivery::Downloaded,
                copied: true,
            },
        );
        let (_, text) = status_text(&state);
        assert_eq!(
            text,
            "✅ JSON download started Also copied to the clipboard."
        );
    }

    #[test]
    fn failures_carry_the_reason() {
        english();
        let state = ExportState::Failed(ExportFormat::Png, ExportError::EmptyGrid.to_string());
        let (class_name, text) = status_text(&state);
        assert!(class_name.ends_with("--error"));
        assert!(text.contains("PNG"));
        assert!(text.contains("the grid has no cells"));
        assert!(ExportState::Idle.status_line().is_none());
    }

    #[test]
    fn panel_renders_with_and_without_archive() {
        english();
        for history in [Vec::new(), vec![sample()]] {
            let props = ExportPanelProps::builder()
                .snapshot(sample())
                .history(history)
                .build();
            let mut dom = VirtualDom::new_with_props(ExportPanel, props);
            dom.rebuild_in_place();
        }
    }
}
